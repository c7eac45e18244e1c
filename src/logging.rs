/// Logging setup and the development-only `dev_log!` macro
///
/// Library code logs through the `log` facade. Binaries call [`init`] once to
/// install `env_logger`, which honours `RUST_LOG` and defaults to `info`.
///
/// `dev_log!` is for chatty diagnostics that should disappear from production
/// builds. It is compiled in when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// rail_route::dev_log!("Graph injected: {} stations", 3);
/// ```
/// Conditionally log at debug level in development builds
///
/// Expands to `log::debug!` in debug builds or when the `console_logging`
/// feature is enabled. In production release builds it compiles to nothing.
#[macro_export]
macro_rules! dev_log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::log::debug!($($arg),+);
        }
    };
}

pub use dev_log;

/// Install `env_logger` with an `info` default filter
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
