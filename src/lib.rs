#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod planner;
pub mod source;
pub mod storage;

pub use catalog::StationCatalog;
pub use config::Config;
pub use engine::GraphEngine;
pub use error::{GraphError, RouteError, SourceError};
pub use models::{Edge, PathResult, StationCode, StationGraph};
pub use planner::{RoutePlanner, RouteRequest};
pub use source::DistanceSource;
