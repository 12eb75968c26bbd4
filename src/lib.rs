#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod render;
pub mod request;
pub mod route;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RouterConfig};
pub use geometry::{Point, Rect};
pub use request::{RouteRequest, RouteResponse};
pub use route::{collapse_duplicates, route, route_with_defaults};
