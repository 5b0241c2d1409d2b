//! Draws the waypoints of a grind profile onto a zone map and exports the
//! part of the map the route covers as a jpeg.
//!
//! The pipeline is [`waypoints::parse`] -> [`shapes::bounds::bounds`] ->
//! [`overlay::render`] -> [`export::export`]; [`MapDrawer`] runs it end to
//! end given a zone table and something that can download zone maps.

pub mod api;
pub mod error;
pub mod export;
pub mod font;
pub mod map_gen;
pub mod overlay;
pub mod shapes;
pub mod waypoints;

pub use error::{Error, Result};
pub use map_gen::MapDrawer;
