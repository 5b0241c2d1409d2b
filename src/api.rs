//! Collaborators that sit outside the drawing core: the zone table and the
//! http client that downloads zone maps.

pub mod client;
pub mod models;
