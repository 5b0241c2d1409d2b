//! Errors raised by the drawing pipeline.
//!
//! Collaborators (http client, config loading, the binary) use `anyhow`;
//! everything the pipeline itself can fail with is listed here.

use thiserror::Error;

use crate::shapes::rect::Rect;
use crate::waypoints::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("profile is not well-formed xml: {0}")]
    Xml(#[from] roxmltree::Error),

    /// a waypoint element is missing its X/Y attribute or it isn't a number.
    #[error("{category} waypoint #{index}: attribute {attribute} is {}", describe_value(.value))]
    MalformedWaypoint {
        category: Category,
        index: usize,
        attribute: &'static str,
        value: Option<String>,
    },

    #[error("cannot compute bounds of an empty point set")]
    EmptyPointSet,

    #[error("profile has no waypoints")]
    NoWaypoints,

    #[error("profile has no normal waypoints to take the start point from")]
    MissingStartPoint,

    #[error("no profile loaded")]
    NoProfileLoaded,

    #[error("unknown zone {zone:?}")]
    UnknownZone { zone: String },

    #[error("no background image for zone {zone:?}: {reason}")]
    MissingBackground { zone: String, reason: String },

    #[error("could not decode background image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("crop {rect:?} does not fit inside the {width}x{height} image")]
    CropOutOfBounds { rect: Rect, width: u32, height: u32 },

    #[error("could not encode jpeg: {0}")]
    Encode(#[source] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn describe_value(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("not a number ({value:?})"),
        None => "missing".to_string(),
    }
}
