use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use log::{info, warn};

use crate::api::client::ImageFetcher;
use crate::api::models::ZoneTable;
use crate::error::{Error, Result};
use crate::export;
use crate::overlay::{self, OverlayStyle};
use crate::shapes::bounds::bounds;
use crate::shapes::rect::Rect;
use crate::waypoints::{self, Profile, Waypoints};

/// A profile read from disk, remembered until the next one is loaded.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    /// file name without extension, the output is named after it
    pub name: String,
    pub profile: Profile,
}

/// Draws one profile at a time onto the map of a chosen zone.
pub struct MapDrawer<F> {
    fetcher: F,
    zones: ZoneTable,
    style: OverlayStyle,
    loaded: Option<LoadedProfile>,
}

impl<F: ImageFetcher> MapDrawer<F> {
    pub fn new(fetcher: F, zones: ZoneTable) -> Self {
        Self {
            fetcher,
            zones,
            style: OverlayStyle::default(),
            loaded: None,
        }
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn loaded(&self) -> Option<&LoadedProfile> {
        self.loaded.as_ref()
    }

    /// Reads a profile, replacing whatever was loaded before. On failure
    /// nothing stays loaded.
    pub fn load_profile(&mut self, path: &Path) -> Result<&LoadedProfile> {
        self.loaded = None;

        info!("opening profile {}", path.display());
        let document = std::fs::read_to_string(path)?;
        let profile = waypoints::parse(&document)?;
        info!(
            "{} normal, {} ghost, {} vendor waypoints",
            profile.waypoints.normal.len(),
            profile.waypoints.ghost.len(),
            profile.waypoints.vendor.len()
        );

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "profile".to_string());

        Ok(&*self.loaded.insert(LoadedProfile { name, profile }))
    }

    /// Draws the loaded profile onto the map of `zone` and writes
    /// `<profile name>.jpg` into `output_dir`. Returns the path written.
    pub fn draw(&self, zone: &str, output_dir: &Path) -> Result<PathBuf> {
        let loaded = self.loaded.as_ref().ok_or(Error::NoProfileLoaded)?;
        if loaded.profile.waypoints.is_empty() {
            return Err(Error::NoWaypoints);
        }
        if loaded.profile.waypoints.start_point().is_none() {
            return Err(Error::MissingStartPoint);
        }

        let url = self.zones.lookup(zone)?;
        info!("fetching {zone} map from {url}");
        let bytes = self.fetcher.fetch(url).map_err(|err| {
            warn!("could not fetch {url}: {err:#}");
            Error::MissingBackground {
                zone: zone.to_string(),
                reason: format!("{err:#}"),
            }
        })?;
        let background = decode(&bytes)?;

        let (map, rect) = draw_map(&loaded.profile.waypoints, background, &self.style)?;

        let path = output_dir.join(format!("{}.jpg", loaded.name));
        export::export(&map, &rect, &path)?;
        Ok(path)
    }
}

/// decodes downloaded bytes, guessing the format from the content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = image::io::Reader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?;
    reader.decode().map_err(Error::Decode)
}

/// Overlays `waypoints` on `background`. Returns the drawn map and the
/// rect to export from it.
pub fn draw_map(
    waypoints: &Waypoints,
    background: DynamicImage,
    style: &OverlayStyle,
) -> Result<(RgbaImage, Rect)> {
    if waypoints.is_empty() {
        return Err(Error::NoWaypoints);
    }
    let bounds = bounds(&waypoints.all())?;
    info!("waypoint bounds {:?}", bounds);

    let mut map = background.into_rgba8();
    let rect = overlay::render(&mut map, waypoints, bounds, style)?;
    info!("output rect {:?}", rect);
    Ok((map, rect))
}
