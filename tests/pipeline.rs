use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageOutputFormat, Rgba, RgbaImage};

use squire_map_drawer::api::client::ImageFetcher;
use squire_map_drawer::api::models::ZoneTable;
use squire_map_drawer::overlay::OverlayStyle;
use squire_map_drawer::{Error, MapDrawer};

const ROUTE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Grind>
  <Waypoints>
    <Normal>
      <Waypoint X="40" Y="50" />
      <Waypoint X="60" Y="70" />
    </Normal>
    <Ghost>
      <Waypoint X="50" Y="60" />
    </Ghost>
    <Vendor />
  </Waypoints>
</Grind>"#;

/// Serves one png and records what was asked for.
struct StubFetcher {
    png: Option<Vec<u8>>,
    calls: Cell<usize>,
    last_url: RefCell<Option<String>>,
}

impl StubFetcher {
    fn serving(width: u32, height: u32) -> Self {
        let map = RgbaImage::from_pixel(width, height, Rgba([60, 120, 60, 255]));
        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(map)
            .write_to(&mut png, ImageOutputFormat::Png)
            .unwrap();
        Self {
            png: Some(png.into_inner()),
            calls: Cell::new(0),
            last_url: RefCell::new(None),
        }
    }

    fn failing() -> Self {
        Self {
            png: None,
            calls: Cell::new(0),
            last_url: RefCell::new(None),
        }
    }
}

impl ImageFetcher for &StubFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        *self.last_url.borrow_mut() = Some(url.to_string());
        self.png
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}

fn zones() -> ZoneTable {
    let mut zones = BTreeMap::new();
    zones.insert(
        "Westfall".to_string(),
        "https://maps.example.com/westfall.png".to_string(),
    );
    zones.insert("Deeprun Tram".to_string(), String::new());
    ZoneTable::new(zones)
}

fn write_profile(dir: &Path, name: &str, xml: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, xml).unwrap();
    path
}

#[test]
fn draws_profile_onto_zone_map() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), "westfall_10_12.xml", ROUTE);
    let fetcher = StubFetcher::serving(400, 300);

    let mut drawer = MapDrawer::new(&fetcher, zones());
    let loaded = drawer.load_profile(&profile).unwrap();
    assert_eq!(loaded.name, "westfall_10_12");
    assert_eq!(loaded.profile.addon, "/way 40 50\n/way 60 70\n");

    let output = drawer.draw("Westfall", dir.path()).unwrap();
    assert_eq!(output, dir.path().join("westfall_10_12.jpg"));
    assert_eq!(
        fetcher.last_url.borrow().as_deref(),
        Some("https://maps.example.com/westfall.png")
    );

    // padded bounds are 160x140, plus an 18 pixel caption strip
    let jpeg = image::open(&output).unwrap();
    assert_eq!(jpeg.dimensions(), (160, 158));
}

#[test]
fn empty_profile_fails_before_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(
        dir.path(),
        "empty.xml",
        "<Grind><Waypoints><Normal/><Ghost/><Vendor/></Waypoints></Grind>",
    );
    let fetcher = StubFetcher::serving(400, 300);

    let mut drawer = MapDrawer::new(&fetcher, zones());
    assert!(drawer.load_profile(&profile).unwrap().profile.waypoints.is_empty());
    let err = drawer.draw("Westfall", dir.path()).unwrap_err();
    assert!(matches!(err, Error::NoWaypoints));
    assert_eq!(fetcher.calls.get(), 0);
    assert!(!dir.path().join("empty.jpg").exists());
}

#[test]
fn ghost_only_profile_has_no_start_point() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(
        dir.path(),
        "ghosts.xml",
        r#"<Grind><Waypoints><Ghost><W X="50" Y="50"/></Ghost></Waypoints></Grind>"#,
    );
    let fetcher = StubFetcher::serving(400, 300);

    let mut drawer = MapDrawer::new(&fetcher, zones());
    drawer.load_profile(&profile).unwrap();
    let err = drawer.draw("Westfall", dir.path()).unwrap_err();
    assert!(matches!(err, Error::MissingStartPoint));
    assert_eq!(fetcher.calls.get(), 0);
}

#[test]
fn missing_backgrounds_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), "route.xml", ROUTE);

    let fetcher = StubFetcher::failing();
    let mut drawer = MapDrawer::new(&fetcher, zones());
    drawer.load_profile(&profile).unwrap();

    let err = drawer.draw("Westfall", dir.path()).unwrap_err();
    match err {
        Error::MissingBackground { zone, reason } => {
            assert_eq!(zone, "Westfall");
            assert!(reason.contains("connection refused"), "{reason}");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let err = drawer.draw("Deeprun Tram", dir.path()).unwrap_err();
    assert!(matches!(err, Error::MissingBackground { .. }));
    let err = drawer.draw("Atlantis", dir.path()).unwrap_err();
    assert!(matches!(err, Error::UnknownZone { .. }));

    assert_eq!(fetcher.calls.get(), 1);
    assert!(!dir.path().join("route.jpg").exists());
}

#[test]
fn padded_box_past_the_map_edge_is_not_clipped() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(
        dir.path(),
        "edge.xml",
        r#"<Grind><Waypoints><Normal><W X="95" Y="50"/></Normal></Waypoints></Grind>"#,
    );
    let fetcher = StubFetcher::serving(400, 300);

    let mut drawer = MapDrawer::new(&fetcher, zones());
    drawer.load_profile(&profile).unwrap();
    let err = drawer.draw("Westfall", dir.path()).unwrap_err();
    assert!(matches!(err, Error::CropOutOfBounds { .. }));
}

#[test]
fn far_off_coordinates_fail_the_crop() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(
        dir.path(),
        "far.xml",
        r#"<Grind><Waypoints><Normal><W X="40" Y="50"/><W X="1000000000" Y="50"/></Normal></Waypoints></Grind>"#,
    );
    let fetcher = StubFetcher::serving(400, 300);

    let mut drawer = MapDrawer::new(&fetcher, zones());
    drawer.load_profile(&profile).unwrap();
    let err = drawer.draw("Westfall", dir.path()).unwrap_err();
    assert!(matches!(err, Error::CropOutOfBounds { .. }));
    assert!(!dir.path().join("far.jpg").exists());
}

#[test]
fn loading_a_new_profile_replaces_the_old_one() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_profile(dir.path(), "first.xml", ROUTE);
    let broken = write_profile(dir.path(), "broken.xml", "<Grind><Waypoints>");
    let fetcher = StubFetcher::serving(400, 300);

    let mut drawer = MapDrawer::new(&fetcher, zones());
    drawer.load_profile(&first).unwrap();
    assert!(drawer.load_profile(&broken).is_err());
    assert!(drawer.loaded().is_none());
    assert!(matches!(
        drawer.draw("Westfall", dir.path()),
        Err(Error::NoProfileLoaded)
    ));

    let missing = drawer.load_profile(&dir.path().join("missing.xml")).unwrap_err();
    assert!(matches!(missing, Error::Io(_)));
}

#[test]
fn custom_style() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), "tight.xml", ROUTE);
    let fetcher = StubFetcher::serving(400, 300);

    let style = OverlayStyle {
        padding: 10.0,
        text_scale: 1,
        ..OverlayStyle::default()
    };
    let mut drawer = MapDrawer::new(&fetcher, zones()).with_style(style);
    drawer.load_profile(&profile).unwrap();
    let output = drawer.draw("Westfall", dir.path()).unwrap();

    // 80x60 bounds padded by 10, plus a 9 pixel strip at scale 1
    assert_eq!(image::open(output).unwrap().dimensions(), (100, 89));
}
