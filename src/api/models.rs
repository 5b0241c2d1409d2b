use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Zone name -> url of the zone's map image.
///
/// Loaded from a json object, e.g.
/// `{ "Elwynn Forest": "https://.../elwynn.jpg" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneTable {
    zones: BTreeMap<String, String>,
}

impl ZoneTable {
    pub fn new(zones: BTreeMap<String, String>) -> Self {
        Self { zones }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading zone table {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing zone table {}", path.display()))
    }

    /// zone names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    /// url of the zone's map. A zone listed without a url has no background.
    pub fn lookup(&self, zone: &str) -> Result<&str> {
        let url = self.zones.get(zone).ok_or_else(|| Error::UnknownZone {
            zone: zone.to_string(),
        })?;

        if url.trim().is_empty() {
            return Err(Error::MissingBackground {
                zone: zone.to_string(),
                reason: "zone has no image url".to_string(),
            });
        }
        Ok(url)
    }
}
