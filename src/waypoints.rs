//! Reading waypoints out of a grind profile.
//!
//! A profile looks like
//!
//! ```xml
//! <Grind>
//!   <Waypoints>
//!     <Normal>
//!       <Waypoint X="45.1" Y="62.7" />
//!     </Normal>
//!     <Ghost />
//!     <Vendor />
//!   </Waypoints>
//! </Grind>
//! ```
//!
//! Every child element of a category node is one waypoint, in route order.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::shapes::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Normal,
    Ghost,
    Vendor,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Normal, Category::Ghost, Category::Vendor];

    pub fn default_path(self) -> &'static str {
        match self {
            Category::Normal => "Grind/Waypoints/Normal",
            Category::Ghost => "Grind/Waypoints/Ghost",
            Category::Vendor => "Grind/Waypoints/Vendor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Normal => "normal",
            Category::Ghost => "ghost",
            Category::Vendor => "vendor",
        };
        f.write_str(name)
    }
}

/// Element paths of the three categories, root element first.
#[derive(Debug, Clone, Copy)]
pub struct CategoryPaths<'a> {
    pub normal: &'a str,
    pub ghost: &'a str,
    pub vendor: &'a str,
}

impl Default for CategoryPaths<'static> {
    fn default() -> Self {
        Self {
            normal: Category::Normal.default_path(),
            ghost: Category::Ghost.default_path(),
            vendor: Category::Vendor.default_path(),
        }
    }
}

impl<'a> CategoryPaths<'a> {
    fn get(&self, category: Category) -> &'a str {
        match category {
            Category::Normal => self.normal,
            Category::Ghost => self.ghost,
            Category::Vendor => self.vendor,
        }
    }
}

/// The three waypoint lists of a profile, each in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waypoints {
    pub normal: Vec<Point>,
    pub ghost: Vec<Point>,
    pub vendor: Vec<Point>,
}

impl Waypoints {
    pub fn get(&self, category: Category) -> &[Point] {
        match category {
            Category::Normal => &self.normal,
            Category::Ghost => &self.ghost,
            Category::Vendor => &self.vendor,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Point> {
        match category {
            Category::Normal => &mut self.normal,
            Category::Ghost => &mut self.ghost,
            Category::Vendor => &mut self.vendor,
        }
    }

    /// every point, normal first then ghost then vendor.
    pub fn all(&self) -> Vec<Point> {
        self.normal
            .iter()
            .chain(&self.ghost)
            .chain(&self.vendor)
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.normal.len() + self.ghost.len() + self.vendor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// where the route starts: the last normal waypoint.
    pub fn start_point(&self) -> Option<Point> {
        self.normal.last().copied()
    }
}

/// Result of reading a profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub waypoints: Waypoints,
    /// one `/way x y` macro line per normal waypoint, raw coordinates.
    pub addon: String,
}

/// parses a profile using the standard `Grind/Waypoints/*` paths.
pub fn parse(document: &str) -> Result<Profile> {
    parse_with_paths(document, &CategoryPaths::default())
}

pub fn parse_with_paths(document: &str, paths: &CategoryPaths) -> Result<Profile> {
    let doc = roxmltree::Document::parse(document)?;
    let mut profile = Profile::default();

    for category in Category::ALL {
        let path = paths.get(category);
        let Some(container) = find_path(doc.root_element(), path) else {
            debug!("no {path} in profile, {category} waypoints left empty");
            continue;
        };

        let waypoints = container.children().filter(|node| node.is_element());
        for (index, node) in waypoints.enumerate() {
            let x = read_coord(node, category, index, "X")?;
            let y = read_coord(node, category, index, "Y")?;

            if category == Category::Normal {
                profile.addon.push_str(&format!("/way {x} {y}\n"));
            }
            profile.waypoints.get_mut(category).push(Point::from_raw(x, y));
        }
        debug!(
            "read {} {category} waypoints",
            profile.waypoints.get(category).len()
        );
    }

    Ok(profile)
}

/// walks `Root/Child/Grandchild` from the root element, taking the first
/// element with a matching name at each level.
fn find_path<'a, 'input>(
    root: roxmltree::Node<'a, 'input>,
    path: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    if segments.next()? != root.tag_name().name() {
        return None;
    }

    segments.try_fold(root, |node, segment| {
        node.children()
            .find(|child| child.is_element() && child.tag_name().name() == segment)
    })
}

fn read_coord(
    node: roxmltree::Node,
    category: Category,
    index: usize,
    attribute: &'static str,
) -> Result<f32> {
    let malformed = |value: Option<&str>| Error::MalformedWaypoint {
        category,
        index,
        attribute,
        value: value.map(str::to_string),
    };

    let raw = node.attribute(attribute).ok_or_else(|| malformed(None))?;
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(Some(raw))),
    }
}
