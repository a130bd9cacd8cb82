//! Venue, tier, and section data models.
//!
//! A [`Venue`] is loaded once from static configuration and treated as
//! immutable for the lifetime of every mapping request. Hot-reload means
//! constructing a fresh `Venue` and swapping the reference, never mutating in
//! place.

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The kind of venue, used only to pick cosmetic defaults and templates.
///
/// Never consulted by the geometry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Baseball,
    Hockey,
    Basketball,
    Football,
    Concert,
    #[default]
    Other,
}

/// Pixel dimensions and source file of the seatmap image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatmapConfig {
    /// Seatmap image filename.
    pub file: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// A seating tier (level) with its elevation and distance band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tier {
    /// Height above the field plane in meters.
    pub elevation: f32,
    /// (min, max) distance from the focal point in meters, min <= max.
    pub distance_range: (f32, f32),
}

/// A polygonal seating area on the 2D seatmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier within the venue.
    pub id: String,
    /// Tier level this section belongs to (conventionally 100/200/300/400).
    ///
    /// May reference a tier the venue does not define; the mapper substitutes
    /// defaults in that case.
    pub tier: u32,
    /// Polygon vertices in normalized [0,1] seatmap coordinates, either
    /// winding, at least 3 vertices, non-self-intersecting.
    pub polygon: Vec<Vec2>,
    /// Fixed angle in degrees from the venue center. Zero means "derive from
    /// the polygon centroid instead".
    #[serde(default)]
    pub angle: f32,
    /// Number of seat rows. Advisory only; unused by the core math.
    #[serde(default)]
    pub row_count: Option<u32>,
}

/// Complete immutable venue description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: String,
    /// Human-readable venue name.
    pub name: String,
    /// Venue kind, cosmetic only.
    #[serde(rename = "type", default)]
    pub venue_type: VenueType,
    /// Seatmap image configuration.
    pub seatmap: SeatmapConfig,
    /// The 3D focal point every camera looks toward, in meters.
    #[serde(default)]
    pub field_center: Vec3,
    /// The reference anchor the seating bowl wraps around (historically home
    /// plate). Cylindrical camera placement is centered here.
    #[serde(default = "default_seating_anchor")]
    pub seating_anchor: Vec3,
    /// Tier definitions keyed by level.
    pub tiers: HashMap<u32, Tier>,
    /// Sections in match-priority order: when polygons overlap, the first
    /// containing section wins.
    pub sections: Vec<Section>,
}

fn default_seating_anchor() -> Vec3 {
    Vec3::new(0.0, -27.0, 0.0)
}

impl Venue {
    /// Finds a section by its id.
    pub fn get_section_by_id(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Gets the tier configuration for a level, if the venue defines it.
    pub fn get_tier(&self, tier_level: u32) -> Option<&Tier> {
        self.tiers.get(&tier_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_venue() -> Venue {
        Venue {
            id: "test_park".to_string(),
            name: "Test Park".to_string(),
            venue_type: VenueType::Baseball,
            seatmap: SeatmapConfig {
                file: "seatmap.png".to_string(),
                width: 1280,
                height: 1024,
            },
            field_center: Vec3::ZERO,
            seating_anchor: default_seating_anchor(),
            tiers: HashMap::from([(
                100,
                Tier {
                    elevation: 5.0,
                    distance_range: (30.0, 60.0),
                },
            )]),
            sections: vec![Section {
                id: "101".to_string(),
                tier: 100,
                polygon: vec![
                    Vec2::new(0.4, 0.4),
                    Vec2::new(0.6, 0.4),
                    Vec2::new(0.6, 0.6),
                    Vec2::new(0.4, 0.6),
                ],
                angle: 0.0,
                row_count: None,
            }],
        }
    }

    #[test]
    fn test_section_lookup() {
        let venue = sample_venue();
        assert!(venue.get_section_by_id("101").is_some());
        assert!(venue.get_section_by_id("999").is_none());
    }

    #[test]
    fn test_tier_lookup() {
        let venue = sample_venue();
        assert!(venue.get_tier(100).is_some());
        assert!(venue.get_tier(400).is_none());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "min",
            "name": "Minimal",
            "seatmap": { "file": "map.png", "width": 100, "height": 100 },
            "tiers": {},
            "sections": [
                { "id": "1", "tier": 100, "polygon": [[0,0],[1,0],[1,1]] }
            ]
        }"#;
        let venue: Venue = serde_json::from_str(json).expect("parse failed");
        assert_eq!(venue.venue_type, VenueType::Other);
        assert_eq!(venue.field_center, Vec3::ZERO);
        assert_eq!(venue.seating_anchor, Vec3::new(0.0, -27.0, 0.0));
        assert_eq!(venue.sections[0].angle, 0.0);
        assert_eq!(venue.sections[0].row_count, None);
    }
}
