//! Mapping from 2D seatmap clicks to 3D camera poses.
//!
//! The mapper owns an immutable [`Venue`] plus a [`MapperOptions`] bundle of
//! calibration constants. Every click yields a pose: clicks inside a section
//! polygon take the section-found path, everything else (concourses, aisles,
//! unmapped areas) takes the statistical fallback path. Neither path can fail.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraPosition, DEFAULT_FOV};
use crate::geometry::{
    calculate_angle_from_center, distance_to_polygon_edge, point_in_polygon, polygon_centroid,
};
use crate::venue::{Section, Venue};

/// Elevation and distance band substituted when a tier lookup misses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierDefaults {
    /// Height above the field plane in meters.
    pub elevation: f32,
    /// Minimum distance from the focal point in meters.
    pub min_distance: f32,
    /// Maximum distance from the focal point in meters.
    pub max_distance: f32,
}

impl TierDefaults {
    pub const fn new(elevation: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            elevation,
            min_distance,
            max_distance,
        }
    }
}

/// A radial band of the seatmap that maps to one tier on the fallback path.
///
/// A click at radial distance `d` from the visual center falls in the first
/// band with `d < outer_radius`; its depth within the band is
/// `(d - inner_radius) / (outer_radius - inner_radius)`. Distances beyond the
/// last band clamp into it with depth 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackBand {
    /// Tier level this band maps to.
    pub tier: u32,
    /// Inclusive inner radius in normalized seatmap units.
    pub inner_radius: f32,
    /// Exclusive outer radius in normalized seatmap units.
    pub outer_radius: f32,
}

/// Calibration constants for the mapper.
///
/// The defaults reproduce the reference venue calibration exactly; they are
/// configuration rather than literals so other venue layouts can re-tune them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapperOptions {
    /// Assumed visual center of the seatmap image. Offset above the true
    /// image center because seatmaps typically carry more chrome below the
    /// field.
    pub visual_center: Vec2,
    /// Radial tier bands for the fallback path, ordered by radius. An empty
    /// list disables radial calibration: unmapped clicks then estimate a
    /// mid-depth seat resolved through the default tier tables.
    pub fallback_bands: Vec<FallbackBand>,
    /// Per-tier defaults used on the fallback path when the venue defines no
    /// matching tier.
    pub tier_defaults: Vec<(u32, TierDefaults)>,
    /// Defaults when no per-tier entry matches either.
    pub unknown_tier_default: TierDefaults,
    /// Defaults when a found section references a tier the venue lacks.
    pub missing_tier_default: TierDefaults,
    /// Meters of extra camera height per unit of normalized depth, modeling
    /// seating rake.
    pub row_rake: f32,
    /// Field of view in degrees for produced poses.
    pub fov: f32,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            visual_center: Vec2::new(0.5, 0.45),
            fallback_bands: vec![
                FallbackBand {
                    tier: 100,
                    inner_radius: 0.0,
                    outer_radius: 0.25,
                },
                FallbackBand {
                    tier: 200,
                    inner_radius: 0.25,
                    outer_radius: 0.38,
                },
                FallbackBand {
                    tier: 400,
                    inner_radius: 0.38,
                    outer_radius: 0.53,
                },
            ],
            tier_defaults: vec![
                (100, TierDefaults::new(5.0, 30.0, 55.0)),
                (200, TierDefaults::new(18.0, 50.0, 80.0)),
                (400, TierDefaults::new(38.0, 70.0, 100.0)),
            ],
            unknown_tier_default: TierDefaults::new(15.0, 45.0, 75.0),
            missing_tier_default: TierDefaults::new(10.0, 40.0, 70.0),
            row_rake: 3.0,
            fov: DEFAULT_FOV,
        }
    }
}

impl MapperOptions {
    fn fallback_tier_defaults(&self, tier_level: u32) -> TierDefaults {
        self.tier_defaults
            .iter()
            .find(|(level, _)| *level == tier_level)
            .map_or(self.unknown_tier_default, |(_, defaults)| *defaults)
    }
}

/// Location estimate produced by the fallback path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackEstimate {
    /// Angle around the venue in degrees, image-space convention.
    pub angle_degrees: f32,
    /// Estimated tier level.
    pub tier: u32,
    /// Normalized depth within the tier band, in [0, 1].
    pub depth: f32,
}

/// Read-only section summary for UI display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInfo {
    /// Section identifier.
    pub section_id: String,
    /// Tier level the section belongs to.
    pub tier: u32,
    /// Configured section angle in degrees (0 = derived from centroid).
    pub angle: f32,
    /// Tier elevation in meters, when the venue defines the tier.
    pub elevation: Option<f32>,
}

/// Maps 2D seatmap click coordinates to 3D camera poses.
#[derive(Debug, Clone)]
pub struct CoordinateMapper {
    venue: Venue,
    options: MapperOptions,
}

impl CoordinateMapper {
    /// Creates a mapper for a venue with the reference calibration.
    pub fn new(venue: Venue) -> Self {
        Self::with_options(venue, MapperOptions::default())
    }

    /// Creates a mapper with explicit calibration options.
    pub fn with_options(venue: Venue, options: MapperOptions) -> Self {
        Self { venue, options }
    }

    /// Returns the venue this mapper serves.
    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Returns the active calibration options.
    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Finds the section containing the given normalized coordinates.
    ///
    /// Sections are tested in venue order; the first containing polygon wins.
    /// `None` is the normal outcome for clicks on concourses, aisles, and
    /// unmapped areas, not an error.
    pub fn find_section(&self, norm_x: f32, norm_y: f32) -> Option<&Section> {
        self.venue
            .sections
            .iter()
            .find(|section| point_in_polygon(norm_x, norm_y, &section.polygon))
    }

    /// Estimates angle, tier, and depth from the click position alone.
    ///
    /// Used when no section contains the click: the radial distance from the
    /// assumed visual center is bucketed through the configured tier bands.
    pub fn estimate_position_from_click(&self, norm_x: f32, norm_y: f32) -> FallbackEstimate {
        let center = self.options.visual_center;
        let angle_degrees = calculate_angle_from_center(norm_x, norm_y, center.x, center.y);

        let dist_from_center = Vec2::new(norm_x, norm_y).distance(center);

        let bands = &self.options.fallback_bands;

        // No bands configured means no radial calibration: estimate a
        // mid-depth seat on an undefined tier and let the default tables
        // resolve it downstream.
        let Some(last) = bands.len().checked_sub(1) else {
            return FallbackEstimate {
                angle_degrees,
                tier: 0,
                depth: 0.5,
            };
        };

        // The outermost band catches everything beyond it, clamped to its
        // back row.
        let band = bands
            .iter()
            .take(last)
            .find(|band| dist_from_center < band.outer_radius)
            .unwrap_or(&bands[last]);

        let width = band.outer_radius - band.inner_radius;
        let depth = if width > 0.0 {
            (dist_from_center - band.inner_radius) / width
        } else {
            1.0
        };

        FallbackEstimate {
            angle_degrees,
            tier: band.tier,
            depth: depth.min(1.0),
        }
    }

    /// Maps a click on the seatmap to a complete camera pose.
    ///
    /// `image_size` overrides the venue's configured seatmap dimensions when
    /// the displayed image was scaled. Every finite click yields a pose; a
    /// click outside all section polygons resolves through the fallback path.
    pub fn map_to_camera_position(
        &self,
        click_x: f32,
        click_y: f32,
        image_size: Option<(u32, u32)>,
    ) -> CameraPosition {
        let (width, height) = image_size.map_or(
            (self.venue.seatmap.width, self.venue.seatmap.height),
            |(w, h)| (w, h),
        );

        let norm_x = click_x / width as f32;
        let norm_y = click_y / height as f32;

        let (angle_degrees, elevation, min_distance, max_distance, normalized_depth) =
            match self.find_section(norm_x, norm_y) {
                Some(section) => {
                    let defaults = self.options.missing_tier_default;
                    let (elevation, (min_d, max_d)) = self
                        .venue
                        .get_tier(section.tier)
                        .map_or(
                            (defaults.elevation, (defaults.min_distance, defaults.max_distance)),
                            |tier| (tier.elevation, tier.distance_range),
                        );

                    let (_, depth) = distance_to_polygon_edge(norm_x, norm_y, &section.polygon);

                    let angle = if section.angle == 0.0 {
                        let centroid = polygon_centroid(&section.polygon);
                        calculate_angle_from_center(centroid.x, centroid.y, 0.5, 0.5)
                    } else {
                        section.angle
                    };

                    log::debug!(
                        "click ({norm_x:.3}, {norm_y:.3}) resolved to section '{}'",
                        section.id
                    );

                    (angle, elevation, min_d, max_d, depth)
                }
                None => {
                    let estimate = self.estimate_position_from_click(norm_x, norm_y);
                    let defaults = self.venue.get_tier(estimate.tier).map_or_else(
                        || self.options.fallback_tier_defaults(estimate.tier),
                        |tier| {
                            TierDefaults::new(
                                tier.elevation,
                                tier.distance_range.0,
                                tier.distance_range.1,
                            )
                        },
                    );

                    log::debug!(
                        "click ({norm_x:.3}, {norm_y:.3}) outside all sections, estimated tier {}",
                        estimate.tier
                    );

                    (
                        estimate.angle_degrees,
                        defaults.elevation,
                        defaults.min_distance,
                        defaults.max_distance,
                        estimate.depth,
                    )
                }
            };

        let angle_rad = angle_degrees.to_radians();

        // Row depth interpolates across the tier's distance band.
        let distance = min_distance + normalized_depth * (max_distance - min_distance);

        // Cylindrical placement around the seating anchor, with a small
        // upward drift for rows further back.
        let anchor = self.venue.seating_anchor;
        let position = Vec3::new(
            anchor.x + distance * angle_rad.sin(),
            anchor.y - distance * angle_rad.cos(),
            anchor.z + elevation + normalized_depth * self.options.row_rake,
        );

        CameraPosition::from_position_looking_at(position, self.venue.field_center, self.options.fov)
    }

    /// Returns a display summary of the section at the click position.
    ///
    /// `None` when the click falls outside all sections; not an error.
    pub fn get_section_info(
        &self,
        click_x: f32,
        click_y: f32,
        image_size: Option<(u32, u32)>,
    ) -> Option<SectionInfo> {
        let (width, height) = image_size.map_or(
            (self.venue.seatmap.width, self.venue.seatmap.height),
            |(w, h)| (w, h),
        );

        let norm_x = click_x / width as f32;
        let norm_y = click_y / height as f32;

        let section = self.find_section(norm_x, norm_y)?;
        let tier = self.venue.get_tier(section.tier);

        Some(SectionInfo {
            section_id: section.id.clone(),
            tier: section.tier,
            angle: section.angle,
            elevation: tier.map(|t| t.elevation),
        })
    }
}
