//! Core seat-to-camera geometry engine for seatview-rs.
//!
//! This crate converts clicks on a 2D venue seatmap into 3D camera poses:
//! - [`geometry`] - planar primitives (point-in-polygon, centroid, edge
//!   distance, image-space angles)
//! - [`venue`] - immutable venue/tier/section model
//! - [`mapper`] - the coordinate mapper combining both, with a statistical
//!   fallback for clicks outside every section
//! - [`camera`] - camera pose and look-at orientation
//!
//! Everything here is synchronous, pure computation over immutable inputs;
//! configuration loading and render dispatch live in the `seatview` facade.

// Geometry code intentionally uses casts for indices and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod venue;

pub use camera::{CameraPosition, CameraRotation, ProjectionRecord, DEFAULT_FOV};
pub use error::{Result, SeatviewError};
pub use mapper::{
    CoordinateMapper, FallbackBand, FallbackEstimate, MapperOptions, SectionInfo, TierDefaults,
};
pub use venue::{SeatmapConfig, Section, Tier, Venue, VenueType};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};
