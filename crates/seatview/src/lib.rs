//! seatview-rs: 3D camera poses from 2D venue seatmap clicks.
//!
//! Click a point on a venue seatmap image and get back a camera pose
//! (position, orientation, field of view) representing the view from that
//! seat, ready to hand to a renderer.
//!
//! # Quick Start
//!
//! ```no_run
//! use seatview::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let mapper = load_mapper(Path::new("data/venues"), "yankee_stadium")?;
//!
//!     // A click at pixel (640, 720) on the seatmap
//!     if let Some(info) = mapper.get_section_info(640.0, 720.0, None) {
//!         println!("section {} on tier {}", info.section_id, info.tier);
//!     }
//!
//!     let camera = mapper.map_to_camera_position(640.0, 720.0, None);
//!     let record = camera.to_projection_record();
//!     println!("{}", serde_json::to_string_pretty(&record)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The geometry engine lives in `seatview-core` and is pure, synchronous
//! computation over an immutable [`Venue`]:
//!
//! - a click inside a section polygon resolves through that section's tier
//!   (the section-found path);
//! - a click outside every polygon resolves through a radial estimate around
//!   the seatmap's visual center (the fallback path);
//! - either way the camera is placed cylindrically around the venue's seating
//!   anchor and oriented at its field center.
//!
//! This crate adds venue configuration loading and the [`RenderBackend`]
//! seam toward the external renderer.

// Documentation lints - error conditions are described in prose
#![allow(clippy::missing_errors_doc)]

pub mod loader;
pub mod render;

pub use loader::{load_mapper, load_venue};
pub use render::{RenderBackend, RenderSettings};

// Re-export the core engine API
pub use seatview_core::{
    CameraPosition, CameraRotation, CoordinateMapper, FallbackBand, FallbackEstimate,
    MapperOptions, ProjectionRecord, Result, SeatmapConfig, Section, SectionInfo, SeatviewError,
    Tier, TierDefaults, Venue, VenueType, Vec2, Vec3, DEFAULT_FOV,
};
