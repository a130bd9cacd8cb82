//! Venue configuration loading.
//!
//! Venue configs live at `<venues_dir>/<venue_id>/config.json` with the venue
//! description under a top-level `venue` key. The loader hands back a
//! fully-parsed immutable [`Venue`]; everything downstream assumes the data
//! has been validated at authoring time.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use seatview_core::{CoordinateMapper, Result, SeatviewError, Venue};

/// Top-level shape of a venue config file.
#[derive(Debug, Deserialize)]
struct VenueConfigFile {
    venue: Venue,
}

/// Loads a venue configuration by id.
///
/// Fails with [`SeatviewError::VenueNotFound`] when no config file exists for
/// the id, and propagates I/O and parse errors otherwise.
pub fn load_venue(venues_dir: &Path, venue_id: &str) -> Result<Venue> {
    let config_path = venues_dir.join(venue_id).join("config.json");

    if !config_path.exists() {
        return Err(SeatviewError::VenueNotFound {
            id: venue_id.to_string(),
        });
    }

    let reader = BufReader::new(File::open(&config_path)?);
    let config: VenueConfigFile = serde_json::from_reader(reader)?;

    log::info!(
        "loaded venue '{}' ({} sections, {} tiers)",
        config.venue.id,
        config.venue.sections.len(),
        config.venue.tiers.len()
    );

    Ok(config.venue)
}

/// Loads a venue and wraps it in a mapper with the reference calibration.
pub fn load_mapper(venues_dir: &Path, venue_id: &str) -> Result<CoordinateMapper> {
    let venue = load_venue(venues_dir, venue_id)?;
    Ok(CoordinateMapper::new(venue))
}
