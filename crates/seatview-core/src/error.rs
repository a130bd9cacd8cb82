//! Error types for seatview-rs.

use thiserror::Error;

/// The main error type for seatview-rs operations.
#[derive(Error, Debug)]
pub enum SeatviewError {
    /// No configuration exists for the requested venue.
    #[error("venue '{id}' not found")]
    VenueNotFound { id: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for seatview-rs operations.
pub type Result<T> = std::result::Result<T, SeatviewError>;
