//! The render-boundary contract.
//!
//! Rendering itself is an external collaborator; this module only defines the
//! seam it is reached through. A backend takes the stable
//! [`ProjectionRecord`] plus quality settings and returns encoded image
//! bytes.

use serde::{Deserialize, Serialize};

use seatview_core::{ProjectionRecord, Result};

/// Quality settings for a render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Render sample count (higher = better quality, slower).
    pub samples: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            samples: 64,
        }
    }
}

/// A backend capable of turning a camera pose into a rendered image.
pub trait RenderBackend {
    /// Renders a view from the given camera pose, returning encoded image
    /// bytes.
    fn render(&self, camera: &ProjectionRecord, settings: &RenderSettings) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = RenderSettings::default();
        assert_eq!(settings.width, 1920);
        assert_eq!(settings.height, 1080);
        assert_eq!(settings.samples, 64);
    }
}
