//! Configure the behavior of a navigation menu.
//!
//! Settings can be built in code or, with the `serde` feature, loaded from
//! a RON file:
//!
//! ```ron
//! (
//!     hover_open_delay: 200,
//!     close_grace_delay: 400,
//!     compact_breakpoint: 960.0,
//! )
//! ```
use crate::core::ViewportMode;
use crate::core::time::{Duration, milliseconds};

use std::path::Path;

/// The settings of a navigation menu.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// How long the pointer has to rest on a trigger before its panel opens.
    ///
    /// Serialized in milliseconds.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub hover_open_delay: Duration,

    /// How long an open panel survives the pointer leaving it.
    ///
    /// Re-entering the branch before the delay elapses keeps it open, which
    /// allows diagonal movement from a trigger into its panel. Serialized in
    /// milliseconds.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub close_grace_delay: Duration,

    /// Viewports narrower than this width, in logical pixels, use the
    /// [`ViewportMode::Compact`] layout.
    pub compact_breakpoint: f32,

    /// The mode used until the first resize event.
    pub initial_mode: ViewportMode,

    /// Whether arrow keys wrap around at the ends of a menu.
    pub wrap_navigation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hover_open_delay: milliseconds(150),
            close_grace_delay: milliseconds(300),
            compact_breakpoint: 768.0,
            initial_mode: ViewportMode::Full,
            wrap_navigation: true,
        }
    }
}

impl Settings {
    /// Sets the hover delay of the [`Settings`].
    #[must_use]
    pub fn hover_open_delay(mut self, delay: Duration) -> Self {
        self.hover_open_delay = delay;
        self
    }

    /// Sets the grace delay of the [`Settings`].
    #[must_use]
    pub fn close_grace_delay(mut self, delay: Duration) -> Self {
        self.close_grace_delay = delay;
        self
    }

    /// Sets the compact breakpoint of the [`Settings`].
    #[must_use]
    pub fn compact_breakpoint(mut self, width: f32) -> Self {
        self.compact_breakpoint = width;
        self
    }

    /// Sets the initial mode of the [`Settings`].
    #[must_use]
    pub fn initial_mode(mut self, mode: ViewportMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Sets whether arrow keys wrap around.
    #[must_use]
    pub fn wrap_navigation(mut self, wrap: bool) -> Self {
        self.wrap_navigation = wrap;
        self
    }

    /// Returns the mode of a viewport of the given width.
    pub fn mode_for(&self, width: f32) -> ViewportMode {
        ViewportMode::from_width(width, self.compact_breakpoint)
    }

    /// Loads [`Settings`] from a file.
    ///
    /// Supports RON format (.ron extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| LoadError::Read(e.to_string()))?;

                let settings = Self::from_ron(&content)?;

                log::debug!("Loaded menu settings from {}", path.display());

                Ok(settings)
            }
            _ => Err(LoadError::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Parses [`Settings`] from a RON string.
    ///
    /// Missing fields keep their default value.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self, LoadError> {
        ron::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))
    }

    /// Parses [`Settings`] from a RON string.
    #[cfg(not(feature = "serde"))]
    pub fn from_ron(_content: &str) -> Result<Self, LoadError> {
        Err(LoadError::UnsupportedFormat(
            "RON loading requires 'serde' feature".to_string(),
        ))
    }
}

/// An error produced while loading [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read settings: {0}")]
    Read(String),
    /// Failed to parse settings file.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(feature = "serde")]
mod millis {
    use crate::core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
