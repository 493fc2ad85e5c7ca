/// The layout mode of a menu, derived from the width of the viewport.
///
/// In [`Compact`] mode panels render inline and only open on click; in
/// [`Full`] mode they render as overlays and also open on hover.
///
/// [`Compact`]: Self::Compact
/// [`Full`]: Self::Full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportMode {
    /// A narrow viewport, with click-only accordion panels.
    Compact,

    /// A wide viewport, with hover-intent overlay panels.
    #[default]
    Full,
}

impl ViewportMode {
    /// Returns the mode of a viewport of the given width; anything narrower
    /// than the breakpoint is [`Compact`].
    ///
    /// [`Compact`]: Self::Compact
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Full
        }
    }

    /// Returns true if pointer hover may open and close panels.
    pub fn allows_hover(self) -> bool {
        self == Self::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width() {
        assert_eq!(ViewportMode::from_width(320.0, 768.0), ViewportMode::Compact);
        assert_eq!(ViewportMode::from_width(768.0, 768.0), ViewportMode::Full);
        assert_eq!(ViewportMode::from_width(1920.0, 768.0), ViewportMode::Full);
    }

    #[test]
    fn test_hover_only_in_full_mode() {
        assert!(ViewportMode::Full.allows_hover());
        assert!(!ViewportMode::Compact.allows_hover());
    }
}
