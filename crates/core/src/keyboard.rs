//! Listen to keyboard events.
use smol_str::SmolStr;

/// A key on the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user,
    /// taking into account the user's current locale setting.
    Character(SmolStr),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Returns true if the key activates the focused trigger, like a click.
    pub fn is_activation(&self) -> bool {
        match self {
            Self::Named(Named::Enter | Named::Space) => true,
            Self::Character(c) => c == " ",
            Self::Named(_) | Self::Unidentified => false,
        }
    }
}

/// A named key.
///
/// Only the keys a navigation menu reacts to are named; everything else is
/// reported as [`Key::Character`] or [`Key::Unidentified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Named {
    Enter,
    Space,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

bitflags::bitflags! {
    /// The current state of the keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        /// The "shift" key.
        const SHIFT = 0b100;
        /// The "control" key.
        const CTRL = 0b100 << 3;
        /// The "alt" key.
        const ALT = 0b100 << 6;
        /// The "windows" key on Windows, "command" key on Mac, and
        /// "super" key on Linux.
        const LOGO = 0b100 << 9;
    }
}

impl Modifiers {
    /// Returns true if the [`SHIFT`] key is pressed in the [`Modifiers`].
    ///
    /// [`SHIFT`]: Self::SHIFT
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns true if the [`CTRL`] key is pressed in the [`Modifiers`].
    ///
    /// [`CTRL`]: Self::CTRL
    pub fn control(self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns true if the [`ALT`] key is pressed in the [`Modifiers`].
    ///
    /// [`ALT`]: Self::ALT
    pub fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    /// Returns true if the [`LOGO`] key is pressed in the [`Modifiers`].
    ///
    /// [`LOGO`]: Self::LOGO
    pub fn logo(self) -> bool {
        self.contains(Self::LOGO)
    }

    /// Returns true if a modifier that turns a key into a shortcut is
    /// pressed.
    pub fn is_shortcut(self) -> bool {
        self.intersects(Self::CTRL | Self::ALT | Self::LOGO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(Key::Named(Named::Enter).is_activation());
        assert!(Key::Named(Named::Space).is_activation());
        assert!(Key::Character(" ".into()).is_activation());
        assert!(!Key::Character("a".into()).is_activation());
        assert!(!Key::Named(Named::Escape).is_activation());
        assert!(!Key::Unidentified.is_activation());
    }

    #[test]
    fn test_shortcut_modifiers() {
        assert!(!Modifiers::empty().is_shortcut());
        assert!(!Modifiers::SHIFT.is_shortcut());
        assert!(Modifiers::CTRL.is_shortcut());
        assert!((Modifiers::SHIFT | Modifiers::ALT).is_shortcut());
    }
}
