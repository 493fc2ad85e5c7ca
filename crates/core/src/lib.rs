//! The core library of [icy_menu].
//!
//! This library holds the essential ideas of a hierarchical navigation menu:
//! the [`MenuTree`] describing its content, the [`MenuState`] deciding which
//! branches are open, the [`Event`]s driving it and the accessibility
//! attributes derived from it. It does not know how the menu is laid out or
//! drawn.
//!
//! [icy_menu]: https://docs.rs/icy_menu
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod a11y;
pub mod event;
pub mod keyboard;
pub mod time;

mod error;
mod id;
mod path;
mod state;
mod tree;
mod viewport;

pub use error::Error;
pub use event::{Event, Input, Status, Target};
pub use id::{ElementIds, NodeId};
pub use path::OpenPath;
pub use state::MenuState;
pub use tree::{MenuItem, MenuNode, MenuTree};
pub use viewport::ViewportMode;

#[cfg(feature = "accessibility")]
pub use accesskit;
