//! Interaction, configuration and projection of a navigation menu.
//!
//! This crate drives the state machine of [`icy_menu_core`]: the [`Router`]
//! turns raw input into transitions, arbitrating between hover intent,
//! clicks, the keyboard and layout changes, while [`view::render`] projects
//! the result into a [`View`] a host can draw. [`NavMenu`] ties both
//! together.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;

pub mod menu;
pub mod router;
pub mod settings;
pub mod shell;
pub mod timer;
pub mod view;

mod traversal;

pub use menu::NavMenu;
pub use router::Router;
pub use settings::{LoadError, Settings};
pub use shell::{Focus, RedrawRequest, Shell};
pub use view::{Brand, View};
