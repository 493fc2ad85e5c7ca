//! icy_menu is a hierarchical navigation menu, as a state machine.
//!
//! A menu is a [`MenuTree`] of titled links, some of which open panels of
//! children. Exactly one branch is open at a time: the [`OpenPath`], a chain
//! of open nodes going from a root down to some node. Everything else is
//! derived from it.
//!
//! The library does not draw anything. A host feeds it timestamped
//! [`Event`]s and gets back a [`Shell`] with the side effects it should
//! perform, a [`View`] describing what to draw, and the accessibility
//! attributes of every node.
//!
//! # The Pocket Guide
//! Describe your menu:
//!
//! ```
//! use icy_menu::{MenuItem, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     MenuItem::new("Products", "/products").children(vec![
//!         MenuItem::new("Software", "/products/software"),
//!         MenuItem::new("Hardware", "/products/hardware"),
//!     ]),
//!     MenuItem::new("About", "/about"),
//! ])
//! .expect("titles are unique");
//! # let _ = tree;
//! ```
//!
//! Create a [`NavMenu`] and forward it the input of your platform:
//!
//! ```
//! # use icy_menu::{MenuItem, MenuTree};
//! # let tree = MenuTree::new(vec![
//! #     MenuItem::new("Products", "/products")
//! #         .push(MenuItem::new("Software", "/products/software")),
//! # ]).expect("valid tree");
//! use icy_menu::time::Instant;
//! use icy_menu::{Brand, Event, NavMenu, Target};
//!
//! let mut menu = NavMenu::new(Brand::new("Acme"), tree);
//!
//! let shell = menu.update(&Event::Click(Target::Node("menu-Products".into())).at(Instant::now()));
//!
//! assert!(shell.is_event_captured());
//! assert_eq!(menu.path(), &["menu-Products"]);
//! ```
//!
//! Whenever [`Shell::redraw_request`] asks for it, or [`NavMenu::next_deadline`]
//! elapses, call [`NavMenu::tick`] so hover intent and grace delays can fire.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;
pub use icy_menu_widget as widget;

pub use crate::core::a11y;
pub use crate::core::event;
pub use crate::core::keyboard;
pub use crate::core::time;
pub use crate::core::{
    ElementIds, Error, Event, Input, MenuItem, MenuNode, MenuState, MenuTree, NodeId, OpenPath,
    Status, Target, ViewportMode,
};
pub use crate::widget::settings;
pub use crate::widget::view;
pub use crate::widget::{
    Brand, Focus, LoadError, NavMenu, RedrawRequest, Router, Settings, Shell, View,
};
