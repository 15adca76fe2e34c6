// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tree: the retained widget tree underneath the Trellis toolkit.
//!
//! This crate owns structure and common state; it knows nothing about input
//! events or drawing. It provides:
//!
//! - A slot arena with generational [`WidgetId`] handles: ids held past
//!   removal go stale and every accessor treats them as absent.
//! - Ordered children per container, where sibling order **is** the z-order:
//!   later children draw on top and win overlapping hit tests.
//! - Parent back-references as plain ids, so ownership flows strictly
//!   downward and no reference cycles can form.
//! - The mechanical half of the single-focus invariant: a container's
//!   focused-child link and the child `focused` flags always move together
//!   ([`Tree::set_focused_child`]).
//! - Cascading opacity ([`Tree::set_opacity`]) and name lookup that searches
//!   direct children before recursing ([`Tree::find`]).
//!
//! ## Where this fits
//!
//! Trellis splits the toolkit into structure (this crate), focus policy
//! (`trellis_focus`), input routing (`trellis_router`), and the widget kinds
//! themselves (`trellis_widgets`). The tree is payload-generic (`Tree<W>`)
//! so the lower layers stay testable with plain placeholder payloads.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_tree::{Tree, WidgetFlags, WidgetState};
//!
//! let mut tree: Tree<&str> = Tree::new();
//! let mut panel = WidgetState::placed(Point::ZERO, Size::new(200.0, 100.0));
//! panel.flags |= WidgetFlags::CONTAINER;
//! let root = tree.insert(None, panel, "panel");
//!
//! let button = tree.insert_named(
//!     Some(root),
//!     "ok",
//!     WidgetState::placed(Point::new(10.0, 10.0), Size::new(80.0, 24.0)),
//!     "button",
//! );
//!
//! assert_eq!(tree.find(root, "ok"), Some(button));
//! assert_eq!(tree.parent_of(button), Some(root));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{WidgetFlags, WidgetId, WidgetState};
