// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Widgets: the widget set and root dispatcher of the Trellis
//! toolkit.
//!
//! ## Overview
//!
//! The lower Trellis crates know structure ([`trellis_tree`]), focus policy
//! ([`trellis_focus`]), and input routing ([`trellis_router`]). This crate
//! supplies the part the host application actually touches:
//!
//! - [`WidgetKind`] — the closed set of widget kinds. The set is fixed by
//!   design: routing and focus behavior stay exhaustively checkable, and a
//!   widget is always one of these variants.
//! - The widgets themselves ([`Button`], [`EditBox`], [`Scrollbar`],
//!   [`ChildWindow`], …) — glue over the routing contract: domain state, a
//!   reaction to the dispatch steps that reach them, a draw routine.
//! - [`Gui`] — the root dispatcher bound to the host window. Host events
//!   in, typed [`Signal`]s out, per-frame time in, draw calls down.
//! - The external collaborator interfaces ([`Canvas`], [`TextureId`],
//!   [`FontId`]) — everything touching pixels, textures, glyphs, or config
//!   files lives on the host side of these seams.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_router::{Event, MouseButton};
//! use trellis_widgets::{Checkbox, Gui, SignalKind};
//!
//! let mut gui = Gui::new(Size::new(640.0, 480.0));
//! let check = gui.add_named(gui.root(), "remember", Checkbox::new("Remember me"));
//! gui.set_position(check, Point::new(30.0, 40.0));
//!
//! gui.handle_event(Event::MousePressed {
//!     button: MouseButton::Left,
//!     position: Point::new(35.0, 45.0),
//! });
//! let signals = gui.handle_event(Event::MouseReleased {
//!     button: MouseButton::Left,
//!     position: Point::new(35.0, 45.0),
//! });
//! assert!(signals.iter().any(|s| s.kind == SignalKind::Checked(true)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod gui;
mod kind;
mod signal;
mod widgets;

pub use canvas::{Canvas, Color, FontId, TextureId};
pub use gui::Gui;
pub use kind::WidgetKind;
pub use signal::{Signal, SignalKind};
pub use widgets::{
    Button, ChatBox, Checkbox, ChildWindow, ComboBox, EditBox, Label, ListBox, LoadingBar, Menu,
    MenuBar, Panel, Picture, Scrollbar, Slider, SpinButton, TITLE_BAR_HEIGHT,
};
