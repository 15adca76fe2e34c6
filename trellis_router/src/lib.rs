// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Router: deterministic input routing for the Trellis widget tree.
//!
//! ## Overview
//!
//! This crate turns raw host events into dispatch sequences. It does not
//! know what a button or an edit box *does*; it decides **who** receives an
//! event, rewrites coordinates into that widget's local space, applies the
//! transient-state transitions (hover, pressed, focus), and records
//! everything in order. The widget layer executes the sequence with
//! [`dispatcher::run`] and turns steps into domain reactions.
//!
//! ## Routing rules
//!
//! - **Hit testing** walks a container's children back to front; the last
//!   (topmost) match wins. A superseded lower match is forced to leave, so
//!   widgets under an overlapping sibling see enter/leave pairs; this
//!   double notification is deliberate and kept for behavior parity.
//! - **Capture**: a pressed child that is draggable or a container keeps
//!   receiving mouse moves regardless of hit testing, so drags survive the
//!   pointer leaving the widget.
//! - **Press** focuses the hit child (when focusable) before pressing it;
//!   pressing empty space clears the level's focus.
//! - **Release** goes to the hit child, then every other child is told the
//!   mouse is no longer down; no sibling stays stuck pressed.
//! - **Wheel** goes to the hit child only.
//! - **Keys and text** travel down the focus chain from the root to the
//!   innermost focused widget; tab is handed to focus traversal instead,
//!   honoring the root dispatcher's toggle.
//! - **Update** drains each container's animation clock into its animated
//!   children, top down.
//!
//! ## Sequencing
//!
//! Routing runs to completion against snapshots of each child list before
//! any handler executes; reactions that mutate the tree take effect from
//! the next event on. Within one event, exactly one root-to-target path is
//! descended (plus the release broadcast), and notices appear at the
//! position in the sequence where the transition happened.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
mod hit;
mod router;
mod types;

pub use hit::{hit_test, mouse_no_longer_down, mouse_not_on_widget, widget_under_point};
pub use router::{
    handle_event, route_key, route_mouse_move, route_mouse_press, route_mouse_release,
    route_mouse_wheel, route_tab, route_text, route_update, route_window_focus_lost,
};
pub use types::{Dispatch, DispatchKind, Event, Key, MouseButton, Outcome, Phase};
