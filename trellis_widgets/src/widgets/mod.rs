// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget set.
//!
//! Every widget here is glue over the routing contract: domain state, a
//! reaction to the dispatch steps that reach it, and a draw routine. The
//! interesting machinery (who gets which event, in which coordinates,
//! with which transient state) lives in `trellis_router`.

mod button;
mod chat_box;
mod checkbox;
mod child_window;
mod combo_box;
mod edit_box;
mod label;
mod list_box;
mod loading_bar;
mod menu_bar;
mod panel;
mod picture;
mod scrollbar;
mod slider;
mod spin_button;

pub use button::Button;
pub use chat_box::ChatBox;
pub use checkbox::Checkbox;
pub use child_window::{ChildWindow, TITLE_BAR_HEIGHT};
pub use combo_box::ComboBox;
pub use edit_box::EditBox;
pub use label::Label;
pub use list_box::ListBox;
pub use loading_bar::LoadingBar;
pub use menu_bar::{Menu, MenuBar};
pub use panel::Panel;
pub use picture::Picture;
pub use scrollbar::Scrollbar;
pub use slider::Slider;
pub use spin_button::SpinButton;
