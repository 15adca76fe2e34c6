// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of widget kinds.
//!
//! The toolkit's widget kinds are a fixed enum rather than an open trait
//! hierarchy: every routing and focus decision can be checked exhaustively,
//! and a tree payload is always one of these variants.

use alloc::vec::Vec;
use kurbo::{Point, Size};
use trellis_router::DispatchKind;
use trellis_tree::{WidgetFlags, WidgetState};

use crate::canvas::{Canvas, FontId};
use crate::signal::SignalKind;
use crate::widgets::{
    Button, ChatBox, Checkbox, ChildWindow, ComboBox, EditBox, Label, ListBox, LoadingBar,
    MenuBar, Panel, Picture, Scrollbar, Slider, SpinButton,
};

/// Any widget the toolkit can hold.
#[derive(Clone, Debug)]
pub enum WidgetKind {
    /// A plain container.
    Panel(Panel),
    /// A movable sub-window.
    ChildWindow(ChildWindow),
    /// A push button.
    Button(Button),
    /// Static text.
    Label(Label),
    /// A textured rectangle.
    Picture(Picture),
    /// A two-state toggle.
    Checkbox(Checkbox),
    /// A single-line text input.
    EditBox(EditBox),
    /// A scrollbar.
    Scrollbar(Scrollbar),
    /// A value slider.
    Slider(Slider),
    /// A two-arrow value stepper.
    SpinButton(SpinButton),
    /// A progress bar.
    LoadingBar(LoadingBar),
    /// A selectable list.
    ListBox(ListBox),
    /// A drop-down selection box.
    ComboBox(ComboBox),
    /// A menu bar.
    MenuBar(MenuBar),
    /// An append-only message log.
    ChatBox(ChatBox),
}

impl WidgetKind {
    /// The flags a widget of this kind starts with.
    pub fn flags(&self) -> WidgetFlags {
        let base = WidgetFlags::default();
        match self {
            Self::Panel(_) => {
                base | WidgetFlags::CONTAINER | WidgetFlags::FOCUSABLE | WidgetFlags::ANIMATED
            }
            Self::ChildWindow(_) => {
                base | WidgetFlags::CONTAINER
                    | WidgetFlags::FOCUSABLE
                    | WidgetFlags::DRAGGABLE
                    | WidgetFlags::ANIMATED
            }
            Self::Button(_) | Self::Checkbox(_) | Self::SpinButton(_) => {
                base | WidgetFlags::FOCUSABLE
            }
            Self::EditBox(_) => base | WidgetFlags::FOCUSABLE | WidgetFlags::ANIMATED,
            Self::Scrollbar(_) => base | WidgetFlags::DRAGGABLE,
            Self::Slider(_) => base | WidgetFlags::FOCUSABLE | WidgetFlags::DRAGGABLE,
            Self::ListBox(_) | Self::ComboBox(_) | Self::MenuBar(_) => {
                base | WidgetFlags::FOCUSABLE
            }
            Self::Label(_) | Self::Picture(_) | Self::LoadingBar(_) | Self::ChatBox(_) => base,
        }
    }

    /// The size a widget of this kind starts with.
    pub fn default_size(&self) -> Size {
        match self {
            Self::Panel(_) => Size::new(200.0, 150.0),
            Self::ChildWindow(_) => Size::new(320.0, 240.0),
            Self::Button(_) => Size::new(90.0, 28.0),
            Self::Label(_) => Size::new(100.0, 20.0),
            Self::Picture(_) => Size::new(100.0, 100.0),
            Self::Checkbox(_) => Size::new(20.0, 20.0),
            Self::EditBox(_) => Size::new(160.0, 24.0),
            Self::Scrollbar(_) => Size::new(16.0, 160.0),
            Self::Slider(_) => Size::new(160.0, 16.0),
            Self::SpinButton(_) => Size::new(16.0, 32.0),
            Self::LoadingBar(_) => Size::new(160.0, 20.0),
            Self::ListBox(_) => Size::new(160.0, 120.0),
            Self::ComboBox(_) => Size::new(160.0, 24.0),
            Self::MenuBar(_) => Size::new(400.0, 24.0),
            Self::ChatBox(_) => Size::new(240.0, 160.0),
        }
    }

    /// The widget's own font, if the kind renders text.
    pub fn font(&self) -> Option<FontId> {
        match self {
            Self::Panel(w) => w.font,
            Self::ChildWindow(w) => w.font,
            Self::Button(w) => w.font,
            Self::Label(w) => w.font,
            Self::Checkbox(w) => w.font,
            Self::EditBox(w) => w.font,
            Self::ListBox(w) => w.font,
            Self::ComboBox(w) => w.font,
            Self::MenuBar(w) => w.font,
            Self::ChatBox(w) => w.font,
            Self::Picture(_)
            | Self::Scrollbar(_)
            | Self::Slider(_)
            | Self::SpinButton(_)
            | Self::LoadingBar(_) => None,
        }
    }

    /// Set the widget's font, for kinds that render text.
    pub fn set_font(&mut self, font: Option<FontId>) {
        match self {
            Self::Panel(w) => w.font = font,
            Self::ChildWindow(w) => w.font = font,
            Self::Button(w) => w.font = font,
            Self::Label(w) => w.font = font,
            Self::Checkbox(w) => w.font = font,
            Self::EditBox(w) => w.font = font,
            Self::ListBox(w) => w.font = font,
            Self::ComboBox(w) => w.font = font,
            Self::MenuBar(w) => w.font = font,
            Self::ChatBox(w) => w.font = font,
            Self::Picture(_)
            | Self::Scrollbar(_)
            | Self::Slider(_)
            | Self::SpinButton(_)
            | Self::LoadingBar(_) => {}
        }
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        match self {
            Self::ChildWindow(w) => w.react(kind, state, out),
            Self::Button(w) => w.react(kind, state, out),
            Self::Checkbox(w) => w.react(kind, state, out),
            Self::EditBox(w) => w.react(kind, state, out),
            Self::Scrollbar(w) => w.react(kind, state, out),
            Self::Slider(w) => w.react(kind, state, out),
            Self::SpinButton(w) => w.react(kind, state, out),
            Self::ListBox(w) => w.react(kind, state, out),
            Self::ComboBox(w) => w.react(kind, state, out),
            Self::MenuBar(w) => w.react(kind, state, out),
            Self::ChatBox(w) => w.react(kind, state),
            Self::Panel(_) | Self::Label(_) | Self::Picture(_) | Self::LoadingBar(_) => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        match self {
            Self::Panel(w) => w.draw(state, origin, canvas),
            Self::ChildWindow(w) => w.draw(state, origin, canvas),
            Self::Button(w) => w.draw(state, origin, canvas),
            Self::Label(w) => w.draw(state, origin, canvas),
            Self::Picture(w) => w.draw(state, origin, canvas),
            Self::Checkbox(w) => w.draw(state, origin, canvas),
            Self::EditBox(w) => w.draw(state, origin, canvas),
            Self::Scrollbar(w) => w.draw(state, origin, canvas),
            Self::Slider(w) => w.draw(state, origin, canvas),
            Self::SpinButton(w) => w.draw(state, origin, canvas),
            Self::LoadingBar(w) => w.draw(state, origin, canvas),
            Self::ListBox(w) => w.draw(state, origin, canvas),
            Self::ComboBox(w) => w.draw(state, origin, canvas),
            Self::MenuBar(w) => w.draw(state, origin, canvas),
            Self::ChatBox(w) => w.draw(state, origin, canvas),
        }
    }
}

macro_rules! impl_from_widget {
    ($($widget:ident),* $(,)?) => {
        $(impl From<$widget> for WidgetKind {
            fn from(widget: $widget) -> Self {
                Self::$widget(widget)
            }
        })*
    };
}

impl_from_widget!(
    Panel,
    ChildWindow,
    Button,
    Label,
    Picture,
    Checkbox,
    EditBox,
    Scrollbar,
    Slider,
    SpinButton,
    LoadingBar,
    ListBox,
    ComboBox,
    MenuBar,
    ChatBox,
);
