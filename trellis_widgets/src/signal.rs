// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed notifications widgets raise towards host code.

use trellis_tree::WidgetId;

/// A notification raised by a widget while reacting to routed input.
///
/// Signals are returned to the host from the root dispatcher's event and
/// update entry points, in the order they were raised. The toolkit core
/// never interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signal {
    /// The widget that raised the notification.
    pub widget: WidgetId,
    /// What happened.
    pub kind: SignalKind,
}

/// What a widget reports having happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignalKind {
    /// A press and release paired up on the widget.
    Clicked,
    /// A checkbox toggled.
    Checked(bool),
    /// A value-bearing widget (scrollbar, slider, spin button) changed.
    ValueChanged(i32),
    /// An edit box's text changed.
    TextChanged,
    /// Return was pressed inside an edit box.
    ReturnPressed,
    /// A list or combo entry was selected.
    ItemSelected(usize),
    /// A menu entry was activated.
    MenuItemClicked {
        /// Index of the menu in the bar.
        menu: usize,
        /// Index of the item within the menu.
        item: usize,
    },
    /// A child window's close button was activated.
    Closed,
    /// The pointer entered the widget.
    MouseEntered,
    /// The pointer left the widget.
    MouseLeft,
    /// The widget became focused.
    Focused,
    /// The widget lost focus.
    Unfocused,
}
