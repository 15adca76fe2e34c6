// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event and dispatch types shared by the routing functions.

use kurbo::Point;
use trellis_tree::WidgetId;

/// Mouse buttons reported by the host window.
///
/// Only [`MouseButton::Left`] participates in press/release routing; other
/// buttons are accepted from the host and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The wheel button.
    Middle,
}

/// The closed set of keys the dispatcher recognizes.
///
/// Anything else arrives as [`Key::Unknown`] and is dropped at the root
/// rather than routed to the focused widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Delete backwards.
    Backspace,
    /// Delete forwards.
    Delete,
    /// Space bar.
    Space,
    /// Return / enter.
    Enter,
    /// Focus traversal.
    Tab,
    /// Any key outside the recognized set.
    Unknown,
}

/// A raw input event, as delivered by the host window.
///
/// Positions are in the root dispatcher's coordinate space; routing rewrites
/// them into each recipient's local space while descending.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// The pointer moved.
    MouseMoved {
        /// Pointer position.
        position: Point,
    },
    /// A mouse button went down.
    MousePressed {
        /// The button that went down.
        button: MouseButton,
        /// Pointer position.
        position: Point,
    },
    /// A mouse button came up.
    MouseReleased {
        /// The button that came up.
        button: MouseButton,
        /// Pointer position.
        position: Point,
    },
    /// The wheel moved.
    MouseWheelMoved {
        /// Wheel delta in detents; positive scrolls up.
        delta: i32,
        /// Pointer position.
        position: Point,
    },
    /// A key went down.
    KeyPressed {
        /// The key.
        key: Key,
    },
    /// A character was produced by the keyboard.
    TextEntered {
        /// The character.
        ch: char,
    },
    /// The host window lost input focus; pointer state is reset.
    WindowFocusLost,
}

/// Phase of a dispatch step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A container on the path from the root towards the target.
    Capture,
    /// The widget the event resolved to.
    Target,
    /// A state-transition notification (hover, press reset, focus).
    Notice,
}

/// What a dispatch step carries to its recipient.
///
/// Pointer coordinates are local to the recipient. The routing engine has
/// already applied the transient-state changes (hover, pressed, focus
/// flags) when a step is emitted; reactions only read them and mutate
/// domain state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DispatchKind {
    /// The pointer moved over (or is captured by) the recipient.
    MouseMove {
        /// Pointer position in the recipient's space.
        local: Point,
    },
    /// The left button went down on the recipient.
    MousePress {
        /// Pointer position in the recipient's space.
        local: Point,
    },
    /// The left button came up over the recipient.
    MouseRelease {
        /// Pointer position in the recipient's space.
        local: Point,
        /// Whether the recipient was still pressed when the release arrived
        /// (true exactly when press and release paired up on this widget).
        was_pressed: bool,
    },
    /// The wheel moved over the recipient.
    Wheel {
        /// Wheel delta in detents; positive scrolls up.
        delta: i32,
        /// Pointer position in the recipient's space.
        local: Point,
    },
    /// A recognized key reached the focused recipient.
    Key {
        /// The key.
        key: Key,
    },
    /// A printable character reached the focused recipient.
    Text {
        /// The character.
        ch: char,
    },
    /// The animation clock was drained into the recipient.
    Update {
        /// The recipient's accumulated clock, in milliseconds.
        elapsed_ms: u64,
    },
    /// The pointer entered the recipient.
    MouseEntered,
    /// The pointer left the recipient (or an ancestor decided it did).
    MouseLeft,
    /// Pressed state was forcibly reset without a matching release.
    PressReset,
    /// The recipient became its container's focused child.
    Focused,
    /// The recipient stopped being its container's focused child.
    Unfocused,
}

/// One step of a routed event: who, in which role, and what.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dispatch {
    /// The step's role in the sequence.
    pub phase: Phase,
    /// The recipient.
    pub node: WidgetId,
    /// The payload.
    pub kind: DispatchKind,
}

impl Dispatch {
    /// A capture-phase step for a container on the path.
    pub fn capture(node: WidgetId, kind: DispatchKind) -> Self {
        Self {
            phase: Phase::Capture,
            node,
            kind,
        }
    }

    /// A target-phase step for the resolved recipient.
    pub fn target(node: WidgetId, kind: DispatchKind) -> Self {
        Self {
            phase: Phase::Target,
            node,
            kind,
        }
    }

    /// A state-transition notice.
    pub fn notice(node: WidgetId, kind: DispatchKind) -> Self {
        Self {
            phase: Phase::Notice,
            node,
            kind,
        }
    }
}

/// Handler outcome controlling propagation in [`crate::dispatcher::run`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going.
    Continue,
    /// Abort the remainder of the sequence immediately.
    Stop,
}
