// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Trellis demos: synthetic host events.

use kurbo::Point;
use trellis_router::{Event, MouseButton};

/// A left-button press at `(x, y)`.
pub fn press(x: f64, y: f64) -> Event {
    Event::MousePressed {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

/// A left-button release at `(x, y)`.
pub fn release(x: f64, y: f64) -> Event {
    Event::MouseReleased {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

/// A pointer move to `(x, y)`.
pub fn moved(x: f64, y: f64) -> Event {
    Event::MouseMoved {
        position: Point::new(x, y),
    }
}
