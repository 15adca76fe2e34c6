// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A login form driven by synthetic input: routing, focus, and signals.
//!
//! There is no real window here; the example plays the role of the host,
//! feeding events into the root dispatcher and reading the typed signals
//! that come back out.
//!
//! Run:
//! - `cargo run -p trellis_demos --example login_form`

use kurbo::{Point, Size};
use trellis_demos::{press, release};
use trellis_router::{Event, Key};
use trellis_widgets::{Button, EditBox, Gui, Label, Signal, SignalKind, WidgetKind};

fn click(gui: &mut Gui, x: f64, y: f64) -> Vec<Signal> {
    let mut signals = gui.handle_event(press(x, y));
    signals.extend(gui.handle_event(release(x, y)));
    signals
}

fn type_text(gui: &mut Gui, text: &str) {
    for ch in text.chars() {
        gui.handle_event(Event::TextEntered { ch });
    }
}

fn main() {
    let mut gui = Gui::new(Size::new(800.0, 600.0));

    let label_username = gui.add(gui.root(), Label::new("Username:"));
    gui.set_position(label_username, Point::new(200.0, 100.0));
    let label_password = gui.add(gui.root(), Label::new("Password:"));
    gui.set_position(label_password, Point::new(200.0, 250.0));

    let username = gui.add_named(gui.root(), "Username", EditBox::new());
    gui.set_position(username, Point::new(200.0, 140.0));
    let password = gui.add_named(gui.root(), "Password", EditBox::new());
    gui.set_position(password, Point::new(200.0, 290.0));

    let login = gui.add_named(gui.root(), "Login", Button::new("Login"));
    gui.set_position(login, Point::new(270.0, 440.0));

    // Click the username field and type into it.
    click(&mut gui, 210.0, 150.0);
    type_text(&mut gui, "alice");

    // Tab moves focus to the password field.
    gui.handle_event(Event::KeyPressed { key: Key::Tab });
    assert_eq!(gui.focused_widget(), Some(password));
    type_text(&mut gui, "hunter2");

    // Click the login button.
    let signals = click(&mut gui, 300.0, 460.0);
    let clicked = signals
        .iter()
        .any(|s| s.widget == login && s.kind == SignalKind::Clicked);
    assert!(clicked, "the login button must report the click");

    let text_of = |id| match gui.tree().widget(id) {
        Some(WidgetKind::EditBox(edit)) => String::from(edit.text()),
        _ => String::new(),
    };
    println!("login clicked");
    println!("username: {}", text_of(username));
    println!("password: {}", text_of(password));
}
