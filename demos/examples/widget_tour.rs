// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture and z-order at work: a draggable window, a scrollbar drag that
//! leaves the track, and a menu selection.
//!
//! Run:
//! - `cargo run -p trellis_demos --example widget_tour`

use kurbo::{Point, Size};
use trellis_demos::{moved, press, release};
use trellis_widgets::{ChildWindow, Gui, MenuBar, Scrollbar, SignalKind};

fn main() {
    let mut gui = Gui::new(Size::new(800.0, 600.0));

    let mut bar = MenuBar::new();
    let file = bar.add_menu("File");
    bar.add_menu_item(file, "Open");
    bar.add_menu_item(file, "Quit");
    let menu = gui.add(gui.root(), bar);

    let window = gui.add(gui.root(), ChildWindow::new("tools"));
    gui.set_position(window, Point::new(200.0, 200.0));
    let scroll = gui.add(window, Scrollbar::new(400, 100));
    gui.set_position(scroll, Point::new(290.0, 40.0));

    // Drag the window by its title bar.
    gui.handle_event(press(250.0, 210.0));
    gui.handle_event(moved(330.0, 250.0));
    gui.handle_event(release(330.0, 250.0));
    let at = gui.tree().state(window).unwrap().position;
    println!("window moved to ({}, {})", at.x, at.y);

    // Drag the scrollbar and keep dragging far outside the track; capture
    // keeps the value moving until release.
    gui.handle_event(press(575.0, 300.0));
    let signals = gui.handle_event(moved(50.0, 590.0));
    for signal in &signals {
        if let SignalKind::ValueChanged(value) = signal.kind {
            println!("scrollbar value: {value}");
        }
    }
    gui.handle_event(release(50.0, 590.0));

    // Open the File menu, then pick its second entry.
    gui.handle_event(press(10.0, 10.0));
    gui.handle_event(release(10.0, 10.0));
    for signal in gui.handle_event(press(10.0, 50.0)) {
        if signal.widget == menu
            && let SignalKind::MenuItemClicked { menu: m, item } = signal.kind
        {
            println!("menu {m} item {item} clicked");
        }
    }
    gui.handle_event(release(10.0, 50.0));
}
