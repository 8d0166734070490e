// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A hover popover near the bottom of the viewport, driven by a scripted pointer.
//!
//! The panel prefers to open below its trigger, flips above because there is no
//! room, survives the pointer travelling from the trigger into the panel, and
//! closes once the pointer has been outside both for the hover delay.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p perch_demos --example popover_hover`

use kurbo::{Rect, Size};
use perch_popover::{Popover, PopoverConfig, SnapshotHost};
use perch_position::Placement;
use perch_reactive::Signal;
use perch_trigger::{Surface, TriggerEvent, TriggerMode};
use tracing_subscriber::EnvFilter;

const TRIGGER: u32 = 1;
const PANEL: u32 = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = SnapshotHost::new(Size::new(1024.0, 768.0))
        .with_rect(TRIGGER, Rect::new(200.0, 730.0, 260.0, 760.0))
        .with_rect(PANEL, Rect::new(0.0, 0.0, 100.0, 50.0));

    let open = Signal::new(false);
    let _log = open.subscribe(|open| println!("  open -> {open}"));

    let config = PopoverConfig::default()
        .with_placement(Placement::Bottom)
        .with_mode(TriggerMode::Hover)
        .with_hover_delay(100);
    let mut popover = Popover::new(open.clone(), config);
    popover.set_trigger(Some(TRIGGER), &host);

    println!("t=0    pointer enters trigger");
    popover.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0, &host);
    // Host re-renders: the panel now exists.
    popover.set_panel(Some(PANEL), &host);
    if let Some(pos) = popover.position() {
        println!(
            "  panel at `{pos}` (placed {:?})",
            popover.resolved_placement().unwrap_or(config.placement)
        );
    }

    println!("t=20   pointer leaves trigger");
    popover.handle(Surface::Trigger, TriggerEvent::PointerLeave, 20, &host);
    println!("t=60   pointer enters panel");
    popover.handle(Surface::Panel, TriggerEvent::PointerEnter, 60, &host);
    popover.tick(120, &host);
    println!("t=120  still open: {}", popover.is_open());

    println!("t=400  pointer leaves panel");
    popover.handle(Surface::Panel, TriggerEvent::PointerLeave, 400, &host);
    for now in [450, 499, 500] {
        if popover.tick(now, &host) {
            println!("t={now}  hover delay elapsed");
        }
    }
    popover.set_panel(None, &host);
    println!("bound listeners after close: {:?}", popover.listeners());
}
