// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a four-step tour with the keyboard.
//!
//! The page is an in-memory `MockPage`. Each key press is mapped to a
//! navigation action; every step change is fed to the sizing state machine,
//! which scrolls far targets into view before the popover is placed.
//!
//! Run:
//! - `cargo run -p understory_tour_demos --example tour_walkthrough`
//! - `RUST_LOG=understory_tour=trace cargo run -p understory_tour_demos --example tour_walkthrough`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_placement::Side;
use understory_tour::testing::{MockElement, MockPage};
use understory_tour::{NavKey, Sizing, SizingEvent, SizingPhase, Step, TourConfig, TourState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_tour=debug")),
        )
        .init();

    let mut page = MockPage::new(Size::new(1280.0, 720.0))
        .with_document_size(Size::new(1280.0, 3200.0));
    page.add("#logo", Rect::new(24.0, 16.0, 184.0, 56.0));
    page.add("#search", Rect::new(900.0, 16.0, 1256.0, 56.0));
    page.add(".nav-projects", Rect::new(24.0, 120.0, 224.0, 156.0));
    page.add(".nav-settings", Rect::new(24.0, 164.0, 224.0, 200.0));
    page.add("#chart", Rect::new(300.0, 1800.0, 1200.0, 2300.0));
    page.add("#export", Rect::new(1080.0, 3080.0, 1240.0, 3120.0));

    let steps: Vec<Step<MockElement>> = vec![
        Step::new("#logo"),
        Step::new("#search").with_position(Side::Left).with_padding([6.0, 12.0]),
        Step::new(".nav-projects")
            .with_highlighted_selectors([".nav-projects", ".nav-settings"])
            .with_bypass_target(false),
        Step::new("#chart").with_interaction(true),
        Step::new("#export").with_position([40.0, 40.0]),
    ];

    let config = TourConfig::default().with_disable_interaction(true);
    let mut state = TourState::new(steps.len());
    let mut sizing = Sizing::new(config.scroll);
    show_step(&mut page, &mut sizing, &steps[state.current()], &config, state.current());

    let keys = [
        NavKey::ArrowRight,
        NavKey::ArrowRight,
        NavKey::ArrowRight,
        NavKey::ArrowLeft,
        NavKey::ArrowRight,
        NavKey::ArrowRight,
        NavKey::ArrowRight,
        NavKey::Escape,
    ];
    for key in keys {
        let Some(action) = state.handle_key(key, &config.keyboard) else {
            println!("{key:?}: ignored");
            continue;
        };
        if !state.apply(action) {
            println!("{key:?}: no change");
            continue;
        }
        if !state.is_open() {
            println!("{key:?}: tour closed");
            break;
        }
        let index = state.current();
        show_step(&mut page, &mut sizing, &steps[index], &config, index);
    }
}

fn show_step(
    page: &mut MockPage,
    sizing: &mut Sizing<MockElement>,
    step: &Step<MockElement>,
    config: &TourConfig,
    index: usize,
) {
    sizing.handle(page, Some(step), SizingEvent::StepChanged);
    let mut frames = 0;
    while sizing.phase() == SizingPhase::Scrolling {
        page.advance_frame();
        sizing.handle(page, Some(step), SizingEvent::AnimationFrame);
        frames += 1;
    }

    let frame = sizing.frame(page, Some(step), config);
    let placement = frame.place_popover(Size::new(300.0, 140.0));
    println!(
        "step {index}: scroll_y={:.0} ({frames} frames) highlight={:?} cutout={:?} popover={:?} at ({:.0}, {:.0}) blocks_input={}",
        page.scroll_offset(),
        frame.sizes.bounds,
        frame.mask.cutout,
        placement.side,
        placement.coords.x,
        placement.coords.y,
        frame.blocks_interaction,
    );
}
