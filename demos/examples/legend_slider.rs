// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend slider.
//!
//! Holds the right scroll button of an overflowing legend and drives the
//! controller's timers from a simulated clock, the way a host event loop
//! would: sleep until `next_deadline`, then call `advance`.
//!
//! Run:
//! - `cargo run -p plotstate_demos --example legend_slider`

use plotstate_demos::{SimulatedStrip, init_logging};
use plotstate_legend::{Direction, Key, LegendConfig, LegendScrollController};

fn main() {
    init_logging();

    let mut strip = SimulatedStrip::new(1_400.0, 420.0, 40.0);
    let mut legend = LegendScrollController::new(LegendConfig::default().with_slider(true));
    legend.remeasure(&strip);
    println!("layout {:?}, state {:?}", legend.layout(), legend.state());

    let mut now = 0;
    legend.pointer_down(Direction::Right, now, &mut strip);
    while let Some(deadline) = legend.next_deadline() {
        now = deadline;
        let fired = legend.advance(now, &mut strip);
        println!(
            "t={now:>5}ms fired {fired} phase {:?} state {:?}",
            legend.phase(),
            legend.state()
        );
        if now > 5_000 {
            break;
        }
    }
    legend.pointer_up();

    // Keyboard navigation back to the start.
    let outcome = legend.key_down(Key::ArrowLeft, now, &mut strip);
    println!("ArrowLeft: {outcome:?}");
    legend.advance(now + 900, &mut strip);
    legend.key_up(Key::ArrowLeft);
    legend.advance(now + 2_000, &mut strip);
    println!("final scroll_left {:.0}", strip.metrics.scroll_left);
}
