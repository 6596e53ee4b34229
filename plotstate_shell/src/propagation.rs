// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click propagation through the chart's node path.
//!
//! A chart has a two-level tree: the root (the chart background) and its
//! children (legend items and data elements). A click is delivered to the
//! hit node first (target phase) and then bubbles to the root. Handlers
//! return an [`Outcome`]; element and legend handlers stop propagation so the
//! root's "clear selection" handler never sees their clicks.
//!
//! ## Minimal example
//!
//! ```
//! use plotstate_shell::propagation::{Dispatch, Outcome, Phase, run};
//!
//! let seq = [Dispatch::target("bar"), Dispatch::bubble("root")];
//! let mut seen = Vec::new();
//! run(&seq, &mut seen, |d, seen| {
//!     seen.push((d.phase, d.node));
//!     if d.node == "bar" { Outcome::Stop } else { Outcome::Continue }
//! });
//! assert_eq!(seen, vec![(Phase::Target, "bar")]);
//! ```

use smallvec::{SmallVec, smallvec};

use plotstate_data::Category;

/// Propagation phase of a dispatch entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The node that was hit.
    Target,
    /// An ancestor of the hit node.
    Bubble,
}

/// What a handler wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Keep propagating.
    Continue,
    /// Stop propagation; later entries are not visited.
    Stop,
}

/// One step of a dispatch sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch<K> {
    /// Phase of this step.
    pub phase: Phase,
    /// Node visited in this step.
    pub node: K,
}

impl<K> Dispatch<K> {
    /// A target-phase entry.
    pub fn target(node: K) -> Self {
        Self {
            phase: Phase::Target,
            node,
        }
    }

    /// A bubble-phase entry.
    pub fn bubble(node: K) -> Self {
        Self {
            phase: Phase::Bubble,
            node,
        }
    }
}

/// Runs `handler` over `seq` in order, honoring [`Outcome::Stop`].
///
/// Returns `true` if a handler stopped propagation.
pub fn run<K, E>(
    seq: &[Dispatch<K>],
    event: &mut E,
    mut handler: impl FnMut(&Dispatch<K>, &mut E) -> Outcome,
) -> bool {
    for d in seq {
        match handler(d, event) {
            Outcome::Continue => {}
            Outcome::Stop => return true,
        }
    }
    false
}

/// A node of a chart's click tree.
#[derive(Debug, PartialEq)]
pub enum ChartNode<'a, E> {
    /// A legend item.
    LegendItem(&'a Category),
    /// A data element reported by the rendering backend.
    Element(&'a E),
    /// The chart background.
    Root,
}

impl<E> Clone for ChartNode<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ChartNode<'_, E> {}

/// Dispatch path of a click on `node`: the node itself, then the root.
///
/// A click on the root alone yields a single target entry.
pub fn path<E>(node: ChartNode<'_, E>) -> SmallVec<[Dispatch<ChartNode<'_, E>>; 2]> {
    match node {
        ChartNode::Root => smallvec![Dispatch::target(ChartNode::Root)],
        _ => smallvec![Dispatch::target(node), Dispatch::bubble(ChartNode::Root)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn stop_skips_the_bubble_phase() {
        let seq = [Dispatch::target(1), Dispatch::bubble(0)];
        let mut seen: Vec<i32> = Vec::new();
        let stopped = run(&seq, &mut seen, |d, seen| {
            seen.push(d.node);
            Outcome::Stop
        });
        assert!(stopped);
        assert_eq!(seen, [1]);
    }

    #[test]
    fn continue_visits_every_entry() {
        let seq = [Dispatch::target(1), Dispatch::bubble(0)];
        let mut seen: Vec<i32> = Vec::new();
        let stopped = run(&seq, &mut seen, |d, seen| {
            seen.push(d.node);
            Outcome::Continue
        });
        assert!(!stopped);
        assert_eq!(seen, [1, 0]);
    }

    #[test]
    fn element_path_bubbles_to_root() {
        let element = 7_u32;
        let seq = path(ChartNode::Element(&element));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0], Dispatch::target(ChartNode::Element(&element)));
        assert_eq!(seq[1], Dispatch::bubble(ChartNode::Root));

        assert_eq!(path::<u32>(ChartNode::Root).len(), 1);
    }
}
