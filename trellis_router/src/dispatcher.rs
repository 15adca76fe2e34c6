// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: walk a dispatch sequence and honor stop outcomes.
//!
//! The routing functions compute *what* happens; this module executes it.
//! It is deliberately minimal:
//!
//! - [`Outcome`] only controls propagation (`Continue` vs `Stop`).
//! - The return value from [`run`] reports where execution stopped, if at
//!   all.
//! - Higher-level semantics ("consumed", emitted signals) live on the state
//!   you pass through, not in [`Outcome`].
//!
//! ## Minimal example
//!
//! ```
//! use trellis_router::dispatcher;
//! use trellis_router::{Dispatch, DispatchKind, Outcome, Phase};
//! use trellis_tree::{Tree, WidgetState};
//!
//! let mut tree: Tree<()> = Tree::new();
//! let a = tree.insert(None, WidgetState::default(), ());
//!
//! let seq = vec![
//!     Dispatch::notice(a, DispatchKind::MouseEntered),
//!     Dispatch::target(a, DispatchKind::Key { key: trellis_router::Key::Enter }),
//! ];
//!
//! let mut seen = Vec::new();
//! let stopped = dispatcher::run(&seq, &mut seen, |d, seen| {
//!     seen.push(d.phase);
//!     Outcome::Continue
//! });
//! assert!(stopped.is_none());
//! assert_eq!(seen, [Phase::Notice, Phase::Target]);
//! ```

use crate::types::{Dispatch, Outcome};

/// Run a handler over a dispatch sequence and honor stop outcomes.
///
/// `state` is carried across handler calls; you own its shape (a signal
/// accumulator in the widget layer, a plain `Vec` in tests). Returning
/// [`Outcome::Stop`] aborts the remaining steps immediately, so a reaction
/// that swallowed a key can keep it from reaching anything else. The
/// stopped-at entry is returned, or `None` when the sequence completed.
pub fn run<'a, E>(
    seq: &'a [Dispatch],
    state: &mut E,
    mut handler: impl FnMut(&Dispatch, &mut E) -> Outcome,
) -> Option<&'a Dispatch> {
    for d in seq {
        match handler(d, state) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(d),
        }
    }
    None
}
