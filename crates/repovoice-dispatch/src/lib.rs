// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent dispatcher for the Repovoice skill.
//!
//! One turn in, exactly one spoken response out. Dispatch runs in two
//! phases:
//! - [`plan`]: a pure transition that resolves the intent, performs all
//!   favorites mutations, and returns either the finished speech or a
//!   pending fetch
//! - [`Dispatcher::handle_turn`]: executes the plan, bounding every fetch
//!   with a timeout so the turn always terminates
//!
//! The split makes the one-response-per-turn contract structural: there is
//! no code path that can emit zero or two responses.

pub mod dispatcher;
pub mod plan;
pub mod speech;

pub use dispatcher::{Dispatcher, TurnOutcome};
pub use plan::{plan, Plan, PlanOutcome};
