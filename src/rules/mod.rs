// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.
//!
//! [`RuleSet`] holds the rules, [`CommitValidator`] applies them to one
//! commit and [`RangeEvaluator`] applies them to a whole range. All of it is
//! pure computation over the configuration passed in.

mod builtin;
mod engine;
mod range;
mod validator;

pub use builtin::*;
pub use engine::RuleSet;
pub use range::{evaluate, RangeEvaluator, RangeReport};
pub use validator::{validate, CommitValidator, CommitVerdict, RuleViolation};
