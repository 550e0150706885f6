// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads the commits of a base..head range from a local repository and hands
//! them to the validator as [`RawCommit`](crate::commit::RawCommit)s.

mod repo;

pub use repo::{fetch_range, open_repo, Repository};
