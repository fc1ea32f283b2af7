// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how query results get ordered.
//!
//! There is no relevance score beyond counting. Documents matching more
//! distinct query terms win; among those, more total occurrences win.

pub mod ranking;

pub use ranking::{compare_query_documents, rank};
