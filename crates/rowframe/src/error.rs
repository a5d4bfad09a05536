// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("{operation} requires a non-empty container")]
	EmptyContainer {
		operation: &'static str,
	},

	#[error("expected {expected} values to match the container length, got {actual}")]
	LengthMismatch {
		expected: usize,
		actual: usize,
	},
}
