// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};

use crate::{
	compare::Keys,
	container::Container,
	sort::{Stability, sort_slice},
};

/// Returns one row per distinct key, in ascending key order.
///
/// Works on a sorted copy of `container`: after sorting, every run of rows
/// whose selected fields are all equal collapses to its first row. Survivors
/// therefore come out in key order, not in their original positions.
#[instrument(name = "rowframe::unique", level = "trace", skip_all, fields(rows = container.len()))]
pub fn unique<C, K>(container: &C, keys: K) -> C
where
	C: Container,
	C::Row: Clone,
	K: Keys<C::Row>,
{
	let mut result = C::with_capacity(container.len());
	for row in container.as_slice() {
		result.push(row.clone());
	}

	sort_slice(result.as_mut_slice(), &keys, Stability::Stable);
	let kept = compact(result.as_mut_slice(), &keys);

	debug!(removed = container.len() - kept, "removed duplicate rows");
	result.truncate(kept);
	result
}

// Moves the first row of each run of equal rows to the front and returns how
// many there are. `rows` must already be sorted by `keys`.
fn compact<R, K: Keys<R>>(rows: &mut [R], keys: &K) -> usize {
	if rows.is_empty() {
		return 0;
	}

	let mut last = 0;
	for next in 1..rows.len() {
		if !keys.equal(&rows[last], &rows[next]) {
			last += 1;
			rows.swap(last, next);
		}
	}
	last + 1
}
