// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use crate::container::Container;

/// Positions of the rows matching `predicate`, in ascending order.
pub fn which<C, P>(container: &C, mut predicate: P) -> Vec<usize>
where
	C: Container,
	P: FnMut(&C::Row) -> bool,
{
	container.as_slice().iter().enumerate().filter(|(_, row)| predicate(*row)).map(|(index, _)| index).collect()
}

/// A new container with the rows matching `predicate`, in their original order.
#[instrument(name = "rowframe::subset", level = "trace", skip_all, fields(rows = container.len()))]
pub fn subset<C, P>(container: &C, predicate: P) -> C
where
	C: Container,
	C::Row: Clone,
	P: FnMut(&C::Row) -> bool,
{
	let indices = which(container, predicate);
	C::gather(container.as_slice(), &indices)
}

/// Concatenates `head` followed by every container of `tail`, in order.
///
/// The first container is a separate argument so that a call without any
/// input cannot be written.
#[instrument(name = "rowframe::concat", level = "trace", skip_all, fields(parts = tail.len() + 1))]
pub fn concat<C>(head: &C, tail: &[&C]) -> C
where
	C: Container,
	C::Row: Clone,
{
	let total = head.len() + tail.iter().map(|part| part.len()).sum::<usize>();
	let mut result = C::with_capacity(total);
	for part in std::iter::once(head).chain(tail.iter().copied()) {
		for row in part.as_slice() {
			result.push(row.clone());
		}
	}
	result
}

/// Concatenates `head` followed by every container of `tail`, moving the rows.
#[instrument(name = "rowframe::concat_owned", level = "trace", skip_all)]
pub fn concat_owned<C, I>(head: C, tail: I) -> C
where
	C: Container + IntoIterator<Item = <C as Container>::Row>,
	I: IntoIterator<Item = C>,
{
	let tail: Vec<C> = tail.into_iter().collect();
	let total = head.len() + tail.iter().map(|part| part.len()).sum::<usize>();
	let mut result = C::with_capacity(total);
	for part in std::iter::once(head).chain(tail) {
		for row in part {
			result.push(row);
		}
	}
	result
}

/// A new container with the first `n` rows, or all rows if there are fewer.
pub fn head<C>(container: &C, n: usize) -> C
where
	C: Container,
	C::Row: Clone,
{
	let rows = &container.as_slice()[..n.min(container.len())];
	let mut result = C::with_capacity(rows.len());
	for row in rows {
		result.push(row.clone());
	}
	result
}

/// Keeps only the first `n` rows; a no-op when there are `n` rows or fewer.
pub fn inplace_head<C: Container>(container: &mut C, n: usize) {
	if n >= container.len() {
		return;
	}
	container.truncate(n);
}
