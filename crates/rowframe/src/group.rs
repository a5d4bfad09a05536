// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, BTreeSet, btree_map},
	ops::Deref,
};

use tracing::{instrument, trace};

use crate::{
	compare::{Keys, OrderedKey},
	container::Container,
};

/// Row positions per distinct key, in ascending key order.
#[derive(Debug)]
pub struct GroupByView<K>(pub BTreeMap<OrderedKey<K>, Vec<usize>>);

impl<K> Deref for GroupByView<K> {
	type Target = BTreeMap<OrderedKey<K>, Vec<usize>>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<K> GroupByView<K> {
	fn new() -> Self {
		Self(BTreeMap::new())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&K, &[usize])> {
		self.0.iter().map(|(key, indices)| (&key.0, indices.as_slice()))
	}
}

/// Materialized groups: each distinct key with the rows sharing it, in
/// ascending key order. Rows inside a group keep their original relative order.
#[derive(Debug)]
pub struct Groups<K, C>(pub BTreeMap<OrderedKey<K>, C>);

impl<K, C> Deref for Groups<K, C> {
	type Target = BTreeMap<OrderedKey<K>, C>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<K, C> Groups<K, C> {
	pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> {
		self.0.iter().map(|(key, group)| (&key.0, group))
	}

	pub fn keys(&self) -> impl Iterator<Item = &K> {
		self.0.keys().map(|key| &key.0)
	}
}

impl<K: crate::TotalOrd + Clone, C> Groups<K, C> {
	pub fn get(&self, key: &K) -> Option<&C> {
		self.0.get(&OrderedKey(key.clone()))
	}
}

impl<K, C> IntoIterator for Groups<K, C> {
	type Item = (K, C);
	type IntoIter = std::iter::Map<btree_map::IntoIter<OrderedKey<K>, C>, fn((OrderedKey<K>, C)) -> (K, C)>;

	fn into_iter(self) -> Self::IntoIter {
		let unwrap: fn((OrderedKey<K>, C)) -> (K, C) = |(key, group)| (key.0, group);
		self.0.into_iter().map(unwrap)
	}
}

/// Partitions row positions by key without copying any row.
#[instrument(name = "rowframe::group_by_view", level = "trace", skip_all, fields(rows = container.len()))]
pub fn group_by_view<C, K>(container: &C, keys: K) -> GroupByView<K::Key>
where
	C: Container,
	K: Keys<C::Row>,
{
	let mut result = GroupByView::new();
	for (index, row) in container.as_slice().iter().enumerate() {
		result.0.entry(OrderedKey(keys.key(row))).or_insert_with(Vec::new).push(index);
	}
	trace!(groups = result.len(), "partitioned rows");
	result
}

/// Groups rows by key, cloning each row into its group container.
///
/// The positions of every group are collected first so that each group
/// container is allocated once at its final size.
#[instrument(name = "rowframe::group_by", level = "trace", skip_all, fields(rows = container.len()))]
pub fn group_by<C, K>(container: &C, keys: K) -> Groups<K::Key, C>
where
	C: Container,
	C::Row: Clone,
	K: Keys<C::Row>,
{
	let view = group_by_view(container, keys);
	let rows = container.as_slice();
	Groups(view.0.into_iter().map(|(key, indices)| (key, C::gather(rows, &indices))).collect())
}

/// Groups rows by key, moving each row into its group container.
#[instrument(name = "rowframe::into_groups", level = "trace", skip_all, fields(rows = container.len()))]
pub fn into_groups<C, K>(container: C, keys: K) -> Groups<K::Key, C>
where
	C: Container + IntoIterator<Item = <C as Container>::Row>,
	K: Keys<<C as Container>::Row>,
{
	let view = group_by_view(&container, keys);

	// slot of each row's group, in group order
	let mut slots = vec![0usize; container.len()];
	let mut groups = Vec::with_capacity(view.len());
	for (slot, (key, indices)) in view.0.into_iter().enumerate() {
		for &index in &indices {
			slots[index] = slot;
		}
		groups.push((key, C::with_capacity(indices.len())));
	}

	for (row, slot) in container.into_iter().zip(slots) {
		groups[slot].1.push(row);
	}

	Groups(groups.into_iter().collect())
}

/// Counts the distinct keys of `container`.
#[instrument(name = "rowframe::n_groups", level = "trace", skip_all, fields(rows = container.len()))]
pub fn n_groups<C, K>(container: &C, keys: K) -> usize
where
	C: Container,
	K: Keys<C::Row>,
{
	container.as_slice().iter().map(|row| OrderedKey(keys.key(row))).collect::<BTreeSet<_>>().len()
}

#[cfg(test)]
mod tests {
	use smallvec::{SmallVec, smallvec};

	use super::*;
	use crate::field;

	#[derive(Debug, Clone, PartialEq)]
	struct Row {
		a: i32,
		b: &'static str,
	}

	fn row(a: i32, b: &'static str) -> Row {
		Row {
			a,
			b,
		}
	}

	fn rows() -> Vec<Row> {
		vec![row(1, "x"), row(2, "x"), row(1, "y")]
	}

	#[test]
	fn test_group_by_single_field() {
		let groups = group_by(&rows(), field!(Row, a));
		assert_eq!(groups.len(), 2);
		assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
		assert_eq!(groups.get(&1), Some(&vec![row(1, "x"), row(1, "y")]));
		assert_eq!(groups.get(&2), Some(&vec![row(2, "x")]));
		assert_eq!(groups.get(&3), None);
	}

	#[test]
	fn test_group_by_tuple() {
		let groups = group_by(&rows(), (field!(Row, b), field!(Row, a)));
		let keys: Vec<_> = groups.keys().cloned().collect();
		assert_eq!(keys, vec![("x", 1), ("x", 2), ("y", 1)]);
	}

	#[test]
	fn test_group_by_view_keeps_row_order() {
		let view = group_by_view(&rows(), field!(Row, b));
		let entries: Vec<_> = view.iter().map(|(k, idx)| (*k, idx.to_vec())).collect();
		assert_eq!(entries, vec![("x", vec![0, 1]), ("y", vec![2])]);
	}

	#[test]
	fn test_into_groups_moves_rows() {
		let groups = into_groups(rows(), field!(Row, b));
		let collected: Vec<_> = groups.into_iter().collect();
		assert_eq!(collected, vec![("x", vec![row(1, "x"), row(2, "x")]), ("y", vec![row(1, "y")])]);
	}

	#[test]
	fn test_group_by_nan_keys_form_one_group() {
		#[derive(Debug, Clone)]
		struct Sample {
			v: f64,
		}

		let samples = vec![Sample { v: f64::NAN }, Sample { v: 1.0 }, Sample { v: f64::NAN }];
		let groups = group_by(&samples, field!(Sample, v));
		assert_eq!(groups.len(), 2);
		assert_eq!(n_groups(&samples, field!(Sample, v)), 2);

		let sizes: Vec<usize> = groups.iter().map(|(_, g)| g.len()).collect();
		assert_eq!(sizes, vec![1, 2]);
	}

	#[test]
	fn test_empty_container_has_no_groups() {
		let empty: Vec<Row> = Vec::new();
		assert!(group_by(&empty, field!(Row, a)).is_empty());
		assert_eq!(n_groups(&empty, field!(Row, a)), 0);
	}

	#[test]
	fn test_group_by_smallvec() {
		let rows: SmallVec<[Row; 4]> = smallvec![row(2, "x"), row(1, "x"), row(2, "y")];
		let groups = group_by(&rows, field!(Row, a));
		let sizes: Vec<usize> = groups.iter().map(|(_, g)| g.len()).collect();
		assert_eq!(sizes, vec![1, 2]);
	}
}
