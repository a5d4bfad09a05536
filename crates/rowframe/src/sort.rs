// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use crate::{
	compare::{Descending, Direction, Keys},
	container::Container,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stability {
	/// Rows with equal keys keep their relative order.
	#[default]
	Stable,
	/// Rows with equal keys end up in unspecified order.
	Unstable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
	pub direction: Direction,
	pub stability: Stability,
}

impl SortOptions {
	pub fn asc() -> Self {
		Self::default()
	}

	pub fn desc() -> Self {
		Self {
			direction: Direction::Desc,
			..Self::default()
		}
	}

	pub fn unstable(mut self) -> Self {
		self.stability = Stability::Unstable;
		self
	}
}

#[instrument(name = "rowframe::sort", level = "trace", skip_all, fields(rows = container.len(), direction = ?options.direction))]
pub fn sort_by_keys<C, K>(container: &mut C, keys: &K, options: SortOptions)
where
	C: Container,
	K: Keys<C::Row>,
{
	match options.direction {
		Direction::Asc => sort_slice(container.as_mut_slice(), keys, options.stability),
		Direction::Desc => sort_slice(container.as_mut_slice(), &Descending(keys), options.stability),
	}
}

/// Sorts `container` ascending by `keys`, keeping equal rows in their original order.
pub fn sort_asc<C, K>(container: &mut C, keys: K)
where
	C: Container,
	K: Keys<C::Row>,
{
	sort_by_keys(container, &keys, SortOptions::asc())
}

/// Sorts `container` descending by `keys`, keeping equal rows in their original order.
pub fn sort_des<C, K>(container: &mut C, keys: K)
where
	C: Container,
	K: Keys<C::Row>,
{
	sort_by_keys(container, &keys, SortOptions::desc())
}

pub fn is_sorted_asc<C, K>(container: &C, keys: K) -> bool
where
	C: Container,
	K: Keys<C::Row>,
{
	is_sorted_slice(container.as_slice(), &keys)
}

pub fn is_sorted_des<C, K>(container: &C, keys: K) -> bool
where
	C: Container,
	K: Keys<C::Row>,
{
	is_sorted_slice(container.as_slice(), &Descending(keys))
}

pub(crate) fn sort_slice<R, K: Keys<R>>(rows: &mut [R], keys: &K, stability: Stability) {
	match stability {
		Stability::Stable => rows.sort_by(|l, r| keys.compare(l, r)),
		Stability::Unstable => rows.sort_unstable_by(|l, r| keys.compare(l, r)),
	}
}

// A row may never be strictly less than its predecessor.
pub(crate) fn is_sorted_slice<R, K: Keys<R>>(rows: &[R], keys: &K) -> bool {
	rows.is_sorted_by(|prev, next| !keys.less(next, prev))
}
