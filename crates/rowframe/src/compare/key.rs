// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Debug, Formatter},
	ops::Deref,
};

use super::TotalOrd;
use crate::selector::{Field, Selector};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
	#[default]
	Asc,
	Desc,
}

/// An ordered list of key extractors over row type `R`.
///
/// Implemented for a single [`Field`], for tuples of one to six selectors and
/// for [`Descending`]. Row comparison is lexicographic over the selected fields
/// and uses [`TotalOrd`] for every position.
pub trait Keys<R> {
	type Key: TotalOrd + Clone;

	/// Extracts an owned key from `row`.
	fn key(&self, row: &R) -> Self::Key;

	fn less(&self, l: &R, r: &R) -> bool;

	fn equal(&self, l: &R, r: &R) -> bool;

	#[inline]
	fn compare(&self, l: &R, r: &R) -> Ordering {
		if self.less(l, r) {
			Ordering::Less
		} else if self.less(r, l) {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}

impl<R, T> Keys<R> for Field<R, T>
where
	T: TotalOrd + Clone,
{
	type Key = T;

	#[inline]
	fn key(&self, row: &R) -> T {
		self.get(row).clone()
	}

	#[inline]
	fn less(&self, l: &R, r: &R) -> bool {
		self.get(l).total_lt(self.get(r))
	}

	#[inline]
	fn equal(&self, l: &R, r: &R) -> bool {
		self.get(l).total_eq(self.get(r))
	}
}

// Compares field by field without materializing keys.
macro_rules! impl_keys_tuple {
	($($s:ident : $idx:tt),+) => {
		impl<R, $($s),+> Keys<R> for ($($s,)+)
		where
			$($s: Selector<R>, $s::Value: TotalOrd + Clone,)+
		{
			type Key = ($($s::Value,)+);

			#[inline]
			fn key(&self, row: &R) -> Self::Key {
				($(self.$idx.get(row).clone(),)+)
			}

			#[inline]
			fn less(&self, l: &R, r: &R) -> bool {
				$(
					let (lv, rv) = (self.$idx.get(l), self.$idx.get(r));
					if lv.total_lt(rv) {
						return true;
					}
					if rv.total_lt(lv) {
						return false;
					}
				)+
				false
			}

			#[inline]
			fn equal(&self, l: &R, r: &R) -> bool {
				$(self.$idx.get(l).total_eq(self.$idx.get(r)))&&+
			}
		}
	};
}

impl_keys_tuple!(S0: 0);
impl_keys_tuple!(S0: 0, S1: 1);
impl_keys_tuple!(S0: 0, S1: 1, S2: 2);
impl_keys_tuple!(S0: 0, S1: 1, S2: 2, S3: 3);
impl_keys_tuple!(S0: 0, S1: 1, S2: 2, S3: 3, S4: 4);
impl_keys_tuple!(S0: 0, S1: 1, S2: 2, S3: 3, S4: 4, S5: 5);

impl<R, K: Keys<R> + ?Sized> Keys<R> for &K {
	type Key = K::Key;

	#[inline]
	fn key(&self, row: &R) -> K::Key {
		(**self).key(row)
	}

	#[inline]
	fn less(&self, l: &R, r: &R) -> bool {
		(**self).less(l, r)
	}

	#[inline]
	fn equal(&self, l: &R, r: &R) -> bool {
		(**self).equal(l, r)
	}
}

/// Reverses a key set by swapping the arguments of its comparator.
#[derive(Clone, Copy, Debug)]
pub struct Descending<K>(pub K);

impl<R, K: Keys<R>> Keys<R> for Descending<K> {
	type Key = K::Key;

	#[inline]
	fn key(&self, row: &R) -> K::Key {
		self.0.key(row)
	}

	#[inline]
	fn less(&self, l: &R, r: &R) -> bool {
		self.0.less(r, l)
	}

	#[inline]
	fn equal(&self, l: &R, r: &R) -> bool {
		self.0.equal(l, r)
	}
}

/// A group key ordered by [`TotalOrd`], usable as a `BTreeMap` key.
#[derive(Clone)]
pub struct OrderedKey<K>(pub K);

impl<K> OrderedKey<K> {
	pub fn into_inner(self) -> K {
		self.0
	}
}

impl<K> Deref for OrderedKey<K> {
	type Target = K;

	fn deref(&self) -> &K {
		&self.0
	}
}

impl<K: Debug> Debug for OrderedKey<K> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl<K: TotalOrd> PartialEq for OrderedKey<K> {
	fn eq(&self, other: &Self) -> bool {
		self.0.total_cmp(&other.0) == Ordering::Equal
	}
}

impl<K: TotalOrd> Eq for OrderedKey<K> {}

impl<K: TotalOrd> PartialOrd for OrderedKey<K> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<K: TotalOrd> Ord for OrderedKey<K> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}
