// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

pub use key::{Descending, Direction, Keys, OrderedKey};

mod key;

/// The strict weak ordering shared by grouping, sorting and deduplication.
///
/// For every type except the IEEE floats this is the native ordering. Floats
/// deviate in two ways: NaN equals NaN, and NaN sorts after every non-NaN value.
pub trait TotalOrd {
	fn total_lt(&self, other: &Self) -> bool;

	fn total_eq(&self, other: &Self) -> bool;

	#[inline]
	fn total_cmp(&self, other: &Self) -> Ordering {
		if self.total_lt(other) {
			Ordering::Less
		} else if other.total_lt(self) {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}

/// Implements [`TotalOrd`] through the type's own [`Ord`].
#[macro_export]
macro_rules! total_ord_via_ord {
	($($t:ty),* $(,)?) => {
		$(
			impl $crate::TotalOrd for $t {
				#[inline]
				fn total_lt(&self, other: &Self) -> bool {
					self < other
				}

				#[inline]
				fn total_eq(&self, other: &Self) -> bool {
					self == other
				}

				#[inline]
				fn total_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
					::std::cmp::Ord::cmp(self, other)
				}
			}
		)*
	};
}

total_ord_via_ord!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, (), String, str);

macro_rules! impl_float {
	($($t:ty),*) => {
		$(
			impl TotalOrd for $t {
				#[inline]
				fn total_lt(&self, other: &Self) -> bool {
					match (self.is_nan(), other.is_nan()) {
						(false, false) => self < other,
						(false, true) => true,
						(true, _) => false,
					}
				}

				#[inline]
				fn total_eq(&self, other: &Self) -> bool {
					self == other || (self.is_nan() && other.is_nan())
				}
			}
		)*
	};
}

impl_float!(f32, f64);

impl<T: TotalOrd + ?Sized> TotalOrd for &T {
	#[inline]
	fn total_lt(&self, other: &Self) -> bool {
		(**self).total_lt(*other)
	}

	#[inline]
	fn total_eq(&self, other: &Self) -> bool {
		(**self).total_eq(*other)
	}
}

impl<T: TotalOrd> TotalOrd for Option<T> {
	fn total_lt(&self, other: &Self) -> bool {
		match (self, other) {
			(None, Some(_)) => true,
			(Some(l), Some(r)) => l.total_lt(r),
			_ => false,
		}
	}

	fn total_eq(&self, other: &Self) -> bool {
		match (self, other) {
			(None, None) => true,
			(Some(l), Some(r)) => l.total_eq(r),
			_ => false,
		}
	}
}

// Lexicographic: the first element that is strictly ordered decides, elements
// that are neither less nor greater fall through to the next position.
macro_rules! impl_tuple {
	($($t:ident : $idx:tt),+) => {
		impl<$($t: TotalOrd),+> TotalOrd for ($($t,)+) {
			#[inline]
			fn total_lt(&self, other: &Self) -> bool {
				$(
					if self.$idx.total_lt(&other.$idx) {
						return true;
					}
					if other.$idx.total_lt(&self.$idx) {
						return false;
					}
				)+
				false
			}

			#[inline]
			fn total_eq(&self, other: &Self) -> bool {
				$(self.$idx.total_eq(&other.$idx))&&+
			}
		}
	};
}

impl_tuple!(T0: 0);
impl_tuple!(T0: 0, T1: 1);
impl_tuple!(T0: 0, T1: 1, T2: 2);
impl_tuple!(T0: 0, T1: 1, T2: 2, T3: 3);
impl_tuple!(T0: 0, T1: 1, T2: 2, T3: 3, T4: 4);
impl_tuple!(T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5);
