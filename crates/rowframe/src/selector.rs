// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

/// Read access to one field of a row type.
pub trait Selector<R> {
	type Value;

	fn get<'r>(&self, row: &'r R) -> &'r Self::Value;
}

/// Write access to one field of a row type.
pub trait SelectorMut<R>: Selector<R> {
	fn get_mut<'r>(&self, row: &'r mut R) -> &'r mut Self::Value;
}

/// A typed handle to field `T` of row `R`.
///
/// Built with [`field!`](crate::field); holds two plain function pointers and
/// nothing else, so copying it is free and resolving it is a direct field access.
pub struct Field<R, T> {
	name: &'static str,
	get: fn(&R) -> &T,
	get_mut: fn(&mut R) -> &mut T,
}

impl<R, T> Field<R, T> {
	pub fn new(name: &'static str, get: fn(&R) -> &T, get_mut: fn(&mut R) -> &mut T) -> Self {
		Self {
			name,
			get,
			get_mut,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl<R, T> Clone for Field<R, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<R, T> Copy for Field<R, T> {}

impl<R, T> Debug for Field<R, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Field").field(&self.name).finish()
	}
}

impl<R, T> Selector<R> for Field<R, T> {
	type Value = T;

	#[inline]
	fn get<'r>(&self, row: &'r R) -> &'r T {
		(self.get)(row)
	}
}

impl<R, T> SelectorMut<R> for Field<R, T> {
	#[inline]
	fn get_mut<'r>(&self, row: &'r mut R) -> &'r mut T {
		(self.get_mut)(row)
	}
}

/// Builds a [`Field`] selector for `$row.$name`.
///
/// ```
/// use reifydb_rowframe::{Selector, field};
///
/// struct Trade {
/// 	price: f64,
/// }
///
/// let price = field!(Trade, price);
/// assert_eq!(*price.get(&Trade { price: 1.5 }), 1.5);
/// ```
#[macro_export]
macro_rules! field {
	($row:ty, $name:ident) => {
		$crate::Field::<$row, _>::new(stringify!($name), |row| &row.$name, |row| &mut row.$name)
	};
}

/// Either a selector resolved against each row or a constant.
pub trait Operand<R> {
	type Value;

	fn value(&self, row: &R) -> Self::Value;
}

impl<R, T: Clone> Operand<R> for Field<R, T> {
	type Value = T;

	#[inline]
	fn value(&self, row: &R) -> T {
		self.get(row).clone()
	}
}

/// A constant operand of any cloneable type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Literal<T>(pub T);

impl<R, T: Clone> Operand<R> for Literal<T> {
	type Value = T;

	#[inline]
	fn value(&self, _row: &R) -> T {
		self.0.clone()
	}
}

macro_rules! impl_literal_operand {
	($($t:ty),*) => {
		$(
			impl<R> Operand<R> for $t {
				type Value = $t;

				#[inline]
				fn value(&self, _row: &R) -> $t {
					*self
				}
			}
		)*
	};
}

impl_literal_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Resolves `operand` for `row`: the selected field for a selector, the value
/// itself for a constant.
#[inline]
pub fn get_val<R, O: Operand<R>>(row: &R, operand: &O) -> O::Value {
	operand.value(row)
}

/// Two or more operands of one value type, folded left to right.
///
/// Only implemented for tuples of arity two and above, so a reduction over a
/// single operand is rejected by the type checker.
pub trait Operands<R> {
	type Output;

	fn fold<F>(&self, row: &R, op: &mut F) -> Self::Output
	where
		F: FnMut(Self::Output, Self::Output) -> Self::Output;
}

macro_rules! impl_operands {
	($first:ident : $fi:tt $(, $rest:ident : $ri:tt)+) => {
		impl<R, T, $first, $($rest),+> Operands<R> for ($first, $($rest),+)
		where
			$first: Operand<R, Value = T>,
			$($rest: Operand<R, Value = T>,)+
		{
			type Output = T;

			#[inline]
			fn fold<F>(&self, row: &R, op: &mut F) -> T
			where
				F: FnMut(T, T) -> T,
			{
				let acc = self.$fi.value(row);
				$(let acc = op(acc, self.$ri.value(row));)+
				acc
			}
		}
	};
}

impl_operands!(O0: 0, O1: 1);
impl_operands!(O0: 0, O1: 1, O2: 2);
impl_operands!(O0: 0, O1: 1, O2: 2, O3: 3);
impl_operands!(O0: 0, O1: 1, O2: 2, O3: 3, O4: 4);
impl_operands!(O0: 0, O1: 1, O2: 2, O3: 3, O4: 4, O5: 5);
impl_operands!(O0: 0, O1: 1, O2: 2, O3: 3, O4: 4, O5: 5, O6: 6);
impl_operands!(O0: 0, O1: 1, O2: 2, O3: 3, O4: 4, O5: 5, O6: 6, O7: 7);
