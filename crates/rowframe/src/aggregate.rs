// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Add;

use num_traits::{AsPrimitive, Zero};
use tracing::instrument;

use crate::{
	Error, Result,
	compare::TotalOrd,
	container::Container,
	selector::{Operands, Selector, SelectorMut},
};

/// Left-to-right sum of the selected field; zero for an empty container.
pub fn sum<C, S>(container: &C, selector: S) -> S::Value
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: Zero + Clone,
{
	container.as_slice().iter().fold(<S::Value as Zero>::zero(), |acc, row| acc + selector.get(row).clone())
}

/// Like [`sum`], accumulating in the wider type `U`.
pub fn sum_as<U, C, S>(container: &C, selector: S) -> U
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: Clone,
	U: Zero + From<S::Value>,
{
	container.as_slice().iter().fold(U::zero(), |acc, row| acc + U::from(selector.get(row).clone()))
}

/// Arithmetic mean of the selected field, `None` for an empty container.
pub fn mean<C, S>(container: &C, selector: S) -> Option<f64>
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: AsPrimitive<f64>,
{
	if container.is_empty() {
		return None;
	}
	let total: f64 = container.as_slice().iter().map(|row| selector.get(row).as_()).sum();
	Some(total / container.len() as f64)
}

/// Median of the selected field.
///
/// The container must already be sorted ascending by `selector`; an even
/// number of rows yields the mean of the two middle values.
///
/// # Panics
///
/// Panics if the container is empty.
pub fn median<C, S>(container: &C, selector: S) -> f64
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: AsPrimitive<f64>,
{
	assert!(!container.is_empty(), "median of an empty container");
	median_of(container.as_slice(), &selector)
}

/// Like [`median`], reporting an empty container as an error.
pub fn try_median<C, S>(container: &C, selector: S) -> Result<f64>
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: AsPrimitive<f64>,
{
	if container.is_empty() {
		return Err(Error::EmptyContainer {
			operation: "median",
		});
	}
	Ok(median_of(container.as_slice(), &selector))
}

fn median_of<R, S>(rows: &[R], selector: &S) -> f64
where
	S: Selector<R>,
	S::Value: AsPrimitive<f64>,
{
	let mid = rows.len() / 2;
	if rows.len() % 2 != 0 {
		return selector.get(&rows[mid]).as_();
	}
	let lower: f64 = selector.get(&rows[mid - 1]).as_();
	let upper: f64 = selector.get(&rows[mid]).as_();
	(lower + upper) / 2.0
}

/// The first row holding the smallest selected value, `None` if empty.
pub fn min<C, S>(container: &C, selector: S) -> Option<&C::Row>
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: TotalOrd,
{
	first_by(container.as_slice(), |candidate, best| selector.get(candidate).total_lt(selector.get(best)))
}

/// The first row holding the largest selected value, `None` if empty.
///
/// NaN is the largest float, so any NaN row wins over every number.
pub fn max<C, S>(container: &C, selector: S) -> Option<&C::Row>
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: TotalOrd,
{
	first_by(container.as_slice(), |candidate, best| selector.get(best).total_lt(selector.get(candidate)))
}

// Replaces the current best only on a strict improvement, so ties keep the
// earliest row.
fn first_by<R>(rows: &[R], mut better: impl FnMut(&R, &R) -> bool) -> Option<&R> {
	let mut rows = rows.iter();
	let mut best = rows.next()?;
	for candidate in rows {
		if better(candidate, best) {
			best = candidate;
		}
	}
	Some(best)
}

/// The selected field of every row, in row order.
pub fn extract<C, S>(container: &C, selector: S) -> Vec<S::Value>
where
	C: Container,
	S: Selector<C::Row>,
	S::Value: Clone,
{
	container.as_slice().iter().map(|row| selector.get(row).clone()).collect()
}

/// Sets the selected field of every row to `value`.
#[instrument(name = "rowframe::fill", level = "trace", skip_all, fields(rows = container.len()))]
pub fn fill<C, S>(container: &mut C, selector: S, value: S::Value)
where
	C: Container,
	S: SelectorMut<C::Row>,
	S::Value: Clone,
{
	for row in container.as_mut_slice() {
		*selector.get_mut(row) = value.clone();
	}
}

/// Sets the selected field of row `i` to the `i`-th element of `values`.
///
/// # Panics
///
/// Panics if `values` does not yield exactly one value per row; no row is
/// modified in that case.
pub fn set_values<C, S, I>(container: &mut C, selector: S, values: I)
where
	C: Container,
	S: SelectorMut<C::Row>,
	I: IntoIterator<Item = S::Value>,
	I::IntoIter: ExactSizeIterator,
{
	let values = values.into_iter();
	assert_eq!(values.len(), container.len(), "set_values requires one value per row");
	assign(container, &selector, values);
}

/// Like [`set_values`], reporting a length mismatch as an error.
pub fn try_set_values<C, S, I>(container: &mut C, selector: S, values: I) -> Result<()>
where
	C: Container,
	S: SelectorMut<C::Row>,
	I: IntoIterator<Item = S::Value>,
	I::IntoIter: ExactSizeIterator,
{
	let values = values.into_iter();
	if values.len() != container.len() {
		return Err(Error::LengthMismatch {
			expected: container.len(),
			actual: values.len(),
		});
	}
	assign(container, &selector, values);
	Ok(())
}

#[instrument(name = "rowframe::set_values", level = "trace", skip_all, fields(rows = container.len()))]
fn assign<C, S>(container: &mut C, selector: &S, values: impl Iterator<Item = S::Value>)
where
	C: Container,
	S: SelectorMut<C::Row>,
{
	for (row, value) in container.as_mut_slice().iter_mut().zip(values) {
		*selector.get_mut(row) = value;
	}
}

/// Folds `operands` with `op` for every row, left to right.
///
/// Each operand is a selector or a constant:
/// `inner_prod(&rows, |a, b| a * b, (price, qty, 2))` yields `price * qty * 2`
/// per row.
pub fn inner_prod<C, F, O>(container: &C, mut op: F, operands: O) -> Vec<O::Output>
where
	C: Container,
	O: Operands<C::Row>,
	F: FnMut(O::Output, O::Output) -> O::Output,
{
	container.as_slice().iter().map(|row| operands.fold(row, &mut op)).collect()
}

/// [`inner_prod`] with addition.
pub fn inner_sum<C, O>(container: &C, operands: O) -> Vec<O::Output>
where
	C: Container,
	O: Operands<C::Row>,
	O::Output: Add<Output = O::Output>,
{
	inner_prod(container, |l, r| l + r, operands)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Literal, field, sort::sort_asc};

	#[derive(Debug, Clone, PartialEq)]
	struct Line {
		price: f64,
		qty: i32,
		units: i16,
	}

	fn line(price: f64, qty: i32, units: i16) -> Line {
		Line {
			price,
			qty,
			units,
		}
	}

	fn lines() -> Vec<Line> {
		vec![line(2.5, 3, 100), line(1.0, 4, 200), line(4.0, 1, 300)]
	}

	#[test]
	fn test_sum() {
		assert_eq!(sum(&lines(), field!(Line, price)), 7.5);
		assert_eq!(sum(&lines(), field!(Line, qty)), 8);
		assert_eq!(sum(&Vec::<Line>::new(), field!(Line, qty)), 0);
	}

	#[test]
	fn test_sum_as_widens() {
		let rows = vec![line(0.0, 0, i16::MAX), line(0.0, 0, i16::MAX)];
		assert_eq!(sum_as::<i64, _, _>(&rows, field!(Line, units)), 2 * i16::MAX as i64);
		assert_eq!(sum_as::<f64, _, _>(&lines(), field!(Line, qty)), 8.0);
	}

	#[test]
	fn test_mean() {
		assert_eq!(mean(&lines(), field!(Line, units)), Some(200.0));
		assert_eq!(mean(&Vec::<Line>::new(), field!(Line, units)), None);
	}

	#[test]
	fn test_median_odd_and_even() {
		let mut rows = lines();
		sort_asc(&mut rows, field!(Line, price));
		assert_eq!(median(&rows, field!(Line, price)), 2.5);

		rows.push(line(10.0, 0, 0));
		assert_eq!(median(&rows, field!(Line, price)), 3.25);
	}

	#[test]
	fn test_median_integer_even_is_exact() {
		let rows = vec![line(0.0, 1, 0), line(0.0, 2, 0)];
		assert_eq!(median(&rows, field!(Line, qty)), 1.5);
	}

	#[test]
	#[should_panic(expected = "median of an empty container")]
	fn test_median_empty_panics() {
		median(&Vec::<Line>::new(), field!(Line, price));
	}

	#[test]
	fn test_try_median_empty() {
		assert_eq!(
			try_median(&Vec::<Line>::new(), field!(Line, price)),
			Err(Error::EmptyContainer {
				operation: "median"
			})
		);
		let rows = vec![line(0.0, 1, 0), line(0.0, 4, 0), line(0.0, 9, 0)];
		assert_eq!(try_median(&rows, field!(Line, qty)), Ok(4.0));
	}

	#[test]
	fn test_min_max_return_rows() {
		let rows = lines();
		assert_eq!(min(&rows, field!(Line, price)), Some(&rows[1]));
		assert_eq!(max(&rows, field!(Line, price)), Some(&rows[2]));
		assert_eq!(min(&Vec::<Line>::new(), field!(Line, price)), None);
	}

	#[test]
	fn test_min_max_ties_and_nan() {
		let rows = vec![line(1.0, 0, 0), line(f64::NAN, 1, 0), line(1.0, 2, 0), line(f64::NAN, 3, 0)];
		assert_eq!(min(&rows, field!(Line, price)).map(|l| l.qty), Some(0));
		assert_eq!(max(&rows, field!(Line, price)).map(|l| l.qty), Some(1));
	}

	#[test]
	fn test_extract() {
		assert_eq!(extract(&lines(), field!(Line, qty)), vec![3, 4, 1]);
	}

	#[test]
	fn test_fill() {
		let mut rows = lines();
		fill(&mut rows, field!(Line, qty), 9);
		assert_eq!(extract(&rows, field!(Line, qty)), vec![9, 9, 9]);
		assert_eq!(extract(&rows, field!(Line, price)), vec![2.5, 1.0, 4.0]);
	}

	#[test]
	fn test_set_values() {
		let mut rows = lines();
		set_values(&mut rows, field!(Line, units), vec![7, 8, 9]);
		assert_eq!(extract(&rows, field!(Line, units)), vec![7, 8, 9]);
	}

	#[test]
	#[should_panic(expected = "set_values requires one value per row")]
	fn test_set_values_length_mismatch_panics() {
		let mut rows = lines();
		set_values(&mut rows, field!(Line, units), vec![7, 8]);
	}

	#[test]
	fn test_try_set_values_mismatch_leaves_rows() {
		let mut rows = lines();
		let result = try_set_values(&mut rows, field!(Line, qty), [1, 2, 3, 4]);
		assert_eq!(
			result,
			Err(Error::LengthMismatch {
				expected: 3,
				actual: 4
			})
		);
		assert_eq!(rows, lines());
	}

	#[test]
	fn test_inner_sum() {
		let rows = vec![line(0.0, 2, 3)];
		assert_eq!(inner_sum(&rows, (field!(Line, qty), 3, 10)), vec![15]);
	}

	#[test]
	fn test_inner_prod_mixes_fields_and_literals() {
		let result = inner_prod(&lines(), |l, r| l * r, (field!(Line, price), Literal(2.0), 10.0));
		assert_eq!(result, vec![50.0, 20.0, 80.0]);
	}

	#[test]
	fn test_inner_prod_is_left_associative() {
		let rows = vec![line(8.0, 0, 0)];
		let result = inner_prod(&rows, |l, r| l / r, (field!(Line, price), 2.0, 4.0));
		assert_eq!(result, vec![1.0]);
	}
}
