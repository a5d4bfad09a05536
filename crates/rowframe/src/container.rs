// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use smallvec::SmallVec;

/// An ordered, indexable and resizable sequence of rows.
///
/// The engine never names a concrete container; any type that can expose its
/// rows as a contiguous slice and grow or shrink at the tail qualifies.
pub trait Container: Sized {
	type Row;

	fn with_capacity(capacity: usize) -> Self;

	fn as_slice(&self) -> &[Self::Row];

	fn as_mut_slice(&mut self) -> &mut [Self::Row];

	fn push(&mut self, row: Self::Row);

	fn truncate(&mut self, len: usize);

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn row(&self, index: usize) -> &Self::Row {
		&self.as_slice()[index]
	}

	fn row_mut(&mut self, index: usize) -> &mut Self::Row {
		&mut self.as_mut_slice()[index]
	}

	/// Builds a container of exactly `len` rows cloned from `source` at `indices`.
	fn gather(source: &[Self::Row], indices: &[usize]) -> Self
	where
		Self::Row: Clone,
	{
		let mut result = Self::with_capacity(indices.len());
		for &index in indices {
			result.push(source[index].clone());
		}
		result
	}
}

impl<R> Container for Vec<R> {
	type Row = R;

	fn with_capacity(capacity: usize) -> Self {
		Vec::with_capacity(capacity)
	}

	fn as_slice(&self) -> &[R] {
		self
	}

	fn as_mut_slice(&mut self) -> &mut [R] {
		self
	}

	fn push(&mut self, row: R) {
		Vec::push(self, row)
	}

	fn truncate(&mut self, len: usize) {
		Vec::truncate(self, len)
	}
}

impl<R, const N: usize> Container for SmallVec<[R; N]> {
	type Row = R;

	fn with_capacity(capacity: usize) -> Self {
		SmallVec::with_capacity(capacity)
	}

	fn as_slice(&self) -> &[R] {
		self
	}

	fn as_mut_slice(&mut self) -> &mut [R] {
		self
	}

	fn push(&mut self, row: R) {
		SmallVec::push(self, row)
	}

	fn truncate(&mut self, len: usize) {
		SmallVec::truncate(self, len)
	}
}

#[cfg(test)]
mod tests {
	use smallvec::{SmallVec, smallvec};

	use super::*;

	#[test]
	fn test_vec_gather() {
		let rows = vec![10, 20, 30, 40];
		let picked: Vec<i32> = Container::gather(&rows, &[3, 0, 3]);
		assert_eq!(picked, vec![40, 10, 40]);
	}

	#[test]
	fn test_smallvec_container() {
		let mut rows: SmallVec<[u8; 4]> = smallvec![1, 2, 3];
		Container::push(&mut rows, 4);
		Container::push(&mut rows, 5);
		assert_eq!(Container::len(&rows), 5);
		assert!(rows.spilled());

		*rows.row_mut(0) = 9;
		Container::truncate(&mut rows, 2);
		assert_eq!(Container::as_slice(&rows), &[9, 2]);
	}

	#[test]
	fn test_empty() {
		let rows: Vec<u8> = Container::with_capacity(8);
		assert!(Container::is_empty(&rows));
	}
}
