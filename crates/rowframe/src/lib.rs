// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Relational algebra over row collections.
//!
//! Rows are plain structs held in any [`Container`]. Fields are addressed through
//! typed [`Field`] selectors built with [`field!`], so grouping, sorting and
//! aggregation are checked at compile time instead of resolving column names.
//!
//! Every ordering operation shares one comparator, [`TotalOrd`], under which NaN
//! equals NaN and sorts above every other value.

pub use aggregate::{extract, fill, inner_prod, inner_sum, max, mean, median, min, set_values, sum, sum_as, try_median, try_set_values};
pub use compare::{Descending, Direction, Keys, OrderedKey, TotalOrd};
pub use container::Container;
pub use error::Error;
pub use group::{GroupByView, Groups, group_by, group_by_view, into_groups, n_groups};
pub use select::{concat, concat_owned, head, inplace_head, subset, which};
pub use selector::{Field, Literal, Operand, Operands, Selector, SelectorMut, get_val};
pub use sort::{SortOptions, Stability, is_sorted_asc, is_sorted_des, sort_asc, sort_by_keys, sort_des};
pub use unique::unique;

mod aggregate;
mod compare;
mod container;
mod error;
mod group;
mod select;
mod selector;
mod sort;
mod unique;

pub type Result<T> = std::result::Result<T, Error>;
