// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Enumerable;

impl<T: Clone + 'static> Enumerable<T> {
	/// Set union: concatenation with duplicates (by the supplied
	/// comparer) removed, first occurrence wins.
	pub fn union_by(&self, other: &Enumerable<T>, eq: impl Fn(&T, &T) -> bool + 'static) -> Enumerable<T> {
		self.concat(other).distinct_by(eq)
	}
}

impl<T: Clone + PartialEq + 'static> Enumerable<T> {
	pub fn union(&self, other: &Enumerable<T>) -> Enumerable<T> {
		self.concat(other).distinct()
	}

	/// Union over any number of sequences.
	pub fn union_all(sources: Vec<Enumerable<T>>) -> Enumerable<T> {
		Enumerable::concat_all(sources).distinct()
	}
}
