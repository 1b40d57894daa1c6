// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Enumerable;

impl<T: 'static> Enumerable<T> {
	/// Chains any number of sequences: all elements of the first, in
	/// order, then all of the second, and so on. Built as a flat_map
	/// over an enumerable of enumerables.
	pub fn concat_all(sources: Vec<Enumerable<T>>) -> Enumerable<T> {
		Enumerable::from_vec(sources).flat_map(|source| source)
	}

	pub fn concat(&self, other: &Enumerable<T>) -> Enumerable<T> {
		Self::concat_all(vec![self.clone(), other.clone()])
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_concat() {
		let chained = Enumerable::from_vec(vec![1, 2]).concat(&Enumerable::from_vec(vec![3]));

		assert_eq!(chained.to_vec().unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_concat_all_preserves_order() {
		let chained = Enumerable::concat_all(vec![
			Enumerable::from_vec(vec![1]),
			Enumerable::empty(),
			Enumerable::from_vec(vec![2, 3]),
		]);

		assert_eq!(chained.to_vec().unwrap(), vec![1, 2, 3]);
	}
}
