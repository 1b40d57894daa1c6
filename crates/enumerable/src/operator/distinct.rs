// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

// Membership is a linear scan because the comparer is an arbitrary
// closure, not a hash function.
pub(crate) struct DistinctEnumerator<T: 'static> {
	input: LazyCursor<T>,
	eq: Arc<dyn Fn(&T, &T) -> bool>,
	seen: Vec<T>,
	done: bool,
}

impl<T: Clone + 'static> Enumerator<T> for DistinctEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		while let Some(item) = self.input.next()? {
			if !self.seen.iter().any(|seen| (self.eq)(seen, &item)) {
				self.seen.push(item.clone());
				return Ok(Some(item));
			}
		}
		self.done = true;
		self.input.close();
		Ok(None)
	}
}

impl<T: Clone + 'static> Enumerable<T> {
	/// First occurrence of every element, in encounter order, using
	/// the supplied equality comparer.
	pub fn distinct_by(&self, eq: impl Fn(&T, &T) -> bool + 'static) -> Enumerable<T> {
		let source = self.clone();
		let eq: Arc<dyn Fn(&T, &T) -> bool> = Arc::new(eq);
		Enumerable::from_factory(move || {
			Box::new(DistinctEnumerator {
				input: LazyCursor::new(source.clone()),
				eq: Arc::clone(&eq),
				seen: Vec::new(),
				done: false,
			})
		})
	}
}

impl<T: Clone + PartialEq + 'static> Enumerable<T> {
	pub fn distinct(&self) -> Enumerable<T> {
		self.distinct_by(|left, right| left == right)
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_distinct() {
		let unique = Enumerable::from_vec(vec![1, 2, 2, 3]).distinct();

		assert_eq!(unique.to_vec().unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_distinct_keeps_first_occurrence_order() {
		let unique = Enumerable::from_vec(vec![3, 1, 3, 2, 1]).distinct();

		assert_eq!(unique.to_vec().unwrap(), vec![3, 1, 2]);
	}

	#[test]
	fn test_distinct_by_custom_comparer() {
		let unique = Enumerable::from_vec(vec!["a", "A", "b"]).distinct_by(|l, r| l.eq_ignore_ascii_case(r));

		assert_eq!(unique.to_vec().unwrap(), vec!["a", "b"]);
	}
}
