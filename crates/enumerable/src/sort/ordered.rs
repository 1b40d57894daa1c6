// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{cmp::Ordering, sync::Arc};

use tracing::instrument;

use crate::{
	Enumerable, Enumerator,
	sort::sorter::{EnumerableSorter, KeyedCriterion, SortCriterion},
};

// One node of the criterion chain. The chain grows from the primary
// criterion (root, no parent) to the most specific one; each then_by
// call pushes a node whose parent is the node it was called on.
struct Criterion<T: 'static> {
	make: Box<dyn Fn() -> Box<dyn SortCriterion<T>>>,
	parent: Option<Arc<Criterion<T>>>,
}

impl<T: 'static> Criterion<T> {
	fn new<K: 'static>(
		key_of: impl Fn(&T) -> K + 'static,
		comparer: impl Fn(&K, &K) -> Ordering + 'static,
		descending: bool,
		parent: Option<Arc<Criterion<T>>>,
	) -> Arc<Self> {
		let key_of: Arc<dyn Fn(&T) -> K> = Arc::new(key_of);
		let comparer: Arc<dyn Fn(&K, &K) -> Ordering> = Arc::new(comparer);
		Arc::new(Self {
			make: Box::new(move || {
				Box::new(KeyedCriterion::new(Arc::clone(&key_of), Arc::clone(&comparer), descending))
			}),
			parent,
		})
	}
}

/// A sequence with a total order defined by a chain of sort criteria.
///
/// Ordering is strictly eager per enumeration: every cursor buffers
/// the source, precomputes keys and re-sorts from scratch, so a
/// re-enumeration observes the source's current contents.
pub struct OrderedEnumerable<T: 'static> {
	source: Enumerable<T>,
	chain: Arc<Criterion<T>>,
}

impl<T: 'static> Clone for OrderedEnumerable<T> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			chain: Arc::clone(&self.chain),
		}
	}
}

fn natural_order<K: PartialOrd>(left: &K, right: &K) -> Ordering {
	left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

impl<T: 'static> Enumerable<T> {
	/// Primary ascending sort criterion under natural key ordering.
	pub fn order_by<K: PartialOrd + 'static>(&self, key_of: impl Fn(&T) -> K + 'static) -> OrderedEnumerable<T> {
		self.order_by_with(key_of, natural_order)
	}

	pub fn order_by_desc<K: PartialOrd + 'static>(
		&self,
		key_of: impl Fn(&T) -> K + 'static,
	) -> OrderedEnumerable<T> {
		OrderedEnumerable {
			source: self.clone(),
			chain: Criterion::new(key_of, natural_order, true, None),
		}
	}

	/// Primary sort criterion with an explicit comparer.
	pub fn order_by_with<K: 'static>(
		&self,
		key_of: impl Fn(&T) -> K + 'static,
		comparer: impl Fn(&K, &K) -> Ordering + 'static,
	) -> OrderedEnumerable<T> {
		OrderedEnumerable {
			source: self.clone(),
			chain: Criterion::new(key_of, comparer, false, None),
		}
	}
}

impl<T: 'static> OrderedEnumerable<T> {
	/// Subordinate ascending criterion, consulted only when every
	/// earlier criterion ties.
	pub fn then_by<K: PartialOrd + 'static>(&self, key_of: impl Fn(&T) -> K + 'static) -> OrderedEnumerable<T> {
		self.then_by_with(key_of, natural_order)
	}

	pub fn then_by_desc<K: PartialOrd + 'static>(
		&self,
		key_of: impl Fn(&T) -> K + 'static,
	) -> OrderedEnumerable<T> {
		OrderedEnumerable {
			source: self.source.clone(),
			chain: Criterion::new(key_of, natural_order, true, Some(Arc::clone(&self.chain))),
		}
	}

	pub fn then_by_with<K: 'static>(
		&self,
		key_of: impl Fn(&T) -> K + 'static,
		comparer: impl Fn(&K, &K) -> Ordering + 'static,
	) -> OrderedEnumerable<T> {
		OrderedEnumerable {
			source: self.source.clone(),
			chain: Criterion::new(key_of, comparer, false, Some(Arc::clone(&self.chain))),
		}
	}
}

impl<T: Clone + 'static> OrderedEnumerable<T> {
	/// Re-enters the combinator world: the result is an ordinary
	/// deferred sequence that sorts on every enumeration.
	pub fn as_enumerable(&self) -> Enumerable<T> {
		let source = self.source.clone();
		let chain = Arc::clone(&self.chain);
		Enumerable::from_factory(move || {
			Box::new(SortEnumerator {
				source: source.clone(),
				chain: Arc::clone(&chain),
				sorted: None,
			})
		})
	}

	pub fn to_vec(&self) -> crate::Result<Vec<T>> {
		self.as_enumerable().to_vec()
	}
}

struct SortEnumerator<T: 'static> {
	source: Enumerable<T>,
	chain: Arc<Criterion<T>>,
	// buffer, permutation and walk position, filled on first pull
	sorted: Option<(Vec<T>, Vec<usize>, usize)>,
}

impl<T: Clone + 'static> SortEnumerator<T> {
	#[instrument(name = "sort::materialize", level = "trace", skip_all)]
	fn materialize(&self) -> crate::Result<(Vec<T>, Vec<usize>)> {
		let buffer = self.source.to_vec()?;

		// walk leaf to root so the assembled sorter compares the
		// primary criterion first
		let mut criteria = Vec::new();
		let mut node = Some(&self.chain);
		while let Some(criterion) = node {
			criteria.push((criterion.make)());
			node = criterion.parent.as_ref();
		}
		criteria.reverse();

		let permutation = EnumerableSorter::new(criteria).sort(&buffer);
		Ok((buffer, permutation))
	}
}

impl<T: Clone + 'static> Enumerator<T> for SortEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.sorted.is_none() {
			let (buffer, permutation) = self.materialize()?;
			self.sorted = Some((buffer, permutation, 0));
		}
		match &mut self.sorted {
			Some((buffer, permutation, position)) => {
				if *position >= permutation.len() {
					return Ok(None);
				}
				let item = buffer[permutation[*position]].clone();
				*position += 1;
				Ok(Some(item))
			}
			None => Ok(None),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use crate::Enumerable;

	#[test]
	fn test_order_by() {
		let sorted = Enumerable::from_vec(vec![3, 1, 2]).order_by(|x| *x);

		assert_eq!(sorted.to_vec().unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_order_by_desc() {
		let sorted = Enumerable::from_vec(vec![3, 1, 2]).order_by_desc(|x| *x);

		assert_eq!(sorted.to_vec().unwrap(), vec![3, 2, 1]);
	}

	#[test]
	fn test_then_by() {
		let sorted = Enumerable::from_vec(vec![(2, 'b'), (1, 'z'), (2, 'a'), (1, 'a')])
			.order_by(|pair| pair.0)
			.then_by(|pair| pair.1);

		assert_eq!(sorted.to_vec().unwrap(), vec![(1, 'a'), (1, 'z'), (2, 'a'), (2, 'b')]);
	}

	#[test]
	fn test_then_by_desc() {
		let sorted = Enumerable::from_vec(vec![(1, 2), (2, 1), (1, 9), (2, 4)])
			.order_by(|pair| pair.0)
			.then_by_desc(|pair| pair.1);

		assert_eq!(sorted.to_vec().unwrap(), vec![(1, 9), (1, 2), (2, 4), (2, 1)]);
	}

	#[test]
	fn test_order_by_with_custom_comparer() {
		let sorted = Enumerable::from_vec(vec!["bb", "a", "ccc"])
			.order_by_with(|s| s.len(), |l: &usize, r: &usize| if l < r { Ordering::Greater } else if l > r { Ordering::Less } else { Ordering::Equal });

		assert_eq!(sorted.to_vec().unwrap(), vec!["ccc", "bb", "a"]);
	}

	#[test]
	fn test_sort_is_stable() {
		let sorted = Enumerable::from_vec(vec![(1, "first"), (0, "x"), (1, "second"), (1, "third")])
			.order_by(|pair| pair.0);

		assert_eq!(
			sorted.to_vec().unwrap(),
			vec![(0, "x"), (1, "first"), (1, "second"), (1, "third")]
		);
	}

	#[test]
	fn test_reenumeration_resorts() {
		let sorted = Enumerable::from_vec(vec![2, 1]).order_by(|x| *x).as_enumerable();

		assert_eq!(sorted.to_vec().unwrap(), vec![1, 2]);
		assert_eq!(sorted.to_vec().unwrap(), vec![1, 2]);
	}

	#[test]
	fn test_ordered_feeds_combinators() {
		let top = Enumerable::from_vec(vec![5, 3, 9, 1])
			.order_by_desc(|x| *x)
			.as_enumerable()
			.take(2);

		assert_eq!(top.to_vec().unwrap(), vec![9, 5]);
	}
}
