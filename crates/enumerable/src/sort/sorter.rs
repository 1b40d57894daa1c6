// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{cmp::Ordering, sync::Arc};

/// One sort criterion with its per-enumeration key column.
///
/// Keys are computed once per buffered element, never per comparison;
/// selector cost stays O(n) per criterion regardless of how many
/// comparisons the sort performs.
pub(crate) trait SortCriterion<T> {
	fn compute_keys(&mut self, items: &[T]);
	fn compare(&self, left: usize, right: usize) -> Ordering;
}

pub(crate) struct KeyedCriterion<T: 'static, K: 'static> {
	key_of: Arc<dyn Fn(&T) -> K>,
	comparer: Arc<dyn Fn(&K, &K) -> Ordering>,
	descending: bool,
	keys: Vec<K>,
}

impl<T: 'static, K: 'static> KeyedCriterion<T, K> {
	pub(crate) fn new(
		key_of: Arc<dyn Fn(&T) -> K>,
		comparer: Arc<dyn Fn(&K, &K) -> Ordering>,
		descending: bool,
	) -> Self {
		Self {
			key_of,
			comparer,
			descending,
			keys: Vec::new(),
		}
	}
}

impl<T: 'static, K: 'static> SortCriterion<T> for KeyedCriterion<T, K> {
	fn compute_keys(&mut self, items: &[T]) {
		self.keys = items.iter().map(|item| (self.key_of)(item)).collect();
	}

	fn compare(&self, left: usize, right: usize) -> Ordering {
		let ord = (self.comparer)(&self.keys[left], &self.keys[right]);
		if self.descending {
			ord.reverse()
		} else {
			ord
		}
	}
}

/// Ephemeral sorter assembled per enumeration from the criterion
/// chain, primary criterion first. Produces the permutation that the
/// sorted cursor walks.
pub(crate) struct EnumerableSorter<T: 'static> {
	criteria: Vec<Box<dyn SortCriterion<T>>>,
}

impl<T: 'static> EnumerableSorter<T> {
	pub(crate) fn new(criteria: Vec<Box<dyn SortCriterion<T>>>) -> Self {
		Self {
			criteria,
		}
	}

	pub(crate) fn sort(mut self, items: &[T]) -> Vec<usize> {
		for criterion in &mut self.criteria {
			criterion.compute_keys(items);
		}
		let mut map: Vec<usize> = (0..items.len()).collect();
		if map.len() > 1 {
			self.quick_sort(&mut map, 0, (items.len() - 1) as isize);
		}
		map
	}

	// Full ties fall back to the original index: two elements compare
	// equal only when every explicit criterion agrees, and input order
	// then decides. That is what makes the overall sort stable even
	// though the quicksort below is not.
	fn compare(&self, left: usize, right: usize) -> Ordering {
		for criterion in &self.criteria {
			match criterion.compare(left, right) {
				Ordering::Equal => continue,
				ord => return ord,
			}
		}
		left.cmp(&right)
	}

	// Middle-element pivot; recurses into the smaller partition and
	// loops on the larger one to bound recursion depth.
	fn quick_sort(&self, map: &mut [usize], mut left: isize, mut right: isize) {
		loop {
			let mut i = left;
			let mut j = right;
			let pivot = map[(i + ((j - i) >> 1)) as usize];
			loop {
				while (i as usize) < map.len() && self.compare(map[i as usize], pivot) == Ordering::Less {
					i += 1;
				}
				while j >= 0 && self.compare(pivot, map[j as usize]) == Ordering::Less {
					j -= 1;
				}
				if i > j {
					break;
				}
				if i < j {
					map.swap(i as usize, j as usize);
				}
				i += 1;
				j -= 1;
				if i > j {
					break;
				}
			}
			if j - left <= right - i {
				if left < j {
					self.quick_sort(map, left, j);
				}
				left = i;
			} else {
				if i < right {
					self.quick_sort(map, i, right);
				}
				right = j;
			}
			if left >= right {
				break;
			}
		}
	}
}
