// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct IntersectEnumerator<T: 'static> {
	input: LazyCursor<T>,
	other: Enumerable<T>,
	eq: Arc<dyn Fn(&T, &T) -> bool>,
	// matched elements are removed, so output multiplicity never
	// exceeds what the second sequence can answer for
	set: Option<Vec<T>>,
	done: bool,
}

impl<T: Clone + 'static> Enumerator<T> for IntersectEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		if self.set.is_none() {
			self.set = Some(self.other.to_vec()?);
		}
		while let Some(item) = self.input.next()? {
			let set = match &mut self.set {
				Some(set) => set,
				None => return Ok(None),
			};
			if let Some(found) = set.iter().position(|candidate| (self.eq)(candidate, &item)) {
				set.remove(found);
				return Ok(Some(item));
			}
		}
		self.done = true;
		self.input.close();
		Ok(None)
	}
}

impl<T: Clone + 'static> Enumerable<T> {
	/// Set intersection: the elements of `self` that the second
	/// sequence can still answer for, using the supplied comparer.
	pub fn intersect_by(&self, other: &Enumerable<T>, eq: impl Fn(&T, &T) -> bool + 'static) -> Enumerable<T> {
		let source = self.clone();
		let other = other.clone();
		let eq: Arc<dyn Fn(&T, &T) -> bool> = Arc::new(eq);
		Enumerable::from_factory(move || {
			Box::new(IntersectEnumerator {
				input: LazyCursor::new(source.clone()),
				other: other.clone(),
				eq: Arc::clone(&eq),
				set: None,
				done: false,
			})
		})
	}
}

impl<T: Clone + PartialEq + 'static> Enumerable<T> {
	pub fn intersect(&self, other: &Enumerable<T>) -> Enumerable<T> {
		self.intersect_by(other, |left, right| left == right)
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_intersect() {
		let both = Enumerable::from_vec(vec![1, 2, 3, 4]).intersect(&Enumerable::from_vec(vec![2, 4, 5]));

		assert_eq!(both.to_vec().unwrap(), vec![2, 4]);
	}

	#[test]
	fn test_intersect_consumes_matches() {
		// the single 1 in the second sequence answers only once
		let both = Enumerable::from_vec(vec![1, 1, 1]).intersect(&Enumerable::from_vec(vec![1]));

		assert_eq!(both.to_vec().unwrap(), vec![1]);
	}

	#[test]
	fn test_intersect_multiplicity_is_pairwise() {
		let both = Enumerable::from_vec(vec![1, 1]).intersect(&Enumerable::from_vec(vec![1, 1, 1]));

		assert_eq!(both.to_vec().unwrap(), vec![1, 1]);
	}
}
