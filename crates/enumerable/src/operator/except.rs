// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct ExceptEnumerator<T: 'static> {
	input: LazyCursor<T>,
	excluded: Enumerable<T>,
	eq: Arc<dyn Fn(&T, &T) -> bool>,
	// materialized on first pull; grows with every element emitted so
	// an already-answered value is never repeated
	set: Option<Vec<T>>,
	done: bool,
}

impl<T: Clone + 'static> Enumerator<T> for ExceptEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		if self.set.is_none() {
			self.set = Some(self.excluded.to_vec()?);
		}
		while let Some(item) = self.input.next()? {
			let set = match &mut self.set {
				Some(set) => set,
				None => return Ok(None),
			};
			if !set.iter().any(|excluded| (self.eq)(excluded, &item)) {
				set.push(item.clone());
				return Ok(Some(item));
			}
		}
		self.done = true;
		self.input.close();
		Ok(None)
	}
}

impl<T: Clone + 'static> Enumerable<T> {
	/// Set difference: the elements of `self` that do not occur in
	/// `other`, deduplicated, using the supplied comparer.
	pub fn except_by(&self, other: &Enumerable<T>, eq: impl Fn(&T, &T) -> bool + 'static) -> Enumerable<T> {
		let source = self.clone();
		let excluded = other.clone();
		let eq: Arc<dyn Fn(&T, &T) -> bool> = Arc::new(eq);
		Enumerable::from_factory(move || {
			Box::new(ExceptEnumerator {
				input: LazyCursor::new(source.clone()),
				excluded: excluded.clone(),
				eq: Arc::clone(&eq),
				set: None,
				done: false,
			})
		})
	}
}

impl<T: Clone + PartialEq + 'static> Enumerable<T> {
	pub fn except(&self, other: &Enumerable<T>) -> Enumerable<T> {
		self.except_by(other, |left, right| left == right)
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_except() {
		let diff = Enumerable::from_vec(vec![1, 2, 3, 4]).except(&Enumerable::from_vec(vec![2, 4]));

		assert_eq!(diff.to_vec().unwrap(), vec![1, 3]);
	}

	#[test]
	fn test_except_deduplicates_output() {
		// 1 is emitted once and then joins the exclusion set itself
		let diff = Enumerable::from_vec(vec![1, 1, 2, 1]).except(&Enumerable::from_vec(vec![2]));

		assert_eq!(diff.to_vec().unwrap(), vec![1]);
	}

	#[test]
	fn test_except_empty_second() {
		let diff = Enumerable::from_vec(vec![1, 2, 1]).except(&Enumerable::empty());

		assert_eq!(diff.to_vec().unwrap(), vec![1, 2]);
	}
}
