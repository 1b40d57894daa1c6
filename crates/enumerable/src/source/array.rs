// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator};

pub(crate) struct ArrayEnumerator<T> {
	items: Arc<Vec<T>>,
	index: usize,
}

impl<T: Clone> Enumerator<T> for ArrayEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.index >= self.items.len() {
			return Ok(None);
		}
		let item = self.items[self.index].clone();
		self.index += 1;
		Ok(Some(item))
	}
}

impl<T: Clone + 'static> Enumerable<T> {
	/// Sequence over a fixed, ordered collection. The collection is
	/// shared between restarts, never copied per cursor.
	pub fn from_vec(items: Vec<T>) -> Self {
		let items = Arc::new(items);
		Self::from_factory(move || {
			Box::new(ArrayEnumerator {
				items: Arc::clone(&items),
				index: 0,
			})
		})
	}

	pub fn from_slice(items: &[T]) -> Self {
		Self::from_vec(items.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_from_vec_restarts() {
		let source = Enumerable::from_vec(vec![1, 2, 3]);

		assert_eq!(source.to_vec().unwrap(), vec![1, 2, 3]);
		assert_eq!(source.to_vec().unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_exhaustion_is_idempotent() {
		let source = Enumerable::from_vec(vec![1]);
		let mut cursor = source.cursor();

		assert_eq!(cursor.next().unwrap(), Some(1));
		assert_eq!(cursor.next().unwrap(), None);
		assert_eq!(cursor.next().unwrap(), None);
	}
}
