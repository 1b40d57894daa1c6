// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Enumerator};

pub(crate) struct ReverseEnumerator<T: 'static> {
	source: Enumerable<T>,
	// buffered on first pull, then drained back to front
	buffered: Option<Vec<T>>,
}

impl<T: 'static> Enumerator<T> for ReverseEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.buffered.is_none() {
			self.buffered = Some(self.source.to_vec()?);
		}
		match &mut self.buffered {
			Some(buffered) => Ok(buffered.pop()),
			None => Ok(None),
		}
	}
}

impl<T: 'static> Enumerable<T> {
	/// Yields the parent's elements in reverse order. Buffers the
	/// whole parent on the first pull.
	pub fn reverse(&self) -> Enumerable<T> {
		let source = self.clone();
		Enumerable::from_factory(move || {
			Box::new(ReverseEnumerator {
				source: source.clone(),
				buffered: None,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_reverse() {
		let reversed = Enumerable::from_vec(vec![1, 2, 3]).reverse();

		assert_eq!(reversed.to_vec().unwrap(), vec![3, 2, 1]);
	}

	#[test]
	fn test_reverse_empty() {
		assert_eq!(Enumerable::<i32>::empty().reverse().to_vec().unwrap(), Vec::<i32>::new());
	}
}
