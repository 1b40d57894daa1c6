// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Enumerator};

pub(crate) struct EmptyEnumerator;

impl<T> Enumerator<T> for EmptyEnumerator {
	fn next(&mut self) -> crate::Result<Option<T>> {
		Ok(None)
	}
}

impl<T: 'static> Enumerable<T> {
	pub fn empty() -> Self {
		Self::from_factory(|| Box::new(EmptyEnumerator))
	}
}

impl<T: Clone + 'static> Enumerable<T> {
	/// Single-element sequence.
	pub fn once(value: T) -> Self {
		Self::repeat(value, 1)
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_empty() {
		assert_eq!(Enumerable::<i32>::empty().to_vec().unwrap(), Vec::<i32>::new());
	}

	#[test]
	fn test_once() {
		assert_eq!(Enumerable::once(42).to_vec().unwrap(), vec![42]);
	}
}
