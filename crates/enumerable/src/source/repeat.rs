// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Enumerator};

pub(crate) struct RepeatEnumerator<T> {
	value: T,
	// None repeats indefinitely
	remaining: Option<usize>,
}

impl<T: Clone> Enumerator<T> for RepeatEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		match &mut self.remaining {
			Some(0) => Ok(None),
			Some(remaining) => {
				*remaining -= 1;
				Ok(Some(self.value.clone()))
			}
			None => Ok(Some(self.value.clone())),
		}
	}
}

impl<T: Clone + 'static> Enumerable<T> {
	/// Repeats `value` exactly `count` times.
	pub fn repeat(value: T, count: usize) -> Self {
		Self::from_factory(move || {
			Box::new(RepeatEnumerator {
				value: value.clone(),
				remaining: Some(count),
			})
		})
	}

	/// Repeats `value` indefinitely. Only meaningful under a
	/// truncating combinator such as `take`.
	pub fn repeat_forever(value: T) -> Self {
		Self::from_factory(move || {
			Box::new(RepeatEnumerator {
				value: value.clone(),
				remaining: None,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_repeat() {
		assert_eq!(Enumerable::repeat("x", 3).to_vec().unwrap(), vec!["x", "x", "x"]);
	}

	#[test]
	fn test_repeat_forever_under_take() {
		assert_eq!(Enumerable::repeat_forever(7).take(4).to_vec().unwrap(), vec![7, 7, 7, 7]);
	}
}
