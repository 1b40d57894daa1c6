// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Enumerator};

pub(crate) struct RangeEnumerator {
	next: i64,
	remaining: usize,
}

impl Enumerator<i64> for RangeEnumerator {
	fn next(&mut self) -> crate::Result<Option<i64>> {
		if self.remaining == 0 {
			return Ok(None);
		}
		let value = self.next;
		self.next += 1;
		self.remaining -= 1;
		Ok(Some(value))
	}
}

impl Enumerable<i64> {
	/// Half-open numeric range: `count` consecutive values starting
	/// at `start`.
	pub fn range(start: i64, count: usize) -> Self {
		Self::from_factory(move || {
			Box::new(RangeEnumerator {
				next: start,
				remaining: count,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_range() {
		assert_eq!(Enumerable::range(5, 3).to_vec().unwrap(), vec![5, 6, 7]);
	}

	#[test]
	fn test_range_empty() {
		assert_eq!(Enumerable::range(5, 0).to_vec().unwrap(), Vec::<i64>::new());
	}

	#[test]
	fn test_range_endpoints() {
		let values = Enumerable::range(-2, 100).to_vec().unwrap();

		assert_eq!(values.len(), 100);
		assert_eq!(values[0], -2);
		assert_eq!(values[99], 97);
	}
}
