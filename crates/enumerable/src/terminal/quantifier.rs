// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Enumerable;

impl<T: 'static> Enumerable<T> {
	/// Whether the source has at least one element. Short-circuits
	/// after the first pull.
	pub fn any(&self) -> crate::Result<bool> {
		Ok(self.cursor().next()?.is_some())
	}

	pub fn any_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<bool> {
		self.filter(predicate).any()
	}

	/// Whether every element satisfies `predicate`. Short-circuits on
	/// the first failure.
	pub fn all(&self, predicate: impl Fn(&T) -> bool) -> crate::Result<bool> {
		let mut cursor = self.cursor();
		while let Some(item) = cursor.next()? {
			if !predicate(&item) {
				return Ok(false);
			}
		}
		Ok(true)
	}

	pub fn contains_by(&self, value: &T, eq: impl Fn(&T, &T) -> bool) -> crate::Result<bool> {
		let mut cursor = self.cursor();
		while let Some(item) = cursor.next()? {
			if eq(&item, value) {
				return Ok(true);
			}
		}
		Ok(false)
	}

	/// Positional equality with the supplied comparer; false on the
	/// first mismatch or length difference.
	pub fn sequence_equal_by(&self, other: &Enumerable<T>, eq: impl Fn(&T, &T) -> bool) -> crate::Result<bool> {
		let mut left = self.cursor();
		let mut right = other.cursor();
		loop {
			match (left.next()?, right.next()?) {
				(None, None) => return Ok(true),
				(Some(a), Some(b)) if eq(&a, &b) => continue,
				_ => return Ok(false),
			}
		}
	}
}

impl<T: PartialEq + 'static> Enumerable<T> {
	pub fn contains(&self, value: &T) -> crate::Result<bool> {
		self.contains_by(value, |left, right| left == right)
	}

	pub fn sequence_equal(&self, other: &Enumerable<T>) -> crate::Result<bool> {
		self.sequence_equal_by(other, |left, right| left == right)
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_any() {
		assert!(Enumerable::from_vec(vec![1]).any().unwrap());
		assert!(!Enumerable::<i32>::empty().any().unwrap());
	}

	#[test]
	fn test_any_by() {
		let source = Enumerable::from_vec(vec![1, 3, 4]);

		assert!(source.any_by(|x| x % 2 == 0).unwrap());
		assert!(!source.any_by(|x| *x > 9).unwrap());
	}

	#[test]
	fn test_all() {
		let source = Enumerable::from_vec(vec![2, 4, 6]);

		assert!(source.all(|x| x % 2 == 0).unwrap());
		assert!(!source.all(|x| *x < 6).unwrap());
		assert!(Enumerable::<i32>::empty().all(|_| false).unwrap());
	}

	#[test]
	fn test_all_short_circuits() {
		// an infinite source terminates because the first element fails
		assert!(!Enumerable::repeat_forever(1).all(|x| *x == 0).unwrap());
	}

	#[test]
	fn test_contains() {
		let source = Enumerable::from_vec(vec![1, 2, 3]);

		assert!(source.contains(&2).unwrap());
		assert!(!source.contains(&7).unwrap());
	}

	#[test]
	fn test_sequence_equal() {
		let left = Enumerable::from_vec(vec![1, 2, 3]);

		assert!(left.sequence_equal(&Enumerable::from_vec(vec![1, 2, 3])).unwrap());
		assert!(!left.sequence_equal(&Enumerable::from_vec(vec![1, 2])).unwrap());
		assert!(!left.sequence_equal(&Enumerable::from_vec(vec![1, 2, 4])).unwrap());
		assert!(!left.sequence_equal(&Enumerable::from_vec(vec![1, 2, 3, 4])).unwrap());
	}
}
