// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::cmp::Ordering;

use num_traits::{ToPrimitive, Zero};

use crate::{Enumerable, Error};

impl<T: 'static> Enumerable<T> {
	/// Additive fold; an empty source yields the additive identity.
	pub fn sum(&self) -> crate::Result<T>
	where
		T: Zero,
	{
		self.fold(T::zero(), |acc, item| acc + item)
	}

	pub fn sum_of<K: Zero + 'static>(&self, select: impl Fn(T) -> K + 'static) -> crate::Result<K> {
		self.map(select).sum()
	}

	/// Smallest element under natural ordering; incomparable pairs
	/// count as equal, as in the sort subsystem.
	pub fn min(&self) -> crate::Result<T>
	where
		T: PartialOrd,
	{
		self.reduce(|best, item| {
			if item.partial_cmp(&best).unwrap_or(Ordering::Equal) == Ordering::Less {
				item
			} else {
				best
			}
		})
	}

	pub fn min_of<K: PartialOrd + 'static>(&self, select: impl Fn(T) -> K + 'static) -> crate::Result<K> {
		self.map(select).min()
	}

	pub fn max(&self) -> crate::Result<T>
	where
		T: PartialOrd,
	{
		self.reduce(|best, item| {
			if item.partial_cmp(&best).unwrap_or(Ordering::Equal) == Ordering::Greater {
				item
			} else {
				best
			}
		})
	}

	pub fn max_of<K: PartialOrd + 'static>(&self, select: impl Fn(T) -> K + 'static) -> crate::Result<K> {
		self.map(select).max()
	}

	/// Arithmetic mean over `f64`; values outside the `f64` range
	/// degrade to NaN. Fails with `EmptySequence` on an empty source.
	pub fn average(&self) -> crate::Result<f64>
	where
		T: ToPrimitive,
	{
		let (sum, count) = self.fold((0.0, 0usize), |(sum, count), item| {
			(sum + item.to_f64().unwrap_or(f64::NAN), count + 1)
		})?;
		if count == 0 {
			return Err(Error::EmptySequence);
		}
		Ok(sum / count as f64)
	}

	pub fn average_of<K: ToPrimitive + 'static>(&self, select: impl Fn(T) -> K + 'static) -> crate::Result<f64> {
		self.map(select).average()
	}
}

#[cfg(test)]
mod tests {
	use crate::{Enumerable, Error};

	#[test]
	fn test_sum() {
		assert_eq!(Enumerable::from_vec(vec![1, 2, 3]).sum().unwrap(), 6);
	}

	#[test]
	fn test_sum_empty_is_zero() {
		assert_eq!(Enumerable::<i32>::empty().sum().unwrap(), 0);
	}

	#[test]
	fn test_sum_of() {
		let total = Enumerable::from_vec(vec!["a", "bb", "ccc"]).sum_of(|s| s.len() as i64).unwrap();

		assert_eq!(total, 6);
	}

	#[test]
	fn test_min_max() {
		let source = Enumerable::from_vec(vec![3, 1, 2]);

		assert_eq!(source.min().unwrap(), 1);
		assert_eq!(source.max().unwrap(), 3);
	}

	#[test]
	fn test_min_max_empty() {
		assert!(matches!(Enumerable::<i32>::empty().min(), Err(Error::EmptySequence)));
		assert!(matches!(Enumerable::<i32>::empty().max(), Err(Error::EmptySequence)));
	}

	#[test]
	fn test_average() {
		assert_eq!(Enumerable::from_vec(vec![1, 2, 3, 4]).average().unwrap(), 2.5);
		assert!(matches!(Enumerable::<i32>::empty().average(), Err(Error::EmptySequence)));
	}

	#[test]
	fn test_average_of() {
		let avg = Enumerable::from_vec(vec!["a", "bbb"]).average_of(|s| s.len() as i64).unwrap();

		assert_eq!(avg, 2.0);
	}
}
