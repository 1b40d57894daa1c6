// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Error};

impl<T: 'static> Enumerable<T> {
	/// Aggregation without a seed: the first element starts the
	/// accumulator. Fails with `EmptySequence` on an empty source.
	pub fn reduce(&self, fold: impl Fn(T, T) -> T) -> crate::Result<T> {
		let mut cursor = self.cursor();
		let mut acc = match cursor.next()? {
			Some(first) => first,
			None => return Err(Error::EmptySequence),
		};
		while let Some(item) = cursor.next()? {
			acc = fold(acc, item);
		}
		Ok(acc)
	}

	/// Seeded aggregation; an empty source returns the seed.
	pub fn fold<A>(&self, seed: A, fold: impl Fn(A, T) -> A) -> crate::Result<A> {
		let mut cursor = self.cursor();
		let mut acc = seed;
		while let Some(item) = cursor.next()? {
			acc = fold(acc, item);
		}
		Ok(acc)
	}

	/// Seeded aggregation with a final projection of the accumulator.
	pub fn fold_map<A, R>(&self, seed: A, fold: impl Fn(A, T) -> A, finish: impl FnOnce(A) -> R) -> crate::Result<R> {
		Ok(finish(self.fold(seed, fold)?))
	}
}
