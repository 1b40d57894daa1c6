// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct TakeEnumerator<T: 'static> {
	input: LazyCursor<T>,
	remaining: usize,
	done: bool,
}

impl<T: 'static> Enumerator<T> for TakeEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		// remaining == 0 returns before touching the parent, so the
		// parent is never advanced past the requested count and
		// take(0) never even opens it
		if self.done || self.remaining == 0 {
			return Ok(None);
		}
		match self.input.next()? {
			Some(item) => {
				self.remaining -= 1;
				if self.remaining == 0 {
					self.input.close();
				}
				Ok(Some(item))
			}
			None => {
				self.done = true;
				self.input.close();
				Ok(None)
			}
		}
	}
}

pub(crate) struct TakeWhileEnumerator<T: 'static> {
	input: LazyCursor<T>,
	predicate: Arc<dyn Fn(&T) -> bool>,
	done: bool,
}

impl<T: 'static> Enumerator<T> for TakeWhileEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		match self.input.next()? {
			Some(item) if (self.predicate)(&item) => Ok(Some(item)),
			_ => {
				self.done = true;
				self.input.close();
				Ok(None)
			}
		}
	}
}

impl<T: 'static> Enumerable<T> {
	/// Yields at most `count` elements, then stops pulling from the
	/// parent entirely.
	pub fn take(&self, count: usize) -> Enumerable<T> {
		let source = self.clone();
		Enumerable::from_factory(move || {
			Box::new(TakeEnumerator {
				input: LazyCursor::new(source.clone()),
				remaining: count,
				done: false,
			})
		})
	}

	/// Yields elements while `predicate` holds and stops at the first
	/// failure, which is consumed but not yielded.
	pub fn take_while(&self, predicate: impl Fn(&T) -> bool + 'static) -> Enumerable<T> {
		let source = self.clone();
		let predicate: Arc<dyn Fn(&T) -> bool> = Arc::new(predicate);
		Enumerable::from_factory(move || {
			Box::new(TakeWhileEnumerator {
				input: LazyCursor::new(source.clone()),
				predicate: Arc::clone(&predicate),
				done: false,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_take() {
		let head = Enumerable::from_vec(vec![1, 2, 3]).take(2);

		assert_eq!(head.to_vec().unwrap(), vec![1, 2]);
	}

	#[test]
	fn test_take_more_than_available() {
		let all = Enumerable::from_vec(vec![1, 2]).take(10);

		assert_eq!(all.to_vec().unwrap(), vec![1, 2]);
	}

	#[test]
	fn test_take_zero() {
		let none = Enumerable::from_vec(vec![1, 2]).take(0);

		assert_eq!(none.to_vec().unwrap(), Vec::<i32>::new());
	}

	#[test]
	fn test_take_while() {
		let head = Enumerable::from_vec(vec![1, 2, 9, 1]).take_while(|x| *x < 5);

		assert_eq!(head.to_vec().unwrap(), vec![1, 2]);
	}
}
