// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct SkipEnumerator<T: 'static> {
	input: LazyCursor<T>,
	remaining: usize,
	done: bool,
}

impl<T: 'static> Enumerator<T> for SkipEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		while self.remaining > 0 {
			if self.input.next()?.is_none() {
				self.done = true;
				self.input.close();
				return Ok(None);
			}
			self.remaining -= 1;
		}
		match self.input.next()? {
			Some(item) => Ok(Some(item)),
			None => {
				self.done = true;
				self.input.close();
				Ok(None)
			}
		}
	}
}

pub(crate) struct SkipWhileEnumerator<T: 'static> {
	input: LazyCursor<T>,
	predicate: Arc<dyn Fn(&T) -> bool>,
	skipping: bool,
	done: bool,
}

impl<T: 'static> Enumerator<T> for SkipWhileEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		while let Some(item) = self.input.next()? {
			if self.skipping && (self.predicate)(&item) {
				continue;
			}
			self.skipping = false;
			return Ok(Some(item));
		}
		self.done = true;
		self.input.close();
		Ok(None)
	}
}

impl<T: 'static> Enumerable<T> {
	/// Discards the first `count` elements, then passes the rest
	/// through unchanged.
	pub fn skip(&self, count: usize) -> Enumerable<T> {
		let source = self.clone();
		Enumerable::from_factory(move || {
			Box::new(SkipEnumerator {
				input: LazyCursor::new(source.clone()),
				remaining: count,
				done: false,
			})
		})
	}

	/// Discards elements while `predicate` holds; once it fails, every
	/// later element passes through, matching or not.
	pub fn skip_while(&self, predicate: impl Fn(&T) -> bool + 'static) -> Enumerable<T> {
		let source = self.clone();
		let predicate: Arc<dyn Fn(&T) -> bool> = Arc::new(predicate);
		Enumerable::from_factory(move || {
			Box::new(SkipWhileEnumerator {
				input: LazyCursor::new(source.clone()),
				predicate: Arc::clone(&predicate),
				skipping: true,
				done: false,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_skip() {
		let tail = Enumerable::from_vec(vec![1, 2, 3, 4]).skip(2);

		assert_eq!(tail.to_vec().unwrap(), vec![3, 4]);
	}

	#[test]
	fn test_skip_past_end() {
		let none = Enumerable::from_vec(vec![1, 2]).skip(5);

		assert_eq!(none.to_vec().unwrap(), Vec::<i32>::new());
	}

	#[test]
	fn test_skip_while() {
		let tail = Enumerable::from_vec(vec![1, 2, 5, 1, 6]).skip_while(|x| *x < 5);

		assert_eq!(tail.to_vec().unwrap(), vec![5, 1, 6]);
	}
}
