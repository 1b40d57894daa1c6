// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct ZipEnumerator<T: 'static, U: 'static, R: 'static> {
	left: LazyCursor<T>,
	right: LazyCursor<U>,
	combine: Arc<dyn Fn(T, U) -> R>,
	done: bool,
}

impl<T: 'static, U: 'static, R: 'static> Enumerator<R> for ZipEnumerator<T, U, R> {
	fn next(&mut self) -> crate::Result<Option<R>> {
		if self.done {
			return Ok(None);
		}
		let left = match self.left.next()? {
			Some(item) => item,
			None => return self.finish(),
		};
		match self.right.next()? {
			Some(right) => Ok(Some((self.combine)(left, right))),
			None => self.finish(),
		}
	}
}

impl<T: 'static, U: 'static, R: 'static> ZipEnumerator<T, U, R> {
	fn finish(&mut self) -> crate::Result<Option<R>> {
		self.done = true;
		self.left.close();
		self.right.close();
		Ok(None)
	}
}

impl<T: 'static> Enumerable<T> {
	/// Pairs both sequences positionally through `combine`, stopping
	/// as soon as either side is exhausted.
	pub fn zip<U: 'static, R: 'static>(
		&self,
		other: &Enumerable<U>,
		combine: impl Fn(T, U) -> R + 'static,
	) -> Enumerable<R> {
		let left = self.clone();
		let right = other.clone();
		let combine: Arc<dyn Fn(T, U) -> R> = Arc::new(combine);
		Enumerable::from_factory(move || {
			Box::new(ZipEnumerator {
				left: LazyCursor::new(left.clone()),
				right: LazyCursor::new(right.clone()),
				combine: Arc::clone(&combine),
				done: false,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::Enumerable;

	#[test]
	fn test_zip() {
		let sums = Enumerable::from_vec(vec![1, 2, 3])
			.zip(&Enumerable::from_vec(vec![10, 20, 30]), |a, b| a + b);

		assert_eq!(sums.to_vec().unwrap(), vec![11, 22, 33]);
	}

	#[test]
	fn test_zip_shorter_side_wins() {
		let pairs = Enumerable::from_vec(vec![1, 2, 3, 4])
			.zip(&Enumerable::from_vec(vec!["a", "b"]), |n, s| (n, s));

		assert_eq!(pairs.to_vec().unwrap(), vec![(1, "a"), (2, "b")]);
	}
}
