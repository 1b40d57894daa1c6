// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct FilterEnumerator<T: 'static> {
	input: LazyCursor<T>,
	predicate: Arc<dyn Fn(&T) -> bool>,
	done: bool,
}

impl<T: 'static> Enumerator<T> for FilterEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		while let Some(item) = self.input.next()? {
			if (self.predicate)(&item) {
				return Ok(Some(item));
			}
		}
		self.done = true;
		self.input.close();
		Ok(None)
	}
}

impl<T: 'static> Enumerable<T> {
	/// Keeps the elements satisfying `predicate`, in order.
	pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Enumerable<T> {
		let source = self.clone();
		let predicate: Arc<dyn Fn(&T) -> bool> = Arc::new(predicate);
		Enumerable::from_factory(move || {
			Box::new(FilterEnumerator {
				input: LazyCursor::new(source.clone()),
				predicate: Arc::clone(&predicate),
				done: false,
			})
		})
	}
}
