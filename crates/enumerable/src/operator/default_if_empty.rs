// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct DefaultIfEmptyEnumerator<T: 'static> {
	input: LazyCursor<T>,
	fallback: T,
	started: bool,
	done: bool,
}

impl<T: Clone + 'static> Enumerator<T> for DefaultIfEmptyEnumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		if !self.started {
			self.started = true;
			// peek: an immediately exhausted parent yields exactly
			// one fallback element
			return match self.input.next()? {
				Some(item) => Ok(Some(item)),
				None => {
					self.done = true;
					self.input.close();
					Ok(Some(self.fallback.clone()))
				}
			};
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

impl<T: Clone + 'static> Enumerable<T> {
	/// Passes the parent through unchanged, unless it is empty, in
	/// which case exactly one `fallback` element is yielded.
	pub fn default_if_empty(&self, fallback: T) -> Enumerable<T> {
		let source = self.clone();
		Enumerable::from_factory(move || {
			Box::new(DefaultIfEmptyEnumerator {
				input: LazyCursor::new(source.clone()),
				fallback: fallback.clone(),
				started: false,
				done: false,
			})
		})
	}
}
