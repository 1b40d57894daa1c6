// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct MapEnumerator<T: 'static, R: 'static> {
	input: LazyCursor<T>,
	project: Arc<dyn Fn(T) -> R>,
	done: bool,
}

impl<T: 'static, R: 'static> Enumerator<R> for MapEnumerator<T, R> {
	fn next(&mut self) -> crate::Result<Option<R>> {
		if self.done {
			return Ok(None);
		}
		match self.input.next()? {
			Some(item) => Ok(Some((self.project)(item))),
			None => {
				self.done = true;
				self.input.close();
				Ok(None)
			}
		}
	}
}

impl<T: 'static> Enumerable<T> {
	/// Projects every element through `project`. Purely lazy; one
	/// parent pull per own pull.
	pub fn map<R: 'static>(&self, project: impl Fn(T) -> R + 'static) -> Enumerable<R> {
		let source = self.clone();
		let project: Arc<dyn Fn(T) -> R> = Arc::new(project);
		Enumerable::from_factory(move || {
			Box::new(MapEnumerator {
				input: LazyCursor::new(source.clone()),
				project: Arc::clone(&project),
				done: false,
			})
		})
	}
}
