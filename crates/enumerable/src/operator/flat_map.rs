// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::{BoxEnumerator, Enumerable, Enumerator, enumerator::LazyCursor};

pub(crate) struct FlatMapEnumerator<T: 'static, R: 'static> {
	outer: LazyCursor<T>,
	project: Arc<dyn Fn(T) -> Enumerable<R>>,
	inner: Option<BoxEnumerator<R>>,
	done: bool,
}

impl<T: 'static, R: 'static> Enumerator<R> for FlatMapEnumerator<T, R> {
	fn next(&mut self) -> crate::Result<Option<R>> {
		if self.done {
			return Ok(None);
		}
		loop {
			if let Some(inner) = &mut self.inner {
				if let Some(item) = inner.next()? {
					return Ok(Some(item));
				}
				// release the exhausted inner cursor before
				// pulling the next outer element
				self.inner = None;
			}
			match self.outer.next()? {
				Some(outer) => self.inner = Some((self.project)(outer).cursor()),
				None => {
					self.done = true;
					self.outer.close();
					return Ok(None);
				}
			}
		}
	}
}

impl<T: 'static> Enumerable<T> {
	/// Two-level iteration: projects each element to a sequence and
	/// yields the inner sequences back to back.
	pub fn flat_map<R: 'static>(&self, project: impl Fn(T) -> Enumerable<R> + 'static) -> Enumerable<R> {
		let source = self.clone();
		let project: Arc<dyn Fn(T) -> Enumerable<R>> = Arc::new(project);
		Enumerable::from_factory(move || {
			Box::new(FlatMapEnumerator {
				outer: LazyCursor::new(source.clone()),
				project: Arc::clone(&project),
				inner: None,
				done: false,
			})
		})
	}
}
