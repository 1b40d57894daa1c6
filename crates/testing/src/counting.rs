// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use enumerable::{BoxEnumerator, Enumerable, Enumerator};

/// Wraps a source and counts cursor opens and advances across all
/// enumerations, so tests can assert how often a pipeline actually
/// pulled.
pub struct CountingSource<T: 'static> {
	source: Enumerable<T>,
	opens: Arc<AtomicUsize>,
	advances: Arc<AtomicUsize>,
}

impl<T: 'static> CountingSource<T> {
	pub fn new(source: Enumerable<T>) -> Self {
		Self {
			source,
			opens: Arc::new(AtomicUsize::new(0)),
			advances: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn enumerable(&self) -> Enumerable<T> {
		let source = self.source.clone();
		let opens = Arc::clone(&self.opens);
		let advances = Arc::clone(&self.advances);
		Enumerable::from_factory(move || {
			opens.fetch_add(1, Ordering::Relaxed);
			Box::new(CountingEnumerator {
				inner: source.cursor(),
				advances: Arc::clone(&advances),
			})
		})
	}

	/// How many cursors have been opened so far.
	pub fn opens(&self) -> usize {
		self.opens.load(Ordering::Relaxed)
	}

	/// How many times any cursor was advanced.
	pub fn advances(&self) -> usize {
		self.advances.load(Ordering::Relaxed)
	}
}

struct CountingEnumerator<T: 'static> {
	inner: BoxEnumerator<T>,
	advances: Arc<AtomicUsize>,
}

impl<T: 'static> Enumerator<T> for CountingEnumerator<T> {
	fn next(&mut self) -> enumerable::Result<Option<T>> {
		self.advances.fetch_add(1, Ordering::Relaxed);
		self.inner.next()
	}
}
