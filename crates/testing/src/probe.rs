// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use enumerable::{BoxEnumerator, Enumerable, Enumerator};

/// Observes cursor lifecycles: every cursor opened through a wrapped
/// source is counted, and counted again when it is dropped. Tests use
/// it to prove that pipelines release their cursors on early
/// termination and on error paths.
#[derive(Default)]
pub struct DropProbe {
	opened: Arc<AtomicUsize>,
	dropped: Arc<AtomicUsize>,
}

impl DropProbe {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn wrap<T: 'static>(&self, source: Enumerable<T>) -> Enumerable<T> {
		let opened = Arc::clone(&self.opened);
		let dropped = Arc::clone(&self.dropped);
		Enumerable::from_factory(move || {
			opened.fetch_add(1, Ordering::Relaxed);
			Box::new(ProbeEnumerator {
				inner: source.cursor(),
				dropped: Arc::clone(&dropped),
			})
		})
	}

	pub fn opened(&self) -> usize {
		self.opened.load(Ordering::Relaxed)
	}

	pub fn dropped(&self) -> usize {
		self.dropped.load(Ordering::Relaxed)
	}

	/// Every cursor that was opened has been released again.
	pub fn all_released(&self) -> bool {
		self.opened() == self.dropped()
	}
}

struct ProbeEnumerator<T: 'static> {
	inner: BoxEnumerator<T>,
	dropped: Arc<AtomicUsize>,
}

impl<T: 'static> Enumerator<T> for ProbeEnumerator<T> {
	fn next(&mut self) -> enumerable::Result<Option<T>> {
		self.inner.next()
	}
}

impl<T: 'static> Drop for ProbeEnumerator<T> {
	fn drop(&mut self) {
		self.dropped.fetch_add(1, Ordering::Relaxed);
	}
}
