// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use crate::enumerator::BoxEnumerator;

/// Immutable, restartable description of a (possibly lazy) sequence.
///
/// An `Enumerable` holds nothing but a factory; no element is
/// produced until a terminal operator opens a cursor and pulls.
/// Every call to [`Enumerable::cursor`] yields an independent cursor
/// that iterates the logical sequence from the start, so the same
/// descriptor can back any number of concurrent enumerations. A
/// source wrapping a genuinely single-pass resource breaks that
/// contract on its own account; the engine neither detects nor
/// repairs it.
pub struct Enumerable<T: 'static> {
	factory: Arc<dyn Fn() -> BoxEnumerator<T>>,
}

impl<T: 'static> Clone for Enumerable<T> {
	fn clone(&self) -> Self {
		Self {
			factory: Arc::clone(&self.factory),
		}
	}
}

impl<T: 'static> Enumerable<T> {
	/// Extension point for host-specific adapters: any factory that
	/// produces a conforming cursor per call yields a valid source.
	pub fn from_factory(factory: impl Fn() -> BoxEnumerator<T> + 'static) -> Self {
		Self {
			factory: Arc::new(factory),
		}
	}

	/// Opens a fresh cursor over the sequence. This is where deferred
	/// pipelines start doing work.
	pub fn cursor(&self) -> BoxEnumerator<T> {
		(self.factory)()
	}
}
