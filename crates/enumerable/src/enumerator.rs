// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Enumerable;

/// Single-pass cursor over one concrete run of a sequence.
///
/// `Ok(Some(item))` advances the cursor, `Ok(None)` signals
/// exhaustion and must keep being returned on every later call,
/// `Err(_)` is fatal to the enumeration. A cursor owns whatever
/// parent cursors it has created and releases them when dropped,
/// whether it was fully drained, abandoned early, or unwound by an
/// error.
pub trait Enumerator<T> {
	fn next(&mut self) -> crate::Result<Option<T>>;
}

pub type BoxEnumerator<T> = Box<dyn Enumerator<T>>;

/// Parent cursor handle that is opened on the first pull, never at
/// construction time.
///
/// The open/not-yet-open distinction is an explicit `Option`; closing
/// drops the parent cursor early so that upstream resources are
/// released as soon as a node knows it will not pull again.
pub(crate) struct LazyCursor<T: 'static> {
	source: Enumerable<T>,
	open: Option<BoxEnumerator<T>>,
}

impl<T: 'static> LazyCursor<T> {
	pub(crate) fn new(source: Enumerable<T>) -> Self {
		Self {
			source,
			open: None,
		}
	}

	pub(crate) fn next(&mut self) -> crate::Result<Option<T>> {
		let source = &self.source;
		self.open.get_or_insert_with(|| source.cursor()).next()
	}

	pub(crate) fn close(&mut self) {
		self.open = None;
	}
}
