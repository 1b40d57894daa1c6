// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Error};

impl<T: 'static> Enumerable<T> {
	pub fn first(&self) -> crate::Result<T> {
		match self.first_or_none()? {
			Some(item) => Ok(item),
			None => Err(Error::EmptySequence),
		}
	}

	pub fn first_or_none(&self) -> crate::Result<Option<T>> {
		self.cursor().next()
	}

	pub fn first_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<T> {
		self.filter(predicate).first()
	}

	pub fn first_or_none_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<Option<T>> {
		self.filter(predicate).first_or_none()
	}

	pub fn last(&self) -> crate::Result<T> {
		match self.last_or_none()? {
			Some(item) => Ok(item),
			None => Err(Error::EmptySequence),
		}
	}

	pub fn last_or_none(&self) -> crate::Result<Option<T>> {
		let mut cursor = self.cursor();
		let mut last = None;
		while let Some(item) = cursor.next()? {
			last = Some(item);
		}
		Ok(last)
	}

	pub fn last_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<T> {
		self.filter(predicate).last()
	}

	pub fn last_or_none_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<Option<T>> {
		self.filter(predicate).last_or_none()
	}

	/// Exactly-one: `EmptySequence` when no element exists,
	/// `Cardinality` when the cursor can advance past the first.
	pub fn single(&self) -> crate::Result<T> {
		let mut cursor = self.cursor();
		let first = match cursor.next()? {
			Some(item) => item,
			None => return Err(Error::EmptySequence),
		};
		if cursor.next()?.is_some() {
			return Err(Error::Cardinality);
		}
		Ok(first)
	}

	/// At-most-one: an empty source is `None`, but a second element is
	/// still a `Cardinality` error.
	pub fn single_or_none(&self) -> crate::Result<Option<T>> {
		let mut cursor = self.cursor();
		let first = match cursor.next()? {
			Some(item) => item,
			None => return Ok(None),
		};
		if cursor.next()?.is_some() {
			return Err(Error::Cardinality);
		}
		Ok(Some(first))
	}

	pub fn single_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<T> {
		self.filter(predicate).single()
	}

	/// Delegates to `filter(..).single()`, so an empty match set is an
	/// `EmptySequence` error rather than `None`. Kept for
	/// compatibility with the historical operator family; it matches
	/// the or-none siblings in name only.
	pub fn single_or_none_by(&self, predicate: impl Fn(&T) -> bool + 'static) -> crate::Result<Option<T>> {
		self.filter(predicate).single().map(Some)
	}
}
