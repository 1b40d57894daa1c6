// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Enumerable;

impl<T: 'static> Enumerable<T> {
	/// Drives the pipeline to completion and collects every element.
	/// The cursor is released on every exit path, error included.
	pub fn to_vec(&self) -> crate::Result<Vec<T>> {
		let mut cursor = self.cursor();
		let mut items = Vec::new();
		while let Some(item) = cursor.next()? {
			items.push(item);
		}
		Ok(items)
	}

	pub fn for_each(&self, mut action: impl FnMut(T)) -> crate::Result<()> {
		let mut cursor = self.cursor();
		while let Some(item) = cursor.next()? {
			action(item);
		}
		Ok(())
	}

	pub fn count(&self) -> crate::Result<usize> {
		let mut cursor = self.cursor();
		let mut count = 0;
		while cursor.next()?.is_some() {
			count += 1;
		}
		Ok(count)
	}
}
