// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{fmt::Debug, sync::Arc};

use indexmap::IndexMap;
use tracing::{instrument, trace};

use crate::{Enumerable, Enumerator};

/// One bucket of a grouped sequence: the key plus a restartable
/// sequence over the bucket's elements in insertion order.
pub struct Group<K, T: 'static> {
	key: K,
	items: Enumerable<T>,
}

impl<K, T: 'static> Group<K, T> {
	pub fn key(&self) -> &K {
		&self.key
	}

	pub fn items(&self) -> Enumerable<T> {
		self.items.clone()
	}
}

impl<K: Clone, T: 'static> Clone for Group<K, T> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			items: self.items.clone(),
		}
	}
}

pub(crate) struct GroupByEnumerator<R: 'static> {
	materialize: Arc<dyn Fn() -> crate::Result<Vec<R>>>,
	groups: Option<std::vec::IntoIter<R>>,
}

impl<R: 'static> Enumerator<R> for GroupByEnumerator<R> {
	fn next(&mut self) -> crate::Result<Option<R>> {
		if self.groups.is_none() {
			self.groups = Some((self.materialize)()?.into_iter());
		}
		match &mut self.groups {
			Some(groups) => Ok(groups.next()),
			None => Ok(None),
		}
	}
}

// Grouping is eager: the parent is fully drained into buckets before
// the first group is handed out. Buckets are keyed by the serialized
// key and keep first-seen key order.
#[instrument(name = "group_by::materialize", level = "trace", skip_all)]
fn materialize<T: Clone + 'static, K, R>(
	source: &Enumerable<T>,
	key_of: &dyn Fn(&T) -> K,
	serialize: &dyn Fn(&K) -> String,
	result: &dyn Fn(K, Enumerable<T>) -> R,
) -> crate::Result<Vec<R>> {
	let mut cursor = source.cursor();
	let mut buckets: IndexMap<String, (K, Vec<T>)> = IndexMap::new();
	while let Some(item) = cursor.next()? {
		let key = key_of(&item);
		let bucket = serialize(&key);
		buckets.entry(bucket).or_insert_with(|| (key, Vec::new())).1.push(item);
	}
	trace!(groups = buckets.len(), "materialized group buckets");
	Ok(buckets.into_iter().map(|(_, (key, items))| result(key, Enumerable::from_vec(items))).collect())
}

impl<T: Clone + 'static> Enumerable<T> {
	/// Groups by `key_of`, bucketing through `serialize` and shaping
	/// each bucket with `result`.
	pub fn group_by_with<K: 'static, R: 'static>(
		&self,
		key_of: impl Fn(&T) -> K + 'static,
		serialize: impl Fn(&K) -> String + 'static,
		result: impl Fn(K, Enumerable<T>) -> R + 'static,
	) -> Enumerable<R> {
		let source = self.clone();
		let materialize: Arc<dyn Fn() -> crate::Result<Vec<R>>> =
			Arc::new(move || materialize(&source, &key_of, &serialize, &result));
		Enumerable::from_factory(move || {
			Box::new(GroupByEnumerator {
				materialize: Arc::clone(&materialize),
				groups: None,
			})
		})
	}

	/// Groups by `key_of` with the default key serializer (`Debug`
	/// formatting), yielding [`Group`] buckets.
	pub fn group_by<K: Debug + 'static>(&self, key_of: impl Fn(&T) -> K + 'static) -> Enumerable<Group<K, T>> {
		self.group_by_with(key_of, |key| format!("{key:?}"), |key, items| Group {
			key,
			items,
		})
	}
}
