// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

/// Failures surfaced by terminal operators.
///
/// Combinators never introduce error kinds of their own; they relay
/// whatever their parent cursor raised. Panics inside user callbacks
/// unwind through the pipeline untouched, with cursor state released
/// by `Drop` during unwinding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("sequence contains no elements")]
	EmptySequence,

	#[error("sequence contains more than one matching element")]
	Cardinality,

	#[error("{0}")]
	Source(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
	/// Wraps an arbitrary source failure, for fallible generator
	/// sources built with [`crate::Enumerable::from_fn`].
	pub fn source(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Source(err.into())
	}
}
