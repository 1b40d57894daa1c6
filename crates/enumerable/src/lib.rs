// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use enumerable::Enumerable;
pub use enumerator::{BoxEnumerator, Enumerator};
pub use error::Error;
pub use operator::group_by::Group;
pub use sort::OrderedEnumerable;

mod enumerable;
mod enumerator;
mod error;
mod operator;
mod sort;
mod source;
mod terminal;

pub type Result<T> = std::result::Result<T, Error>;
