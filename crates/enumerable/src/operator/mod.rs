// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod concat;
mod default_if_empty;
mod distinct;
mod except;
mod filter;
mod flat_map;
pub(crate) mod group_by;
mod intersect;
mod map;
mod reverse;
mod skip;
mod take;
mod union;
mod zip;
