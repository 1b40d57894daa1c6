// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod array;
mod generate;
mod range;
mod repeat;
mod single;
