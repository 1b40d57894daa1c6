// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Enumerable, Enumerator};

pub(crate) struct GenerateEnumerator<F> {
	produce: F,
	done: bool,
}

impl<T, F> Enumerator<T> for GenerateEnumerator<F>
where
	F: FnMut() -> crate::Result<Option<T>>,
{
	fn next(&mut self) -> crate::Result<Option<T>> {
		if self.done {
			return Ok(None);
		}
		match (self.produce)()? {
			Some(item) => Ok(Some(item)),
			None => {
				self.done = true;
				Ok(None)
			}
		}
	}
}

impl<T: 'static> Enumerable<T> {
	/// Generator source. `make` is invoked once per enumeration and
	/// returns the generator closure driving that run; the closure
	/// may fail, which is how source errors enter a pipeline. The
	/// cursor is fused: after the generator reports exhaustion it is
	/// never called again.
	pub fn from_fn<F>(make: impl Fn() -> F + 'static) -> Self
	where
		F: FnMut() -> crate::Result<Option<T>> + 'static,
	{
		Self::from_factory(move || {
			Box::new(GenerateEnumerator {
				produce: make(),
				done: false,
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::{Enumerable, Error};

	#[test]
	fn test_from_fn_counts_down() {
		let source = Enumerable::from_fn(|| {
			let mut n = 3;
			move || {
				if n == 0 {
					return Ok(None);
				}
				n -= 1;
				Ok(Some(n))
			}
		});

		assert_eq!(source.to_vec().unwrap(), vec![2, 1, 0]);
		// restartable: a second run gets a fresh generator
		assert_eq!(source.to_vec().unwrap(), vec![2, 1, 0]);
	}

	#[test]
	fn test_from_fn_relays_errors() {
		let source = Enumerable::<i32>::from_fn(|| || Err(Error::source("backing store gone")));

		assert!(matches!(source.to_vec(), Err(Error::Source(_))));
	}
}
