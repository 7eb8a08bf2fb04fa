//! Name resolution against the live reagent list.

use crate::reagent::Reagent;

/// Finds a reagent by exact name. Linear scan, first match wins.
///
/// No caching and no mutation; the collections involved are small and this
/// runs once per host rebuild, so O(n) per call is fine.
pub fn find_reagent<'a>(reagents: &'a [Reagent], name: &str) -> Option<&'a Reagent> {
	reagents.iter().find(|r| r.name.as_ref() == name)
}
