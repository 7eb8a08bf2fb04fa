//! The host-owned database the merge pass runs against.

use serde::{Deserialize, Serialize};

use crate::reaction::Reaction;
use crate::reagent::Reagent;
use crate::resolve::find_reagent;

/// The host's reagent database, handed to [`apply_all`] each time the host
/// rebuilds it.
///
/// The host owns this and mutates it in place; the merge pass gets `&mut`
/// access for the duration of one pass only. `reagents` is searched by name
/// and replaced in place; `reactions` is append-only and never searched.
///
/// [`apply_all`]: crate::registry::PatchRegistry::apply_all
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReagentDatabase {
	/// Insertion-ordered reagent records, unique by name.
	pub reagents: Vec<Reagent>,
	/// Resolved reactions, in append order.
	pub reactions: Vec<Reaction>,
}

impl ReagentDatabase {
	/// Creates an empty database.
	pub fn new() -> Self {
		Self::default()
	}

	/// Looks up a reagent by exact name. First match wins.
	pub fn reagent(&self, name: &str) -> Option<&Reagent> {
		find_reagent(&self.reagents, name)
	}
}
