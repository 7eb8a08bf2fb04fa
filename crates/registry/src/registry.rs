//! The patch registry: insertion-ordered, append-only, never validated
//! against a database at registration time (the database may not exist
//! yet).

use parking_lot::RwLock;

use crate::reaction::ReactionPatch;
use crate::reagent::ReagentPatch;

/// One registered entry, reagent or reaction, in a single ordered
/// sequence.
///
/// Keeping both kinds in one sequence preserves relative registration
/// order across kinds, which is what makes same-pass dependency
/// visibility well defined: a reaction sees exactly the reagents merged
/// before it was.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
	/// A sparse reagent override.
	Reagent(ReagentPatch),
	/// A pending reaction between named reagents.
	Reaction(ReactionPatch),
}

/// Collects reagent and reaction patches ahead of the host's rebuild
/// trigger.
///
/// Registration always succeeds. Duplicate names are legal here; they are
/// resolved only at merge time, where they chain in registration order
/// (see [`apply_all`]). The registry owns its patches for the process
/// lifetime; there is no teardown.
///
/// Interior locking lets producers register from anywhere; [`apply_all`]
/// snapshots the sequence up front so one pass sees a consistent view even
/// if registration happens mid-pass.
///
/// [`apply_all`]: PatchRegistry::apply_all
#[derive(Debug, Default)]
pub struct PatchRegistry {
	entries: RwLock<Vec<Patch>>,
}

impl PatchRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a reagent patch. Never fails.
	pub fn register(&self, patch: ReagentPatch) {
		self.entries.write().push(Patch::Reagent(patch));
	}

	/// Appends a reaction patch. Never fails.
	pub fn register_reaction(&self, patch: ReactionPatch) {
		self.entries.write().push(Patch::Reaction(patch));
	}

	/// Snapshot of every registered entry, in registration order.
	pub fn entries(&self) -> Vec<Patch> {
		self.entries.read().clone()
	}

	/// Snapshot of the registered reagent patches, in registration order.
	pub fn reagent_patches(&self) -> Vec<ReagentPatch> {
		self.entries
			.read()
			.iter()
			.filter_map(|e| match e {
				Patch::Reagent(p) => Some(p.clone()),
				Patch::Reaction(_) => None,
			})
			.collect()
	}

	/// Snapshot of the registered reaction patches, in registration order.
	pub fn reaction_patches(&self) -> Vec<ReactionPatch> {
		self.entries
			.read()
			.iter()
			.filter_map(|e| match e {
				Patch::Reagent(_) => None,
				Patch::Reaction(p) => Some(p.clone()),
			})
			.collect()
	}

	/// Number of registered entries of both kinds.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns true if nothing has been registered.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_registration_order_preserved() {
		let registry = PatchRegistry::new();
		registry.register(ReagentPatch::new("b"));
		registry.register(ReagentPatch::new("a"));
		registry.register(ReagentPatch::new("b"));

		let patches = registry.reagent_patches();
		let names: Vec<&str> = patches.iter().map(|p| p.name()).collect();
		assert_eq!(names, ["b", "a", "b"]);
	}

	#[test]
	fn test_kinds_interleave_in_one_sequence() {
		let registry = PatchRegistry::new();
		registry.register(ReagentPatch::new("water"));
		registry.register_reaction(ReactionPatch::new());
		registry.register(ReagentPatch::new("gold"));

		let entries = registry.entries();
		assert!(matches!(entries[0], Patch::Reagent(_)));
		assert!(matches!(entries[1], Patch::Reaction(_)));
		assert!(matches!(entries[2], Patch::Reagent(_)));
	}

	#[test]
	fn test_duplicate_names_not_deduplicated() {
		let registry = PatchRegistry::new();
		registry.register(ReagentPatch::new("water"));
		registry.register(ReagentPatch::new("water"));
		assert_eq!(registry.reagent_patches().len(), 2);
	}

	#[test]
	fn test_snapshot_is_restartable() {
		let registry = PatchRegistry::new();
		registry.register(ReagentPatch::new("water"));

		let snap = registry.entries();
		// A snapshot taken before later registrations does not see them.
		registry.register(ReagentPatch::new("gold"));
		assert_eq!(snap.len(), 1);
		assert_eq!(registry.len(), 2);
	}
}
