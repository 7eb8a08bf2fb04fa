//! The merge pass: insert-or-overlay every registered patch into a host
//! database.
//!
//! The host fires its rebuild trigger once per lifecycle cycle with a
//! fresh database; the pass is a pure function of (registry, database)
//! and carries no state between invocations, so re-running it after the
//! host purges and rebuilds is always safe.

use crate::database::ReagentDatabase;
use crate::error::MergeError;
use crate::reagent::ReagentPatch;
use crate::registry::{Patch, PatchRegistry};

/// Per-record result of one merge pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
	/// No record with the patch's name existed; a new one was appended,
	/// built from the patch with defaults for unset fields.
	Inserted {
		/// Name of the appended record.
		name: Box<str>,
	},
	/// A record with the patch's name existed; it was replaced in place by
	/// the overlay of the patch on it.
	Replaced {
		/// Name of the replaced record.
		name: Box<str>,
	},
	/// A reaction resolved all of its references and was appended.
	ReactionAppended,
	/// The record failed to merge and was skipped; the pass continued.
	Skipped(MergeError),
}

impl MergeOutcome {
	/// Returns true for [`MergeOutcome::Skipped`].
	pub fn is_skipped(&self) -> bool {
		matches!(self, Self::Skipped(_))
	}
}

impl PatchRegistry {
	/// Merges every registered entry into `db`, in registration order.
	///
	/// For a reagent patch, a linear scan finds the first record with the
	/// patch's name. Absent means insert with defaults; present means
	/// replace at the original position with the overlay. Two patches with
	/// the same name chain: the second overlays on the first's result.
	///
	/// For a reaction patch, each reference is resolved against
	/// `db.reagents` as it stands at that moment: reagents merged earlier
	/// in the same pass are visible, ones registered later are not. A
	/// reaction with any missing reference is skipped whole and reported;
	/// one bad reaction never aborts the pass.
	///
	/// Never fails and never panics; every failure is a
	/// [`MergeOutcome::Skipped`] in the returned list.
	pub fn apply_all(&self, db: &mut ReagentDatabase) -> Vec<MergeOutcome> {
		let entries = self.entries();
		let mut outcomes = Vec::with_capacity(entries.len());
		let mut reaction_index = 0usize;

		for entry in &entries {
			match entry {
				Patch::Reagent(patch) => outcomes.push(merge_reagent(patch, db)),
				Patch::Reaction(patch) => {
					match patch.resolve(&db.reagents, reaction_index) {
						Ok(reaction) => {
							db.reactions.push(reaction);
							outcomes.push(MergeOutcome::ReactionAppended);
						}
						Err(err) => {
							tracing::warn!(reaction = reaction_index, %err, "skipping reaction");
							outcomes.push(MergeOutcome::Skipped(err));
						}
					}
					reaction_index += 1;
				}
			}
		}

		outcomes
	}
}

fn merge_reagent(patch: &ReagentPatch, db: &mut ReagentDatabase) -> MergeOutcome {
	let found = db
		.reagents
		.iter()
		.position(|r| r.name.as_ref() == patch.name());
	match found {
		None => {
			tracing::info!(name = patch.name(), "adding new reagent");
			db.reagents.push(patch.to_reagent());
			MergeOutcome::Inserted {
				name: patch.name().into(),
			}
		}
		Some(index) => {
			tracing::info!(
				name = patch.name(),
				"replacing existing reagent with modified variant"
			);
			let merged = patch.overlay(&db.reagents[index]);
			db.reagents[index] = merged;
			MergeOutcome::Replaced {
				name: patch.name().into(),
			}
		}
	}
}
