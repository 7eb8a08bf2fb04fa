//! End-to-end merge pass over a host-owned database.

use alkahest_registry::{
	Behavior, Color, DisplayRef, MergeOutcome, PatchRegistry, ReactionPatch, ReagentDatabase,
	ReagentPatch,
};
use pretty_assertions::assert_eq;

/// The full pack scenario: overlay an existing reagent, insert a fresh
/// one, and wire a reaction between them in the same pass.
#[test]
fn water_to_gold_pass() {
	let mut db = ReagentDatabase::new();
	db.reagents
		.push(ReagentPatch::new("water").with_value(0.1).to_reagent());

	let registry = PatchRegistry::new();
	registry.register(ReagentPatch::new("water").with_cleaning_agent(true));
	registry.register(ReagentPatch::new("gold"));
	registry.register_reaction(
		ReactionPatch::new()
			.with_reactant("water", 2.0)
			.with_product("gold", 1.0),
	);

	let outcomes = registry.apply_all(&mut db);

	assert_eq!(
		outcomes,
		vec![
			MergeOutcome::Replaced { name: "water".into() },
			MergeOutcome::Inserted { name: "gold".into() },
			MergeOutcome::ReactionAppended,
		]
	);

	// "water" replaced: the override stuck, the untouched field survived.
	let water = db.reagent("water").unwrap();
	assert!(water.cleaning_agent);
	assert_eq!(water.value, 0.1);

	// "gold" inserted with full defaults.
	let gold = db.reagent("gold").unwrap();
	assert_eq!(gold.display_key.as_ref(), "gold");
	assert_eq!(gold.color, Color::WHITE);
	assert_eq!(gold.emission, Color::WHITE);
	assert_eq!(gold.value, 0.25);
	assert_eq!(gold.half_life, 1.5);
	assert!(!gold.cleaning_agent);
	assert_eq!(gold.calories, 0.05);
	assert_eq!(gold.display, DisplayRef::placeholder());
	assert_eq!(gold.behavior, Behavior::Standard);

	// The reaction resolved both names and was appended.
	assert_eq!(db.reactions.len(), 1);
	let reaction = &db.reactions[0];
	assert_eq!(reaction.reactants[0].name.as_ref(), "water");
	assert_eq!(reaction.reactants[0].amount.get(), 2.0);
	assert_eq!(reaction.products[0].name.as_ref(), "gold");
	assert_eq!(reaction.products[0].amount.get(), 1.0);
}

/// The host rebuilds its database every lifecycle cycle; the same registry
/// applied to a fresh database reproduces the same result.
#[test]
fn pass_reproducible_across_host_cycles() {
	let registry = PatchRegistry::new();
	registry.register(ReagentPatch::new("slime").with_value(1.0));
	registry.register_reaction(ReactionPatch::new().with_reactant("slime", 1.0));

	let run = || {
		let mut db = ReagentDatabase::new();
		db.reagents.push(ReagentPatch::new("water").to_reagent());
		registry.apply_all(&mut db);
		db
	};

	assert_eq!(run(), run());
}
