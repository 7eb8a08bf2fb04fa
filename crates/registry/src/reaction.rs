//! Reaction patches: composite records that reference reagents by name.
//!
//! A [`ReactionPatch`] names the reagents it consumes and produces; the
//! names are resolved against the live database during the merge pass, so
//! a reaction may reference reagents inserted earlier in the same pass.

use alkahest_base::Coefficient;
use serde::{Deserialize, Serialize};

use crate::error::MergeError;
use crate::reagent::Reagent;
use crate::resolve::find_reagent;

/// A by-name reference to a reagent with an amount consumed or produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reactant {
	/// Name of the referenced reagent.
	pub name: Box<str>,
	/// Amount consumed (as input) or produced (as output).
	pub amount: Coefficient,
}

impl Reactant {
	/// Creates a reference; the amount is clamped by [`Coefficient::new`].
	pub fn new(name: impl Into<Box<str>>, amount: f32) -> Self {
		Self {
			name: name.into(),
			amount: Coefficient::new(amount),
		}
	}
}

/// An opaque side-effect descriptor attached to a reaction (an explosion,
/// a sound cue, ...). Carried through the merge unresolved; the host maps
/// it to its own runtime object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect(Box<str>);

impl Effect {
	/// Creates a descriptor for a named host effect.
	pub fn new(kind: impl Into<Box<str>>) -> Self {
		Self(kind.into())
	}

	/// The host-side effect name.
	pub fn kind(&self) -> &str {
		&self.0
	}
}

/// A pending reaction between named reagents.
///
/// Plain combining reactions need no effects; effects are only for extra
/// side effects on top of the fluid conversion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionPatch {
	reactants: Vec<Reactant>,
	products: Vec<Reactant>,
	effects: Vec<Effect>,
}

impl ReactionPatch {
	/// Creates a reaction with no reactants, products, or effects.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a required input reagent.
	pub fn with_reactant(mut self, name: impl Into<Box<str>>, amount: f32) -> Self {
		self.add_reactant(Reactant::new(name, amount));
		self
	}

	/// Adds a produced output reagent.
	pub fn with_product(mut self, name: impl Into<Box<str>>, amount: f32) -> Self {
		self.add_product(Reactant::new(name, amount));
		self
	}

	/// Adds a side effect.
	pub fn with_effect(mut self, effect: Effect) -> Self {
		self.add_effect(effect);
		self
	}

	/// Appends an already constructed input reference.
	pub fn add_reactant(&mut self, reactant: Reactant) {
		self.reactants.push(reactant);
	}

	/// Appends an already constructed output reference.
	pub fn add_product(&mut self, product: Reactant) {
		self.products.push(product);
	}

	/// Appends a side effect.
	pub fn add_effect(&mut self, effect: Effect) {
		self.effects.push(effect);
	}

	/// Input references, in insertion order.
	pub fn reactants(&self) -> &[Reactant] {
		&self.reactants
	}

	/// Output references, in insertion order.
	pub fn products(&self) -> &[Reactant] {
		&self.products
	}

	/// Side effects, in insertion order.
	pub fn effects(&self) -> &[Effect] {
		&self.effects
	}

	/// Resolves every reference against the given reagent list and builds
	/// the full [`Reaction`].
	///
	/// Fails on the first reference whose name is absent; nothing is
	/// partially built. `index` is the patch's registration-order position,
	/// used only for error reporting.
	pub(crate) fn resolve(&self, reagents: &[Reagent], index: usize) -> Result<Reaction, MergeError> {
		let resolve_all = |refs: &[Reactant]| -> Result<Vec<Reactant>, MergeError> {
			refs.iter()
				.map(|r| {
					if find_reagent(reagents, &r.name).is_some() {
						Ok(r.clone())
					} else {
						Err(MergeError::MissingDependency {
							reaction: index,
							missing: r.name.clone(),
						})
					}
				})
				.collect()
		};

		Ok(Reaction {
			reactants: resolve_all(&self.reactants)?,
			products: resolve_all(&self.products)?,
			effects: self.effects.clone(),
		})
	}
}

/// A fully-resolved reaction as appended to the host database.
///
/// Every reagent reference was verified present at merge time. The host's
/// reaction list is append-only; the merge never searches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
	/// Inputs, all names verified present.
	pub reactants: Vec<Reactant>,
	/// Outputs, all names verified present.
	pub products: Vec<Reactant>,
	/// Side effects, carried through unresolved.
	pub effects: Vec<Effect>,
}
