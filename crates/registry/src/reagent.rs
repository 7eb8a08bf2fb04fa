//! Reagent records and their sparse patches.
//!
//! A [`Reagent`] is the fully-populated record the host database holds. A
//! [`ReagentPatch`] is a sparse override for one name: every field left
//! unset means "inherit from the matched base record at merge time", every
//! set field wins over it. For names with no base record, unset fields fall
//! back to the documented defaults (see [`ReagentPatch::to_reagent`]).

use alkahest_base::{Behavior, Color, DisplayRef};
use serde::{Deserialize, Serialize};

/// A fully-populated reagent record as the host database stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
	/// Unique identifying name within the database.
	pub name: Box<str>,
	/// Localization key for the display name.
	pub display_key: Box<str>,
	/// Fluid color.
	pub color: Color,
	/// Fluid emission color.
	pub emission: Color,
	/// Worth per unit when sold.
	pub value: f32,
	/// Metabolization half-life; lower metabolizes faster.
	pub half_life: f32,
	/// Whether the fluid cleans decals instead of creating them.
	pub cleaning_agent: bool,
	/// Calories per unit.
	pub calories: f32,
	/// Host display asset.
	pub display: DisplayRef,
	/// Consumption behavior descriptor.
	pub behavior: Behavior,
}

/// A sparse, named override for one reagent.
///
/// The name is fixed at construction and is the merge key. All other
/// fields are optional; set them with the `with_*` builder methods.
///
/// ```
/// use alkahest_registry::ReagentPatch;
///
/// let patch = ReagentPatch::new("holy_water")
/// 	.with_value(3.0)
/// 	.with_cleaning_agent(true);
/// assert_eq!(patch.name(), "holy_water");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReagentPatch {
	name: Box<str>,
	display_key: Option<Box<str>>,
	color: Option<Color>,
	emission: Option<Color>,
	value: Option<f32>,
	half_life: Option<f32>,
	cleaning_agent: Option<bool>,
	calories: Option<f32>,
	display: Option<DisplayRef>,
	behavior: Option<Behavior>,
}

impl ReagentPatch {
	/// Creates an empty patch for the given name. Merging it against a
	/// database with no such reagent inserts one built entirely from
	/// defaults.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			display_key: None,
			color: None,
			emission: None,
			value: None,
			half_life: None,
			cleaning_agent: None,
			calories: None,
			display: None,
			behavior: None,
		}
	}

	/// The merge key. Immutable after construction.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Overrides the localization key for the display name.
	pub fn with_display_key(mut self, key: impl Into<Box<str>>) -> Self {
		self.display_key = Some(key.into());
		self
	}

	/// Overrides the fluid color.
	pub fn with_color(mut self, color: Color) -> Self {
		self.color = Some(color);
		self
	}

	/// Overrides the emission color.
	pub fn with_emission(mut self, emission: Color) -> Self {
		self.emission = Some(emission);
		self
	}

	/// Overrides the per-unit worth.
	pub fn with_value(mut self, value: f32) -> Self {
		self.value = Some(value);
		self
	}

	/// Overrides the metabolization half-life.
	pub fn with_half_life(mut self, half_life: f32) -> Self {
		self.half_life = Some(half_life);
		self
	}

	/// Overrides whether the fluid acts as a cleaning agent.
	pub fn with_cleaning_agent(mut self, cleaning_agent: bool) -> Self {
		self.cleaning_agent = Some(cleaning_agent);
		self
	}

	/// Overrides the calories per unit.
	pub fn with_calories(mut self, calories: f32) -> Self {
		self.calories = Some(calories);
		self
	}

	/// Overrides the host display asset.
	pub fn with_display(mut self, display: DisplayRef) -> Self {
		self.display = Some(display);
		self
	}

	/// Overrides the consumption behavior.
	pub fn with_behavior(mut self, behavior: Behavior) -> Self {
		self.behavior = Some(behavior);
		self
	}

	/// Builds a full record from this patch alone, filling every unset
	/// field with its default:
	///
	/// | field | default |
	/// |---|---|
	/// | `display_key` | the patch's own name |
	/// | `color` | opaque white |
	/// | `emission` | opaque white |
	/// | `value` | `0.25` |
	/// | `half_life` | `1.5` |
	/// | `cleaning_agent` | `false` |
	/// | `calories` | `0.05` |
	/// | `display` | empty placeholder |
	/// | `behavior` | [`Behavior::Standard`] |
	pub fn to_reagent(&self) -> Reagent {
		Reagent {
			name: self.name.clone(),
			display_key: self.display_key.clone().unwrap_or_else(|| self.name.clone()),
			color: self.color.unwrap_or(Color::WHITE),
			emission: self.emission.unwrap_or(Color::WHITE),
			value: self.value.unwrap_or(0.25),
			half_life: self.half_life.unwrap_or(1.5),
			cleaning_agent: self.cleaning_agent.unwrap_or(false),
			calories: self.calories.unwrap_or(0.05),
			display: self.display.clone().unwrap_or_default(),
			behavior: self.behavior.clone().unwrap_or_default(),
		}
	}

	/// Builds a full record by overlaying this patch on an existing one:
	/// set fields win, unset fields copy the base record's current value.
	pub fn overlay(&self, base: &Reagent) -> Reagent {
		Reagent {
			name: self.name.clone(),
			display_key: self
				.display_key
				.clone()
				.unwrap_or_else(|| base.display_key.clone()),
			color: self.color.unwrap_or(base.color),
			emission: self.emission.unwrap_or(base.emission),
			value: self.value.unwrap_or(base.value),
			half_life: self.half_life.unwrap_or(base.half_life),
			cleaning_agent: self.cleaning_agent.unwrap_or(base.cleaning_agent),
			calories: self.calories.unwrap_or(base.calories),
			display: self.display.clone().unwrap_or_else(|| base.display.clone()),
			behavior: self.behavior.clone().unwrap_or_else(|| base.behavior.clone()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_reagent_fills_defaults() {
		let r = ReagentPatch::new("slime").to_reagent();
		assert_eq!(r.name.as_ref(), "slime");
		assert_eq!(r.display_key.as_ref(), "slime");
		assert_eq!(r.color, Color::WHITE);
		assert_eq!(r.emission, Color::WHITE);
		assert_eq!(r.value, 0.25);
		assert_eq!(r.half_life, 1.5);
		assert!(!r.cleaning_agent);
		assert_eq!(r.calories, 0.05);
		assert!(r.display.is_placeholder());
		assert_eq!(r.behavior, Behavior::Standard);
	}

	#[test]
	fn test_to_reagent_keeps_set_fields() {
		let r = ReagentPatch::new("slime")
			.with_color(Color::rgb(0.0, 1.0, 0.0))
			.with_value(2.5)
			.to_reagent();
		assert_eq!(r.color, Color::rgb(0.0, 1.0, 0.0));
		assert_eq!(r.value, 2.5);
		// Unrelated fields still default.
		assert_eq!(r.half_life, 1.5);
	}

	#[test]
	fn test_overlay_only_touches_set_fields() {
		let base = ReagentPatch::new("water")
			.with_value(0.1)
			.with_half_life(0.8)
			.to_reagent();
		let merged = ReagentPatch::new("water")
			.with_cleaning_agent(true)
			.overlay(&base);
		assert!(merged.cleaning_agent);
		assert_eq!(merged.value, 0.1);
		assert_eq!(merged.half_life, 0.8);
	}
}
