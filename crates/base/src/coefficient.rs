//! Reaction coefficients with an eagerly enforced valid range.

use serde::{Deserialize, Serialize};

/// A reaction coefficient: the amount of a reagent consumed or produced.
///
/// Clamped to [`Coefficient::MIN`]..=[`Coefficient::MAX`] at construction.
/// The clamp happens exactly once, here; merge-time code can rely on every
/// stored coefficient already being in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Coefficient(f32);

impl Coefficient {
	/// Smallest representable coefficient.
	pub const MIN: f32 = 0.01;
	/// Largest representable coefficient.
	pub const MAX: f32 = 10.0;

	/// Creates a coefficient, clamping the input into the valid range.
	pub fn new(amount: f32) -> Self {
		Self(amount.clamp(Self::MIN, Self::MAX))
	}

	/// Returns the clamped value.
	#[inline]
	pub fn get(self) -> f32 {
		self.0
	}
}

impl From<f32> for Coefficient {
	fn from(amount: f32) -> Self {
		Self::new(amount)
	}
}

impl From<Coefficient> for f32 {
	fn from(c: Coefficient) -> Self {
		c.0
	}
}

impl std::fmt::Display for Coefficient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_in_range_unchanged() {
		assert_eq!(Coefficient::new(2.0).get(), 2.0);
	}

	#[test]
	fn test_clamps_above_max() {
		assert_eq!(Coefficient::new(15.0).get(), 10.0);
	}

	#[test]
	fn test_clamps_below_min() {
		assert_eq!(Coefficient::new(0.0).get(), 0.01);
		assert_eq!(Coefficient::new(-3.0).get(), 0.01);
	}

	#[test]
	fn test_deserialize_clamps() {
		let c: Coefficient = serde_json::from_str("99.0").unwrap();
		assert_eq!(c.get(), 10.0);
	}
}
