//! Opaque handles to host-owned assets and behaviors.
//!
//! The host resolves these descriptors to its own runtime objects; this
//! crate only carries them through merges untouched.

use serde::{Deserialize, Serialize};

/// Reference to a host-side display asset.
///
/// A placeholder reference carries no asset name; the host substitutes
/// whatever it uses for an empty display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayRef {
	asset: Option<Box<str>>,
}

impl DisplayRef {
	/// A fresh empty placeholder. The default for inserted records.
	pub fn placeholder() -> Self {
		Self::default()
	}

	/// References a named host asset.
	pub fn named(asset: impl Into<Box<str>>) -> Self {
		Self {
			asset: Some(asset.into()),
		}
	}

	/// Returns the referenced asset name, if any.
	pub fn asset(&self) -> Option<&str> {
		self.asset.as_deref()
	}

	/// Returns true if this is an empty placeholder.
	pub fn is_placeholder(&self) -> bool {
		self.asset.is_none()
	}
}

/// Descriptor for what happens when a reagent is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
	/// The host's built-in default consumption behavior.
	#[default]
	Standard,
	/// A host-registered behavior, referenced by name.
	Custom(Box<str>),
}

impl Behavior {
	/// Creates a descriptor for a named host behavior.
	pub fn custom(name: impl Into<Box<str>>) -> Self {
		Self::Custom(name.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_placeholder_carries_no_asset() {
		let d = DisplayRef::placeholder();
		assert!(d.is_placeholder());
		assert_eq!(d.asset(), None);
	}

	#[test]
	fn test_named_display() {
		let d = DisplayRef::named("puddle_fx");
		assert!(!d.is_placeholder());
		assert_eq!(d.asset(), Some("puddle_fx"));
	}

	#[test]
	fn test_behavior_default_is_standard() {
		assert_eq!(Behavior::default(), Behavior::Standard);
	}
}
