//! Abstract color type for fluid tinting.
//!
//! Defines an RGBA color without depending on any rendering library.
//! Conversion to the host's color representation happens at the host
//! boundary.

use serde::{Deserialize, Serialize};

/// An RGBA color with floating-point channels in `[0.0, 1.0]`.
///
/// Channels are not clamped; the host decides how to interpret values
/// outside the unit range (e.g. HDR emission).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Color {
	/// Opaque white. The default for both fluid and emission colors.
	pub const WHITE: Self = Self {
		r: 1.0,
		g: 1.0,
		b: 1.0,
		a: 1.0,
	};

	/// Opaque black.
	pub const BLACK: Self = Self {
		r: 0.0,
		g: 0.0,
		b: 0.0,
		a: 1.0,
	};

	/// Creates a color with explicit alpha.
	pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}

	/// Creates an opaque color.
	pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Returns true if the color is fully opaque.
	pub fn is_opaque(self) -> bool {
		self.a >= 1.0
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::WHITE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_opaque_white() {
		let c = Color::default();
		assert_eq!(c, Color::WHITE);
		assert!(c.is_opaque());
	}

	#[test]
	fn test_rgb_sets_full_alpha() {
		let c = Color::rgb(0.2, 0.4, 0.6);
		assert_eq!(c.a, 1.0);
	}

	#[test]
	fn test_serde_roundtrip() {
		let c = Color::rgba(0.1, 0.2, 0.3, 0.5);
		let json = serde_json::to_string(&c).unwrap();
		let back: Color = serde_json::from_str(&json).unwrap();
		assert_eq!(c, back);
	}
}
