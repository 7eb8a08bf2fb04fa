//! Value primitives for reagent data: colors, clamped coefficients, and
//! opaque host handles.
//!
//! These types define reagent field values without depending on any engine
//! or renderer. Conversion to whatever the host simulation uses happens at
//! the host boundary, not here.

/// Range-clamped reaction coefficients.
pub mod coefficient;
/// Abstract fluid color.
pub mod color;
/// Opaque host-side handles and behavior descriptors.
pub mod handle;

pub use coefficient::Coefficient;
pub use color::Color;
pub use handle::{Behavior, DisplayRef};
