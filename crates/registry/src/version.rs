//! Version tagging for multiplayer compatibility.
//!
//! Each loaded data pack registers an identifier; before the host uses its
//! version string for the network handshake, [`VersionTags::decorate`]
//! prepends every identifier as a bracketed tag. Tags are sorted
//! lexicographically so independently-loaded packs produce the same string
//! regardless of load order, keeping modded clients compatible with each
//! other and segregated from unmodded ones.

use parking_lot::RwLock;

/// Collected pack identifiers to stamp into the host version string.
///
/// Callers are responsible for not registering the same identifier twice.
#[derive(Debug, Default)]
pub struct VersionTags {
	tags: RwLock<Vec<Box<str>>>,
}

impl VersionTags {
	/// Creates an empty tag set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a pack identifier.
	pub fn add(&self, tag: impl Into<Box<str>>) {
		self.tags.write().push(tag.into());
	}

	/// Prepends every registered identifier to `version` as bracketed
	/// tags in lexicographic order, e.g. `"[alpha][zeta]1.2.3"`.
	pub fn decorate(&self, version: &mut String) {
		let mut tags = self.tags.read().clone();
		tags.sort_unstable();

		let mut prefix = String::new();
		for tag in &tags {
			tracing::info!(tag = tag.as_ref(), "adding pack requirement to version string");
			prefix.push('[');
			prefix.push_str(tag);
			prefix.push(']');
		}
		version.insert_str(0, &prefix);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tags_sorted_regardless_of_registration_order() {
		let tags = VersionTags::new();
		tags.add("zeta");
		tags.add("alpha");

		let mut version = String::from("1.2.3");
		tags.decorate(&mut version);
		assert_eq!(version, "[alpha][zeta]1.2.3");
	}

	#[test]
	fn test_no_tags_leaves_version_untouched() {
		let tags = VersionTags::new();
		let mut version = String::from("1.2.3");
		tags.decorate(&mut version);
		assert_eq!(version, "1.2.3");
	}

	#[test]
	fn test_decorate_applies_per_trigger() {
		// The host may set its version more than once; each call stamps
		// the string it is handed.
		let tags = VersionTags::new();
		tags.add("pack");

		let mut first = String::from("1.0.0");
		let mut second = String::from("1.0.1");
		tags.decorate(&mut first);
		tags.decorate(&mut second);
		assert_eq!(first, "[pack]1.0.0");
		assert_eq!(second, "[pack]1.0.1");
	}
}
