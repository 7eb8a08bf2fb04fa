//! Locale catalog: custom display strings with per-locale overrides.
//!
//! The host purges its string table on every locale change, so the catalog
//! is built to be re-applied: [`LocaleCatalog::apply`] writes every key
//! into a fresh table, choosing the per-locale text when one exists and
//! the registered default otherwise.

use indexmap::IndexMap;

use crate::error::LocaleError;

/// One localization key with a default text and per-locale overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKey {
	key: Box<str>,
	default_text: Box<str>,
	translations: IndexMap<Box<str>, Box<str>>,
}

impl LocaleKey {
	fn new(key: Box<str>, default_text: Box<str>) -> Self {
		Self {
			key,
			default_text,
			translations: IndexMap::new(),
		}
	}

	/// The lookup key (e.g. `"REAGENT_HOLY_WATER"`).
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The text used when no override exists for the active locale.
	pub fn default_text(&self) -> &str {
		&self.default_text
	}

	/// The stored override for a locale code, if any.
	pub fn translation(&self, code: &str) -> Option<&str> {
		self.translations.get(code).map(Box::as_ref)
	}

	/// The text to use for a locale: override if present, else default.
	pub fn text_for(&self, code: &str) -> &str {
		self.translation(code).unwrap_or(&self.default_text)
	}
}

/// A host-owned keyed string table, rebuilt by the host on every locale
/// change and refilled by [`LocaleCatalog::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringTable {
	entries: IndexMap<Box<str>, Box<str>>,
}

impl StringTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an entry, replacing any previous text for the key.
	pub fn set(&mut self, key: impl Into<Box<str>>, text: impl Into<Box<str>>) {
		self.entries.insert(key.into(), text.into());
	}

	/// Looks up an entry.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(Box::as_ref)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the table has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Registry of custom localization keys, validated against the locale
/// codes the host recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleCatalog {
	recognized: Vec<Box<str>>,
	keys: Vec<LocaleKey>,
}

impl LocaleCatalog {
	/// Creates a catalog that accepts translations only for the given
	/// host-recognized locale codes.
	pub fn new<I, S>(recognized: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		Self {
			recognized: recognized.into_iter().map(Into::into).collect(),
			keys: Vec::new(),
		}
	}

	/// Registers a key with its default text. Later translations attach to
	/// it by key name.
	pub fn add_key(&mut self, key: impl Into<Box<str>>, default_text: impl Into<Box<str>>) {
		self.keys.push(LocaleKey::new(key.into(), default_text.into()));
	}

	/// Adds a per-locale override for an already registered key.
	///
	/// Rejected with [`LocaleError::UnrecognizedLocale`] when the host does
	/// not know the code; nothing is stored and the default stays
	/// authoritative.
	pub fn add_translation(
		&mut self,
		key: &str,
		code: &str,
		text: impl Into<Box<str>>,
	) -> Result<(), LocaleError> {
		if !self.recognized.iter().any(|c| c.as_ref() == code) {
			tracing::error!(code, "could not find locale code for the host");
			return Err(LocaleError::UnrecognizedLocale(code.into()));
		}
		let entry = self
			.keys
			.iter_mut()
			.find(|k| k.key.as_ref() == key)
			.ok_or_else(|| LocaleError::UnknownKey(key.into()))?;
		entry.translations.insert(code.into(), text.into());
		Ok(())
	}

	/// Registered keys, in registration order.
	pub fn keys(&self) -> &[LocaleKey] {
		&self.keys
	}

	/// The display text for a key under the active locale.
	///
	/// Falls back to the key's default text when no override exists for
	/// the locale, and to the key string itself when the key was never
	/// registered (with a warning). Never fails the caller.
	pub fn display<'a>(&'a self, key: &'a str, active_code: &str) -> &'a str {
		match self.keys.iter().find(|k| k.key.as_ref() == key) {
			Some(entry) => entry.text_for(active_code),
			None => {
				tracing::warn!(key, "no locale entry found");
				key
			}
		}
	}

	/// Writes every registered key into a host string table for the active
	/// locale.
	///
	/// The host resets its tables each locale change, so this runs on
	/// every change; re-applying into a fresh table is always safe.
	pub fn apply(&self, table: &mut StringTable, active_code: &str) {
		tracing::info!(locale = active_code, "applying custom localization");
		for entry in &self.keys {
			table.set(entry.key.clone(), entry.text_for(active_code));
		}
	}
}
