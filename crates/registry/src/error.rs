use thiserror::Error;

/// Errors produced while merging patches into a host database.
///
/// These never cross `apply_all` as a `Result`; a failed record becomes a
/// [`MergeOutcome::Skipped`] and the pass continues. Partial success is
/// always preferable to aborting the host's one-shot rebuild.
///
/// [`MergeOutcome::Skipped`]: crate::merge::MergeOutcome::Skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
	/// A reaction referenced a reagent name absent from the database at
	/// resolution time.
	#[error("reaction #{reaction}: missing dependency `{missing}`")]
	MissingDependency {
		/// Registration-order index of the failing reaction patch.
		reaction: usize,
		/// The reagent name that could not be resolved.
		missing: Box<str>,
	},
}

/// Errors from the locale catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
	/// The host does not recognize the locale code; the translation was
	/// not stored and the key's default text stays authoritative.
	#[error("unrecognized locale code `{0}`")]
	UnrecognizedLocale(Box<str>),
	/// No key with this name was ever registered.
	#[error("no locale key registered for `{0}`")]
	UnknownKey(Box<str>),
}
