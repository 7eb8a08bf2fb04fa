//! Named override registries for a host simulation's reagent data.
//!
//! Data packs register sparse, name-keyed patches ahead of time; when the
//! host rebuilds its reagent database it hands the fresh database to
//! [`PatchRegistry::apply_all`], which merges each patch in registration
//! order: inserting a new record when no name matches, or overlaying only
//! the explicitly-set fields onto the matched record otherwise. Reactions
//! between reagents resolve their references against the database as the
//! pass left it, so a reaction may use reagents inserted moments earlier.
//!
//! # Modules
//!
//! - [`reagent`] - Full records and their sparse patches
//! - [`reaction`] - Composite records referencing reagents by name
//! - [`registry`] - The insertion-ordered patch collections
//! - [`merge`] - The insert-or-overlay pass and its outcomes
//! - [`resolve`] - Name lookup against the live database
//! - [`database`] - The host-owned database boundary
//! - [`locale`] - Custom display strings with per-locale overrides
//! - [`version`] - Multiplayer version-string tagging
//!
//! Nothing here panics across a public operation: merge failures become
//! [`merge::MergeOutcome::Skipped`], locale failures become [`LocaleError`]
//! values or logged warnings with a usable fallback.

/// The host-owned database boundary.
pub mod database;
/// Error taxonomy.
pub mod error;
/// Custom display strings with per-locale overrides.
pub mod locale;
/// The insert-or-overlay merge pass.
pub mod merge;
/// Composite records referencing reagents by name.
pub mod reaction;
/// Full reagent records and their sparse patches.
pub mod reagent;
/// The insertion-ordered patch collections.
pub mod registry;
/// Name lookup against the live database.
pub mod resolve;
/// Multiplayer version-string tagging.
pub mod version;

pub use alkahest_base::{Behavior, Coefficient, Color, DisplayRef};
pub use database::ReagentDatabase;
pub use error::{LocaleError, MergeError};
pub use locale::{LocaleCatalog, LocaleKey, StringTable};
pub use merge::MergeOutcome;
pub use reaction::{Effect, Reactant, Reaction, ReactionPatch};
pub use reagent::{Reagent, ReagentPatch};
pub use registry::{Patch, PatchRegistry};
pub use resolve::find_reagent;
pub use version::VersionTags;
