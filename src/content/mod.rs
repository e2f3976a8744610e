//! Bilingual content model.
//!
//! All page text, skill taxonomy, and ratings live here, one static table per
//! locale. The module exposes three things:
//!
//! - `locale`: the closed `Locale` type and selector-label resolution
//! - `model`: the `ProfileContent` / `SkillCategory` / `Skill` types
//! - `catalog`: validated lookup (`ProfileCatalog`) over the locale set
//!
//! Content is authored in `en.rs` (canonical) and `fr.rs`; the catalog's
//! construction-time validation keeps the two structurally in lockstep.

mod catalog;
mod en;
mod fr;
mod locale;
mod model;

pub use catalog::{ContentSchemaError, ProfileCatalog};
pub use locale::{Locale, UnknownLanguageLabelError};
pub use model::{ProfileContent, Skill, SkillCategory};
