//! Profile catalog: locale lookup plus construction-time schema validation.
//!
//! The catalog is the single source of truth for page content. It is built
//! once at startup; building it asserts the cross-locale invariants so that a
//! translation that drifts out of sync with the canonical content can never
//! reach a render pass.

use thiserror::Error;

use super::en::ENGLISH_CONTENT;
use super::fr::FRENCH_CONTENT;
use super::locale::Locale;
use super::model::ProfileContent;

/// A structural mismatch between a translated locale and the canonical one.
///
/// Fatal at startup: a page with mismatched translations is worse than no
/// page. Each variant names the first offending index so the drifted entry
/// can be found without diffing the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentSchemaError {
    #[error(
        "locale '{locale}' has {found} skill categories, canonical has {expected}"
    )]
    CategoryCountMismatch {
        locale: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "locale '{locale}' category {index}: identity '{found}' does not match canonical '{expected}'"
    )]
    CategoryIdentityMismatch {
        locale: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error(
        "locale '{locale}' category {index} ('{category}') has {found} skills, canonical has {expected}"
    )]
    SkillCountMismatch {
        locale: &'static str,
        index: usize,
        category: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Read-only lookup of per-locale page content.
///
/// Construction runs the schema validation; a successfully built catalog is
/// proof that every locale aligns with the canonical one.
#[derive(Debug, Clone, Copy)]
pub struct ProfileCatalog {
    _validated: (),
}

impl ProfileCatalog {
    /// Build the catalog, asserting the cross-locale invariants.
    ///
    /// # Returns
    /// * `Ok(ProfileCatalog)` when every locale's categories align with the
    ///   canonical locale by identity, order, and skill count
    /// * `Err(ContentSchemaError)` naming the first mismatch otherwise
    pub fn load() -> Result<ProfileCatalog, ContentSchemaError> {
        let canonical = content_for(Locale::canonical());
        for locale in Locale::ALL {
            if locale == Locale::canonical() {
                continue;
            }
            validate_against_canonical(locale, content_for(locale), canonical)?;
        }
        Ok(ProfileCatalog { _validated: () })
    }

    /// Look up the content for a locale. Total over the closed locale set.
    pub fn get(&self, locale: Locale) -> &'static ProfileContent {
        content_for(locale)
    }
}

fn content_for(locale: Locale) -> &'static ProfileContent {
    match locale {
        Locale::En => &ENGLISH_CONTENT,
        Locale::Fr => &FRENCH_CONTENT,
    }
}

/// Compare one translated locale against the canonical structure.
///
/// Alignment is by category identity (the locale-independent `id` slug), not
/// by label text, so translated labels are free to differ while additions,
/// drops, and reorders are rejected. Skill rows are compared by count only;
/// skill names are translatable.
fn validate_against_canonical(
    locale: Locale,
    content: &ProfileContent,
    canonical: &ProfileContent,
) -> Result<(), ContentSchemaError> {
    if content.skill_categories.len() != canonical.skill_categories.len() {
        return Err(ContentSchemaError::CategoryCountMismatch {
            locale: locale.code(),
            expected: canonical.skill_categories.len(),
            found: content.skill_categories.len(),
        });
    }

    for (index, (translated, reference)) in content
        .skill_categories
        .iter()
        .zip(canonical.skill_categories.iter())
        .enumerate()
    {
        if translated.id != reference.id {
            return Err(ContentSchemaError::CategoryIdentityMismatch {
                locale: locale.code(),
                index,
                expected: reference.id,
                found: translated.id,
            });
        }

        if translated.skills.len() != reference.skills.len() {
            return Err(ContentSchemaError::SkillCountMismatch {
                locale: locale.code(),
                index,
                category: translated.id,
                expected: reference.skills.len(),
                found: translated.skills.len(),
            });
        }
    }

    Ok(())
}
