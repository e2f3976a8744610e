//! Content model types.
//!
//! All page text and skill data lives in `const` instances of these types,
//! one per locale (see `en.rs` / `fr.rs`). Instances are built once, never
//! mutated, and shared freely across request handlers.

/// One skill with its self-assessed proficiency on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Expected range [0, 100]; values above 100 are clamped at render time.
    pub proficiency: u8,
}

/// A named grouping of related skills, rendered as one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Locale-independent identity. Translations must keep the same ids in
    /// the same order; this is what cross-locale validation aligns on.
    pub id: &'static str,
    /// Translated display label, icon glyph included.
    pub label: &'static str,
    pub skills: &'static [Skill],
}

/// The full set of translatable page text and structured skill data for one
/// locale. Field order follows the section order on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileContent {
    pub name: &'static str,
    pub job_title: &'static str,
    pub resume_button_label: &'static str,
    /// Multi-paragraph introduction; paragraphs separated by blank lines.
    pub intro_text: &'static str,
    pub skill_categories: &'static [SkillCategory],
    pub skills_heading: &'static str,
    pub what_i_can_do_heading: &'static str,
    pub what_i_can_do: &'static [&'static str],
    pub tips_heading: &'static str,
    pub tips: &'static [&'static str],
    pub motto_heading: &'static str,
    pub motto_text: &'static str,
    pub motto_attribution: &'static str,
    pub certification_label: &'static str,
    pub contact_footer: &'static str,
}
