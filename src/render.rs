//! Page renderer: resolves a locale's content into ordered section
//! descriptors and forwards them to a rendering collaborator.
//!
//! Resolution is pure and stateless: the same context always yields the same
//! section list, and re-selecting a language is a full re-resolution rather
//! than an incremental patch. The only defensive logic is the proficiency
//! clamp; one bad rating must not take down the whole page.

use serde::Serialize;
use tracing::warn;

use crate::assets::{AssetStore, RESUME_FILENAME};
use crate::content::{Locale, ProfileContent};

/// Path the identity section binds the resume download to.
pub const RESUME_HREF: &str = "/resume.pdf";

/// Explicit per-render context. Holds the resolved locale and content; no
/// ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub locale: Locale,
    pub content: &'a ProfileContent,
    pub assets: &'a AssetStore,
}

/// Discriminant of a [`Section`], used to assert page ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Identity,
    Intro,
    Skills,
    Capabilities,
    Tips,
    Motto,
    Certification,
    Contact,
}

/// One skill row, proficiency already clamped to the 0-100 indicator scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRow {
    pub name: &'static str,
    pub level: u8,
}

/// One skill-category tab with its resolved rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillTab {
    pub id: &'static str,
    pub label: &'static str,
    pub skills: Vec<SkillRow>,
}

/// One discrete, ordered unit of page output.
///
/// Each variant carries its own typed payload; the rendering collaborator
/// consumes them uniformly through [`SectionSink::emit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Identity {
        name: &'static str,
        job_title: &'static str,
        portrait_data_uri: String,
        resume_label: &'static str,
        resume_href: &'static str,
        resume_filename: &'static str,
    },
    Intro {
        text: &'static str,
    },
    Skills {
        heading: &'static str,
        tabs: Vec<SkillTab>,
    },
    Capabilities {
        heading: &'static str,
        items: &'static [&'static str],
    },
    Tips {
        heading: &'static str,
        items: &'static [&'static str],
    },
    Motto {
        heading: &'static str,
        text: &'static str,
        attribution: &'static str,
    },
    Certification {
        label: &'static str,
    },
    Contact {
        footer: &'static str,
    },
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Identity { .. } => SectionKind::Identity,
            Section::Intro { .. } => SectionKind::Intro,
            Section::Skills { .. } => SectionKind::Skills,
            Section::Capabilities { .. } => SectionKind::Capabilities,
            Section::Tips { .. } => SectionKind::Tips,
            Section::Motto { .. } => SectionKind::Motto,
            Section::Certification { .. } => SectionKind::Certification,
            Section::Contact { .. } => SectionKind::Contact,
        }
    }
}

/// The seam to the external rendering collaborator. The renderer resolves
/// sections and emits them in page order; the sink owns pixels and markup.
pub trait SectionSink {
    fn emit(&mut self, section: &Section);
}

/// Clamp a raw proficiency onto the 0-100 indicator scale.
///
/// Values above 100 violate the content invariant; they are clamped and
/// logged rather than crashing the page. `u8` makes negatives
/// unrepresentable, so only the upper bound needs handling.
fn clamp_proficiency(category: &str, skill: &str, raw: u8) -> u8 {
    if raw > 100 {
        warn!("proficiency {raw} out of range for {category}/{skill}, clamping to 100");
        100
    } else {
        raw
    }
}

/// Resolve the content into the fixed page section order.
///
/// The order is a contract:
/// identity, intro, skills, capabilities, tips, motto, certification, contact.
pub fn resolve_sections(ctx: &RenderContext<'_>) -> Vec<Section> {
    let content = ctx.content;

    let tabs = content
        .skill_categories
        .iter()
        .map(|category| SkillTab {
            id: category.id,
            label: category.label,
            skills: category
                .skills
                .iter()
                .map(|skill| SkillRow {
                    name: skill.name,
                    level: clamp_proficiency(category.id, skill.name, skill.proficiency),
                })
                .collect(),
        })
        .collect();

    vec![
        Section::Identity {
            name: content.name,
            job_title: content.job_title,
            portrait_data_uri: ctx.assets.portrait_data_uri.clone(),
            resume_label: content.resume_button_label,
            resume_href: RESUME_HREF,
            resume_filename: RESUME_FILENAME,
        },
        Section::Intro {
            text: content.intro_text,
        },
        Section::Skills {
            heading: content.skills_heading,
            tabs,
        },
        Section::Capabilities {
            heading: content.what_i_can_do_heading,
            items: content.what_i_can_do,
        },
        Section::Tips {
            heading: content.tips_heading,
            items: content.tips,
        },
        Section::Motto {
            heading: content.motto_heading,
            text: content.motto_text,
            attribution: content.motto_attribution,
        },
        Section::Certification {
            label: content.certification_label,
        },
        Section::Contact {
            footer: content.contact_footer,
        },
    ]
}

/// Resolve and forward every section, in order, to the sink.
pub fn render_page(ctx: &RenderContext<'_>, sink: &mut dyn SectionSink) {
    for section in resolve_sections(ctx) {
        sink.emit(&section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Locale, ProfileCatalog, ProfileContent, Skill, SkillCategory};

    fn test_assets() -> AssetStore {
        AssetStore {
            portrait_data_uri: "data:image/png;base64,dGVzdA==".to_string(),
            resume_pdf: b"%PDF-1.4 test".to_vec(),
        }
    }

    fn kinds(sections: &[Section]) -> Vec<SectionKind> {
        sections.iter().map(Section::kind).collect()
    }

    const PAGE_ORDER: [SectionKind; 8] = [
        SectionKind::Identity,
        SectionKind::Intro,
        SectionKind::Skills,
        SectionKind::Capabilities,
        SectionKind::Tips,
        SectionKind::Motto,
        SectionKind::Certification,
        SectionKind::Contact,
    ];

    // ==================== Ordering Tests ====================

    #[test]
    fn test_section_order_english() {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = test_assets();
        let ctx = RenderContext {
            locale: Locale::En,
            content: catalog.get(Locale::En),
            assets: &assets,
        };

        assert_eq!(kinds(&resolve_sections(&ctx)), PAGE_ORDER);
    }

    #[test]
    fn test_section_order_identical_across_locales() {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = test_assets();
        for locale in Locale::ALL {
            let ctx = RenderContext {
                locale,
                content: catalog.get(locale),
                assets: &assets,
            };
            assert_eq!(kinds(&resolve_sections(&ctx)), PAGE_ORDER, "{locale:?}");
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = test_assets();
        let ctx = RenderContext {
            locale: Locale::Fr,
            content: catalog.get(Locale::Fr),
            assets: &assets,
        };

        assert_eq!(resolve_sections(&ctx), resolve_sections(&ctx));
    }

    // ==================== Payload Tests ====================

    #[test]
    fn test_single_category_fixture_end_to_end() {
        const SKILLS: &[Skill] = &[Skill { name: "Routing", proficiency: 90 }];
        const CATEGORIES: &[SkillCategory] = &[SkillCategory {
            id: "networking",
            label: "Networking",
            skills: SKILLS,
        }];
        let content = ProfileContent {
            skill_categories: CATEGORIES,
            ..*ProfileCatalog::load().unwrap().get(Locale::En)
        };
        let assets = test_assets();
        let ctx = RenderContext {
            locale: Locale::En,
            content: &content,
            assets: &assets,
        };

        let sections = resolve_sections(&ctx);
        let skills = sections
            .iter()
            .find_map(|s| match s {
                Section::Skills { tabs, .. } => Some(tabs),
                _ => None,
            })
            .expect("skills section present");

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].label, "Networking");
        assert_eq!(
            skills[0].skills,
            vec![SkillRow { name: "Routing", level: 90 }]
        );
    }

    #[test]
    fn test_identity_binds_resume_download() {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = test_assets();
        for locale in Locale::ALL {
            let ctx = RenderContext {
                locale,
                content: catalog.get(locale),
                assets: &assets,
            };
            let sections = resolve_sections(&ctx);
            match &sections[0] {
                Section::Identity {
                    resume_href,
                    resume_filename,
                    resume_label,
                    ..
                } => {
                    // Payload and filename are locale-independent; only the
                    // label translates.
                    assert_eq!(*resume_href, RESUME_HREF);
                    assert_eq!(*resume_filename, RESUME_FILENAME);
                    assert_eq!(*resume_label, catalog.get(locale).resume_button_label);
                }
                other => panic!("expected identity first, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tips_emitted_as_distinct_items() {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = test_assets();
        let ctx = RenderContext {
            locale: Locale::En,
            content: catalog.get(Locale::En),
            assets: &assets,
        };

        let sections = resolve_sections(&ctx);
        let tips = sections
            .iter()
            .find_map(|s| match s {
                Section::Tips { items, .. } => Some(items),
                _ => None,
            })
            .unwrap();
        assert_eq!(tips.len(), catalog.get(Locale::En).tips.len());
    }

    // ==================== Clamping Tests ====================

    #[test]
    fn test_out_of_range_proficiency_is_clamped_not_fatal() {
        const SKILLS: &[Skill] = &[
            Skill { name: "Routing", proficiency: 250 },
            Skill { name: "Switching", proficiency: 100 },
        ];
        const CATEGORIES: &[SkillCategory] = &[SkillCategory {
            id: "networking",
            label: "Networking",
            skills: SKILLS,
        }];
        let content = ProfileContent {
            skill_categories: CATEGORIES,
            ..*ProfileCatalog::load().unwrap().get(Locale::En)
        };
        let assets = test_assets();
        let ctx = RenderContext {
            locale: Locale::En,
            content: &content,
            assets: &assets,
        };

        let sections = resolve_sections(&ctx);
        let tabs = sections
            .iter()
            .find_map(|s| match s {
                Section::Skills { tabs, .. } => Some(tabs),
                _ => None,
            })
            .unwrap();
        assert_eq!(tabs[0].skills[0].level, 100);
        assert_eq!(tabs[0].skills[1].level, 100);
    }

    #[test]
    fn test_clamp_preserves_in_range_values() {
        assert_eq!(clamp_proficiency("c", "s", 0), 0);
        assert_eq!(clamp_proficiency("c", "s", 73), 73);
        assert_eq!(clamp_proficiency("c", "s", 100), 100);
    }

    // ==================== Sink Tests ====================

    struct RecordingSink(Vec<SectionKind>);

    impl SectionSink for RecordingSink {
        fn emit(&mut self, section: &Section) {
            self.0.push(section.kind());
        }
    }

    #[test]
    fn test_render_page_forwards_all_sections_in_order() {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = test_assets();
        let ctx = RenderContext {
            locale: Locale::En,
            content: catalog.get(Locale::En),
            assets: &assets,
        };

        let mut sink = RecordingSink(Vec::new());
        render_page(&ctx, &mut sink);
        assert_eq!(sink.0, PAGE_ORDER);
    }

    // ==================== Property Tests ====================

    proptest::proptest! {
        #[test]
        fn prop_clamped_level_always_in_range(raw: u8) {
            let level = clamp_proficiency("cat", "skill", raw);
            proptest::prop_assert!(level <= 100);
            if raw <= 100 {
                proptest::prop_assert_eq!(level, raw);
            }
        }
    }
}
