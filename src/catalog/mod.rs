//! Content Catalog
//!
//! Compiled-in, read-only catalog of areas and their topics.
//!
//! ## Layout
//! - `types`: Area / Topic / Content model and section iteration
//! - `data`: the published texts (Portuguese), as `'static` literals
//!
//! The process-wide instance is built once on first use by
//! [`Catalog::global`] and never modified afterwards.

pub mod data;
pub mod types;

pub use types::{Area, AreaIntro, Content, Section, SectionBody, SectionKey, Topic};

use rustc_hash::FxHashMap;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Structural problems in catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate area id '{0}'")]
    DuplicateAreaId(&'static str),
    #[error("duplicate area slug '{0}'")]
    DuplicateAreaSlug(&'static str),
    #[error("area '{0}' has no topics")]
    EmptyArea(&'static str),
    #[error("duplicate topic slug '{topic}' in area '{area}'")]
    DuplicateTopicSlug { area: &'static str, topic: &'static str },
    #[error("slug '{0}' is not URL-safe (expected lowercase ascii, digits and '-')")]
    InvalidSlug(&'static str),
    #[error("intro '{0}' does not match any area id")]
    DanglingIntro(&'static str),
}

/// Read-only catalog of areas with a slug index.
#[derive(Debug)]
pub struct Catalog {
    areas: &'static [Area],
    intros: &'static [AreaIntro],
    /// Area slug -> position in `areas` (first occurrence wins)
    by_slug: FxHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(areas: &'static [Area], intros: &'static [AreaIntro]) -> Self {
        let mut by_slug = FxHashMap::default();
        for (idx, area) in areas.iter().enumerate() {
            by_slug.entry(area.slug).or_insert(idx);
        }
        Self { areas, intros, by_slug }
    }

    /// The published catalog, initialized on first call.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            let catalog = Catalog::new(data::AREAS, data::INTROS);
            tracing::debug!(
                "Catalog loaded: {} areas, {} topics",
                catalog.areas.len(),
                catalog.topic_count()
            );
            catalog
        })
    }

    /// All areas in display order.
    pub fn areas(&self) -> &'static [Area] {
        self.areas
    }

    /// Intro card for an area identifier, if one exists.
    pub fn intro(&self, area_id: &str) -> Option<&'static AreaIntro> {
        self.intros.iter().find(|i| i.area_id == area_id)
    }

    pub fn topic_count(&self) -> usize {
        self.areas.iter().map(|a| a.topics.len()).sum()
    }

    pub(crate) fn area_index(&self, slug: &str) -> Option<usize> {
        self.by_slug.get(slug).copied()
    }

    /// Check the structural invariants of the data.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for area in self.areas {
            if !ids.insert(area.id) {
                return Err(CatalogError::DuplicateAreaId(area.id));
            }
            if !is_url_safe(area.slug) {
                return Err(CatalogError::InvalidSlug(area.slug));
            }
            if !slugs.insert(area.slug) {
                return Err(CatalogError::DuplicateAreaSlug(area.slug));
            }
            if area.topics.is_empty() {
                return Err(CatalogError::EmptyArea(area.slug));
            }

            let mut topic_slugs = HashSet::new();
            for topic in area.topics {
                if !is_url_safe(topic.slug) {
                    return Err(CatalogError::InvalidSlug(topic.slug));
                }
                if !topic_slugs.insert(topic.slug) {
                    return Err(CatalogError::DuplicateTopicSlug {
                        area: area.slug,
                        topic: topic.slug,
                    });
                }
            }
        }

        for intro in self.intros {
            if !ids.contains(intro.area_id) {
                return Err(CatalogError::DanglingIntro(intro.area_id));
            }
        }

        Ok(())
    }
}

/// Lowercase ascii letters, digits and '-'; non-empty.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC_A: Topic = Topic {
        slug: "a",
        title: "A",
        image: "",
        summary: "",
        content: None,
    };
    const TOPIC_B: Topic = Topic { slug: "b", title: "B", ..TOPIC_A };

    const fn area(id: &'static str, slug: &'static str, topics: &'static [Topic]) -> Area {
        Area { id, slug, title: "", description: "", topics }
    }

    #[test]
    fn global_catalog_is_valid() {
        let catalog = Catalog::global();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.areas().len(), 2);
        assert!(std::ptr::eq(catalog, Catalog::global()));
    }

    #[test]
    fn every_area_has_an_intro() {
        let catalog = Catalog::global();
        for area in catalog.areas() {
            assert!(catalog.intro(area.id).is_some(), "missing intro for {}", area.id);
        }
    }

    #[test]
    fn intro_is_found_by_area_id_only() {
        static AREAS: [Area; 1] = [area("x", "area-x", &[TOPIC_A])];
        static INTROS: [AreaIntro; 1] = [AreaIntro { area_id: "x", title: "Sobre x", text: "" }];
        let catalog = Catalog::new(&AREAS, &INTROS);
        assert_eq!(catalog.intro("x").map(|i| i.title), Some("Sobre x"));
        assert!(catalog.intro("area-x").is_none());
        assert!(catalog.intro("nope").is_none());
    }

    #[test]
    fn topic_count_sums_areas() {
        static AREAS: [Area; 2] = [
            area("x", "x", &[TOPIC_A, TOPIC_B]),
            area("y", "y", &[TOPIC_A]),
        ];
        assert_eq!(Catalog::new(&AREAS, &[]).topic_count(), 3);
    }

    #[test]
    fn rejects_duplicate_area_slug() {
        static AREAS: [Area; 2] = [area("x", "same", &[TOPIC_A]), area("y", "same", &[TOPIC_A])];
        assert_eq!(
            Catalog::new(&AREAS, &[]).validate(),
            Err(CatalogError::DuplicateAreaSlug("same"))
        );
    }

    #[test]
    fn rejects_duplicate_area_id() {
        static AREAS: [Area; 2] = [area("x", "one", &[TOPIC_A]), area("x", "two", &[TOPIC_A])];
        assert_eq!(
            Catalog::new(&AREAS, &[]).validate(),
            Err(CatalogError::DuplicateAreaId("x"))
        );
    }

    #[test]
    fn rejects_empty_area() {
        static AREAS: [Area; 1] = [area("x", "vazia", &[])];
        assert_eq!(
            Catalog::new(&AREAS, &[]).validate(),
            Err(CatalogError::EmptyArea("vazia"))
        );
    }

    #[test]
    fn rejects_duplicate_topic_within_area() {
        static AREAS: [Area; 1] = [area("x", "x", &[TOPIC_A, TOPIC_A])];
        assert_eq!(
            Catalog::new(&AREAS, &[]).validate(),
            Err(CatalogError::DuplicateTopicSlug { area: "x", topic: "a" })
        );
    }

    #[test]
    fn same_topic_slug_in_different_areas_is_fine() {
        static AREAS: [Area; 2] = [area("x", "x", &[TOPIC_A]), area("y", "y", &[TOPIC_A])];
        assert_eq!(Catalog::new(&AREAS, &[]).validate(), Ok(()));
    }

    #[test]
    fn rejects_unsafe_slug() {
        static AREAS: [Area; 1] = [area("x", "Com Espaço", &[TOPIC_A])];
        assert_eq!(
            Catalog::new(&AREAS, &[]).validate(),
            Err(CatalogError::InvalidSlug("Com Espaço"))
        );
    }

    #[test]
    fn rejects_dangling_intro() {
        static AREAS: [Area; 1] = [area("x", "x", &[TOPIC_A])];
        static INTROS: [AreaIntro; 1] = [AreaIntro { area_id: "nope", title: "", text: "" }];
        assert_eq!(
            Catalog::new(&AREAS, &INTROS).validate(),
            Err(CatalogError::DanglingIntro("nope"))
        );
    }

    #[test]
    fn url_safe_slugs() {
        assert!(is_url_safe("discriminacao-preconceitos"));
        assert!(is_url_safe("lgbtqfobia"));
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("Racismo"));
        assert!(!is_url_safe("a/b"));
        assert!(!is_url_safe("educação"));
    }
}
