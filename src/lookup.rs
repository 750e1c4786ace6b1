//! Lookup Service
//!
//! Resolves route segments to catalog entries. Matching is exact and
//! case-sensitive; a miss is an ordinary outcome, not an error condition.

use crate::catalog::{Area, Catalog, Topic};
use thiserror::Error;

/// Why a route could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionFailure {
    #[error("unknown area '{0}'")]
    UnknownArea(String),
    #[error("unknown topic '{topic}' in area '{area}'")]
    UnknownTopic { area: String, topic: String },
}

impl Catalog {
    /// Area by route segment.
    pub fn find_area(&self, slug: &str) -> Option<&'static Area> {
        self.area_index(slug).map(|idx| &self.areas()[idx])
    }

    /// Area and topic by route segments. Fails if the area is unknown, or
    /// if the area has no topic with that segment.
    pub fn find_topic(
        &self,
        area_slug: &str,
        topic_slug: &str,
    ) -> Option<(&'static Area, &'static Topic)> {
        self.resolve(area_slug, topic_slug).ok()
    }

    /// Same as [`Catalog::find_topic`], naming which segment missed.
    pub fn resolve(
        &self,
        area_slug: &str,
        topic_slug: &str,
    ) -> Result<(&'static Area, &'static Topic), ResolutionFailure> {
        let area = self
            .find_area(area_slug)
            .ok_or_else(|| ResolutionFailure::UnknownArea(area_slug.to_string()))?;

        let topic = area.topic(topic_slug).ok_or_else(|| ResolutionFailure::UnknownTopic {
            area: area_slug.to_string(),
            topic: topic_slug.to_string(),
        })?;

        Ok((area, topic))
    }
}
