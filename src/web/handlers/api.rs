// JSON API handlers over the catalog lookups

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use crate::catalog::{Area, AreaIntro, Section, Topic};
use crate::site_server::{AppError, AppState};

/// Area listing entry: metadata plus topic slugs.
#[derive(Debug, Serialize)]
pub struct AreaSummary {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub topics: Vec<&'static str>,
}

impl From<&'static Area> for AreaSummary {
    fn from(area: &'static Area) -> Self {
        Self {
            id: area.id,
            slug: area.slug,
            title: area.title,
            description: area.description,
            topics: area.topics.iter().map(|t| t.slug).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AreaResponse {
    #[serde(flatten)]
    pub area: &'static Area,
    pub intro: Option<&'static AreaIntro>,
}

/// Card-sized view of a topic, used for related suggestions.
#[derive(Debug, Serialize)]
pub struct TopicCard {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

impl From<&'static Topic> for TopicCard {
    fn from(topic: &'static Topic) -> Self {
        Self {
            slug: topic.slug,
            title: topic.title,
            summary: topic.summary,
            image: topic.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub area: AreaSummary,
    pub topic: TopicCard,
    pub sections: Vec<Section>,
    pub related: Vec<TopicCard>,
}

pub async fn list_areas(State(state): State<AppState>) -> Json<Vec<AreaSummary>> {
    Json(state.catalog.areas().iter().map(AreaSummary::from).collect())
}

pub async fn get_area(
    State(state): State<AppState>,
    Path(area_slug): Path<String>,
) -> Result<Json<AreaResponse>, AppError> {
    let area = state
        .catalog
        .find_area(&area_slug)
        .ok_or_else(|| AppError::NotFound(format!("unknown area '{}'", area_slug)))?;

    Ok(Json(AreaResponse {
        area,
        intro: state.catalog.intro(area.id),
    }))
}

pub async fn get_topic(
    State(state): State<AppState>,
    Path((area_slug, topic_slug)): Path<(String, String)>,
) -> Result<Json<TopicResponse>, AppError> {
    let (area, topic) = state.catalog.resolve(&area_slug, &topic_slug)?;
    let related = state.sample_related(area, topic.slug);

    Ok(Json(TopicResponse {
        area: AreaSummary::from(area),
        topic: TopicCard::from(topic),
        sections: topic.sections(),
        related: related.into_iter().map(TopicCard::from).collect(),
    }))
}
