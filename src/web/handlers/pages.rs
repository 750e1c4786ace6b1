// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::catalog::{Area, AreaIntro, Catalog, Section, Topic};
use crate::site_server::{AppError, AppState};

// ============================================================================
// Home Page
// ============================================================================

/// One area block on the home page, with its optional intro card.
pub struct HomeArea {
    pub area: &'static Area,
    pub intro: Option<&'static AreaIntro>,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub base: &'a str,
    pub areas: Vec<HomeArea>,
}

/// Render the home page: every area, its intro and its topic cards.
pub fn render_home(catalog: &Catalog, base: &str) -> askama::Result<String> {
    let areas = catalog
        .areas()
        .iter()
        .map(|area| HomeArea {
            area,
            intro: catalog.intro(area.id),
        })
        .collect();

    HomeTemplate { base, areas }.render()
}

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_home(state.catalog, &state.config.base_path)?;
    Ok(Html(html))
}

// ============================================================================
// Topic Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/topic.html")]
pub struct TopicTemplate<'a> {
    pub base: &'a str,
    pub area: &'static Area,
    pub topic: &'static Topic,
    pub sections: Vec<Section>,
    pub related: Vec<&'static Topic>,
}

/// Render a topic detail page. Only the sections the topic actually has are
/// emitted.
pub fn render_topic(
    base: &str,
    area: &'static Area,
    topic: &'static Topic,
    related: Vec<&'static Topic>,
) -> askama::Result<String> {
    TopicTemplate {
        base,
        area,
        topic,
        sections: topic.sections(),
        related,
    }
    .render()
}

/// `/{area}/{topic}`; unknown slugs redirect to the home page.
pub async fn topic_page(
    State(state): State<AppState>,
    Path((area_slug, topic_slug)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let (area, topic) = match state.catalog.resolve(&area_slug, &topic_slug) {
        Ok(found) => found,
        Err(failure) => {
            tracing::info!("{}; redirecting home", failure);
            return Ok(Redirect::to(&state.config.home_href()).into_response());
        }
    };

    let related = state.sample_related(area, topic.slug);
    tracing::debug!(
        "Rendering {}/{} with {} related topics",
        area.slug,
        topic.slug,
        related.len()
    );

    let html = render_topic(&state.config.base_path, area, topic, related)?;
    Ok(Html(html).into_response())
}

/// Catch-all for unmatched paths.
pub async fn redirect_home(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.config.home_href())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_lists_every_topic_link() {
        let catalog = Catalog::global();
        let html = render_home(catalog, "").unwrap();
        for area in catalog.areas() {
            assert!(html.contains(&format!("id=\"{}\"", area.id)));
            for topic in area.topics {
                assert!(html.contains(&format!("href=\"/{}/{}\"", area.slug, topic.slug)));
            }
        }
        assert!(html.contains("Sobre discriminação e preconceitos"));
    }

    #[test]
    fn home_links_respect_base_path() {
        let html = render_home(Catalog::global(), "/responsabilidade-social").unwrap();
        assert!(html.contains("href=\"/responsabilidade-social/discriminacao-preconceitos/racismo\""));
        assert!(html.contains("href=\"/responsabilidade-social/static/site.css\""));
    }

    #[test]
    fn topic_with_only_definition_renders_one_section() {
        let (area, topic) = Catalog::global()
            .find_topic("direitos-e-igualdade", "educacao")
            .unwrap();
        let html = render_topic("", area, topic, Vec::new()).unwrap();

        assert_eq!(html.matches("class=\"content-section\"").count(), 1);
        assert!(html.contains("O que é"));
        assert!(!html.contains("Exemplos"));
        assert!(!html.contains("Outros temas"));
    }

    #[test]
    fn topic_page_renders_lists_and_related() {
        let catalog = Catalog::global();
        let (area, topic) = catalog
            .find_topic("discriminacao-preconceitos", "idadismo")
            .unwrap();
        let related = vec![area.topic("racismo").unwrap()];
        let html = render_topic("", area, topic, related).unwrap();

        assert_eq!(html.matches("class=\"content-section\"").count(), 8);
        assert!(html.contains("<li>Ageism Unmasked – Tracey Gendron</li>"));
        assert!(html.contains("Outros temas"));
        assert!(html.contains("href=\"/discriminacao-preconceitos/racismo\""));
    }

    #[test]
    fn topic_text_is_html_escaped() {
        let (area, topic) = Catalog::global()
            .find_topic("discriminacao-preconceitos", "classismo")
            .unwrap();
        let html = render_topic("", area, topic, Vec::new()).unwrap();
        // "Recrutamento por 'fit' social."
        assert!(html.contains("Recrutamento por &#x27;fit&#x27; social."));
    }
}
