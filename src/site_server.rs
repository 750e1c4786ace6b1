// Axum site server module
//
// Purpose: serve the catalog as HTML pages (home + topic detail) and a small
// JSON API over the same lookups.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::catalog::{Area, Catalog, Topic};
use crate::config::SiteConfig;
use crate::lookup::ResolutionFailure;
use crate::sampler;
use crate::web::handlers::{api, pages};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: Arc<SiteConfig>,
    /// Shared source for related-topic sampling. Locked only for the
    /// synchronous sampling call.
    related_rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        Self::with_catalog(Catalog::global(), config)
    }

    pub fn with_catalog(catalog: &'static Catalog, config: SiteConfig) -> anyhow::Result<Self> {
        catalog.validate()?;
        tracing::info!(
            "Catalog ready: {} areas, {} topics",
            catalog.areas().len(),
            catalog.topic_count()
        );

        let rng = match config.related_seed {
            Some(seed) => {
                tracing::info!("Related topics sampled with fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            catalog,
            config: Arc::new(config),
            related_rng: Arc::new(Mutex::new(rng)),
        })
    }

    /// Related topics for a detail page.
    pub fn sample_related(&self, area: &'static Area, exclude_slug: &str) -> Vec<&'static Topic> {
        let mut rng = self.related_rng.lock().unwrap_or_else(PoisonError::into_inner);
        sampler::sample_related(area.topics, exclude_slug, &mut *rng)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new().route(&config.path("/"), get(pages::home_page));
    if !config.base_path.is_empty() {
        // "/base" as well as "/base/"
        router = router.route(&config.base_path, get(pages::home_page));
    }

    router
        // Health check
        .route(&config.path("/health"), get(health_check))

        // JSON API
        .route(&config.path("/api/areas"), get(api::list_areas))
        .route(&config.path("/api/areas/:area"), get(api::get_area))
        .route(&config.path("/api/areas/:area/:topic"), get(api::get_topic))

        // Topic detail pages
        .route(&config.path("/:area/:topic"), get(pages::topic_page))

        // Stylesheet and assets
        .nest_service(&config.path("/static"), ServeDir::new(&config.static_dir))

        // Anything else goes back home
        .fallback(pages::redirect_home)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "areas": state.catalog.areas().len(),
        "topics": state.catalog.topic_count(),
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<ResolutionFailure> for AppError {
    fn from(failure: ResolutionFailure) -> Self {
        AppError::NotFound(failure.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
