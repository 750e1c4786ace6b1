//! Responsabilidade Social
//!
//! Content site about discrimination, rights and equality, served from a
//! compiled-in catalog.
//!
//! - `catalog/`: areas, topics and their content sections (static data)
//! - `lookup`: slug resolution (`find_area`, `find_topic`, `resolve`)
//! - `sampler`: random related-topic suggestions
//! - `config`: environment configuration
//! - `site_server` + `web/`: axum router, askama pages, JSON API (feature `web`)

pub mod catalog;
pub mod config;
pub mod lookup;
pub mod sampler;

#[cfg(feature = "web")]
pub mod site_server;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use catalog::{Area, AreaIntro, Catalog, CatalogError, Content, Section, SectionBody, SectionKey, Topic};
pub use config::{ConfigError, SiteConfig};
pub use lookup::ResolutionFailure;
pub use sampler::{sample_related, sample_related_n, RELATED_LIMIT};

#[cfg(feature = "web")]
pub use site_server::{create_router, AppError, AppState};
