//! Export the site as static HTML
//!
//! Writes `index.html`, one `{area}/{topic}/index.html` per topic and the
//! stylesheet into the output directory (default `dist`).
//! Run with: cargo run --bin export_site -- [OUTPUT_DIR]
//!
//! `SITE_BASE_PATH` sets the link prefix, `RELATED_SEED` makes the related
//! blocks reproducible.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use responsabilidade_social::web::handlers::pages::{render_home, render_topic};
use responsabilidade_social::{sample_related, Catalog, SiteConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "responsabilidade_social=info,export_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let config = SiteConfig::from_env()?;

    let catalog = Catalog::global();
    catalog.validate()?;

    let mut rng = match config.related_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let home = render_home(catalog, &config.base_path)?;
    write_page(&out_dir.join("index.html"), &home)?;

    let mut pages = 1;
    for area in catalog.areas() {
        for topic in area.topics {
            let related = sample_related(area.topics, topic.slug, &mut rng);
            let html = render_topic(&config.base_path, area, topic, related)?;
            let page_dir = out_dir.join(area.slug).join(topic.slug);
            fs::create_dir_all(&page_dir)
                .with_context(|| format!("creating {}", page_dir.display()))?;
            write_page(&page_dir.join("index.html"), &html)?;
            pages += 1;
        }
    }

    let css_src = config.static_dir.join("site.css");
    if css_src.exists() {
        let css_dir = out_dir.join("static");
        fs::create_dir_all(&css_dir)?;
        fs::copy(&css_src, css_dir.join("site.css"))
            .with_context(|| format!("copying {}", css_src.display()))?;
    } else {
        tracing::warn!("Stylesheet not found at {}", css_src.display());
    }

    tracing::info!("Exported {} pages to {}", pages, out_dir.display());
    Ok(())
}

fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!("  Saved: {}", path.display());
    Ok(())
}
