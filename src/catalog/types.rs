//! Content model for the catalog.
//!
//! Everything here is built from `'static` literals, so the types hold
//! borrowed `&'static str` / `&'static [_]` and are `Copy`.

use serde::Serialize;

/// Top-level content category grouping related topics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Area {
    /// Stable key (e.g. "discriminacao"), used to attach the intro card.
    pub id: &'static str,
    /// Route segment, unique across all areas.
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub topics: &'static [Topic],
}

impl Area {
    /// Exact, case-sensitive match on the topic route segment.
    pub fn topic(&self, slug: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|t| t.slug == slug)
    }
}

/// A single informational subject.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Topic {
    /// Route segment, unique within the parent area.
    pub slug: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
    pub content: Option<Content>,
}

impl Topic {
    /// Present sections in display order. A topic without content yields
    /// nothing.
    pub fn sections(&self) -> Vec<Section> {
        self.content.map(|c| c.sections()).unwrap_or_default()
    }
}

/// Introductory card shown above an area's topic grid on the home page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AreaIntro {
    /// Area identifier this intro belongs to.
    pub area_id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Optional named sections of a topic.
///
/// Field names follow the section keys used in the published pages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Content {
    pub definicao: Option<&'static str>,
    pub consequencias: Option<&'static str>,
    pub exemplos: Option<&'static [&'static str]>,
    pub atitudes: Option<&'static [&'static str]>,
    pub mudar: Option<&'static str>,
    pub empresas: Option<&'static [&'static str]>,
    pub livros: Option<&'static [&'static str]>,
    pub artigos: Option<&'static [&'static str]>,
}

impl Content {
    /// No section set. Used as the base for struct update syntax in the
    /// static data.
    pub const EMPTY: Content = Content {
        definicao: None,
        consequencias: None,
        exemplos: None,
        atitudes: None,
        mudar: None,
        empresas: None,
        livros: None,
        artigos: None,
    };

    pub fn get(&self, key: SectionKey) -> Option<SectionBody> {
        let body = match key {
            SectionKey::Definicao => self.definicao.map(SectionBody::Text),
            SectionKey::Consequencias => self.consequencias.map(SectionBody::Text),
            SectionKey::Exemplos => self.exemplos.map(SectionBody::Items),
            SectionKey::Atitudes => self.atitudes.map(SectionBody::Items),
            SectionKey::Mudar => self.mudar.map(SectionBody::Text),
            SectionKey::Empresas => self.empresas.map(SectionBody::Items),
            SectionKey::Livros => self.livros.map(SectionBody::Items),
            SectionKey::Artigos => self.artigos.map(SectionBody::Items),
        };
        body.filter(|b| !b.is_empty())
    }

    pub fn sections(&self) -> Vec<Section> {
        SectionKey::ALL
            .iter()
            .filter_map(|&key| self.get(key).map(|body| Section { key, body }))
            .collect()
    }
}

/// Recognized content sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Definicao,
    Consequencias,
    Exemplos,
    Atitudes,
    Mudar,
    Empresas,
    Livros,
    Artigos,
}

impl SectionKey {
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Definicao,
        SectionKey::Consequencias,
        SectionKey::Exemplos,
        SectionKey::Atitudes,
        SectionKey::Mudar,
        SectionKey::Empresas,
        SectionKey::Livros,
        SectionKey::Artigos,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SectionKey::Definicao => "definicao",
            SectionKey::Consequencias => "consequencias",
            SectionKey::Exemplos => "exemplos",
            SectionKey::Atitudes => "atitudes",
            SectionKey::Mudar => "mudar",
            SectionKey::Empresas => "empresas",
            SectionKey::Livros => "livros",
            SectionKey::Artigos => "artigos",
        }
    }

    /// Section heading as shown on the detail page.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKey::Definicao => "O que é",
            SectionKey::Consequencias => "Consequências",
            SectionKey::Exemplos => "Exemplos",
            SectionKey::Atitudes => "Atitudes recomendadas",
            SectionKey::Mudar => "Como mudar",
            SectionKey::Empresas => "O que as organizações podem fazer",
            SectionKey::Livros => "Sugestões de leitura",
            SectionKey::Artigos => "Artigos",
        }
    }
}

/// Body of a section: one text block or an ordered list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionBody {
    Text(&'static str),
    Items(&'static [&'static str]),
}

impl SectionBody {
    pub fn is_empty(&self) -> bool {
        match self {
            SectionBody::Text(text) => text.trim().is_empty(),
            SectionBody::Items(items) => items.is_empty(),
        }
    }
}

/// A present section of a topic, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: SectionKey,
    pub body: SectionBody,
}

impl Section {
    pub fn heading(&self) -> &'static str {
        self.key.heading()
    }

    pub fn is_list(&self) -> bool {
        matches!(self.body, SectionBody::Items(_))
    }

    /// Text block, empty for list sections.
    pub fn text(&self) -> &'static str {
        match self.body {
            SectionBody::Text(text) => text,
            SectionBody::Items(_) => "",
        }
    }

    /// List items, empty for text sections.
    pub fn items(&self) -> &'static [&'static str] {
        match self.body {
            SectionBody::Text(_) => &[],
            SectionBody::Items(items) => items,
        }
    }
}
