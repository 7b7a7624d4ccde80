//! Embedded content payload.
//!
//! Stands in for the hosted backend: the same JSON shape the full
//! application receives, parsed through the real provider boundary so the
//! demo exercises the store's failure handling too.

use nodemap_content::{CollectionKind, ContentItem, ContentProvider, ProviderError};

const PROJECTS_JSON: &str = r#"[
    {
        "id": "spatial-portfolio",
        "title": "Spatial Portfolio",
        "excerpt": "Interactive node map for browsing projects and posts.",
        "media": ["portfolio-1.webp", "portfolio-2.webp"],
        "link": "https://example.dev/portfolio",
        "technologies": ["rust", "wasm"],
        "date": "2024"
    },
    {
        "id": "shader-garden",
        "title": "Shader Garden",
        "excerpt": "Procedural plant growth rendered with fragment shaders.",
        "media": ["garden.webp"],
        "technologies": ["glsl"],
        "date": "2023"
    },
    {
        "id": "tiny-tracker",
        "title": "Tiny Tracker",
        "excerpt": "A weekend time tracker with a single text file as storage.",
        "technologies": ["rust"],
        "date": "2022"
    }
]"#;

const POSTS_JSON: &str = r#"[
    {
        "id": "why-node-maps",
        "title": "Why node maps beat lists",
        "excerpt": "Spatial memory is underused in personal sites.",
        "date": "2024-03"
    },
    {
        "id": "bilingual-blogging",
        "title": "Notes on bilingual blogging",
        "excerpt": "Keeping two languages in sync without duplicating work.",
        "date": "2023-11"
    }
]"#;

/// Provider backed by the embedded payloads.
pub struct EmbeddedProvider;

impl ContentProvider for EmbeddedProvider {
    fn fetch(&self, kind: CollectionKind) -> Result<Vec<ContentItem>, ProviderError> {
        let payload = match kind {
            CollectionKind::Projects => PROJECTS_JSON,
            CollectionKind::Posts => POSTS_JSON,
        };
        Ok(serde_json::from_str(payload)?)
    }
}
