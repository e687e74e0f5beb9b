use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable once loaded; `name` doubles as the
/// display key (not guaranteed unique, not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub description: String,
    pub image_ref: String,
}

/// Errors that can occur reading a product manifest
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed product manifest: {0}")]
    Malformed(#[from] serde_json::Error),
}

const MANIFEST: &str = include_str!("products.json");

static CATALOG: LazyLock<Vec<Product>> =
    LazyLock::new(|| parse_manifest(MANIFEST).expect("compiled-in product manifest must parse"));

/// Parse a JSON product manifest into an ordered catalog.
pub fn parse_manifest(raw: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// The compiled-in catalog, in manifest source order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Placeholder image reference for a product whose primary image failed
/// to load, derived deterministically from the display name.
pub fn fallback_image_ref(name: &str) -> String {
    format!("/images/{}-placeholder.svg", slug(name))
}

/// Image reference a card should render: the manifest ref until the
/// first load failure, the name-keyed fallback afterwards. Repeated
/// failures keep resolving to the same fallback, so there is exactly
/// one substitution and no retry loop.
pub fn resolve_image(primary: &str, name: &str, failed: bool) -> String {
    if failed {
        fallback_image_ref(name)
    } else {
        primary.to_string()
    }
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_end_matches('-').to_string()
}
