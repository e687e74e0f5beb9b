mod product;

pub use product::{catalog, fallback_image_ref, parse_manifest, resolve_image, CatalogError, Product};
