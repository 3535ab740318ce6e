//! Catalog loading for the GUI.
//!
//! The configured catalog file wins when it loads; otherwise the built-in
//! catalog is used and the failure is reported so the view can show it.

use std::path::{Path, PathBuf};

use fj_model::Catalog;

use crate::error::GuiError;

/// Catalog compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/recipes.toml");

/// A catalog together with what the view needs to render it.
#[derive(Debug, Default)]
pub struct LoadedCatalog {
    /// The cards, in display order.
    pub catalog: Catalog,
    /// Local image file per card, indexed like the catalog.
    ///
    /// `None` when the card has no image or refers to a remote one; the
    /// view then shows the image's alt text instead.
    pub images: Vec<Option<PathBuf>>,
    /// Why the configured catalog was not used, if it was not.
    pub error: Option<GuiError>,
}

/// Load the catalog at `configured`, falling back to the built-in one.
pub fn load_catalog(configured: Option<&Path>) -> LoadedCatalog {
    let Some(path) = configured else {
        return load_embedded(None);
    };

    match Catalog::load(path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), cards = catalog.len(), "Using catalog file");
            let images = resolve_images(&catalog, path.parent());
            LoadedCatalog {
                catalog,
                images,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Falling back to built-in catalog");
            load_embedded(Some(GuiError::CatalogLoad {
                path: path.to_path_buf(),
                reason: e.user_message(),
            }))
        }
    }
}

fn load_embedded(error: Option<GuiError>) -> LoadedCatalog {
    match Catalog::from_toml_str(EMBEDDED_CATALOG) {
        Ok(catalog) => {
            let images = resolve_images(&catalog, None);
            LoadedCatalog {
                catalog,
                images,
                error,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Built-in catalog is invalid");
            LoadedCatalog {
                catalog: Catalog::default(),
                images: Vec::new(),
                error: Some(GuiError::EmbeddedCatalog {
                    reason: e.to_string(),
                }),
            }
        }
    }
}

/// Map every card's image reference to a local file.
fn resolve_images(catalog: &Catalog, base: Option<&Path>) -> Vec<Option<PathBuf>> {
    catalog
        .iter()
        .map(|(_, card)| local_image(&card.image_url, base))
        .collect()
}

fn local_image(reference: &str, base: Option<&Path>) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() || reference.contains("://") {
        return None;
    }

    let path = Path::new(reference);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    base.map(|base| base.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let loaded = load_catalog(None);
        assert!(loaded.error.is_none());
        assert!(!loaded.catalog.is_empty());
        assert_eq!(loaded.images.len(), loaded.catalog.len());
    }

    #[test]
    fn missing_file_falls_back_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let loaded = load_catalog(Some(&path));
        assert!(matches!(loaded.error, Some(GuiError::CatalogLoad { .. })));
        assert!(!loaded.catalog.is_empty());
    }

    #[test]
    fn relative_images_resolve_against_catalog_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.toml");
        std::fs::write(
            &path,
            r#"
[[recipe]]
title = "Local"
category = "soup"
image = "img/local.png"

[[recipe]]
title = "Remote"
category = "soup"
image = "https://example.com/remote.png"

[[recipe]]
title = "None"
category = "soup"
"#,
        )
        .unwrap();

        let loaded = load_catalog(Some(&path));
        assert!(loaded.error.is_none());
        assert_eq!(
            loaded.images,
            vec![Some(dir.path().join("img/local.png")), None, None]
        );
    }

    #[test]
    fn relative_image_without_base_is_dropped() {
        assert_eq!(local_image("img/a.png", None), None);
        assert_eq!(local_image("  ", Some(Path::new("/srv"))), None);
    }
}
