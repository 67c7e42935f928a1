//! Asset naming
//!
//! Images are addressed by convention:
//!
//! ```text
//! {body_skin|body_plain}_{dark|light}.png
//! organ_{id}_{dark|light}.png
//! ```
//!
//! and resolved through a base-path prefix supplied from outside (the
//! deployment's public URL). Nothing here checks that a file exists except
//! [`missing_files`], which the asset host and CLI use for diagnostics.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dashboard::ViewMode;
use crate::organs::OrganCatalog;
use crate::theme::ThemeId;

/// Base-path prefix prepended to every asset file name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetBase {
    prefix: String,
}

impl AssetBase {
    /// Create a base from a prefix such as `""`, `"/static"` or a CDN URL.
    /// Trailing slashes are dropped.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full path for an asset file name
    pub fn url(&self, file: &str) -> String {
        format!("{}/{}", self.prefix, file)
    }

    /// Path for the base body image of a theme and view mode
    pub fn body_image(&self, theme: ThemeId, mode: ViewMode) -> String {
        self.url(&body_image_file(theme, mode))
    }

    /// Path for an organ overlay image
    pub fn organ_overlay(&self, theme: ThemeId, organ_id: &str) -> String {
        self.url(&organ_overlay_file(theme, organ_id))
    }
}

/// File name of a base body image
pub fn body_image_file(theme: ThemeId, mode: ViewMode) -> String {
    let stem = match mode {
        ViewMode::Body => "body_skin",
        ViewMode::Organs => "body_plain",
    };
    format!("{}_{}.png", stem, theme)
}

/// File name of an organ overlay image
pub fn organ_overlay_file(theme: ThemeId, organ_id: &str) -> String {
    format!("organ_{}_{}.png", organ_id, theme)
}

/// Every file the dashboard may request for the given catalog
pub fn expected_files(catalog: &OrganCatalog) -> Vec<String> {
    let mut files = Vec::new();
    for theme in ThemeId::all() {
        for mode in ViewMode::all() {
            files.push(body_image_file(*theme, *mode));
        }
        for organ in catalog.iter() {
            files.push(organ_overlay_file(*theme, organ.id));
        }
    }
    files
}

/// Expected files absent from `dir`
///
/// Fails only when `dir` itself cannot be read as a directory.
pub fn missing_files(dir: &Path, catalog: &OrganCatalog) -> std::io::Result<Vec<String>> {
    let meta = std::fs::metadata(dir)?;
    if !meta.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is not a directory", dir.display()),
        ));
    }

    Ok(expected_files(catalog)
        .into_iter()
        .filter(|file| !dir.join(file).is_file())
        .collect())
}
