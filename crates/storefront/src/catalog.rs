//! Catalog loading.
//!
//! The catalog is a JSON array of toys read once at startup, either from a
//! file on disk or from a URL. A failed load is not fatal: the caller logs it,
//! shows a notice and carries on with an empty catalog.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use toyland_core::{Toy, ToyId};
use url::Url;

/// Notice shown to shoppers when the catalog could not be loaded.
pub const CATALOG_UNAVAILABLE: &str = "Error loading toys data. Please try again later.";

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog lists toy {0} more than once")]
    DuplicateId(ToyId),
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl FromStr for CatalogSource {
    type Err = url::ParseError;

    /// `http://` and `https://` values are URLs; anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Url::parse(s).map(Self::Url)
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load and validate the catalog.
///
/// # Errors
///
/// Returns `CatalogError` if the source cannot be read, is not a JSON array of
/// toys, or repeats a toy ID.
pub async fn load_catalog(source: &CatalogSource) -> Result<Vec<Toy>, CatalogError> {
    let body = match source {
        CatalogSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        CatalogSource::Url(url) => {
            reqwest::get(url.clone())
                .await?
                .error_for_status()?
                .text()
                .await?
        }
    };

    let toys = parse_catalog(&body)?;
    tracing::info!(source = %source, toys = toys.len(), "Catalog loaded");
    Ok(toys)
}

/// Parse catalog JSON, rejecting repeated IDs.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed JSON and
/// `CatalogError::DuplicateId` if two toys share an ID.
pub fn parse_catalog(json: &str) -> Result<Vec<Toy>, CatalogError> {
    let toys: Vec<Toy> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(toys.len());
    if let Some(dup) = toys.iter().find(|toy| !seen.insert(toy.id)) {
        return Err(CatalogError::DuplicateId(dup.id));
    }

    Ok(toys)
}
