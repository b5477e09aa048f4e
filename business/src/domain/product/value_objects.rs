use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

pub const PRODUCT_ID_MAX_LEN: usize = 50;

static PRODUCT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("product id pattern is valid"));

/// Product identifier: lowercase alphanumerics and dashes, at most 50 chars.
/// Admin-supplied or slugified from the brand name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Result<Self, ProductError> {
        let id = id.into();
        if id.len() > PRODUCT_ID_MAX_LEN || !PRODUCT_ID_PATTERN.is_match(&id) {
            return Err(ProductError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Derives an id from free text: lowercase, runs of anything outside
    /// `[a-z0-9]` collapse to a single dash, trimmed to the length limit.
    pub fn slugify(source: &str) -> Result<Self, ProductError> {
        let mut slug = String::with_capacity(source.len());
        let mut last_dash = true;
        for c in source.chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                slug.push(c);
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        while slug.len() > PRODUCT_ID_MAX_LEN {
            slug.pop();
        }
        let slug = slug.trim_matches('-').to_string();
        Self::new(slug)
    }

    /// Constructor for identifiers already persisted in the repository (no validation).
    pub fn from_repository(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
