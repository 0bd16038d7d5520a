//! Page identity key

use serde::{Deserialize, Serialize};

/// Key a classic page is obtained by (`page_url`, `page_type`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageKey {
    pub page_url: String,
    pub page_type: String,
}

impl PageKey {
    #[must_use]
    pub fn new(page_url: impl Into<String>, page_type: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            page_type: page_type.into(),
        }
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.page_url, self.page_type)
    }
}
