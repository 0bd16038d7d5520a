//! Feed list items

use serde::Serialize;

/// One row of the feed-and-widget list
///
/// Rendering dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FeedItem {
    /// Publisher's own article content
    Content { id: String, text: String },
    /// The mid-article widget unit
    Widget { id: String },
    /// The feed unit closing the list
    Feed { id: String },
}

impl FeedItem {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Content { id, .. } | Self::Widget { id } | Self::Feed { id } => id,
        }
    }

    #[must_use]
    pub fn is_ad_unit(&self) -> bool {
        !matches!(self, Self::Content { .. })
    }
}
