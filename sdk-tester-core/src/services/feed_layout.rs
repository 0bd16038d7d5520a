//! Feed-and-widget list layout

use crate::types::FeedItem;

const CONTENT_ITEMS: usize = 100;
const WIDGET_POSITION: usize = 50;

/// Publisher content with the widget mid-list and the feed at the end
///
/// Content ids are 1-based; the widget sits right before content item 50.
#[must_use]
pub fn generate_feed_items() -> Vec<FeedItem> {
    let mut items = Vec::with_capacity(CONTENT_ITEMS + 2);
    for i in 1..=CONTENT_ITEMS {
        if i == WIDGET_POSITION {
            items.push(FeedItem::Widget {
                id: "widget-middle".to_string(),
            });
        }
        items.push(FeedItem::Content {
            id: i.to_string(),
            text: format!("Publisher content (Item {i})"),
        });
    }
    items.push(FeedItem::Feed {
        id: "feed-bottom".to_string(),
    });
    items
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_units() {
        let items = generate_feed_items();
        assert_eq!(items.len(), 102);
        assert_eq!(items[0].id(), "1");
        assert_eq!(items[49].id(), "widget-middle");
        assert_eq!(items[50].id(), "50");
        assert_eq!(items[101].id(), "feed-bottom");
        assert!(matches!(items.last(), Some(FeedItem::Feed { .. })));
        assert_eq!(items.iter().filter(|i| i.is_ad_unit()).count(), 2);
    }
}
