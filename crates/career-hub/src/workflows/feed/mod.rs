//! News and video posts shown on the student dashboard.
//!
//! The two upstream collections use different field names for the same concepts
//! (`description` vs `content`, `image` vs `thumbnail`). [`normalize_feed_item`] maps both onto
//! [`FeedItem`] before any search or pagination runs.

mod normalizer;

pub use normalizer::{normalize_feed, normalize_feed_item};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::workflows::pagination::{paginate, Page};
use crate::workflows::talent::RepositoryError;

/// Raw news and video collections as returned by the content API.
pub trait FeedSource: Send + Sync {
    fn news(&self) -> Result<Value, RepositoryError>;
    fn videos(&self) -> Result<Value, RepositoryError>;
}

/// Which upstream collection a raw record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    News,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedItem {
    News(NewsPost),
    Video(VideoPost),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub id: String,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub published_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub published_on: Option<NaiveDate>,
}

impl FeedItem {
    pub fn id(&self) -> &str {
        match self {
            FeedItem::News(post) => &post.id,
            FeedItem::Video(post) => &post.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FeedItem::News(post) => &post.title,
            FeedItem::Video(post) => &post.title,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FeedItem::News(post) => &post.body,
            FeedItem::Video(post) => &post.description,
        }
    }

    pub fn published_on(&self) -> Option<NaiveDate> {
        match self {
            FeedItem::News(post) => post.published_on,
            FeedItem::Video(post) => post.published_on,
        }
    }
}

/// Case-insensitive match on title or body text. Blank text keeps everything.
pub fn search_feed(items: &[FeedItem], text: &str) -> Vec<FeedItem> {
    let needle = text.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.title().to_lowercase().contains(&needle)
                || item.text().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Search, order newest first and paginate in one step.
pub fn feed_page(items: &[FeedItem], text: &str, page_size: usize, page: usize) -> Page<FeedItem> {
    let mut matches = search_feed(items, text);
    matches.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    paginate(&matches, page_size, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<FeedItem> {
        normalize_feed(
            json!([
                { "id": 1, "title": "Career fair", "content": "Meet 40 employers", "createdAt": "2025-03-01" },
                { "id": 2, "title": "CV clinic", "description": "Bring your resume", "createdAt": "2025-04-01" }
            ]),
            json!({ "videos": [
                { "id": "v1", "title": "Interview tips", "videoUrl": "https://videos.example.edu/v1", "createdAt": "2025-05-01" }
            ]}),
        )
    }

    #[test]
    fn search_reads_both_shapes() {
        let found = search_feed(&items(), "RESUME");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "2");

        assert_eq!(search_feed(&items(), "interview").len(), 1);
        assert_eq!(search_feed(&items(), "").len(), 3);
    }

    #[test]
    fn feed_page_orders_newest_first() {
        let page = feed_page(&items(), "", 2, 1);
        let titles: Vec<&str> = page.items.iter().map(FeedItem::title).collect();
        assert_eq!(titles, vec!["Interview tips", "CV clinic"]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value = serde_json::to_value(&items()[2]).expect("serializes");
        assert_eq!(value["kind"], "video");
        assert_eq!(value["videoUrl"], "https://videos.example.edu/v1");
        assert_eq!(value["publishedOn"], "2025-05-01");

        let news = serde_json::to_value(&items()[0]).expect("serializes");
        assert_eq!(news["kind"], "news");
        assert!(news.get("imageUrl").is_some());
        assert!(news.get("image_url").is_none());
    }
}
