use serde_json::{Map, Value};
use tracing::debug;

use super::{FeedItem, FeedKind, NewsPost, VideoPost};
use crate::workflows::sources::{coerce_collection, parse_date};

fn text_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

/// Map one raw record onto [`FeedItem`].
///
/// `kind` is the collection the record was read from. A record from the video collection is a
/// video whenever it carries any URL (`videoUrl`, `video_url`, `url`, `link`). A news record only
/// becomes a video with an explicit `"type": "video"` or a dedicated video URL field. Records
/// without an id or title are dropped.
pub fn normalize_feed_item(value: &Value, kind: FeedKind) -> Option<FeedItem> {
    let record = value.as_object()?;
    let id = text_field(record, &["id", "_id"])?;
    let title = text_field(record, &["title", "headline"])?;
    let text = text_field(record, &["description", "content", "body", "summary"]).unwrap_or_default();
    let published_on = text_field(record, &["publishedAt", "createdAt", "date"])
        .as_deref()
        .and_then(parse_date);
    let video_url = text_field(record, &["videoUrl", "video_url", "url", "link"]);
    let is_video = match kind {
        FeedKind::Video => true,
        FeedKind::News => {
            text_field(record, &["type", "kind"]).is_some_and(|declared| declared.eq_ignore_ascii_case("video"))
                || record.contains_key("videoUrl")
                || record.contains_key("video_url")
        }
    };

    match video_url {
        Some(video_url) if is_video => Some(FeedItem::Video(VideoPost {
            id,
            title,
            description: text,
            video_url,
            thumbnail_url: text_field(record, &["thumbnail", "thumbnailUrl", "image"]),
            published_on,
        })),
        _ => Some(FeedItem::News(NewsPost {
            id,
            title,
            body: text,
            image_url: text_field(record, &["image", "imageUrl", "thumbnail"]),
            published_on,
        })),
    }
}

/// Normalize the news and video collections into one feed, news first.
pub fn normalize_feed(news: Value, videos: Value) -> Vec<FeedItem> {
    let news = coerce_collection(news, &["news", "articles"]);
    let videos = coerce_collection(videos, &["videos"]);
    news.iter()
        .map(|value| (value, FeedKind::News))
        .chain(videos.iter().map(|value| (value, FeedKind::Video)))
        .filter_map(|(value, kind)| {
            let item = normalize_feed_item(value, kind);
            if item.is_none() {
                debug!(?kind, "dropping feed record without id or title");
            }
            item
        })
        .collect()
}
