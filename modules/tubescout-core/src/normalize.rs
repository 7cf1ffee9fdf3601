//! Partitions a raw scrape payload into typed known fields plus a residual
//! map of everything else.
//!
//! The partition is key-claiming: every known key present in the payload is
//! removed from the residual map even when its value has the wrong type (the
//! typed slot is then `None`). Unclaimed keys are preserved verbatim, value
//! shape included, so no data is lost to the generic disclosure section.

use serde_json::Value;

use crate::format::{is_truncatable, recent_overflow};
use crate::types::{ChannelView, NormalizedView, RecentVideo, RefKind, ScrapeResult, VideoView};

/// Normalize a scrape result for rendering. Total over any map, however
/// sparse; missing or mistyped known fields surface as `None`.
pub fn normalize(kind: RefKind, result: ScrapeResult) -> NormalizedView {
    match kind {
        RefKind::Video => NormalizedView::Video(normalize_video(result)),
        RefKind::Channel => NormalizedView::Channel(normalize_channel(result)),
    }
}

fn normalize_video(mut rest: ScrapeResult) -> VideoView {
    let description = take_string(&mut rest, "description");
    let description_truncatable = description.as_deref().is_some_and(is_truncatable);

    VideoView {
        video_id: take_string(&mut rest, "video_id"),
        title: take_string(&mut rest, "title"),
        channel_name: take_string(&mut rest, "channel_name"),
        views: take_count(&mut rest, "views"),
        likes: take_count(&mut rest, "likes"),
        comment_count: take_count(&mut rest, "comment_count"),
        published_date: take_string(&mut rest, "published_date"),
        description,
        thumbnail: take_string(&mut rest, "thumbnail"),
        duration: take_string(&mut rest, "duration"),
        url: take_string(&mut rest, "url"),
        description_truncatable,
        extra: rest,
    }
}

fn normalize_channel(mut rest: ScrapeResult) -> ChannelView {
    let description = take_string(&mut rest, "description");
    let description_truncatable = description.as_deref().is_some_and(is_truncatable);

    let recent_videos = take_recent_videos(&mut rest);
    let overflow = recent_overflow(recent_videos.len());

    ChannelView {
        channel_name: take_string(&mut rest, "channel_name"),
        subscribers: take_count(&mut rest, "subscribers"),
        total_videos: take_count(&mut rest, "total_videos"),
        join_date: take_string(&mut rest, "join_date"),
        description,
        profile_picture: take_string(&mut rest, "profile_picture"),
        banner_image: take_string(&mut rest, "banner_image"),
        recent_videos,
        description_truncatable,
        recent_overflow: overflow,
        extra: rest,
    }
}

fn take_string(rest: &mut ScrapeResult, key: &str) -> Option<String> {
    match rest.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn take_count(rest: &mut ScrapeResult, key: &str) -> Option<u64> {
    rest.remove(key).as_ref().and_then(Value::as_u64)
}

fn take_recent_videos(rest: &mut ScrapeResult) -> Vec<RecentVideo> {
    match rest.remove("recent_videos") {
        Some(Value::Array(items)) => items.iter().map(recent_video_from_value).collect(),
        _ => Vec::new(),
    }
}

fn recent_video_from_value(value: &Value) -> RecentVideo {
    RecentVideo {
        title: value.get("title").and_then(Value::as_str).map(str::to_owned),
        views: value.get("views").and_then(Value::as_u64),
        published: value.get("published").and_then(Value::as_str).map(str::to_owned),
    }
}
