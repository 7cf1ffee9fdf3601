//! Renders a normalized view to the terminal. Truncation and capping follow
//! the hints the normalizer computed; this module never re-derives them.

use std::fmt::Write;

use serde_json::Value;
use tubescout_core::format::{SHOWN_DESCRIPTION_LINES, SHOWN_RECENT_VIDEOS};
use tubescout_core::{format_count, humanize_key, ChannelView, NormalizedView, VideoView};

pub fn print_view(view: &NormalizedView, full: bool) {
    print!("{}", render_view(view, full));
}

pub fn render_view(view: &NormalizedView, full: bool) -> String {
    match view {
        NormalizedView::Video(video) => render_video(video, full),
        NormalizedView::Channel(channel) => render_channel(channel, full),
    }
}

fn render_video(view: &VideoView, full: bool) -> String {
    let mut out = String::new();

    let title = view.title.as_deref().unwrap_or("Untitled Video");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    if let Some(id) = &view.video_id {
        let _ = writeln!(out, "Video ID:   {id}");
    }
    if let Some(url) = &view.url {
        let _ = writeln!(out, "Video URL:  {url}");
    }
    if let Some(name) = &view.channel_name {
        let _ = writeln!(out, "Channel:    {name}");
    }
    if let Some(duration) = &view.duration {
        let _ = writeln!(out, "Duration:   {duration}");
    }
    if let Some(published) = &view.published_date {
        let _ = writeln!(out, "Published:  {published}");
    }
    if let Some(thumbnail) = &view.thumbnail {
        let _ = writeln!(out, "Thumbnail:  {thumbnail}");
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Views: {}   Likes: {}   Comments: {}",
        format_count(view.views),
        format_count(view.likes),
        format_count(view.comment_count)
    );

    if let Some(description) = &view.description {
        let _ = writeln!(out);
        let _ = writeln!(out, "Description:");
        render_description(&mut out, description, view.description_truncatable, full);
    }

    render_extra(&mut out, &view.extra);
    out
}

fn render_channel(view: &ChannelView, full: bool) -> String {
    let mut out = String::new();

    let name = view.channel_name.as_deref().unwrap_or("Untitled Channel");
    let _ = writeln!(out, "{name}");
    let _ = writeln!(out, "{}", "=".repeat(name.chars().count()));

    let _ = writeln!(
        out,
        "Subscribers: {}   Videos: {}",
        format_count(view.subscribers),
        format_count(view.total_videos)
    );
    if let Some(joined) = &view.join_date {
        let _ = writeln!(out, "Joined {joined}");
    }
    if let Some(profile) = &view.profile_picture {
        let _ = writeln!(out, "Profile: {profile}");
    }
    if let Some(banner) = &view.banner_image {
        let _ = writeln!(out, "Banner:  {banner}");
    }

    if let Some(description) = &view.description {
        let _ = writeln!(out);
        let _ = writeln!(out, "Description:");
        render_description(&mut out, description, view.description_truncatable, full);
    }

    if !view.recent_videos.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recent videos:");
        let shown = if full {
            view.recent_videos.len()
        } else {
            view.recent_videos.len().min(SHOWN_RECENT_VIDEOS)
        };
        for video in &view.recent_videos[..shown] {
            let title = video.title.as_deref().unwrap_or("Untitled");
            let _ = writeln!(
                out,
                "  - {title} ({} views{})",
                format_count(video.views),
                video
                    .published
                    .as_deref()
                    .map(|p| format!(", {p}"))
                    .unwrap_or_default()
            );
        }
        if !full {
            if let Some(more) = view.recent_overflow {
                let _ = writeln!(out, "  ... {more} more videos (use --full)");
            }
        }
    }

    render_extra(&mut out, &view.extra);
    out
}

fn render_description(out: &mut String, description: &str, truncatable: bool, full: bool) {
    if truncatable && !full {
        let mut lines = description.split('\n');
        for line in lines.by_ref().take(SHOWN_DESCRIPTION_LINES) {
            let _ = writeln!(out, "  {line}");
        }
        let _ = writeln!(out, "  ... {} more lines (use --full)", lines.count());
    } else {
        for line in description.split('\n') {
            let _ = writeln!(out, "  {line}");
        }
    }
}

fn render_extra(out: &mut String, extra: &tubescout_core::ScrapeResult) {
    if extra.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Additional data:");
    for (key, value) in extra {
        let _ = writeln!(out, "  {}: {}", humanize_key(key), value_display(value));
    }
}

/// Strings display bare; everything else is serialized as-is.
fn value_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
