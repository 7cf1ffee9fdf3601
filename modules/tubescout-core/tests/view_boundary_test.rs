//! Normalizer boundary tests.
//!
//! These verify the contract between raw scrape payloads and the rendered
//! view model:
//! - Every payload key ends up claimed by a typed slot or preserved in the
//!   residual map, exactly once
//! - Resolution composed with itself is a fixed point for every reference
//!   shape the resolver recognizes
//! - Render hints (truncation, overflow) flip exactly at their boundaries

use serde_json::{json, Value};
use tubescout_core::{normalize, resolve, NormalizedView, RefKind, ScrapeResult};

/// Known keys the video view claims from a payload.
const VIDEO_KNOWN_KEYS: &[&str] = &[
    "video_id",
    "title",
    "channel_name",
    "views",
    "likes",
    "comment_count",
    "published_date",
    "description",
    "thumbnail",
    "duration",
    "url",
];

/// Known keys the channel view claims from a payload.
const CHANNEL_KNOWN_KEYS: &[&str] = &[
    "channel_name",
    "subscribers",
    "total_videos",
    "join_date",
    "description",
    "profile_picture",
    "banner_image",
    "recent_videos",
];

fn as_map(value: Value) -> ScrapeResult {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Check the partition invariant: known keys ∪ residual keys == input keys,
/// with no key in both sets.
fn assert_partition(kind: RefKind, known_keys: &[&str], payload: ScrapeResult) {
    let input_keys: Vec<String> = payload.keys().cloned().collect();
    let extra = match normalize(kind, payload) {
        NormalizedView::Video(v) => v.extra,
        NormalizedView::Channel(c) => c.extra,
    };

    for key in &input_keys {
        let claimed = known_keys.contains(&key.as_str());
        let residual = extra.contains_key(key);
        assert!(
            claimed != residual,
            "key {key:?} must appear exactly once across claimed and residual sets \
             (claimed={claimed}, residual={residual})"
        );
    }
    for key in extra.keys() {
        assert!(
            input_keys.contains(key),
            "residual key {key:?} was invented, not carried from the input"
        );
    }
}

#[test]
fn video_partition_is_complete() {
    assert_partition(
        RefKind::Video,
        VIDEO_KNOWN_KEYS,
        as_map(json!({
            "video_id": "dQw4w9WgXcQ",
            "title": "Some Video",
            "views": 1_000_000u64,
            "likes": null,
            "description": "a\nb\nc\nd\ne",
            "language": "en",
            "transcript_chunks": 12,
            "raw_meta": {"codec": "vp9", "fps": 60},
        })),
    );
}

#[test]
fn channel_partition_is_complete() {
    assert_partition(
        RefKind::Channel,
        CHANNEL_KNOWN_KEYS,
        as_map(json!({
            "channel_name": "Some Channel",
            "subscribers": 42_000u64,
            "recent_videos": [{"title": "v1"}, {"title": "v2"}],
            "country": "SE",
            "links": ["https://example.com"],
        })),
    );
}

#[test]
fn sparse_and_mistyped_payloads_still_partition() {
    assert_partition(RefKind::Video, VIDEO_KNOWN_KEYS, ScrapeResult::new());
    assert_partition(
        RefKind::Video,
        VIDEO_KNOWN_KEYS,
        as_map(json!({"views": "many", "title": ["not", "a", "string"], "x": 1})),
    );
    assert_partition(
        RefKind::Channel,
        CHANNEL_KNOWN_KEYS,
        as_map(json!({"recent_videos": "oops", "joined": "2010"})),
    );
}

#[test]
fn channel_known_keys_do_not_leak_into_video_residual_claims() {
    // `subscribers` is only known for channels; a video payload carrying it
    // must disclose it generically.
    let payload = as_map(json!({"subscribers": 5, "title": "t"}));
    let NormalizedView::Video(view) = normalize(RefKind::Video, payload) else {
        panic!("expected video view");
    };
    assert_eq!(view.extra["subscribers"], json!(5));
}

#[test]
fn resolution_is_a_fixed_point_across_all_shapes() {
    let cases = [
        (RefKind::Video, "dQw4w9WgXcQ"),
        (RefKind::Video, "https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        (RefKind::Video, "https://youtu.be/dQw4w9WgXcQ?t=5"),
        (RefKind::Channel, "UC123"),
        (RefKind::Channel, "https://www.youtube.com/channel/UC123?x=1"),
        (RefKind::Channel, "https://www.youtube.com/@SomeHandle"),
        (RefKind::Channel, "https://www.youtube.com/c/SomeName/videos"),
    ];
    for (kind, raw) in cases {
        let once = resolve(kind, raw);
        let twice = resolve(kind, &once);
        assert_eq!(once, twice, "resolve not idempotent for {raw:?}");
    }
}

#[test]
fn hints_flip_exactly_at_their_boundaries() {
    let at_limit = as_map(json!({
        "description": "a\nb\nc",
        "recent_videos": [{"title": "1"}, {"title": "2"}, {"title": "3"}],
    }));
    let NormalizedView::Channel(view) = normalize(RefKind::Channel, at_limit) else {
        panic!("expected channel view");
    };
    assert!(!view.description_truncatable);
    assert_eq!(view.recent_overflow, None);

    let over_limit = as_map(json!({
        "description": "a\nb\nc\nd",
        "recent_videos": [
            {"title": "1"}, {"title": "2"}, {"title": "3"},
            {"title": "4"}, {"title": "5"},
        ],
    }));
    let NormalizedView::Channel(view) = normalize(RefKind::Channel, over_limit) else {
        panic!("expected channel view");
    };
    assert!(view.description_truncatable);
    assert_eq!(view.recent_overflow, Some(2));
    assert_eq!(view.recent_videos.len(), 5, "overflow must annotate, never truncate");
}
