use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which kind of YouTube reference the user submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Video,
    Channel,
}

/// Raw payload from the scraper service. The service guarantees no schema:
/// arbitrary keys, partially populated, values of any JSON shape.
pub type ScrapeResult = Map<String, Value>;

/// One entry of a channel's recent-uploads list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentVideo {
    pub title: Option<String>,
    pub views: Option<u64>,
    pub published: Option<String>,
}

/// A scrape result partitioned into typed known fields plus a residual map
/// of everything the known set did not claim. Derived fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NormalizedView {
    Video(VideoView),
    Channel(ChannelView),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VideoView {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub channel_name: Option<String>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub comment_count: Option<u64>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub url: Option<String>,

    /// True when the description is long enough that the presentation layer
    /// should offer an expand toggle. Computed here, rendered there.
    pub description_truncatable: bool,

    /// Every key the known set did not claim, preserved verbatim.
    pub extra: ScrapeResult,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChannelView {
    pub channel_name: Option<String>,
    pub subscribers: Option<u64>,
    pub total_videos: Option<u64>,
    pub join_date: Option<String>,
    pub description: Option<String>,
    pub profile_picture: Option<String>,
    pub banner_image: Option<String>,

    /// Full recent-uploads list, never truncated here.
    pub recent_videos: Vec<RecentVideo>,

    pub description_truncatable: bool,

    /// How many recent videos beyond the shown prefix exist, when the list
    /// is long enough to cap. `None` means no cap is offered.
    pub recent_overflow: Option<usize>,

    pub extra: ScrapeResult,
}
