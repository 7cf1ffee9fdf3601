//! Render-time formatting helpers. Pure functions, nothing here is stored
//! in the view model.

/// How many description lines the presentation layer shows before offering
/// an expand toggle.
pub const SHOWN_DESCRIPTION_LINES: usize = 3;

/// How many recent videos the presentation layer shows before offering
/// a "show more" affordance.
pub const SHOWN_RECENT_VIDEOS: usize = 3;

/// Abbreviate a count for display: 2_500_000 -> "2.5M", 1_000 -> "1.0K",
/// 999 -> "999". One decimal, truncated rather than rounded.
///
/// A present zero renders as "0" while an absent value renders as "N/A",
/// so a real zero count stays distinguishable from missing data.
pub fn format_count(count: Option<u64>) -> String {
    let Some(n) = count else {
        return "N/A".to_string();
    };
    if n >= 1_000_000 {
        let tenths = n / 100_000;
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if n >= 1_000 {
        let tenths = n / 100;
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        n.to_string()
    }
}

/// Turn an underscore-separated payload key into a display label:
/// `comment_count` -> "Comment Count". Only the first character of each
/// word is uppercased; the rest is left as the service sent it.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a descriptive text is long enough to offer an expand toggle.
/// Counts newline-delimited segments, including a trailing empty one.
pub fn is_truncatable(text: &str) -> bool {
    text.split('\n').count() > SHOWN_DESCRIPTION_LINES
}

/// How many recent videos beyond the shown prefix exist. `None` when the
/// list fits without capping.
pub fn recent_overflow(len: usize) -> Option<usize> {
    if len > SHOWN_RECENT_VIDEOS {
        Some(len - SHOWN_RECENT_VIDEOS)
    } else {
        None
    }
}
