use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Yip entity - one short post with its hashtag and like counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yip {
    pub id: i64,
    pub author: String,
    pub body: String,
    pub hashtag: String,
    pub likes: i64,
    /// ISO-8601 text as stored; seeded rows keep their original formatting.
    pub created_at: String,
}

/// A yip that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewYip {
    pub author: String,
    pub body: String,
    pub hashtag: String,
    pub created_at: String,
}

impl NewYip {
    /// Build a yip from the raw text a user typed, e.g. `"hello world#greetings"`.
    ///
    /// Only the first `#` separates the body from the hashtag; any later `#`
    /// stays part of the hashtag. Text without a `#` is all body.
    pub fn from_full_text(author: &str, full: &str, created_at: DateTime<Utc>) -> Self {
        let (body, hashtag) = split_hashtag(full);
        Self {
            author: author.to_string(),
            body: body.to_string(),
            hashtag: hashtag.to_string(),
            created_at: format_timestamp(created_at),
        }
    }

    /// Attach the store-assigned id. New yips always start with zero likes.
    pub fn into_yip(self, id: i64) -> Yip {
        Yip {
            id,
            author: self.author,
            body: self.body,
            hashtag: self.hashtag,
            likes: 0,
            created_at: self.created_at,
        }
    }
}

/// Split raw yip text at the first `#` into `(body, hashtag)`.
fn split_hashtag(full: &str) -> (&str, &str) {
    full.split_once('#').unwrap_or((full, ""))
}

/// Format a timestamp the way browsers print `Date#toISOString`.
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
