//! Data Transfer Objects - request/response types for the yipper endpoints.
//!
//! Field names are part of the browser client's contract: `name` is the author,
//! `yip` the body text, `date` the creation timestamp and `full` the raw text of
//! a new yip before its hashtag is split off.

use serde::{Deserialize, Deserializer, Serialize};

/// Query string of `GET /yipper/yips`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// Body of `POST /yipper/likes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikeRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
}

/// Body of `POST /yipper/new`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewYipRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

/// Envelope of the yip listing: `{"yips": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YipList<T> {
    pub yips: Vec<T>,
}

/// A search hit - only the id is sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YipIdEntry {
    pub id: i64,
}

/// A complete yip as listed on the home feed and returned after posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YipEntry {
    pub id: i64,
    pub name: String,
    pub yip: String,
    pub hashtag: String,
    pub date: String,
    pub likes: i64,
}

/// One entry of a user's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserYipEntry {
    pub name: String,
    pub yip: String,
    pub hashtag: String,
    pub date: String,
}

/// Accept `"id": "12"` from forms and `"id": 12` from JSON clients alike.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
    }

    // A numeric 0 is falsy to the client and counts as no id at all; the text
    // "0" from a form is kept and simply names no yip.
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.and_then(|scalar| match scalar {
            Scalar::Text(text) => Some(text),
            Scalar::Int(0) => None,
            Scalar::Int(n) => Some(n.to_string()),
        }),
    )
}
