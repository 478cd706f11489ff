use serde::{Deserialize, Deserializer, Serialize};

/// A podcast episode as served by the backend (camelCase on the wire).
///
/// Artwork and audio URLs are optional; the page substitutes placeholders
/// for missing ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub number: u32,
    pub title: String,
    pub description: String,
    /// Display duration, e.g. `"25:30"`.
    pub duration: String,
    /// ISO date string, e.g. `"2025-01-08"`.
    pub publish_date: String,
    #[serde(default)]
    pub artwork_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_alt: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Orders episodes newest first (highest number first), the order the
/// episode list renders them in.
pub fn newest_first(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| b.number.cmp(&a.number));
}

/// About page content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub mission: String,
    pub who_we_are: String,
    #[serde(default)]
    pub what_we_cover: Vec<String>,
    pub join_community: String,
}

/// One question/answer pair on the FAQ page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// FAQ payload. The backend serves `{"items": [...]}`; fallback documents
/// may embed a bare array. Both decode to the same items list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaqContent {
    pub items: Vec<FaqItem>,
}

impl<'de> Deserialize<'de> for FaqContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Wrapped { items: Vec<FaqItem> },
            Bare(Vec<FaqItem>),
        }

        let items = match Repr::deserialize(deserializer)? {
            Repr::Wrapped { items } => items,
            Repr::Bare(items) => items,
        };
        Ok(FaqContent { items })
    }
}
