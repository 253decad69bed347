use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One news item from the most-popular listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub url: String,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(
        rename = "media-metadata",
        default,
        deserialize_with = "null_as_default"
    )]
    pub meta_data: Vec<MediaMetaData>,
}

/// One rendition of a media asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetaData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
}

/// Named positions in a media's rendition list.
///
/// The API orders renditions from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRendition {
    Thumbnail,
    Large,
}

impl ImageRendition {
    pub fn index(self) -> usize {
        match self {
            ImageRendition::Thumbnail => 0,
            ImageRendition::Large => 2,
        }
    }
}

impl Article {
    /// Date part of `published_date`, if present and well formed.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.published_date.as_deref()?;
        NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
    }

    /// URL of the requested rendition of the first media attachment.
    pub fn image_url(&self, rendition: ImageRendition) -> Option<&str> {
        self.media
            .first()?
            .meta_data
            .get(rendition.index())
            .map(|m| m.url.as_str())
            .filter(|url| !url.is_empty())
    }

    pub fn image_url_or<'a>(&'a self, rendition: ImageRendition, default: &'a str) -> &'a str {
        self.image_url(rendition).unwrap_or(default)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
