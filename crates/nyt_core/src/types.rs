use serde::{Deserialize, Serialize};

/// Envelope wrapping the `results` list returned by the most-popular
/// endpoints. Everything below it is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularResponse {
    pub results: Vec<Article>,
}

/// The `format` tag the API uses for list thumbnails.
const STANDARD_THUMBNAIL: &str = "Standard Thumbnail";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "byline")]
    pub author: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub media: Vec<ArticleMedia>,
}

impl Article {
    /// List thumbnail: the first media entry's metadata item tagged as a
    /// standard thumbnail.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.media
            .first()?
            .metadata
            .iter()
            .find(|m| m.format.as_deref() == Some(STANDARD_THUMBNAIL))?
            .url
            .as_deref()
    }

    /// Detail image: the largest rendition (by pixel area) of the first
    /// media entry.
    pub fn detail_image_url(&self) -> Option<&str> {
        self.media
            .first()?
            .metadata
            .iter()
            .max_by_key(|m| m.size())?
            .url
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMedia {
    #[serde(default, rename = "media-metadata")]
    pub metadata: Vec<MediaMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

impl MediaMetadata {
    pub fn size(&self) -> u64 {
        u64::from(self.width.unwrap_or(0)) * u64::from(self.height.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(url: &str, format: &str, width: u32, height: u32) -> MediaMetadata {
        MediaMetadata {
            url: Some(url.to_string()),
            format: Some(format.to_string()),
            width: Some(width),
            height: Some(height),
        }
    }

    #[test]
    fn envelope_decodes_results_in_order() {
        let body = r#"{
            "results": [
                { "id": 1, "title": "First" },
                { "id": 2, "title": "Second" },
                { "id": 3, "title": "Third" }
            ]
        }"#;
        let response: PopularResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 3);
        let titles: Vec<_> = response
            .results
            .iter()
            .map(|a| a.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn article_with_no_fields_decodes_empty() {
        let article: Article = serde_json::from_str("{}").unwrap();
        assert_eq!(article.id, None);
        assert_eq!(article.url, None);
        assert_eq!(article.title, None);
        assert_eq!(article.author, None);
        assert_eq!(article.published_date, None);
        assert_eq!(article.abstract_text, None);
        assert_eq!(article.section, None);
        assert_eq!(article.source, None);
        assert_eq!(article.kind, None);
        assert!(article.media.is_empty());
    }

    #[test]
    fn wire_names_map_onto_fields() {
        let body = r#"{
            "id": 42,
            "byline": "By Someone",
            "published_date": "2025-03-18",
            "abstract": "A summary.",
            "type": "Article",
            "media": [
                { "media-metadata": [ { "url": "u", "format": "Standard Thumbnail", "width": 75, "height": 75 } ] }
            ]
        }"#;
        let article: Article = serde_json::from_str(body).unwrap();
        assert_eq!(article.author.as_deref(), Some("By Someone"));
        assert_eq!(article.published_date.as_deref(), Some("2025-03-18"));
        assert_eq!(article.abstract_text.as_deref(), Some("A summary."));
        assert_eq!(article.kind.as_deref(), Some("Article"));
        assert_eq!(article.media.len(), 1);
    }

    #[test]
    fn thumbnail_picks_standard_thumbnail_format() {
        let article = Article {
            media: vec![ArticleMedia {
                metadata: vec![
                    metadata("large.jpg", "mediumThreeByTwo440", 440, 293),
                    metadata("thumb.jpg", "Standard Thumbnail", 75, 75),
                ],
            }],
            ..Default::default()
        };
        assert_eq!(article.thumbnail_url(), Some("thumb.jpg"));
    }

    #[test]
    fn detail_image_picks_largest_rendition() {
        let article = Article {
            media: vec![ArticleMedia {
                metadata: vec![
                    metadata("thumb.jpg", "Standard Thumbnail", 75, 75),
                    metadata("large.jpg", "mediumThreeByTwo440", 440, 293),
                    metadata("mid.jpg", "mediumThreeByTwo210", 210, 140),
                ],
            }],
            ..Default::default()
        };
        assert_eq!(article.detail_image_url(), Some("large.jpg"));
    }

    #[test]
    fn image_accessors_tolerate_missing_media() {
        let article = Article::default();
        assert_eq!(article.thumbnail_url(), None);
        assert_eq!(article.detail_image_url(), None);
    }
}
