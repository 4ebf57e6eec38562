use serde::{Deserialize, Serialize};

/// One entry of a search, channel or playlist listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    /// Length in seconds.
    pub duration: i64,
    /// First thumbnail URL, empty when the upstream offered none.
    pub thumbnail: String,
    pub channel_id: String,
    pub channel_title: String,
    pub views: i64,
    /// Upload date in the upstream's own string form, empty when unknown.
    pub uploaded_at: String,
}

/// Full metadata for a single video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub thumbnail: String,
    pub channel_id: String,
    pub channel_title: String,
    pub views: i64,
    pub uploaded_at: String,
    pub audio_streams: Vec<AudioStreamDescriptor>,
}

/// A playable audio rendition of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStreamDescriptor {
    pub url: String,
    /// Container format display label, e.g. "M4A".
    pub format: String,
    /// Average bitrate reported by the engine.
    pub bitrate: i64,
    /// Always synthesized from the container suffix, never supplied by the
    /// engine directly.
    pub mime_type: String,
}

/// Ordered listing wrapper shared by search, channel and playlist calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoList {
    pub items: Vec<VideoSummary>,
}

/// Canonical identity resolved from a channel page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChannel {
    pub channel_id: String,
    pub name: String,
    /// Empty when the page exposes no avatar.
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_serialize_with_camel_case_keys() {
        let summary = VideoSummary {
            id: "abc".to_string(),
            title: "Title".to_string(),
            duration: 61,
            thumbnail: String::new(),
            channel_id: "UC1".to_string(),
            channel_title: "Someone".to_string(),
            views: 7,
            uploaded_at: String::new(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["channelId"], "UC1");
        assert_eq!(value["channelTitle"], "Someone");
        assert_eq!(value["uploadedAt"], "");
        assert_eq!(value["thumbnail"], "");
    }

    #[test]
    fn details_nest_audio_streams_under_the_wire_key() {
        let detail = VideoDetail {
            id: "abc".to_string(),
            title: "Title".to_string(),
            description: String::new(),
            duration: 0,
            thumbnail: String::new(),
            channel_id: String::new(),
            channel_title: String::new(),
            views: 0,
            uploaded_at: String::new(),
            audio_streams: vec![AudioStreamDescriptor {
                url: "https://cdn/x".to_string(),
                format: "M4A".to_string(),
                bitrate: 128,
                mime_type: "audio/m4a".to_string(),
            }],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["audioStreams"][0]["mimeType"], "audio/m4a");
    }
}
