//! Normalization of engine domain objects into the flat records the host
//! bridge ships to the caller.

use std::sync::OnceLock;

use regex::Regex;

use crate::api::models::{AudioStreamDescriptor, ResolvedChannel, VideoDetail, VideoSummary};
use crate::engine::items::{StreamDetails, StreamItem, Thumbnail};
use crate::ids;

/// Summary for a search or playlist entry. Both ids are derived from the
/// item's own URLs.
pub fn summary_from_item(item: &StreamItem) -> VideoSummary {
    VideoSummary {
        id: ids::extract_video_id(&item.url),
        channel_id: ids::extract_channel_id(item.uploader_url.as_deref().unwrap_or_default()),
        ..base_summary(item)
    }
}

/// Summary for a channel-tab entry. The caller already holds the canonical
/// channel id, so it passes through instead of being re-derived.
pub fn summary_for_channel(item: &StreamItem, channel_id: &str) -> VideoSummary {
    VideoSummary {
        id: ids::extract_video_id(&item.url),
        channel_id: channel_id.to_string(),
        ..base_summary(item)
    }
}

/// Full detail record. The id was supplied by the caller and is not
/// re-derived from any URL.
pub fn detail_from_stream(video_id: &str, details: &StreamDetails) -> VideoDetail {
    VideoDetail {
        id: video_id.to_string(),
        title: details.name.clone(),
        description: details.description.clone(),
        duration: details.duration_secs,
        thumbnail: first_thumbnail(&details.thumbnails),
        channel_id: ids::extract_channel_id(details.uploader_url.as_deref().unwrap_or_default()),
        channel_title: details.uploader_name.clone(),
        views: details.view_count,
        uploaded_at: details.upload_date.clone().unwrap_or_default(),
        audio_streams: details
            .audio_streams
            .iter()
            .map(|stream| AudioStreamDescriptor {
                url: stream.url.clone(),
                format: stream.format.name().to_string(),
                bitrate: stream.average_bitrate,
                mime_type: format!("audio/{}", stream.format.suffix()),
            })
            .collect(),
    }
}

/// Channel identity from raw channel page markup.
///
/// Fallback chain: `"channelId"` then `"externalId"` for the id, the
/// page's JSON `"title"` then the HTML title (minus the site suffix) for
/// the name. `None` when no channel id is present at all.
pub fn channel_from_page(html: &str) -> Option<ResolvedChannel> {
    let channel_id =
        capture(channel_id_re(), html).or_else(|| capture(external_id_re(), html))?;

    let name = capture(json_title_re(), html)
        .or_else(|| capture(html_title_re(), html).map(|t| t.replace(" - YouTube", "")))
        .unwrap_or_else(|| "Unknown".to_string());

    let mut avatar_url = capture(avatar_re(), html).unwrap_or_default();
    if avatar_url.starts_with("//") {
        avatar_url = format!("https:{avatar_url}");
    }

    Some(ResolvedChannel {
        channel_id,
        name,
        avatar_url,
    })
}

fn base_summary(item: &StreamItem) -> VideoSummary {
    VideoSummary {
        id: String::new(),
        title: item.name.clone(),
        duration: item.duration_secs,
        thumbnail: first_thumbnail(&item.thumbnails),
        channel_id: String::new(),
        channel_title: item.uploader_name.clone(),
        views: item.view_count,
        uploaded_at: item.upload_date.clone().unwrap_or_default(),
    }
}

fn first_thumbnail(thumbnails: &[Thumbnail]) -> String {
    thumbnails
        .first()
        .map(|thumb| thumb.url.clone())
        .unwrap_or_default()
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack).map(|caps| caps[1].to_string())
}

fn channel_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""channelId"\s*:\s*"(UC[a-zA-Z0-9_-]+)""#).unwrap())
}

fn external_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""externalId"\s*:\s*"(UC[a-zA-Z0-9_-]+)""#).unwrap())
}

fn json_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""title"\s*:\s*"([^"]+)""#).unwrap())
}

fn html_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<title>([^<]+)</title>").unwrap())
}

fn avatar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#""avatar"\s*:\s*\{\s*"thumbnails"\s*:\s*\[\s*\{\s*"url"\s*:\s*"([^"]+)""#)
            .unwrap()
    })
}
