//! Domain objects the extraction engine hands back.
//!
//! Listing entries are a tagged union: search and channel pages mix
//! channels and playlists in with plain streams, and the mapper must be
//! able to skip the non-stream kinds without a runtime type test.

/// A single thumbnail variant offered by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Audio container formats the engine reports for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    M4a,
    WebMa,
    Mp3,
    Opus,
    Ogg,
    Flac,
}

impl MediaFormat {
    /// Display label of the format.
    pub fn name(self) -> &'static str {
        match self {
            MediaFormat::M4a => "M4A",
            MediaFormat::WebMa => "WEBMA",
            MediaFormat::Mp3 => "MP3",
            MediaFormat::Opus => "OPUS",
            MediaFormat::Ogg => "OGG",
            MediaFormat::Flac => "FLAC",
        }
    }

    /// File-suffix label, also the subtype of the synthesized MIME type.
    pub fn suffix(self) -> &'static str {
        match self {
            MediaFormat::M4a => "m4a",
            MediaFormat::WebMa => "webm",
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Opus => "opus",
            MediaFormat::Ogg => "ogg",
            MediaFormat::Flac => "flac",
        }
    }
}

/// One entry of a search or listing page.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoItem {
    Stream(StreamItem),
    Channel(ChannelItem),
    Playlist(PlaylistItem),
}

/// A playable stream entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamItem {
    pub url: String,
    pub name: String,
    pub duration_secs: i64,
    pub thumbnails: Vec<Thumbnail>,
    /// Missing for some anonymous or auto-generated uploads.
    pub uploader_url: Option<String>,
    pub uploader_name: String,
    pub view_count: i64,
    /// Upload date in the upstream's own string form, when exposed.
    pub upload_date: Option<String>,
}

/// A channel entry mixed into a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelItem {
    pub url: String,
    pub name: String,
    pub subscriber_count: i64,
}

/// A playlist entry mixed into a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistItem {
    pub url: String,
    pub name: String,
    pub stream_count: i64,
}

/// Full metadata the engine extracts for one watch URL.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDetails {
    pub name: String,
    pub description: String,
    pub duration_secs: i64,
    pub thumbnails: Vec<Thumbnail>,
    pub uploader_url: Option<String>,
    pub uploader_name: String,
    pub view_count: i64,
    pub upload_date: Option<String>,
    /// Ordered as the engine selected them.
    pub audio_streams: Vec<AudioTrack>,
}

/// One audio rendition of a stream.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    pub url: String,
    pub format: MediaFormat,
    pub average_bitrate: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_labels_agree_with_suffixes() {
        assert_eq!(MediaFormat::M4a.name(), "M4A");
        assert_eq!(MediaFormat::M4a.suffix(), "m4a");
        assert_eq!(MediaFormat::WebMa.suffix(), "webm");
        assert_eq!(MediaFormat::Opus.name(), "OPUS");
    }
}
