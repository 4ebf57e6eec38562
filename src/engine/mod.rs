//! Boundary of the external extraction engine.
//!
//! The engine itself (page and protocol parsing, stream-format selection,
//! signature handling) is a third-party collaborator. This module only
//! fixes the contract: the domain objects it produces, the downloader it
//! consumes, and the one-time settings handed to it at bootstrap. The host
//! supplies the concrete engine through an [`EngineFactory`].

pub mod downloader;
pub mod items;

use std::sync::Arc;

use async_trait::async_trait;

use crate::common::AnyResult;

pub use downloader::{Downloader, DownloaderError, HttpMethod, Request, Response};
pub use items::{
    AudioTrack, ChannelItem, InfoItem, MediaFormat, PlaylistItem, StreamDetails, StreamItem,
    Thumbnail,
};

/// One-time configuration handed to the engine when it is created.
pub struct EngineSettings {
    /// Transport servicing every outbound request the engine makes.
    pub downloader: Arc<dyn Downloader>,
    /// Pre-accept the upstream consent interstitial.
    pub consent_accepted: bool,
}

/// Operations this crate drives on the engine.
///
/// A single call may fan out into several sequential requests on the
/// downloader (data-API call, then a web-page fallback); that is the
/// engine's business.
#[async_trait]
pub trait ExtractionEngine: Send + Sync {
    /// Relevance-ordered result entries for a search query.
    async fn search(&self, query: &str) -> AnyResult<Vec<InfoItem>>;

    /// Full stream metadata for a watch URL.
    async fn stream_details(&self, url: &str) -> AnyResult<StreamDetails>;

    /// First page of a channel's videos tab.
    async fn channel_videos_page(&self, channel_id: &str) -> AnyResult<Vec<InfoItem>>;

    /// First page of a playlist's entries.
    async fn playlist_videos(&self, playlist_id: &str) -> AnyResult<Vec<InfoItem>>;
}

/// Host-supplied constructor for the concrete engine. Invoked exactly once
/// per service, with the transport already wired up.
pub type EngineFactory =
    Box<dyn Fn(EngineSettings) -> AnyResult<Arc<dyn ExtractionEngine>> + Send + Sync>;
