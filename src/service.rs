//! Entry points the host bridge invokes.
//!
//! The service owns the one-shot engine bootstrap and converts every
//! failure below it into a single rejection message; callers never see a
//! partially built result.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::api::models::{ResolvedChannel, VideoDetail, VideoList, VideoSummary};
use crate::bridge::TransportBridge;
use crate::common::{AnyError, AnyResult, ServiceError};
use crate::config::ServiceConfig;
use crate::engine::{
    Downloader, EngineFactory, EngineSettings, ExtractionEngine, InfoItem, Request, StreamDetails,
};
use crate::ids;
use crate::mapper;

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Everything built during the one-shot bootstrap.
struct EngineHandle {
    downloader: Arc<dyn Downloader>,
    engine: Arc<dyn ExtractionEngine>,
}

/// Facade over the extraction engine.
///
/// Constructed explicitly by the hosting process; the engine itself is
/// bootstrapped at most once, on first use or via [`initialize`].
///
/// [`initialize`]: ExtractionService::initialize
pub struct ExtractionService {
    config: ServiceConfig,
    factory: EngineFactory,
    handle: OnceCell<EngineHandle>,
}

impl ExtractionService {
    pub fn new(config: ServiceConfig, factory: EngineFactory) -> Self {
        Self {
            config,
            factory,
            handle: OnceCell::new(),
        }
    }

    /// Run the engine bootstrap eagerly. Optional; the first operation
    /// performs it on demand. Concurrent first calls share a single
    /// bootstrap either way.
    pub async fn initialize(&self) -> Result<(), ServiceError> {
        self.engine_handle()
            .await
            .map(|_| ())
            .map_err(|e| ServiceError::operation("Initialization failed", e))
    }

    /// Relevance-ordered search results. Non-stream entries mixed into the
    /// result page are skipped.
    pub async fn search(&self, query: &str) -> Result<VideoList, ServiceError> {
        if query.is_empty() {
            return Err(ServiceError::InvalidInput("Must provide a query"));
        }

        let result: AnyResult<Vec<InfoItem>> = async {
            let handle = self.engine_handle().await?;
            handle.engine.search(query).await
        }
        .await;

        match result {
            Ok(items) => Ok(VideoList {
                items: map_stream_items(&items, None),
            }),
            Err(e) => Err(ServiceError::operation("Search failed", e)),
        }
    }

    /// Full metadata for one video id, audio renditions included.
    pub async fn video_info(&self, video_id: &str) -> Result<VideoDetail, ServiceError> {
        if video_id.is_empty() {
            return Err(ServiceError::InvalidInput("Must provide a videoId"));
        }

        let result: AnyResult<StreamDetails> = async {
            let handle = self.engine_handle().await?;
            let watch_url = format!("{WATCH_URL_PREFIX}{video_id}");
            handle.engine.stream_details(&watch_url).await
        }
        .await;

        match result {
            Ok(details) => Ok(mapper::detail_from_stream(video_id, &details)),
            Err(e) => Err(ServiceError::operation("Failed to get video info", e)),
        }
    }

    /// First page of a channel's videos tab. The given channel id is
    /// already canonical and passes through to every entry.
    pub async fn channel_videos(&self, channel_id: &str) -> Result<VideoList, ServiceError> {
        if channel_id.is_empty() {
            return Err(ServiceError::InvalidInput("Must provide a channelId"));
        }

        let result: AnyResult<Vec<InfoItem>> = async {
            let handle = self.engine_handle().await?;
            handle.engine.channel_videos_page(channel_id).await
        }
        .await;

        match result {
            Ok(items) => Ok(VideoList {
                items: map_stream_items(&items, Some(channel_id)),
            }),
            Err(e) => Err(ServiceError::operation("Failed to get channel videos", e)),
        }
    }

    /// First page of a playlist's entries.
    pub async fn playlist_videos(&self, playlist_id: &str) -> Result<VideoList, ServiceError> {
        if playlist_id.is_empty() {
            return Err(ServiceError::InvalidInput("Must provide a playlistId"));
        }

        let result: AnyResult<Vec<InfoItem>> = async {
            let handle = self.engine_handle().await?;
            handle.engine.playlist_videos(playlist_id).await
        }
        .await;

        match result {
            Ok(items) => Ok(VideoList {
                items: map_stream_items(&items, None),
            }),
            Err(e) => Err(ServiceError::operation("Failed to get playlist videos", e)),
        }
    }

    /// Canonical channel identity for a URL, handle or bare id.
    ///
    /// Fetches the channel page through the transport rather than the
    /// engine, since listing extractors do not expose the page-level
    /// identity block.
    pub async fn resolve_channel(&self, url: &str) -> Result<ResolvedChannel, ServiceError> {
        if url.is_empty() {
            return Err(ServiceError::InvalidInput("Must provide a url"));
        }

        let result: AnyResult<ResolvedChannel> = async {
            let handle = self.engine_handle().await?;
            let page_url = ids::normalize_channel_url(url);
            let request =
                Request::get(page_url).header("Accept-Language", "en-US,en;q=0.9");
            let response = handle.downloader.execute(request).await?;
            mapper::channel_from_page(&response.body)
                .ok_or_else(|| AnyError::from("Could not find channel ID in page"))
        }
        .await;

        result.map_err(|e| ServiceError::operation("Failed to resolve channel", e))
    }

    async fn engine_handle(&self) -> Result<&EngineHandle, AnyError> {
        self.handle
            .get_or_try_init(|| async {
                let bridge = TransportBridge::new(&self.config)?;
                let downloader: Arc<dyn Downloader> = Arc::new(bridge);
                let engine = (self.factory)(EngineSettings {
                    downloader: downloader.clone(),
                    consent_accepted: self.config.consent_accepted,
                })?;
                tracing::debug!("extraction engine bootstrapped");
                Ok(EngineHandle { downloader, engine })
            })
            .await
    }
}

/// Map listing entries in order, skipping anything that is not a plain
/// stream. With `channel_id` set, the known id is used instead of deriving
/// one per item.
fn map_stream_items(items: &[InfoItem], channel_id: Option<&str>) -> Vec<VideoSummary> {
    items
        .iter()
        .filter_map(|item| match item {
            InfoItem::Stream(stream) => Some(match channel_id {
                Some(id) => mapper::summary_for_channel(stream, id),
                None => mapper::summary_from_item(stream),
            }),
            // Channels and playlists mixed into a listing are not playable
            // results; they are dropped without failing the call.
            InfoItem::Channel(_) | InfoItem::Playlist(_) => None,
        })
        .collect()
}
