//! Adapter layer between a host application and a third-party video
//! extraction engine.
//!
//! The crate does three things: it services the engine's outbound HTTP
//! needs through a cookie-persisting, header-shaping transport
//! ([`bridge`]), it normalizes the engine's rich domain objects into the
//! small flat records the host ships to its UI ([`mapper`], [`api`]), and
//! it fronts both with a handful of operations the host invokes
//! ([`service`]). The engine itself is injected by the host; see
//! [`engine`] for the contract.

pub mod api;
pub mod bridge;
pub mod common;
pub mod config;
pub mod engine;
pub mod ids;
pub mod mapper;
pub mod service;

pub use api::models::{
    AudioStreamDescriptor, ResolvedChannel, VideoDetail, VideoList, VideoSummary,
};
pub use common::errors::ServiceError;
pub use config::ServiceConfig;
pub use service::ExtractionService;
