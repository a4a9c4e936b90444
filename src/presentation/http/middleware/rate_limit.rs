// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

/// Per-client limiter for the schedule API. Keys on forwarding headers
/// first and falls back to the peer address, so the server must be run with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn rate_limit_layer() -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    static RATE_LIMITER: OnceLock<Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>>> =
        OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::error!("rate limiter configuration rejected; limiting disabled");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
