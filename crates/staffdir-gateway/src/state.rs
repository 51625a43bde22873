//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use staffdir_search::DirectorySearch;

use crate::clock::{Clock, SystemClock};
use crate::config::GatewayConfig;
use crate::rate_limit::SlidingWindowLimiter;

/// Shared application state for the gateway.
///
/// Everything here is built once by the process entry point and handed to
/// the router; handlers never reach for globals.
pub struct GatewayState<D, C = SystemClock>
where
    D: DirectorySearch,
    C: Clock,
{
    /// The directory search service.
    pub search: Arc<D>,
    /// The search endpoint rate limiter.
    pub limiter: Arc<SlidingWindowLimiter<C>>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<D> GatewayState<D, SystemClock>
where
    D: DirectorySearch,
{
    /// Create a new gateway state with a limiter built from `config`.
    #[must_use]
    pub fn new(search: Arc<D>, config: GatewayConfig) -> Self {
        let limiter = SlidingWindowLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window(),
        );
        Self::with_limiter(search, Arc::new(limiter), config)
    }
}

impl<D, C> GatewayState<D, C>
where
    D: DirectorySearch,
    C: Clock,
{
    /// Create a gateway state around an existing limiter.
    #[must_use]
    pub fn with_limiter(
        search: Arc<D>,
        limiter: Arc<SlidingWindowLimiter<C>>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            search,
            limiter,
            config,
        }
    }
}

impl<D, C> Clone for GatewayState<D, C>
where
    D: DirectorySearch,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
            limiter: Arc::clone(&self.limiter),
            config: self.config.clone(),
        }
    }
}
