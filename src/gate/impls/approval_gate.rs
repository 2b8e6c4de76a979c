use std::sync::Arc;
use log::{debug, info};
use tokio_util::sync::CancellationToken;
use crate::approval::structs::approval_cache::ApprovalCache;
use crate::batcher::structs::announce_batcher::AnnounceBatcher;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::user_token_source::UserTokenSource;
use crate::config::structs::gate_config::GateConfig;
use crate::config::structs::nanami_config::NanamiConfig;
use crate::gate::enums::gate_error::GateError;
use crate::gate::structs::approval_gate::ApprovalGate;
use crate::gate::structs::path_segment_extractor::PathSegmentExtractor;
use crate::gate::structs::query_param_extractor::QueryParamExtractor;
use crate::gate::traits::hook::Hook;
use crate::gate::traits::user_token_extractor::UserTokenExtractor;
use crate::nanami::structs::authority_client::AuthorityClient;
use crate::nanami::structs::nanami_http_backend::NanamiHttpBackend;
use crate::nanami::structs::single_user_announce::SingleUserAnnounce;
use crate::nanami::traits::authority_backend::AuthorityBackend;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::scrape_request::ScrapeRequest;

impl ApprovalGate {
    /// Builds a gate from the host options block.
    pub async fn from_gate_config(config: GateConfig) -> Result<ApprovalGate, ConfigurationError> {
        Self::start(NanamiConfig::from(config)).await
    }

    /// Builds a gate talking to nanami over HTTP.
    ///
    /// Configuration problems fail here and no gate is created. An
    /// unreachable nanami does not: the gate starts with an empty allow-list.
    pub async fn start(config: NanamiConfig) -> Result<ApprovalGate, ConfigurationError> {
        let config = Arc::new(config.validate()?);
        let backend = NanamiHttpBackend::new(config.clone())
            .map_err(|e| ConfigurationError::InvalidValue(format!("unable to build nanami client: {e}")))?;
        Ok(Self::start_validated(config, Arc::new(backend)).await)
    }

    /// Same as [`ApprovalGate::start`] with a caller-supplied transport.
    pub async fn start_with_backend(config: NanamiConfig, backend: Arc<dyn AuthorityBackend>) -> Result<ApprovalGate, ConfigurationError> {
        let config = Arc::new(config.validate()?);
        Ok(Self::start_validated(config, backend).await)
    }

    async fn start_validated(config: Arc<NanamiConfig>, backend: Arc<dyn AuthorityBackend>) -> ApprovalGate {
        let stats = Arc::new(StatsAtomics::new());
        let shutdown = CancellationToken::new();
        let client = Arc::new(AuthorityClient::new(backend, stats.clone()));

        info!("[GATE] Using nanami at {}", config.nanami_address);
        let cache = ApprovalCache::start(
            client.clone(),
            config.refresh_interval(),
            stats.clone(),
            shutdown.child_token(),
        ).await;
        let batcher = AnnounceBatcher::start(
            client,
            config.batch_size,
            config.batch_flush_interval(),
            config.queue_capacity,
            stats.clone(),
            shutdown.child_token(),
        );

        ApprovalGate {
            extractor: Self::extractor_for(&config),
            config,
            cache,
            batcher,
            stats,
            shutdown,
        }
    }

    fn extractor_for(config: &NanamiConfig) -> Box<dyn UserTokenExtractor> {
        match config.user_token_source {
            UserTokenSource::path_segment => Box::new(PathSegmentExtractor::new(config.user_token_segment)),
            UserTokenSource::query_param => Box::new(QueryParamExtractor::new(&config.user_token_param)),
        }
    }

    /// Replaces the user token extraction strategy.
    pub fn with_extractor(mut self, extractor: Box<dyn UserTokenExtractor>) -> ApprovalGate {
        self.extractor = extractor;
        self
    }

    /// Checks user, torrent and client, in that order, against the current
    /// snapshot. On allow the announce is queued for nanami; a full queue
    /// does not change the verdict.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn decide_announce(&self, request: &AnnounceRequest) -> Result<(), GateError> {
        let snapshot = self.cache.current();
        let user_token = self.extractor.extract(request);

        if !snapshot.is_user_approved(&user_token) {
            self.stats.update_stats(StatsEvent::DeniedUser, 1);
            debug!("[GATE] Denied announce for {}: unapproved user {:?}", request.info_hash, user_token);
            return Err(GateError::UnapprovedUser);
        }

        if !snapshot.is_torrent_approved(&request.info_hash) {
            self.stats.update_stats(StatsEvent::DeniedTorrent, 1);
            debug!("[GATE] Denied announce for {}: unapproved torrent", request.info_hash);
            return Err(GateError::UnapprovedTorrent);
        }

        let client_id = request.peer_id.client_id(self.config.client_id_scheme);
        if !snapshot.is_client_approved(&client_id) {
            self.stats.update_stats(StatsEvent::DeniedClient, 1);
            debug!("[GATE] Denied announce for {}: unapproved client {}", request.info_hash, client_id);
            return Err(GateError::UnapprovedClient);
        }

        self.stats.update_stats(StatsEvent::AnnouncesAllowed, 1);
        if let Err(error) = self.batcher.enqueue(SingleUserAnnounce::from_request(user_token, request)) {
            debug!("[GATE] Announce telemetry not queued: {error}");
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn decide_scrape(&self, _request: &ScrapeRequest) -> Result<(), GateError> {
        self.stats.update_stats(StatsEvent::ScrapesAllowed, 1);
        Ok(())
    }

    pub fn cache(&self) -> &Arc<ApprovalCache> {
        &self.cache
    }

    pub fn batcher(&self) -> &Arc<AnnounceBatcher> {
        &self.batcher
    }

    pub fn stats(&self) -> &Arc<StatsAtomics> {
        &self.stats
    }

    pub fn config(&self) -> &Arc<NanamiConfig> {
        &self.config
    }

    /// Stops the refresh loop, flushes the remaining telemetry and waits for
    /// both background tasks.
    pub async fn shutdown(&self) {
        info!("[GATE] Shutting down...");
        self.cache.shutdown().await;
        self.batcher.shutdown().await;
        self.shutdown.cancel();
        info!("[GATE] Shut down");
    }
}

impl Hook for ApprovalGate {
    fn handle_announce(&self, request: &AnnounceRequest) -> Result<(), GateError> {
        self.decide_announce(request)
    }

    fn handle_scrape(&self, request: &ScrapeRequest) -> Result<(), GateError> {
        self.decide_scrape(request)
    }
}

impl Drop for ApprovalGate {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
