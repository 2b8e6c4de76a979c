use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use nanami_gate::common::common::setup_logging;
use nanami_gate::config::structs::configuration::Configuration;
use nanami_gate::gate::structs::approval_gate::ApprovalGate;
use nanami_gate::http::http::{http_parse_bind_address, http_service};
use nanami_gate::http::structs::http_service_data::HttpServiceData;
use nanami_gate::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config.log_level) {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let gate = match ApprovalGate::start(config.nanami.clone()).await {
                Ok(gate) => Arc::new(gate),
                Err(error) => {
                    error!("[BOOT] Unable to start the approval gate: {error}");
                    exit(1);
                }
            };

            let tokio_shutdown = Shutdown::new()
                .map_err(|e| std::io::Error::other(format!("unable to install shutdown handler: {e:?}")))?;

            let mut http_handle = None;
            if config.http_server.enabled {
                let addr = http_parse_bind_address(&config.http_server.bind_address)?;
                let data = Arc::new(HttpServiceData {
                    gate: gate.clone(),
                    http_server_config: Arc::new(config.http_server.clone()),
                });
                let (handle, server) = http_service(addr, data).await?;
                http_handle = Some(handle);
                tokio::spawn(async move {
                    if let Err(error) = server.await {
                        error!("[HTTP] Server stopped with error: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let stats_gate = gate.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = stats_gate.stats().get_stats();
                            info!(
                                "[STATS] Approved - Torrents: {} - Clients: {} - Users: {} - Refresh OK/Failed: {}/{}",
                                stats.approved_torrents, stats.approved_clients, stats.approved_users,
                                stats.refresh_success, stats.refresh_failure
                            );
                            info!(
                                "[STATS] Announces allowed: {} - Denied user/torrent/client: {}/{}/{} - Scrapes: {}",
                                stats.announces_allowed, stats.denied_user, stats.denied_torrent,
                                stats.denied_client, stats.scrapes_allowed
                            );
                            info!(
                                "[STATS] Events queued: {} - Dropped: {} - Pushed: {} - Batches OK/Failed: {}/{} - Queue: {}",
                                stats.events_queued, stats.events_dropped, stats.events_pushed,
                                stats.batches_pushed, stats.batches_failed, stats_gate.batcher().queue_len()
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");
            if let Some(handle) = http_handle {
                handle.stop(true).await;
            }
            gate.shutdown().await;
            info!("Server shutting down completed");
            Ok(())
        })
}
