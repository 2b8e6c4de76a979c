mod common;

use std::sync::Arc;
use std::time::Duration;
use serde_json::json;
use nanami_gate::config::structs::gate_config::GateConfig;
use nanami_gate::config::structs::nanami_config::NanamiConfig;
use nanami_gate::gate::enums::gate_error::GateError;
use nanami_gate::gate::structs::approval_gate::ApprovalGate;
use nanami_gate::nanami::structs::approval_info::ApprovalInfo;
use nanami_gate::tracker::enums::announce_event::AnnounceEvent;
use nanami_gate::tracker::structs::info_hash::InfoHash;
use common::{announce_request, default_approvals, RecordingBackend, QBITTORRENT, TORRENT_1, TORRENT_2, TRANSMISSION};

#[tokio::test]
async fn test_allowed_announce_reaches_nanami_on_shutdown() {
    let backend = RecordingBackend::new(default_approvals());
    let gate = common::create_test_gate(backend.clone()).await;

    let request = announce_request("/announce/alice", TORRENT_1, QBITTORRENT, AnnounceEvent::Started);
    assert_eq!(gate.decide_announce(&request), Ok(()));
    gate.shutdown().await;

    let pushed = backend.pushed();
    assert_eq!(pushed.len(), 1);
    let announce = &pushed[0].0[0];
    assert_eq!(announce.user_token, "alice");
    assert_eq!(announce.infohash, InfoHash(TORRENT_1));
    assert_eq!(announce.event, 1);
    assert_eq!((announce.uploaded, announce.downloaded), (1024, 2048));
}

#[tokio::test]
async fn test_denied_announces_send_no_telemetry() {
    let backend = RecordingBackend::new(default_approvals());
    let gate = common::create_test_gate(backend.clone()).await;

    assert_eq!(
        gate.decide_announce(&announce_request("/announce/alice", TORRENT_2, QBITTORRENT, AnnounceEvent::None)),
        Err(GateError::UnapprovedTorrent)
    );
    assert_eq!(
        gate.decide_announce(&announce_request("/announce/alice", TORRENT_1, TRANSMISSION, AnnounceEvent::None)),
        Err(GateError::UnapprovedClient)
    );
    assert_eq!(
        gate.decide_announce(&announce_request("/announce/bob", TORRENT_2, TRANSMISSION, AnnounceEvent::None)),
        Err(GateError::UnapprovedUser)
    );
    gate.shutdown().await;

    assert!(backend.pushed().is_empty());
    let stats = gate.stats().get_stats();
    assert_eq!((stats.denied_user, stats.denied_torrent, stats.denied_client), (1, 1, 1));
}

#[tokio::test(start_paused = true)]
async fn test_revoked_torrent_is_denied_after_refresh() {
    let backend = RecordingBackend::new(default_approvals());
    let mut config = common::test_config();
    config.refresh_interval = NanamiConfig::MIN_REFRESH_INTERVAL;
    let gate = ApprovalGate::start_with_backend(config, backend.clone()).await.unwrap();

    let request = announce_request("/announce/alice", TORRENT_1, QBITTORRENT, AnnounceEvent::None);
    assert_eq!(gate.decide_announce(&request), Ok(()));

    backend.set_approvals(ApprovalInfo {
        approved_torrents: vec![],
        ..default_approvals()
    });
    assert_eq!(gate.decide_announce(&request), Ok(()));

    tokio::time::sleep(Duration::from_secs(NanamiConfig::MIN_REFRESH_INTERVAL + 1)).await;
    assert_eq!(backend.fetches(), 2);
    assert_eq!(gate.decide_announce(&request), Err(GateError::UnapprovedTorrent));
    gate.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_outage_keeps_last_known_approvals() {
    let backend = RecordingBackend::new(default_approvals());
    let mut config = common::test_config();
    config.refresh_interval = NanamiConfig::MIN_REFRESH_INTERVAL;
    let gate = ApprovalGate::start_with_backend(config, backend.clone()).await.unwrap();

    backend.fail_fetch();
    tokio::time::sleep(Duration::from_secs(NanamiConfig::MIN_REFRESH_INTERVAL * 3 + 1)).await;

    let request = announce_request("/announce/alice", TORRENT_1, QBITTORRENT, AnnounceEvent::None);
    assert_eq!(gate.decide_announce(&request), Ok(()));
    assert_eq!(gate.stats().get_stats().refresh_failure, 3);
    gate.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_gate_recovers_once_nanami_comes_up() {
    let backend = RecordingBackend::unreachable();
    let mut config = common::test_config();
    config.refresh_interval = NanamiConfig::MIN_REFRESH_INTERVAL;
    let gate = ApprovalGate::start_with_backend(config, backend.clone()).await.unwrap();

    let request = announce_request("/announce/alice", TORRENT_1, QBITTORRENT, AnnounceEvent::None);
    assert_eq!(gate.decide_announce(&request), Err(GateError::UnapprovedUser));

    backend.set_approvals(default_approvals());
    tokio::time::sleep(Duration::from_secs(NanamiConfig::MIN_REFRESH_INTERVAL + 1)).await;
    assert_eq!(gate.decide_announce(&request), Ok(()));
    gate.shutdown().await;
}

#[tokio::test]
async fn test_decisions_from_many_tasks() {
    let backend = RecordingBackend::new(default_approvals());
    let gate = common::create_test_gate(backend.clone()).await;

    let tasks: Vec<_> = (0..8).map(|n| {
        let gate: Arc<ApprovalGate> = gate.clone();
        tokio::spawn(async move {
            let torrent = if n % 2 == 0 { TORRENT_1 } else { TORRENT_2 };
            let request = announce_request("/announce/alice", torrent, QBITTORRENT, AnnounceEvent::None);
            (torrent, gate.decide_announce(&request))
        })
    }).collect();

    for task in tasks {
        let (torrent, verdict) = task.await.unwrap();
        if torrent == TORRENT_1 {
            assert_eq!(verdict, Ok(()));
        } else {
            assert_eq!(verdict, Err(GateError::UnapprovedTorrent));
        }
    }
    gate.shutdown().await;
    let pushed: usize = backend.pushed().iter().map(|batch| batch.len()).sum();
    assert_eq!(pushed, 4);
}

#[tokio::test]
async fn test_gate_against_http_nanami() {
    let nanami = common::start_fake_nanami(json!({
        "approved_torrents": [String::from_utf8(TORRENT_1.to_vec()).unwrap(), "too-short"],
        "approved_clients": ["qB4650"],
        "approved_users": ["alice"]
    })).await;

    let gate = ApprovalGate::from_gate_config(GateConfig { nanami_address: nanami.address.clone() }).await.unwrap();
    assert_eq!(gate.stats().get_stats().torrents_skipped, 1);

    let request = announce_request("/announce/alice", TORRENT_1, QBITTORRENT, AnnounceEvent::Completed);
    assert_eq!(gate.decide_announce(&request), Ok(()));
    gate.shutdown().await;

    let received = nanami.received.lock().clone();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json; charset=UTF-8"));
    assert_eq!(body, &json!([{
        "user_token": "alice",
        "infohash": "31".repeat(20),
        "event": 3,
        "downloaded": 2048,
        "uploaded": 1024
    }]));
    nanami.handle.stop(true).await;
}

#[tokio::test]
async fn test_gate_with_nanami_down_starts_denying() {
    let gate = ApprovalGate::from_gate_config(GateConfig { nanami_address: String::from("http://127.0.0.1:1/") }).await.unwrap();
    let request = announce_request("/announce/alice", TORRENT_1, QBITTORRENT, AnnounceEvent::None);
    assert_eq!(gate.decide_announce(&request), Err(GateError::UnapprovedUser));
    assert_eq!(gate.stats().get_stats().refresh_failure, 1);
    gate.shutdown().await;
}

#[tokio::test]
async fn test_gate_without_address_is_not_created() {
    let result = ApprovalGate::from_gate_config(GateConfig { nanami_address: String::new() }).await;
    assert!(result.is_err());
}
