#[cfg(test)]
mod nanami_tests {
    mod authority_client_tests {
        use std::sync::Arc;
        use crate::nanami::enums::authority_error::AuthorityError;
        use crate::nanami::structs::announce_batch::AnnounceBatch;
        use crate::nanami::structs::approval_info::ApprovalInfo;
        use crate::nanami::structs::authority_client::AuthorityClient;
        use crate::nanami::traits::authority_backend::MockAuthorityBackend;
        use crate::stats::structs::stats_atomics::StatsAtomics;
        use crate::tracker::structs::client_id::ClientId;
        use crate::tracker::structs::info_hash::InfoHash;

        fn client(backend: MockAuthorityBackend) -> (AuthorityClient, Arc<StatsAtomics>) {
            let stats = Arc::new(StatsAtomics::new());
            (AuthorityClient::new(Arc::new(backend), stats.clone()), stats)
        }

        #[tokio::test]
        async fn test_fetch_converts_payload() {
            let mut backend = MockAuthorityBackend::new();
            backend.expect_fetch_approval_info().times(1).returning(|| Ok(ApprovalInfo {
                approved_torrents: vec!["a".repeat(20), "b".repeat(20)],
                approved_clients: vec![String::from("qB4650"), String::from("TR")],
                approved_users: vec![String::from("alice")],
            }));
            let (client, stats) = client(backend);

            let snapshot = client.fetch_approvals().await.unwrap();
            assert!(snapshot.is_torrent_approved(&InfoHash([b'a'; 20])));
            assert!(snapshot.is_torrent_approved(&InfoHash([b'b'; 20])));
            assert!(snapshot.is_client_approved(&ClientId(*b"qB4650")));
            assert!(snapshot.is_client_approved(&ClientId([b'T', b'R', 0, 0, 0, 0])));
            assert!(snapshot.is_user_approved("alice"));
            assert_eq!(stats.get_stats().torrents_skipped, 0);
        }

        #[tokio::test]
        async fn test_fetch_skips_torrents_of_wrong_length() {
            let mut backend = MockAuthorityBackend::new();
            backend.expect_fetch_approval_info().returning(|| Ok(ApprovalInfo {
                approved_torrents: vec!["a".repeat(20), "c".repeat(19), "d".repeat(21)],
                approved_clients: vec![],
                approved_users: vec![],
            }));
            let (client, stats) = client(backend);

            let snapshot = client.fetch_approvals().await.unwrap();
            assert_eq!(snapshot.torrents().len(), 1);
            assert!(snapshot.is_torrent_approved(&InfoHash([b'a'; 20])));
            assert_eq!(stats.get_stats().torrents_skipped, 2);
        }

        #[tokio::test]
        async fn test_fetch_truncates_long_client_tags() {
            let mut backend = MockAuthorityBackend::new();
            backend.expect_fetch_approval_info().returning(|| Ok(ApprovalInfo {
                approved_clients: vec![String::from("qB4650-and-more")],
                ..ApprovalInfo::default()
            }));
            let (client, _) = client(backend);

            let snapshot = client.fetch_approvals().await.unwrap();
            assert!(snapshot.is_client_approved(&ClientId(*b"qB4650")));
        }

        #[tokio::test]
        async fn test_fetch_passes_errors_through() {
            let mut backend = MockAuthorityBackend::new();
            backend.expect_fetch_approval_info().times(1)
                .returning(|| Err(AuthorityError::TransportError(String::from("connection refused"))));
            let (client, _) = client(backend);

            let error = client.fetch_approvals().await.unwrap_err();
            assert_eq!(error, AuthorityError::TransportError(String::from("connection refused")));
        }

        #[tokio::test]
        async fn test_push_is_not_retried() {
            let mut backend = MockAuthorityBackend::new();
            backend.expect_push_announce_batch().times(1)
                .returning(|_| Err(AuthorityError::StatusError { endpoint: String::from("http://nanami/announce_batch"), status: 503 }));
            let (client, _) = client(backend);

            assert!(client.push_batch(&AnnounceBatch::default()).await.is_err());
        }
    }

    mod wire_format_tests {
        use serde_json::json;
        use crate::nanami::enums::authority_error::AuthorityError;
        use crate::nanami::structs::announce_batch::AnnounceBatch;
        use crate::nanami::structs::approval_info::ApprovalInfo;
        use crate::nanami::structs::single_user_announce::SingleUserAnnounce;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::announce_request::AnnounceRequest;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;

        #[test]
        fn test_approval_info_missing_lists_are_empty() {
            let info: ApprovalInfo = serde_json::from_str(r#"{"approved_users":["alice"]}"#).unwrap();
            assert!(info.approved_torrents.is_empty());
            assert!(info.approved_clients.is_empty());
            assert_eq!(info.approved_users, vec![String::from("alice")]);
        }

        #[test]
        fn test_approval_info_rejects_wrong_types() {
            assert!(serde_json::from_str::<ApprovalInfo>(r#"{"approved_users":5}"#).is_err());
            assert!(serde_json::from_str::<ApprovalInfo>("not json").is_err());
        }

        #[test]
        fn test_batch_is_a_json_array_of_announces() {
            let request = AnnounceRequest {
                info_hash: InfoHash([0x11; 20]),
                peer_id: PeerId([b'x'; 20]),
                path: String::from("/announce/alice"),
                query: None,
                uploaded: 100,
                downloaded: 200,
                left: 0,
                event: AnnounceEvent::Completed,
            };
            let mut batch = AnnounceBatch::with_capacity(1);
            batch.push(SingleUserAnnounce::from_request(String::from("alice"), &request));

            let value = serde_json::to_value(&batch).unwrap();
            assert_eq!(value, json!([{
                "user_token": "alice",
                "infohash": "11".repeat(20),
                "event": 3,
                "downloaded": 200,
                "uploaded": 100
            }]));
        }

        #[test]
        fn test_take_leaves_empty_batch() {
            let mut batch = AnnounceBatch::with_capacity(4);
            batch.push(SingleUserAnnounce {
                user_token: String::from("bob"),
                infohash: InfoHash([0; 20]),
                event: 0,
                downloaded: 0,
                uploaded: 0,
            });
            let taken = batch.take();
            assert_eq!(taken.len(), 1);
            assert!(batch.is_empty());
        }

        #[test]
        fn test_authority_error_display() {
            assert_eq!(AuthorityError::DecodeError(String::from("eof")).to_string(), "Decode error: eof");
            assert_eq!(
                AuthorityError::StatusError { endpoint: String::from("http://nanami/approval"), status: 500 }.to_string(),
                "Unexpected status 500 from http://nanami/approval"
            );
        }
    }

    mod http_backend_tests {
        use std::sync::Arc;
        use crate::config::structs::nanami_config::NanamiConfig;
        use crate::nanami::enums::authority_error::AuthorityError;
        use crate::nanami::structs::announce_batch::AnnounceBatch;
        use crate::nanami::structs::nanami_http_backend::NanamiHttpBackend;
        use crate::nanami::traits::authority_backend::AuthorityBackend;

        fn unreachable_backend() -> NanamiHttpBackend {
            let config = NanamiConfig::new("http://127.0.0.1:1/").validate().unwrap();
            NanamiHttpBackend::new(Arc::new(config)).unwrap()
        }

        #[tokio::test]
        async fn test_unreachable_fetch_is_transport_error() {
            let result = unreachable_backend().fetch_approval_info().await;
            assert!(matches!(result, Err(AuthorityError::TransportError(_))));
        }

        #[tokio::test]
        async fn test_unreachable_push_is_transport_error() {
            let result = unreachable_backend().push_announce_batch(&AnnounceBatch::default()).await;
            assert!(matches!(result, Err(AuthorityError::TransportError(_))));
        }
    }
}
