#[cfg(test)]
mod stats_tests {
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[test]
    fn test_new_stats_records_start_time() {
        let stats = StatsAtomics::new();
        assert!(stats.get_stats().started > 0);
        assert_eq!(stats.get_stats().events_queued, 0);
    }

    #[test]
    fn test_update_stats_adds_and_subtracts() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::EventsQueued, 5);
        stats.update_stats(StatsEvent::EventsQueued, -2);
        stats.update_stats(StatsEvent::EventsQueued, 0);
        assert_eq!(stats.get_stats().events_queued, 3);
    }

    #[test]
    fn test_set_stats_overwrites() {
        let stats = StatsAtomics::new();
        stats.set_stats(StatsEvent::ApprovedTorrents, 10);
        stats.set_stats(StatsEvent::ApprovedTorrents, 4);
        assert_eq!(stats.get_stats().approved_torrents, 4);
    }

    #[test]
    fn test_each_event_moves_its_own_counter() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::DeniedUser, 1);
        stats.update_stats(StatsEvent::DeniedTorrent, 2);
        stats.update_stats(StatsEvent::DeniedClient, 3);
        let snapshot = stats.get_stats();
        assert_eq!(snapshot.denied_user, 1);
        assert_eq!(snapshot.denied_torrent, 2);
        assert_eq!(snapshot.denied_client, 3);
        assert_eq!(snapshot.announces_allowed, 0);
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::BatchesPushed, 1);
        let json = serde_json::to_value(stats.get_stats()).unwrap();
        assert_eq!(json["batches_pushed"], 1);
    }
}
