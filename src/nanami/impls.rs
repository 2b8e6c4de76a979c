//! Implementation blocks for the nanami clients.

/// AnnounceBatch: accumulation helpers.
pub mod announce_batch;

/// AuthorityClient: snapshot conversion and batch forwarding.
pub mod authority_client;

/// NanamiHttpBackend: reqwest transport.
pub mod nanami_http_backend;

/// SingleUserAnnounce: construction from an announce request.
pub mod single_user_announce;
