#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use async_trait::async_trait;
use parking_lot::Mutex;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use nanami_gate::config::structs::nanami_config::NanamiConfig;
use nanami_gate::gate::structs::approval_gate::ApprovalGate;
use nanami_gate::nanami::enums::authority_error::AuthorityError;
use nanami_gate::nanami::structs::announce_batch::AnnounceBatch;
use nanami_gate::nanami::structs::approval_info::ApprovalInfo;
use nanami_gate::nanami::traits::authority_backend::AuthorityBackend;
use nanami_gate::tracker::enums::announce_event::AnnounceEvent;
use nanami_gate::tracker::structs::announce_request::AnnounceRequest;
use nanami_gate::tracker::structs::info_hash::InfoHash;
use nanami_gate::tracker::structs::peer_id::PeerId;

pub const TORRENT_1: [u8; 20] = [b'1'; 20];
pub const TORRENT_2: [u8; 20] = [b'2'; 20];
pub const QBITTORRENT: &[u8; 8] = b"-qB4650-";
pub const TRANSMISSION: &[u8; 8] = b"-TR3000-";

/// In-memory nanami: serves whatever approvals it was last given and keeps
/// every pushed batch.
pub struct RecordingBackend {
    approvals: Mutex<Result<ApprovalInfo, AuthorityError>>,
    pushed: Mutex<Vec<AnnounceBatch>>,
    fetches: AtomicUsize,
}

impl RecordingBackend {
    pub fn new(approvals: ApprovalInfo) -> Arc<RecordingBackend> {
        Arc::new(RecordingBackend {
            approvals: Mutex::new(Ok(approvals)),
            pushed: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn unreachable() -> Arc<RecordingBackend> {
        let backend = RecordingBackend::new(ApprovalInfo::default());
        backend.fail_fetch();
        backend
    }

    pub fn set_approvals(&self, approvals: ApprovalInfo) {
        *self.approvals.lock() = Ok(approvals);
    }

    pub fn fail_fetch(&self) {
        *self.approvals.lock() = Err(AuthorityError::TransportError(String::from("connection refused")));
    }

    pub fn pushed(&self) -> Vec<AnnounceBatch> {
        self.pushed.lock().clone()
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorityBackend for RecordingBackend {
    async fn fetch_approval_info(&self) -> Result<ApprovalInfo, AuthorityError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.approvals.lock().clone()
    }

    async fn push_announce_batch(&self, batch: &AnnounceBatch) -> Result<(), AuthorityError> {
        self.pushed.lock().push(batch.clone());
        Ok(())
    }
}

/// alice may use torrent 1 with qBittorrent.
pub fn default_approvals() -> ApprovalInfo {
    ApprovalInfo {
        approved_torrents: vec![String::from_utf8(TORRENT_1.to_vec()).unwrap()],
        approved_clients: vec![String::from("qB4650")],
        approved_users: vec![String::from("alice")],
    }
}

pub fn test_config() -> NanamiConfig {
    NanamiConfig::new("http://nanami.test/")
}

pub async fn create_test_gate(backend: Arc<RecordingBackend>) -> Arc<ApprovalGate> {
    Arc::new(ApprovalGate::start_with_backend(test_config(), backend).await.unwrap())
}

pub fn peer_id(client: &[u8; 8]) -> PeerId {
    let mut bytes = [b'0'; 20];
    bytes[..8].copy_from_slice(client);
    PeerId(bytes)
}

pub fn announce_request(path: &str, info_hash: [u8; 20], client: &[u8; 8], event: AnnounceEvent) -> AnnounceRequest {
    AnnounceRequest {
        info_hash: InfoHash(info_hash),
        peer_id: peer_id(client),
        path: path.to_string(),
        query: None,
        uploaded: 1024,
        downloaded: 2048,
        left: 0,
        event,
    }
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}

pub fn announce_query(info_hash: [u8; 20], client: &[u8; 8], event: &str) -> String {
    format!(
        "info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left=1000&event={event}",
        encode_bytes(&info_hash),
        encode_bytes(&peer_id(client).0)
    )
}

/// A real HTTP stand-in for nanami on an ephemeral port.
pub struct FakeNanami {
    pub address: String,
    pub received: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
    pub handle: ServerHandle,
}

pub async fn start_fake_nanami(approvals: serde_json::Value) -> FakeNanami {
    let received: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>> = Arc::new(Mutex::new(Vec::new()));
    let approvals = web::Data::new(approvals);
    let batches = web::Data::new(received.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(approvals.clone())
            .app_data(batches.clone())
            .route("/approval", web::get().to(fake_approval))
            .route("/announce_batch", web::post().to(fake_announce_batch))
    })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let port = server.addrs()[0].port();
    let server = server.disable_signals().run();
    let handle = server.handle();
    tokio::spawn(server);

    FakeNanami {
        address: format!("http://127.0.0.1:{port}/"),
        received,
        handle,
    }
}

async fn fake_approval(approvals: web::Data<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(approvals.get_ref())
}

async fn fake_announce_batch(
    request: HttpRequest,
    body: web::Bytes,
    batches: web::Data<Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>>,
) -> HttpResponse {
    let content_type = request.headers().get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(value) => {
            batches.lock().push((content_type, value));
            HttpResponse::Ok().finish()
        }
        Err(_) => HttpResponse::BadRequest().finish(),
    }
}
