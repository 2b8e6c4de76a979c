use std::sync::Arc;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::gate::structs::approval_gate::ApprovalGate;

pub struct HttpServiceData {
    pub gate: Arc<ApprovalGate>,
    pub http_server_config: Arc<HttpServerConfig>
}
