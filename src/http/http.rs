use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_map};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::scrape_request::ScrapeRequest;

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/announce/{user_token}").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let config = data.http_server_config.clone();
    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let raw_query = match request.query_string() {
        "" => None,
        query => Some(query.to_string()),
    };
    let query = match parse_query(raw_query.clone()) {
        Ok(query) => query,
        Err(error) => return http_response_failure(&error.to_string()),
    };
    let announce = match AnnounceRequest::from_query(request.path(), raw_query, &query) {
        Ok(announce) => announce,
        Err(error) => {
            debug!("[HTTP] Malformed announce on {}: {error}", request.path());
            return http_response_failure(&error.to_string());
        }
    };

    match data.gate.decide_announce(&announce) {
        Ok(()) => http_response_allow(),
        Err(reason) => http_response_failure(&reason.to_string()),
    }
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let raw_query = match request.query_string() {
        "" => None,
        query => Some(query.to_string()),
    };
    let query = parse_query(raw_query).unwrap_or_default();
    let scrape = ScrapeRequest::from_query(request.path(), &query);

    match data.gate.decide_scrape(&scrape) {
        Ok(()) => http_response_allow(),
        Err(reason) => http_response_failure(&reason.to_string()),
    }
}

pub async fn http_service_stats(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    HttpResponse::Ok().json(data.gate.stats().get_stats())
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(http_bencode_failure("unknown request"))
}

pub fn http_response_allow() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(http_bencode_allow())
}

pub fn http_response_failure(reason: &str) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(http_bencode_failure(reason))
}

pub fn http_bencode_allow() -> Vec<u8>
{
    ben_map! {
        "status" => ben_bytes!("allow")
    }.encode()
}

pub fn http_bencode_failure(reason: &str) -> Vec<u8>
{
    ben_map! {
        "failure reason" => ben_bytes!(reason.to_string())
    }.encode()
}

pub fn http_parse_bind_address(bind_address: &str) -> Result<SocketAddr, std::io::Error>
{
    bind_address.parse::<SocketAddr>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid bind address {bind_address}: {e}")))
}
