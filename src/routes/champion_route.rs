use crate::services::champion_service::{
    aatrox, creation_summary, decode, decode_lenient, encode,
};
use crate::structs::routes_struct::HTTPErrorResponse;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use tracing::{debug, error, warn};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/aatrox", web::get().to(get_aatrox))
        .route("/create", web::post().to(create_champion));
}

pub async fn get_aatrox() -> impl Responder {
    match encode(&aatrox()) {
        Ok(json) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(json),
        Err(e) => {
            error!("{}", e);
            HttpResponse::InternalServerError().json(HTTPErrorResponse {
                success: false,
                message: "Failed to serialize champion data",
            })
        }
    }
}

// Fields that fail to decode stay at their zero value, the response is always 200.
pub async fn create_champion(body: web::Bytes) -> impl Responder {
    if let Err(e) = decode(&body) {
        warn!("{}, keeping the fields that did decode", e);
    }
    let champion = decode_lenient(&body);
    debug!("decoded champion {:?}", champion.name);

    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(creation_summary(&champion))
}
