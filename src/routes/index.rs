use actix_web::web::{self, PayloadConfig, ServiceConfig};

// Bodies are never rejected for size.
const CHAMPION_PAYLOAD_LIMIT: usize = usize::MAX;

pub fn config(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/champions")
            .app_data(PayloadConfig::new(CHAMPION_PAYLOAD_LIMIT))
            .configure(super::champion_route::config),
    );
}
