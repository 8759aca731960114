//! 라우트 구성 모듈
//!
//! 모든 엔드포인트와 요청 추출기 설정을 한곳에서 등록합니다.
//! JSON 본문과 쿼리 문자열을 해석하지 못한 경우는 400으로 응답합니다.

use actix_web::{HttpRequest, web};
use log::warn;

use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // System routes
    cfg.service(handlers::system::root)
        .service(handlers::system::diagnostics);

    // Feature-specific routes
    configure_property_routes(cfg);
}

fn configure_property_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/properties")
            .service(handlers::properties::create_property)
            .service(handlers::properties::search_properties),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        warn!("JSON 본문 해석 실패 ({}): {}", req.path(), err);
        AppError::ValidationError(format!("잘못된 JSON 본문: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req: &HttpRequest| {
        warn!("쿼리 문자열 해석 실패 ({}): {}", req.path(), err);
        AppError::ValidationError(format!("잘못된 쿼리 파라미터: {}", err)).into()
    })
}
