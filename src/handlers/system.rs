//! # System HTTP Handlers
//!
//! 서버 생존 확인과 데이터베이스 연결 진단 엔드포인트입니다.
//! 두 엔드포인트 모두 저장소 상태와 무관하게 항상 200을 반환합니다.

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::services::diagnostics::DiagnosticsService;

/// 서버 생존 확인
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Bulghousing backend running" }))
}

/// 데이터베이스 연결 진단
///
/// 연결 실패도 응답 본문의 상태 텍스트로 보고합니다.
#[get("/test")]
pub async fn diagnostics(service: web::Data<DiagnosticsService>) -> HttpResponse {
    let report = service.report().await;
    HttpResponse::Ok().json(report)
}
