//! 불가리아 부동산 매물 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 MongoDB 저장소와 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use log::{error, info, warn};

use bulghousing_backend::config::{DatabaseConfig, RateLimitConfig, ServerConfig};
use bulghousing_backend::db::Database;
use bulghousing_backend::repositories::properties::{PropertyRepository, PropertyStore};
use bulghousing_backend::routes::configure_all_routes;
use bulghousing_backend::services::diagnostics::DiagnosticsService;
use bulghousing_backend::services::properties::PropertyService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(filename) => info!("{} 파일 로드 됨", filename),
        Err(e) => warn!("환경 파일 로드 실패: {}. 환경 변수만 사용합니다", e),
    }

    info!("🚀 Bulghousing 백엔드 시작중...");

    let database_config = DatabaseConfig::from_env();

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&database_config).await.map_err(|e| {
        error!("데이터베이스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let store: Arc<dyn PropertyStore> = Arc::new(PropertyRepository::new(&database));
    let property_service = web::Data::new(PropertyService::new(store.clone()));
    let diagnostics_service = web::Data::new(DiagnosticsService::new(store, database_config));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(property_service, diagnostics_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    property_service: web::Data<PropertyService>,
    diagnostics_service: web::Data<DiagnosticsService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Diagnostics: http://{}/test", bind_address);
    info!("📍 API: http://{}/api/properties", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(property_service.clone())
            .app_data(diagnostics_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
///
/// 로거보다 먼저 호출되므로 결과(로드된 파일 이름)는 반환값으로 넘기고,
/// 로깅 초기화 이후에 기록합니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    dotenv::from_filename(filename).map(|_| filename)
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=bulghousing_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 공개 매물 API이므로 모든 Origin, 메서드, 헤더를 허용합니다.
fn configure_cors() -> Cors {
    Cors::permissive().max_age(3600)
}
