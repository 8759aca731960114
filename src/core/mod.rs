//! # Core Module
//!
//! 계층 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **필드 단위 상세**: `validator::ValidationErrors`를 응답의 `details`로 변환
//!
//! ## 의존성 전달
//!
//! 저장소 핸들은 전역 레지스트리 대신 `actix_web::web::Data`로 주입합니다.
//! 프로세스 시작 시 한 번 만들어진 `Arc<dyn PropertyStore>`를 서비스가 공유하며,
//! 요청마다 다시 생성하지 않습니다.
//!
//! ```rust,ignore
//! let store: Arc<dyn PropertyStore> = Arc::new(PropertyRepository::new(database));
//! let property_service = web::Data::new(PropertyService::new(store.clone()));
//!
//! App::new()
//!     .app_data(property_service.clone())
//!     .configure(configure_all_routes)
//! ```

pub mod errors;
