//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 가격 정규화, 검색, 진단              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - PropertyStore (MongoDB/메모리)   ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - Property, Region, Currency  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `web::Data<T>`로 주입됩니다. `main`에서 한 번 생성된 인스턴스를
//! 모든 워커가 `Arc`로 공유합니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_property(
//!     service: web::Data<PropertyService>,
//!     payload: web::Json<Map<String, Value>>,
//! ) -> Result<HttpResponse, AppError> {
//!     let property = CreatePropertyRequest::from_payload(payload.into_inner())?;
//!     let response = service.create_property(property).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`properties`] - 매물 등록/검색
//! - [`system`] - 생존 확인(`/`)과 진단(`/test`)

pub mod properties;
pub mod system;
