//! 매물 요청 DTO 모듈
//!
//! - [`create_property`]: `POST /api/properties` 본문 검증
//! - [`search_properties`]: `GET /api/properties` 쿼리 검증
//!
//! 두 DTO 모두 검증 실패를 `validator::ValidationErrors`로 모아 반환하며,
//! 핸들러에서 `AppError::InvalidFields`(422)로 변환됩니다.

pub mod create_property;
pub mod search_properties;

pub use create_property::CreatePropertyRequest;
pub use search_properties::SearchPropertiesQuery;
