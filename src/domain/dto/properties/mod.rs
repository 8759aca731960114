//! # Property Data Transfer Objects Module
//!
//! 매물 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! properties/
//! ├── request/
//! │   ├── create_property.rs     # 매물 등록 본문
//! │   └── search_properties.rs   # 검색 쿼리 파라미터
//! └── response/
//!     └── property_response.rs   # 등록/검색 응답
//! ```

pub mod request;
pub mod response;
