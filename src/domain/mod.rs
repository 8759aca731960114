//! # Domain Layer Module
//!
//! 매물 도메인의 핵심 타입과 규칙을 담당하는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장되는 매물 (Property, StoredProperty)
//! ├── models    - 값 객체 (Region, Currency, PropertySearch)
//! └── dto       - 요청/응답 계약 (validator 검증 포함)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! 등록: JSON 본문 → CreatePropertyRequest (검증) → Property
//!       → StoredProperty (EUR/BGN 정규화) → insert
//!
//! 검색: 쿼리 문자열 → SearchPropertiesQuery (검증) → PropertySearch
//!       → 저장소 필터 → Vec<StoredProperty> → SearchPropertiesResponse
//! ```

pub mod dto;
pub mod entities;
pub mod models;
