//! # Domain Entities Module
//!
//! MongoDB `property` 컬렉션에 저장되는 영속 엔티티를 정의합니다.
//!
//! - [`properties::property::Property`] - 검증을 통과한 매물
//! - [`properties::property::StoredProperty`] - EUR/BGN 가격이 추가된 저장 형태

pub mod properties;
