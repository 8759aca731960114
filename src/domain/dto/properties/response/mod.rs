//! 매물 응답 DTO 모듈

pub mod property_response;

pub use property_response::{CreatePropertyResponse, SearchPropertiesResponse};
