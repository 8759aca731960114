//! 매물 등록/검색 서비스 모듈

pub mod property_service;

pub use property_service::PropertyService;
