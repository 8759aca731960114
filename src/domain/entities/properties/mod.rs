//! 매물 엔티티 모듈

pub mod property;
