//! # Domain Models Module
//!
//! 식별자 없이 값 자체로 의미를 갖는 도메인 모델입니다.
//!
//! - [`region`] - 28개 행정 구역 (닫힌 집합)
//! - [`currency`] - EUR/BGN 통화와 가격 정규화
//! - [`search`] - 검증된 매물 검색 조건
//!
//! 지역과 통화 열거형은 등록 본문 검증과 검색 파라미터 검증이 함께 사용하는
//! 유일한 기준입니다.

pub mod currency;
pub mod region;
pub mod search;
