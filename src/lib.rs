//! 불가리아 부동산 매물 백엔드
//!
//! 불가리아 28개 행정 구역의 매물을 등록하고 검색하는 HTTP 서비스입니다.
//! 가격은 EUR 또는 BGN으로 입력받아 두 통화로 정규화해 저장하므로,
//! 어느 통화로든 가격 범위 검색이 가능합니다.
//!
//! # Features
//!
//! - **매물 등록**: 필드 검증, EUR/BGN 고정 환율(1.95583) 정규화
//! - **매물 검색**: 키워드, 지역, 가격(통화 선택), 면적, 개수 제한
//! - **진단**: 데이터베이스 연결 상태와 설정 여부 보고
//! - **MongoDB**: `property` 컬렉션에 매물 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, DTO 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가격 정규화, 검색, 진단
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  PropertyStore  │ ← MongoDB / 메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bulghousing_backend::repositories::properties::MemoryPropertyRepository;
//! use bulghousing_backend::services::properties::PropertyService;
//!
//! let store = Arc::new(MemoryPropertyRepository::new("bulghousing"));
//! let service = PropertyService::new(store);
//! let created = service.create_property(listing).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
