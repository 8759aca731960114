//! # 매물 서비스 구현
//!
//! 매물 등록과 검색의 비즈니스 로직을 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               PropertyService                │
//! │  • 가격 정규화 (EUR ↔ BGN, 소수점 2자리)       │
//! │  • 저장소 호출 및 응답 DTO 변환                │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │         PropertyStore (trait object)         │
//! │  • PropertyRepository (MongoDB)              │
//! │  • MemoryPropertyRepository (테스트)          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 입력 검증은 DTO 계층에서 끝난 상태로 들어오므로,
//! 이 서비스는 이미 유효한 [`Property`]와 [`PropertySearch`]만 다룹니다.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::AppResult;
use crate::domain::dto::properties::response::{CreatePropertyResponse, SearchPropertiesResponse};
use crate::domain::entities::properties::property::{Property, StoredProperty};
use crate::domain::models::search::PropertySearch;
use crate::repositories::properties::PropertyStore;

/// 매물 서비스
#[derive(Clone)]
pub struct PropertyService {
    store: Arc<dyn PropertyStore>,
}

impl PropertyService {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    /// 매물 등록
    ///
    /// 입력 가격을 두 통화로 정규화한 뒤 한 건을 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(CreatePropertyResponse)` - 저장소가 부여한 식별자
    /// * `Err(AppError::DatabaseError)` - 저장 실패 (부분 저장 없음)
    pub async fn create_property(&self, property: Property) -> AppResult<CreatePropertyResponse> {
        let stored = StoredProperty::from_listing(property);
        debug!(
            "매물 가격 정규화: {} {} → EUR {} / BGN {}",
            stored.price_value, stored.currency, stored.price_eur, stored.price_bgn
        );

        let id = self.store.insert(&stored).await?;
        info!("매물 등록 완료: id={}, region={}", id, stored.region);

        Ok(CreatePropertyResponse { id })
    }

    /// 매물 검색
    ///
    /// 모든 조건은 AND로 결합되며, 결과는 생성 순서로 최대 `limit`건입니다.
    pub async fn search_properties(&self, search: PropertySearch) -> AppResult<SearchPropertiesResponse> {
        let start_time = std::time::Instant::now();

        let results = self.store.search(&search).await?;

        info!(
            "매물 검색 완료: {}건 (limit={}, {:?})",
            results.len(),
            search.limit,
            start_time.elapsed()
        );

        Ok(SearchPropertiesResponse::from(results))
    }
}
