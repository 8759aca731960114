//! 매물 데이터 액세스 계층
//!
//! [`PropertyStore`] trait가 서비스 계층과 저장소 사이의 경계입니다.
//!
//! - [`PropertyRepository`](property_repo::PropertyRepository): MongoDB `property` 컬렉션
//! - [`MemoryPropertyRepository`](memory_repo::MemoryPropertyRepository): 테스트/로컬용 메모리 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::properties::{PropertyStore, PropertyRepository};
//!
//! let store: Arc<dyn PropertyStore> = Arc::new(PropertyRepository::new(&database));
//! let id = store.insert(&stored_property).await?;
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::properties::property::StoredProperty;
use crate::domain::models::search::PropertySearch;

pub mod memory_repo;
pub mod property_repo;

pub use memory_repo::MemoryPropertyRepository;
pub use property_repo::PropertyRepository;

/// 매물 저장소
///
/// 구현체는 요청 간에 공유되므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// 매물 한 건을 저장하고, 저장소가 부여한 식별자(hex 문자열)를 반환합니다.
    async fn insert(&self, property: &StoredProperty) -> AppResult<String>;

    /// 조건에 맞는 매물을 생성 순서대로 최대 `search.limit`건 반환합니다.
    async fn search(&self, search: &PropertySearch) -> AppResult<Vec<StoredProperty>>;

    /// 저장소가 가리키는 데이터베이스 이름
    fn database_name(&self) -> &str;

    /// 저장소에 존재하는 컬렉션 이름 목록
    async fn collection_names(&self) -> AppResult<Vec<String>>;
}
