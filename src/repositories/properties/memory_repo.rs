//! 메모리 기반 매물 저장소
//!
//! MongoDB 없이 서비스와 HTTP 계층을 검증할 때 사용합니다.
//! 식별자는 MongoDB와 같은 ObjectId hex 형식으로 발급되며,
//! 검색 결과는 삽입 순서를 따릅니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::properties::property::StoredProperty;
use crate::domain::models::search::PropertySearch;
use crate::repositories::properties::PropertyStore;
use crate::repositories::properties::property_repo::PROPERTY_COLLECTION;

#[derive(Debug, Default)]
pub struct MemoryPropertyRepository {
    database_name: String,
    properties: RwLock<Vec<(String, StoredProperty)>>,
}

impl MemoryPropertyRepository {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            properties: RwLock::new(Vec::new()),
        }
    }

    /// 저장된 매물 수
    pub fn len(&self) -> AppResult<usize> {
        let properties = self.properties.read().context("메모리 저장소 잠금 실패")?;
        Ok(properties.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }

    /// 식별자로 저장된 매물을 조회합니다.
    pub fn get(&self, id: &str) -> AppResult<Option<StoredProperty>> {
        let properties = self.properties.read().context("메모리 저장소 잠금 실패")?;
        Ok(properties
            .iter()
            .find(|(stored_id, _)| stored_id == id)
            .map(|(_, property)| property.clone()))
    }
}

#[async_trait]
impl PropertyStore for MemoryPropertyRepository {
    async fn insert(&self, property: &StoredProperty) -> AppResult<String> {
        let id = ObjectId::new().to_hex();
        let mut properties = self.properties.write().context("메모리 저장소 잠금 실패")?;
        properties.push((id.clone(), property.clone()));
        Ok(id)
    }

    async fn search(&self, search: &PropertySearch) -> AppResult<Vec<StoredProperty>> {
        let limit = usize::try_from(search.limit).unwrap_or(0);
        let properties = self.properties.read().context("메모리 저장소 잠금 실패")?;

        Ok(properties
            .iter()
            .map(|(_, property)| property)
            .filter(|property| search.matches(property))
            .take(limit)
            .cloned()
            .collect())
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn collection_names(&self) -> AppResult<Vec<String>> {
        if self.is_empty()? {
            Ok(Vec::new())
        } else {
            Ok(vec![PROPERTY_COLLECTION.to_string()])
        }
    }
}
