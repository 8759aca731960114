//! # 매물 리포지토리 구현
//!
//! MongoDB `property` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 검색 필터
//!
//! [`PropertySearch`]는 하나의 MongoDB 필터 문서로 변환됩니다.
//!
//! ```text
//! {
//!   "$or": [ { "title": { "$regex": k, "$options": "i" } }, ... ],
//!   "region": "Plovdiv",
//!   "price_eur": { "$gte": 10000.0, "$lte": 90000.0 },
//!   "size_sqm": { "$gte": 40.0 }
//! }
//! ```
//!
//! 키워드는 정규식 메타문자를 이스케이프한 뒤 부분 일치로 사용됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, error};
use mongodb::{
    Collection,
    bson::{Document, doc},
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::properties::property::StoredProperty;
use crate::domain::models::search::{NumericRange, PropertySearch};
use crate::repositories::properties::PropertyStore;

/// 매물 컬렉션 이름
pub const PROPERTY_COLLECTION: &str = "property";

/// 키워드 검색 대상 필드
const KEYWORD_FIELDS: [&str; 3] = ["title", "description", "address"];

/// MongoDB 매물 리포지토리
///
/// `mongodb::Database` 핸들은 내부적으로 연결 풀을 공유하므로
/// 복제 비용이 낮고, 하나의 인스턴스를 모든 요청이 함께 사용합니다.
#[derive(Clone, Debug)]
pub struct PropertyRepository {
    db: Database,
}

impl PropertyRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self) -> Collection<StoredProperty> {
        self.db
            .get_database()
            .collection::<StoredProperty>(PROPERTY_COLLECTION)
    }
}

#[async_trait]
impl PropertyStore for PropertyRepository {
    async fn insert(&self, property: &StoredProperty) -> AppResult<String> {
        let result = self.collection().insert_one(property).await.map_err(|e| {
            error!("매물 저장 실패: {}", e);
            AppError::DatabaseError(e.to_string())
        })?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID 형식이 올바르지 않습니다".to_string()))
    }

    async fn search(&self, search: &PropertySearch) -> AppResult<Vec<StoredProperty>> {
        let filter = build_filter(search);
        debug!("매물 검색 필터: {}", filter);

        let cursor = self
            .collection()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .limit(search.limit)
            .await
            .map_err(|e| {
                error!("매물 검색 실패: {}", e);
                AppError::DatabaseError(e.to_string())
            })?;

        cursor.try_collect::<Vec<StoredProperty>>().await.map_err(|e| {
            error!("매물 검색 결과 읽기 실패: {}", e);
            AppError::DatabaseError(e.to_string())
        })
    }

    fn database_name(&self) -> &str {
        self.db.database_name()
    }

    async fn collection_names(&self) -> AppResult<Vec<String>> {
        self.db.list_collection_names().await
    }
}

/// 검색 조건을 MongoDB 필터 문서로 변환합니다.
///
/// 조건이 하나도 없으면 빈 문서(전체 조회)를 반환합니다.
pub fn build_filter(search: &PropertySearch) -> Document {
    let mut filter = Document::new();

    if let Some(keyword) = &search.keyword {
        let pattern = regex::escape(keyword);
        let clauses: Vec<Document> = KEYWORD_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                clause
            })
            .collect();
        filter.insert("$or", clauses);
    }

    if let Some(region) = search.region {
        filter.insert("region", region.as_str());
    }

    if let Some(range) = range_clause(&search.price) {
        filter.insert(search.price_currency.price_field(), range);
    }

    if let Some(range) = range_clause(&search.size_sqm) {
        filter.insert("size_sqm", range);
    }

    filter
}

fn range_clause(range: &NumericRange) -> Option<Document> {
    if range.is_unbounded() {
        return None;
    }

    let mut clause = Document::new();
    if let Some(min) = range.min {
        clause.insert("$gte", min);
    }
    if let Some(max) = range.max {
        clause.insert("$lte", max);
    }
    Some(clause)
}
