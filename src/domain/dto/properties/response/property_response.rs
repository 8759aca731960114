//! 매물 API 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::properties::property::StoredProperty;

/// 매물 등록 응답
///
/// ```json
/// { "id": "665f1f77bcf86cd799439011" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePropertyResponse {
    /// 저장소가 부여한 식별자 (문자열)
    pub id: String,
}

/// 매물 검색 응답
///
/// `total`은 저장소 전체 일치 건수가 아니라 `limit` 적용 후 반환된 건수입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPropertiesResponse {
    pub results: Vec<StoredProperty>,
    pub total: usize,
}

impl From<Vec<StoredProperty>> for SearchPropertiesResponse {
    fn from(results: Vec<StoredProperty>) -> Self {
        Self {
            total: results.len(),
            results,
        }
    }
}
