//! 매물 검색 조건 모델
//!
//! 검증을 마친 검색 파라미터를 타입으로 표현합니다.
//! 지정된 조건은 모두 AND로 결합되고, 키워드 조건 내부의
//! 제목/설명/주소 비교만 OR로 결합됩니다.
//!
//! MongoDB 필터 문서로의 변환은 리포지토리 계층이 담당하며,
//! [`PropertySearch::matches`]는 같은 의미를 메모리 상에서 평가합니다.

use crate::domain::entities::properties::property::StoredProperty;
use crate::domain::models::currency::Currency;
use crate::domain::models::region::Region;

/// 기본 검색 결과 상한
pub const DEFAULT_LIMIT: i64 = 50;
/// 허용되는 최소 결과 상한
pub const MIN_LIMIT: i64 = 1;
/// 허용되는 최대 결과 상한
pub const MAX_LIMIT: i64 = 200;

/// 양 끝을 포함하는 수치 범위
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// 하한과 상한이 모두 없으면 조건을 만들지 않습니다.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// 검증된 매물 검색 조건
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearch {
    /// 제목/설명/주소 부분 일치 키워드 (공백 제거 후 비어 있지 않음)
    pub keyword: Option<String>,
    pub region: Option<Region>,
    /// 가격 범위를 적용할 통화
    pub price_currency: Currency,
    pub price: NumericRange,
    pub size_sqm: NumericRange,
    /// 반환할 최대 건수 (`MIN_LIMIT..=MAX_LIMIT`)
    pub limit: i64,
}

impl Default for PropertySearch {
    fn default() -> Self {
        Self {
            keyword: None,
            region: None,
            price_currency: Currency::default(),
            price: NumericRange::default(),
            size_sqm: NumericRange::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PropertySearch {
    /// 저장된 매물이 모든 조건을 만족하는지 평가합니다.
    pub fn matches(&self, property: &StoredProperty) -> bool {
        self.matches_keyword(property)
            && self.region.is_none_or(|region| property.region == region)
            && self
                .price
                .contains(property.prices().in_currency(self.price_currency))
            && self.size_sqm.contains(property.size_sqm)
    }

    fn matches_keyword(&self, property: &StoredProperty) -> bool {
        let Some(keyword) = &self.keyword else {
            return true;
        };
        let needle = keyword.to_lowercase();

        [
            Some(property.title.as_str()),
            property.description.as_deref(),
            property.address.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&needle))
    }
}
