//! Property Entity Implementation
//!
//! 매물(Listing) 엔티티의 핵심 구현체입니다.
//! 클라이언트가 제출한 매물([`Property`])과, 두 통화 가격이 추가되어
//! `property` 컬렉션에 저장되는 매물([`StoredProperty`])을 구분합니다.

use serde::{Deserialize, Serialize};

use crate::domain::models::currency::{Currency, DualPrice};
use crate::domain::models::region::Region;

/// 검증을 통과한 매물
///
/// 생성 이후 수정되지 않으며, 저장 직전에 [`StoredProperty`]로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// 매물 제목 (비어 있지 않음)
    pub title: String,
    /// 행정 구역
    pub region: Region,
    /// 주소 또는 지역명
    pub address: Option<String>,
    /// 간단한 설명
    pub description: Option<String>,
    /// 면적 (제곱미터, 0 초과)
    pub size_sqm: f64,
    /// 입력 가격의 통화
    pub currency: Currency,
    /// 입력 가격 (0 초과, `currency` 기준)
    pub price_value: f64,
    /// 이미지 URL 목록
    pub images: Option<Vec<String>>,
}

/// 저장된 매물
///
/// 저장소가 부여하는 식별자(`_id`)는 이 타입에 포함되지 않습니다.
/// 조회 시 `_id`는 역직렬화 과정에서 버려지므로 검색 결과에 노출되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProperty {
    pub title: String,
    pub region: Region,
    pub address: Option<String>,
    pub description: Option<String>,
    pub size_sqm: f64,
    pub currency: Currency,
    pub price_value: f64,
    pub images: Option<Vec<String>>,
    /// EUR 환산 가격 (소수점 둘째 자리 반올림)
    pub price_eur: f64,
    /// BGN 환산 가격 (소수점 둘째 자리 반올림)
    pub price_bgn: f64,
}

impl StoredProperty {
    /// 매물 가격을 두 통화로 정규화하여 저장 형태로 변환합니다.
    pub fn from_listing(listing: Property) -> Self {
        let DualPrice { eur, bgn } = listing.currency.normalize(listing.price_value);

        Self {
            title: listing.title,
            region: listing.region,
            address: listing.address,
            description: listing.description,
            size_sqm: listing.size_sqm,
            currency: listing.currency,
            price_value: listing.price_value,
            images: listing.images,
            price_eur: eur,
            price_bgn: bgn,
        }
    }

    /// 저장된 두 통화 가격
    pub fn prices(&self) -> DualPrice {
        DualPrice {
            eur: self.price_eur,
            bgn: self.price_bgn,
        }
    }
}

impl From<Property> for StoredProperty {
    fn from(listing: Property) -> Self {
        Self::from_listing(listing)
    }
}
