//! # 매물 검색 쿼리 DTO
//!
//! `GET /api/properties`의 쿼리 문자열을 받아 검증된 [`PropertySearch`]로 변환합니다.
//! 모든 파라미터는 선택 사항이며, 지정되지 않은 파라미터는 조건을 만들지 않습니다.
//!
//! | 파라미터 | 규칙 |
//! |----------|------|
//! | `q` | 공백 제거 후 비어 있으면 무시 |
//! | `region` | 28개 지역 중 하나 |
//! | `min_price`, `max_price` | 0 이상 |
//! | `price_currency` | `EUR`(기본값) 또는 `BGN` |
//! | `min_sqm`, `max_sqm` | 0 이상 |
//! | `limit` | 1 이상 200 이하, 기본값 50 (범위 밖이면 거부, 보정하지 않음) |

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::models::currency::Currency;
use crate::domain::models::region::Region;
use crate::domain::models::search::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, NumericRange, PropertySearch};
use crate::utils::string_utils::clean_optional_string;

/// 매물 검색 쿼리 파라미터
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchPropertiesQuery {
    /// 제목/설명/주소 키워드
    pub q: Option<String>,

    pub region: Option<String>,

    #[validate(range(min = 0.0, message = "최소 가격은 0 이상이어야 합니다"))]
    pub min_price: Option<f64>,

    #[validate(range(min = 0.0, message = "최대 가격은 0 이상이어야 합니다"))]
    pub max_price: Option<f64>,

    pub price_currency: Option<String>,

    #[validate(range(min = 0.0, message = "최소 면적은 0 이상이어야 합니다"))]
    pub min_sqm: Option<f64>,

    #[validate(range(min = 0.0, message = "최대 면적은 0 이상이어야 합니다"))]
    pub max_sqm: Option<f64>,

    #[validate(range(min = MIN_LIMIT, max = MAX_LIMIT, message = "limit은 1 이상 200 이하여야 합니다"))]
    pub limit: Option<i64>,
}

impl SearchPropertiesQuery {
    /// 쿼리를 검증하여 검색 조건으로 변환합니다.
    ///
    /// 수치 규칙과 지역/통화 허용 목록 검사 결과를 모두 모아서 반환합니다.
    pub fn into_search(self) -> Result<PropertySearch, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        for (field, bound) in [
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("min_sqm", self.min_sqm),
            ("max_sqm", self.max_sqm),
        ] {
            if bound.is_some_and(|value| !value.is_finite()) {
                errors.add(field, not_finite());
            }
        }

        let region = match self.region.as_deref().map(str::parse::<Region>) {
            Some(Ok(region)) => Some(region),
            Some(Err(e)) => {
                errors.add("region", one_of(e.to_string()));
                None
            }
            None => None,
        };

        let price_currency = match self.price_currency.as_deref().map(str::parse::<Currency>) {
            Some(Ok(currency)) => currency,
            Some(Err(e)) => {
                errors.add("price_currency", one_of(e.to_string()));
                Currency::default()
            }
            None => Currency::default(),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PropertySearch {
            keyword: clean_optional_string(self.q),
            region,
            price_currency,
            price: NumericRange::new(self.min_price, self.max_price),
            size_sqm: NumericRange::new(self.min_sqm, self.max_sqm),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

fn one_of(message: String) -> ValidationError {
    ValidationError::new("one_of").with_message(message.into())
}

fn not_finite() -> ValidationError {
    ValidationError::new("range").with_message("유한한 숫자여야 합니다".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .into_iter()
            .find(|(name, _)| name.to_string() == field)
            .map(|(_, errs)| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let search = SearchPropertiesQuery::default().into_search().unwrap();

        assert_eq!(search, PropertySearch::default());
        assert_eq!(search.limit, 50);
        assert_eq!(search.price_currency, Currency::Eur);
    }

    #[test]
    fn test_limit_bounds_are_inclusive() {
        for limit in [1, 200] {
            let query = SearchPropertiesQuery {
                limit: Some(limit),
                ..Default::default()
            };
            assert_eq!(query.into_search().unwrap().limit, limit);
        }
    }

    #[test]
    fn test_out_of_range_limit_is_rejected() {
        for limit in [0, 201, -5] {
            let query = SearchPropertiesQuery {
                limit: Some(limit),
                ..Default::default()
            };
            let errors = query.into_search().unwrap_err();
            assert_eq!(codes(&errors, "limit"), vec!["range"], "limit {}", limit);
        }
    }

    #[test]
    fn test_unknown_region_and_currency_are_rejected() {
        let query = SearchPropertiesQuery {
            region: Some("Atlantis".to_string()),
            price_currency: Some("USD".to_string()),
            ..Default::default()
        };

        let errors = query.into_search().unwrap_err();
        assert_eq!(codes(&errors, "region"), vec!["one_of"]);
        assert_eq!(codes(&errors, "price_currency"), vec!["one_of"]);
    }

    #[test]
    fn test_negative_bounds_are_rejected() {
        let query = SearchPropertiesQuery {
            min_price: Some(-1.0),
            max_sqm: Some(-0.5),
            ..Default::default()
        };

        let errors = query.into_search().unwrap_err();
        assert_eq!(codes(&errors, "min_price"), vec!["range"]);
        assert_eq!(codes(&errors, "max_sqm"), vec!["range"]);
    }

    #[test]
    fn test_non_finite_bounds_are_rejected() {
        let query = parse_query("min_price=NaN&max_price=inf&min_sqm=NaN&max_sqm=1e400");
        assert!(query.min_price.is_some_and(f64::is_nan));

        let errors = query.into_search().unwrap_err();
        for field in ["min_price", "max_price", "min_sqm", "max_sqm"] {
            assert_eq!(codes(&errors, field), vec!["range"], "field {}", field);
        }
    }

    #[test]
    fn test_full_query_is_translated() {
        let query = SearchPropertiesQuery {
            q: Some("  Sofia ".to_string()),
            region: Some("Sofia City".to_string()),
            min_price: Some(100000.0),
            max_price: Some(200000.0),
            price_currency: Some("BGN".to_string()),
            min_sqm: Some(40.0),
            max_sqm: None,
            limit: Some(10),
        };

        let search = query.into_search().unwrap();
        assert_eq!(search.keyword.as_deref(), Some("Sofia"));
        assert_eq!(search.region, Some(Region::SofiaCity));
        assert_eq!(search.price_currency, Currency::Bgn);
        assert_eq!(search.price, NumericRange::new(Some(100000.0), Some(200000.0)));
        assert_eq!(search.size_sqm, NumericRange::new(Some(40.0), None));
        assert_eq!(search.limit, 10);
    }

    #[test]
    fn test_blank_keyword_is_ignored() {
        let query = SearchPropertiesQuery {
            q: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.into_search().unwrap().keyword.is_none());
    }

    #[test]
    fn test_query_string_deserialization() {
        let query: SearchPropertiesQuery =
            parse_query("q=sea&region=Varna&min_price=1000&limit=5");
        assert_eq!(query.q.as_deref(), Some("sea"));
        assert_eq!(query.region.as_deref(), Some("Varna"));
        assert_eq!(query.min_price, Some(1000.0));
        assert_eq!(query.limit, Some(5));
    }

    fn parse_query(query: &str) -> SearchPropertiesQuery {
        actix_web::web::Query::<SearchPropertiesQuery>::from_query(query)
            .unwrap()
            .into_inner()
    }
}
