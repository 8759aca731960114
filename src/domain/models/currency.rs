//! 통화(Currency) 값 객체와 가격 정규화
//!
//! 매물 가격은 등록 시점에 EUR/BGN 두 통화로 모두 계산되어 저장됩니다.
//! 검색은 저장된 두 필드 중 하나를 골라 범위 조건을 걸기 때문에
//! 조회 시점에는 환율 계산이 필요하지 않습니다.
//!
//! 반올림은 소수점 둘째 자리까지, 0에서 먼 쪽으로 올리는
//! round-half-away-from-zero 방식(`f64::round`)을 사용합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 1 EUR 당 BGN 고정 환율
pub const EUR_TO_BGN: f64 = 1.95583;

/// 허용되지 않은 통화 코드
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("허용되지 않은 통화입니다: {0} (EUR, BGN만 가능)")]
pub struct UnknownCurrency(pub String);

/// 매물 가격 통화
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Bgn,
}

/// 두 통화로 정규화된 가격
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPrice {
    pub eur: f64,
    pub bgn: f64,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Eur, Currency::Bgn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Bgn => "BGN",
        }
    }

    /// 이 통화로 표시된 가격을 EUR/BGN 두 값으로 변환합니다.
    ///
    /// 원래 통화 쪽 값은 입력 그대로(반올림만 적용), 다른 쪽은 고정 환율로 계산됩니다.
    ///
    /// ```rust,ignore
    /// let price = Currency::Eur.normalize(50000.0);
    /// assert_eq!(price.eur, 50000.0);
    /// assert_eq!(price.bgn, 97791.5);
    /// ```
    pub fn normalize(self, price_value: f64) -> DualPrice {
        let (eur, bgn) = match self {
            Currency::Eur => (price_value, price_value * EUR_TO_BGN),
            Currency::Bgn => (price_value / EUR_TO_BGN, price_value),
        };

        DualPrice {
            eur: round_to_cents(eur),
            bgn: round_to_cents(bgn),
        }
    }

    /// 검색 시 범위 조건을 걸 저장 필드 이름
    pub fn price_field(&self) -> &'static str {
        match self {
            Currency::Eur => "price_eur",
            Currency::Bgn => "price_bgn",
        }
    }
}

impl DualPrice {
    /// 지정한 통화 쪽 값
    pub fn in_currency(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Eur => self.eur,
            Currency::Bgn => self.bgn,
        }
    }

    /// 두 값이 모두 유한하고 0보다 큰지 여부
    ///
    /// 아주 작은 가격은 반올림 후 0이 되고, 아주 큰 가격은 반올림 중 무한대가 됩니다.
    pub fn is_storable(&self) -> bool {
        [self.eur, self.bgn]
            .into_iter()
            .all(|value| value.is_finite() && value > 0.0)
    }
}

/// 소수점 둘째 자리 반올림 (half away from zero)
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|currency| currency.as_str() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
