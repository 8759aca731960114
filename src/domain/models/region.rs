//! 불가리아 행정 구역(Region) 값 객체
//!
//! 매물 등록 본문과 검색 파라미터가 모두 이 열거형 하나로 지역을 검증합니다.
//! 지역 이름은 대소문자를 구분하여 정확히 일치해야 합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// 허용 목록에 없는 지역 이름
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("허용되지 않은 지역입니다: {0}")]
pub struct UnknownRegion(pub String);

/// 불가리아의 28개 행정 구역
///
/// 직렬화 시에는 표시 이름(`"Sofia City"` 등)을 그대로 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    Blagoevgrad,
    Burgas,
    Dobrich,
    Gabrovo,
    Haskovo,
    Kardzhali,
    Kyustendil,
    Lovech,
    Montana,
    Pazardzhik,
    Pernik,
    Pleven,
    Plovdiv,
    Razgrad,
    Ruse,
    Shumen,
    Silistra,
    Sliven,
    Smolyan,
    SofiaCity,
    SofiaProvince,
    StaraZagora,
    Targovishte,
    Varna,
    VelikoTarnovo,
    Vidin,
    Vratsa,
    Yambol,
}

impl Region {
    /// 전체 지역 목록 (알파벳순)
    pub const ALL: [Region; 28] = [
        Region::Blagoevgrad,
        Region::Burgas,
        Region::Dobrich,
        Region::Gabrovo,
        Region::Haskovo,
        Region::Kardzhali,
        Region::Kyustendil,
        Region::Lovech,
        Region::Montana,
        Region::Pazardzhik,
        Region::Pernik,
        Region::Pleven,
        Region::Plovdiv,
        Region::Razgrad,
        Region::Ruse,
        Region::Shumen,
        Region::Silistra,
        Region::Sliven,
        Region::Smolyan,
        Region::SofiaCity,
        Region::SofiaProvince,
        Region::StaraZagora,
        Region::Targovishte,
        Region::Varna,
        Region::VelikoTarnovo,
        Region::Vidin,
        Region::Vratsa,
        Region::Yambol,
    ];

    /// 저장소와 API에서 사용하는 표시 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Blagoevgrad => "Blagoevgrad",
            Region::Burgas => "Burgas",
            Region::Dobrich => "Dobrich",
            Region::Gabrovo => "Gabrovo",
            Region::Haskovo => "Haskovo",
            Region::Kardzhali => "Kardzhali",
            Region::Kyustendil => "Kyustendil",
            Region::Lovech => "Lovech",
            Region::Montana => "Montana",
            Region::Pazardzhik => "Pazardzhik",
            Region::Pernik => "Pernik",
            Region::Pleven => "Pleven",
            Region::Plovdiv => "Plovdiv",
            Region::Razgrad => "Razgrad",
            Region::Ruse => "Ruse",
            Region::Shumen => "Shumen",
            Region::Silistra => "Silistra",
            Region::Sliven => "Sliven",
            Region::Smolyan => "Smolyan",
            Region::SofiaCity => "Sofia City",
            Region::SofiaProvince => "Sofia Province",
            Region::StaraZagora => "Stara Zagora",
            Region::Targovishte => "Targovishte",
            Region::Varna => "Varna",
            Region::VelikoTarnovo => "Veliko Tarnovo",
            Region::Vidin => "Vidin",
            Region::Vratsa => "Vratsa",
            Region::Yambol => "Yambol",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = UnknownRegion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
