//! # 매물 등록 요청 DTO
//!
//! 클라이언트가 보낸 JSON 객체를 검증하여 [`Property`]로 변환합니다.
//! 검증은 두 단계로 수행되며, 두 단계의 실패가 모두 수집된 뒤 한 번에 거부됩니다.
//!
//! 1. **형태 검사**: 필수 필드 존재 여부, JSON 타입, 지역/통화 허용 목록
//! 2. **규칙 검사**: `validator` derive 규칙 (제목 길이, 면적/가격 하한)
//!
//! ## 검증 규칙
//!
//! | 필드 | 필수 | 규칙 |
//! |------|------|------|
//! | `title` | ✅ | 문자열, 1자 이상 |
//! | `region` | ✅ | 28개 지역 중 하나 (정확히 일치) |
//! | `address` | | 문자열 |
//! | `description` | | 문자열 |
//! | `size_sqm` | ✅ | 숫자, 0 초과 |
//! | `currency` | | `EUR` 또는 `BGN` (기본값 `EUR`) |
//! | `price_value` | ✅ | 숫자, 0 초과, EUR/BGN 환산값이 0.01 이상이고 유한해야 함 |
//! | `images` | | 문자열 배열 |
//!
//! 선택 필드의 `null`은 값이 없는 것으로 취급하고, 알 수 없는 필드는 무시합니다.
//!
//! ## 에러 코드
//!
//! - `required`: 필수 필드 누락 또는 `null`
//! - `type`: JSON 타입 불일치
//! - `one_of`: 허용 목록에 없는 지역/통화
//! - `length`, `range`: `validator` 규칙 위반

use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::properties::property::Property;
use crate::domain::models::currency::Currency;
use crate::domain::models::region::Region;

/// 매물 등록 요청
///
/// 형태 검사를 통과한 값만 채워지므로 모든 필드가 `Option`입니다.
/// 규칙 검사는 값이 있는 필드에만 적용됩니다.
#[derive(Debug, Default, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, message = "제목은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    pub region: Option<Region>,

    pub address: Option<String>,

    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "면적은 0보다 커야 합니다"))]
    pub size_sqm: Option<f64>,

    pub currency: Option<Currency>,

    #[validate(range(exclusive_min = 0.0, message = "가격은 0보다 커야 합니다"))]
    pub price_value: Option<f64>,

    pub images: Option<Vec<String>>,
}

impl CreatePropertyRequest {
    /// 요청 본문을 검증하여 매물로 변환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Property)` - 모든 검증 통과
    /// * `Err(ValidationErrors)` - 실패한 모든 필드의 에러
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let payload = json!({
    ///     "title": "2-bed apt",
    ///     "region": "Plovdiv",
    ///     "size_sqm": 65,
    ///     "price_value": 50000
    /// });
    /// let listing = CreatePropertyRequest::from_payload(payload.as_object().unwrap().clone())?;
    /// assert_eq!(listing.currency, Currency::Eur);
    /// ```
    pub fn from_payload(payload: Map<String, Value>) -> Result<Property, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let request = Self::read(&mut reader);

        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);
        for (field, error) in reader.into_errors() {
            errors.add(field, error);
        }
        if let Some(error) = request.unstorable_price() {
            errors.add("price_value", error);
        }

        match request.into_property() {
            Some(property) if errors.is_empty() => Ok(property),
            _ => Err(errors),
        }
    }

    fn read(reader: &mut PayloadReader) -> Self {
        let region = reader
            .text("region", true)
            .and_then(|name| reader.parse_one_of::<Region>("region", &name));
        let currency = reader
            .text("currency", false)
            .and_then(|code| reader.parse_one_of::<Currency>("currency", &code));

        Self {
            title: reader.text("title", true),
            region,
            address: reader.text("address", false),
            description: reader.text("description", false),
            size_sqm: reader.number("size_sqm", true),
            currency,
            price_value: reader.number("price_value", true),
            images: reader.text_list("images"),
        }
    }

    /// 양수 가격이라도 두 통화로 환산한 값이 0으로 반올림되거나
    /// 무한대가 되면 저장할 수 없으므로 `range` 에러를 만듭니다.
    fn unstorable_price(&self) -> Option<ValidationError> {
        let price_value = self.price_value.filter(|value| *value > 0.0)?;
        let currency = self.currency.unwrap_or_default();

        if currency.normalize(price_value).is_storable() {
            return None;
        }

        Some(ValidationError::new("range").with_message(
            format!(
                "가격을 EUR/BGN으로 환산할 수 없습니다 (소수점 둘째 자리에서 0 또는 범위 초과): {}",
                price_value
            )
            .into(),
        ))
    }

    fn into_property(self) -> Option<Property> {
        Some(Property {
            title: self.title?,
            region: self.region?,
            address: self.address,
            description: self.description,
            size_sqm: self.size_sqm?,
            currency: self.currency.unwrap_or_default(),
            price_value: self.price_value?,
            images: self.images,
        })
    }
}

/// JSON 객체에서 필드를 꺼내며 형태 에러를 모으는 리더
struct PayloadReader {
    payload: Map<String, Value>,
    errors: Vec<(&'static str, ValidationError)>,
}

impl PayloadReader {
    fn new(payload: Map<String, Value>) -> Self {
        Self {
            payload,
            errors: Vec::new(),
        }
    }

    fn into_errors(self) -> Vec<(&'static str, ValidationError)> {
        self.errors
    }

    fn reject(&mut self, field: &'static str, code: &'static str, message: String) {
        self.errors
            .push((field, ValidationError::new(code).with_message(message.into())));
    }

    /// 값을 꺼냅니다. 없거나 `null`이면 필수 필드일 때 `required` 에러를 남깁니다.
    fn take(&mut self, field: &'static str, required: bool) -> Option<Value> {
        match self.payload.remove(field) {
            Some(Value::Null) | None => {
                if required {
                    self.reject(field, "required", format!("{} 필드는 필수입니다", field));
                }
                None
            }
            Some(value) => Some(value),
        }
    }

    fn text(&mut self, field: &'static str, required: bool) -> Option<String> {
        match self.take(field, required)? {
            Value::String(text) => Some(text),
            _ => {
                self.reject(field, "type", format!("{} 필드는 문자열이어야 합니다", field));
                None
            }
        }
    }

    fn number(&mut self, field: &'static str, required: bool) -> Option<f64> {
        match self.take(field, required)?.as_f64() {
            Some(number) => Some(number),
            None => {
                self.reject(field, "type", format!("{} 필드는 숫자여야 합니다", field));
                None
            }
        }
    }

    fn text_list(&mut self, field: &'static str) -> Option<Vec<String>> {
        let value = self.take(field, false)?;
        let items = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
        });

        if items.is_none() {
            self.reject(field, "type", format!("{} 필드는 문자열 배열이어야 합니다", field));
        }
        items
    }

    fn parse_one_of<T>(&mut self, field: &'static str, raw: &str) -> Option<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.reject(field, "one_of", e.to_string());
                None
            }
        }
    }
}
