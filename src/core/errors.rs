//! # Application Error Handling System
//!
//! 매물 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 발생 지점 |
//! |------|-----------|-----------|
//! | `InvalidFields` | 422 Unprocessable Entity | 매물 등록 본문 / 검색 파라미터 필드 검증 |
//! | `ValidationError` | 400 Bad Request | JSON 본문, 쿼리 문자열 파싱 실패 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연결/쿼리 실패 |
//! | `InternalError` | 500 Internal Server Error | 그 외 내부 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation error: ...",
//!   "details": {
//!     "region": ["허용되지 않은 지역입니다: Atlantis"],
//!     "size_sqm": ["면적은 0보다 커야 합니다"]
//!   }
//! }
//! ```
//!
//! `details`는 필드 단위 검증 실패(`InvalidFields`)에만 포함됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn insert(&self, property: &StoredProperty) -> AppResult<String> {
//!     let result = self.collection()
//!         .insert_one(property)
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!     Ok(result.inserted_id.to_string())
//! }
//! ```

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 저장소에 접근할 수 없거나 쿼리가 실패한 경우입니다.
    /// 단일 insert/find 호출만 수행하므로 부분 반영 상태는 존재하지 않습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 형식 에러 (400 Bad Request)
    ///
    /// JSON 본문이 깨졌거나 쿼리 파라미터를 타입으로 해석할 수 없는 경우입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러 (422 Unprocessable Entity)
    ///
    /// 수집된 모든 필드 에러를 담고 있으며 응답의 `details`로 노출됩니다.
    #[error("Validation error: {0}")]
    InvalidFields(#[from] ValidationErrors),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 필드 이름별 에러 메시지 목록을 만듭니다.
    ///
    /// 메시지가 없는 검증 에러는 에러 코드(`required`, `range` 등)를 대신 사용합니다.
    /// 필드 순서는 응답마다 동일하도록 이름순으로 정렬됩니다.
    pub fn field_details(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let AppError::InvalidFields(errors) = self else {
            return None;
        };

        let details = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|error| {
                        error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| error.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        Some(details)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 기록하고, 클라이언트에는 에러 문자열만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        let body = match self.field_details() {
            Some(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            None => json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let properties = self.properties.read()
///     .context("메모리 저장소 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
