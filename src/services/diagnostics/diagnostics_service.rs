//! # 진단 서비스
//!
//! `GET /test`가 반환하는 연결 상태 보고서를 만듭니다.
//! 저장소 오류는 보고서의 텍스트로만 기록되며, 이 서비스는 실패하지 않습니다.

use std::sync::Arc;

use chrono::Utc;
use log::warn;
use serde::Serialize;

use crate::config::DatabaseConfig;
use crate::core::errors::AppError;
use crate::repositories::properties::PropertyStore;
use crate::utils::string_utils::truncate_chars;

/// 보고서에 포함하는 최대 컬렉션 수
const MAX_REPORTED_COLLECTIONS: usize = 10;
/// 보고서에 포함하는 에러 메시지 최대 길이 (문자 수)
const MAX_ERROR_CHARS: usize = 50;

const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";

/// 진단 보고서
///
/// ```json
/// {
///   "backend": "✅ Running",
///   "database": "✅ Connected & Working",
///   "database_url": "✅ Set",
///   "database_name": "✅ Set",
///   "connection_status": "Connected",
///   "collections": ["property"],
///   "timestamp": "2025-01-01T00:00:00+00:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
    pub timestamp: String,
}

#[derive(Clone)]
pub struct DiagnosticsService {
    store: Arc<dyn PropertyStore>,
    database: DatabaseConfig,
}

impl DiagnosticsService {
    pub fn new(store: Arc<dyn PropertyStore>, database: DatabaseConfig) -> Self {
        Self { store, database }
    }

    /// 저장소 연결 상태를 점검하여 보고서를 만듭니다.
    pub async fn report(&self) -> DiagnosticsReport {
        let (database, connection_status, collections) = match self.store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_REPORTED_COLLECTIONS);
                (
                    format!("✅ Connected & Working ({})", self.store.database_name()),
                    "Connected".to_string(),
                    names,
                )
            }
            Err(e) => {
                warn!("진단 중 데이터베이스 오류: {}", e);
                (
                    format!("❌ Error: {}", truncate_chars(&error_text(&e), MAX_ERROR_CHARS)),
                    "Not Connected".to_string(),
                    Vec::new(),
                )
            }
        };

        DiagnosticsReport {
            backend: "✅ Running".to_string(),
            database,
            database_url: flag(self.database.url_configured),
            database_name: flag(self.database.name_configured),
            connection_status,
            collections,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

fn flag(configured: bool) -> String {
    let text = if configured { SET } else { NOT_SET };
    text.to_string()
}

fn error_text(error: &AppError) -> String {
    match error {
        AppError::DatabaseError(message) | AppError::InternalError(message) => message.clone(),
        other => other.to_string(),
    }
}
