//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결은 서버 시작 시 한 번 만들어지고, 드라이버의 연결 풀을 통해 공유됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let repository = PropertyRepository::new(&database);
//! ```

use log::{info, warn};
use mongodb::{Client, bson::doc, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 연결 시 사용하는 애플리케이션 이름 (서버 로그/모니터링 식별용)
const APP_NAME: &str = "bulghousing_backend";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에 `mongodb::Database` 핸들을 제공합니다.
#[derive(Clone, Debug)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정으로부터 MongoDB 연결을 생성합니다.
    ///
    /// URI를 해석할 수 없으면 에러를 반환합니다.
    /// 서버에 닿지 않는 경우(ping 실패)에는 경고만 남기고 핸들을 반환합니다.
    /// 이후 요청은 드라이버가 다시 연결을 시도하며, 실패하면 500으로 응답합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("잘못된 DATABASE_URL: {}", e)))?;

        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        let database = Self {
            client,
            database_name: config.name.clone(),
        };

        match database.ping().await {
            Ok(()) => info!("✅ MongoDB 연결 성공: {}", database.database_name),
            Err(e) => warn!("⚠️ MongoDB에 연결할 수 없습니다 ({}). 서버는 계속 시작됩니다", e),
        }

        Ok(database)
    }

    /// 서버에 `ping` 명령을 보내 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ```rust,ignore
    /// let collection = database.get_database().collection::<StoredProperty>("property");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 데이터베이스의 컬렉션 이름 목록을 반환합니다.
    pub async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        self.get_database()
            .list_collection_names()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_connect_rejects_unparseable_uri() {
        let config = DatabaseConfig::from_values(Some("not-a-mongo-uri".to_string()), None);

        let result = Database::connect(&config).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
