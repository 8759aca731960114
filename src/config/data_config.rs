//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, Rate Limiting 관련 설정을 관리합니다.

use std::env;

use log::{error, info};

/// MongoDB 기본 연결 URI
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
/// 기본 데이터베이스 이름
pub const DEFAULT_DATABASE_NAME: &str = "bulghousing";

/// 데이터베이스 연결 설정
///
/// 환경 변수가 비어 있으면 개발용 기본값을 사용하되,
/// 명시적으로 설정되었는지 여부를 따로 기록하여 진단 엔드포인트에서 보고합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub url: String,
    /// 사용할 데이터베이스 이름
    pub name: String,
    /// `DATABASE_URL`이 설정되었는지 여부
    pub url_configured: bool,
    /// `DATABASE_NAME`이 설정되었는지 여부
    pub name_configured: bool,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 읽어옵니다.
    ///
    /// ## 환경 변수
    /// - `DATABASE_URL`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "bulghousing")
    pub fn from_env() -> Self {
        Self::from_values(env::var("DATABASE_URL").ok(), env::var("DATABASE_NAME").ok())
    }

    /// 주어진 값으로 설정을 만듭니다. 비어 있는 값은 설정되지 않은 것으로 봅니다.
    pub fn from_values(url: Option<String>, name: Option<String>) -> Self {
        let url = url.filter(|value| !value.trim().is_empty());
        let name = name.filter(|value| !value.trim().is_empty());

        Self {
            url_configured: url.is_some(),
            name_configured: name.is_some(),
            url: url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            name: name.unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 에러를 기록하고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let config = Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        );

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let defaults = Self::default();

        let per_second = per_second
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용", e, defaults.per_second);
                    defaults.per_second
                })
            })
            .unwrap_or(defaults.per_second);

        let burst_size = burst_size
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용", e, defaults.burst_size);
                    defaults.burst_size
                })
            })
            .unwrap_or(defaults.burst_size);

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults_when_unset() {
        let config = DatabaseConfig::from_values(None, None);

        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.name, DEFAULT_DATABASE_NAME);
        assert!(!config.url_configured);
        assert!(!config.name_configured);
    }

    #[test]
    fn test_database_config_uses_given_values() {
        let config = DatabaseConfig::from_values(
            Some("mongodb://db.internal:27017".to_string()),
            Some("listings".to_string()),
        );

        assert_eq!(config.url, "mongodb://db.internal:27017");
        assert_eq!(config.name, "listings");
        assert!(config.url_configured);
        assert!(config.name_configured);
    }

    #[test]
    fn test_blank_database_values_count_as_unset() {
        let config = DatabaseConfig::from_values(Some("  ".to_string()), Some(String::new()));

        assert!(!config.url_configured);
        assert!(!config.name_configured);
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_rate_limit_parsing_with_fallback() {
        assert_eq!(RateLimitConfig::from_values(None, None), RateLimitConfig::default());

        let config = RateLimitConfig::from_values(Some("20"), Some("40"));
        assert_eq!(config.per_second, 20);
        assert_eq!(config.burst_size, 40);

        let config = RateLimitConfig::from_values(Some("fast"), Some("-1"));
        assert_eq!(config, RateLimitConfig::default());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
