//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 데이터베이스
//! export DATABASE_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="bulghousing"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8000"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` / `.env` 파일이 먼저 로드됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env();
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! println!("Database: {}", database.name);
//! ```

pub mod data_config;

pub use data_config::*;
