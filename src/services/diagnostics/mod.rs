//! 서버/데이터베이스 상태 진단 모듈

pub mod diagnostics_service;

pub use diagnostics_service::{DiagnosticsReport, DiagnosticsService};
