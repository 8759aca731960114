//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//! 저장소는 [`PropertyStore`](crate::repositories::properties::PropertyStore)
//! trait 객체로 전달받으므로 MongoDB와 메모리 저장소를 바꿔 끼울 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::properties::PropertyService;
//!
//! let store = Arc::new(PropertyRepository::new(&database));
//! let property_service = web::Data::new(PropertyService::new(store));
//! ```

pub mod diagnostics;
pub mod properties;
