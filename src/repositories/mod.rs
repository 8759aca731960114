//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 테스트를 위한 메모리 저장소를 함께 제공합니다.
//! 두 구현 모두 [`PropertyStore`](properties::PropertyStore) trait를 통해 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::properties::{PropertyRepository, PropertyStore};
//!
//! let repo = PropertyRepository::new(&database);
//! let results = repo.search(&PropertySearch::default()).await?;
//! ```

pub mod properties;
