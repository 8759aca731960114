//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 주고받기 위한 객체들을 정의하는 모듈입니다.
//! 요청 DTO는 `validator`로 입력을 검증하고, 응답 DTO는 `serde`로 직렬화됩니다.
//! 내부 엔티티와 API 표현을 분리하여, 저장소 식별자 같은 내부 정보가
//! 의도치 않게 노출되지 않도록 합니다.

pub mod properties;
