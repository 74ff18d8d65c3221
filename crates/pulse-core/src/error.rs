//! 대시보드 분석 시스템의 에러 타입.
//!
//! 이 모듈은 시스템 전반에서 사용되는 에러 타입을 정의합니다.
//! 분석 단계 자체는 실패하지 않고 빈 결과로 축소되므로 (파이프라인 에러 정책),
//! 여기의 에러는 설정 로드와 직렬화 같은 경계 작업에서만 발생합니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}
