//! 분석 크레이트 에러 타입.
//!
//! 계산 단계 자체는 실패하지 않고 빈 결과로 퇴화합니다. 에러는 파라미터
//! 검증과 엄격 진입 경로([`crate::AnalysisEngine::try_analyze`])에서만
//! 발생합니다.

use thiserror::Error;

/// 분석 파이프라인 에러.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// 데이터 부족 (필요 개수 대비 제공 개수)
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 유효하지 않은 파라미터
    #[error("유효하지 않은 파라미터: {0}")]
    InvalidParameter(String),
}

/// 분석 결과 타입 별칭.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
