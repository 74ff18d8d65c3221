//! 시장 대시보드 분석 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 기술적 지표 계산 (RSI, SMA, EMA, MACD, 볼린저 밴드)
//! - 캔들 패턴 감지 (도지, 해머, 유성형, 장악형)
//! - 지지/저항 레벨 탐지 및 병합
//! - 매매 신호 생성과 종합 추천
//! - 시장 심리 집계
//!
//! 모든 단계는 순수 계산입니다. 입력이 부족하면 에러 대신 빈 결과로
//! 퇴화하며, 네트워크나 저장소에는 접근하지 않습니다.
//!
//! # Re-exports
//!
//! - [`indicators`]: 지표 계산기 ([`IndicatorEngine`], 시리즈 타입)
//! - [`engine`]: 전체 파이프라인 퍼사드 ([`AnalysisEngine`])

pub mod engine;
pub mod error;
pub mod indicators;
pub mod levels;
pub mod patterns;
pub mod recommendation;
pub mod sentiment;
pub mod signals;

// Indicators 모듈 re-exports
pub use indicators::{
    BollingerParams, BollingerSeries, EmaParams, IndicatorEngine, IndicatorParams, MacdParams,
    MacdSeries, MomentumCalculator, RsiParams, SmaParams, TrendIndicators, VolatilityIndicators,
};

// 파이프라인 단계 re-exports
pub use levels::{LevelDetector, LevelParams};
pub use patterns::PatternDetector;
pub use recommendation::RecommendationEngine;
pub use sentiment::SentimentCalculator;
pub use signals::SignalGenerator;

// 엔진 re-exports
pub use engine::{AnalysisEngine, AnalysisParams, MarketAnalysis};
pub use error::{AnalyticsError, AnalyticsResult};
