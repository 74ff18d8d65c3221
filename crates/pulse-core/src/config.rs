//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 파이프라인 설정
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 분석 파이프라인 설정.
///
/// 기본값은 대시보드가 사용하는 표준 파라미터입니다 (RSI 14, SMA 20/50,
/// EMA 20, MACD 12/26/9, 볼린저 20/2, 레벨 탐색 구간 20).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// RSI 기간
    pub rsi_period: usize,
    /// 단기 SMA 기간
    pub sma_short_period: usize,
    /// 장기 SMA 기간
    pub sma_long_period: usize,
    /// EMA 기간
    pub ema_period: usize,
    /// MACD 단기 EMA 기간
    pub macd_fast_period: usize,
    /// MACD 장기 EMA 기간
    pub macd_slow_period: usize,
    /// MACD 시그널 EMA 기간
    pub macd_signal_period: usize,
    /// 볼린저 밴드 기간
    pub bollinger_period: usize,
    /// 볼린저 밴드 표준편차 배수
    pub bollinger_std_dev: Decimal,
    /// 지지/저항 탐색에 사용할 최근 캔들 수
    pub level_lookback: usize,
    /// 레벨 병합 임계값 (기존 레벨 대비 상대 거리)
    pub level_merge_threshold: Decimal,
    /// 반환할 최대 레벨 수
    pub max_levels: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            sma_short_period: 20,
            sma_long_period: 50,
            ema_period: 20,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_std_dev: Decimal::new(2, 0),
            level_lookback: 20,
            level_merge_threshold: Decimal::new(2, 2),
            max_levels: 5,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("PULSE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
