//! 전체 분석 파이프라인 퍼사드.
//!
//! 캔들 스냅샷 하나를 받아 지표 계산, 패턴 감지, 레벨 탐지, 신호 생성,
//! 추천 종합을 순서대로 수행합니다. 숨은 메모이제이션 없이 새 스냅샷마다
//! 전체를 다시 계산합니다.

use pulse_core::{
    analysis_span, AnalysisConfig, Candle, CandlePattern, IndicatorSnapshot, PriceLevel,
    TradeRecommendation, TradeSignal,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::indicators::{
    BollingerParams, EmaParams, IndicatorEngine, IndicatorParams, MacdParams, RsiParams, SmaParams,
};
use crate::levels::{LevelDetector, LevelParams};
use crate::patterns::PatternDetector;
use crate::recommendation::RecommendationEngine;
use crate::signals::SignalGenerator;

/// 파이프라인 전체 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisParams {
    /// 지표 파라미터
    pub indicators: IndicatorParams,
    /// 레벨 탐지 파라미터
    pub levels: LevelParams,
}

impl From<&AnalysisConfig> for AnalysisParams {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            indicators: IndicatorParams {
                rsi: RsiParams {
                    period: config.rsi_period,
                },
                sma_short: SmaParams {
                    period: config.sma_short_period,
                },
                sma_long: SmaParams {
                    period: config.sma_long_period,
                },
                ema: EmaParams {
                    period: config.ema_period,
                },
                macd: MacdParams {
                    fast_period: config.macd_fast_period,
                    slow_period: config.macd_slow_period,
                    signal_period: config.macd_signal_period,
                },
                bollinger: BollingerParams {
                    period: config.bollinger_period,
                    std_dev_multiplier: config.bollinger_std_dev,
                },
            },
            levels: LevelParams {
                lookback: config.level_lookback,
                merge_threshold: config.level_merge_threshold,
                max_levels: config.max_levels,
            },
        }
    }
}

/// 분석 패스 하나의 전체 산출물.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    /// 지표 최신 값 스냅샷
    pub snapshot: IndicatorSnapshot,
    /// 감지된 캔들 패턴
    pub patterns: Vec<CandlePattern>,
    /// 지지/저항 레벨
    pub levels: Vec<PriceLevel>,
    /// 매매 신호
    pub signals: Vec<TradeSignal>,
    /// 종합 추천
    pub recommendation: TradeRecommendation,
}

/// 분석 파이프라인 엔진.
///
/// 파라미터는 생성 시 한 번 검증되고, 이후 분석 호출은 실패하지
/// 않습니다. 데이터가 부족하면 각 단계가 빈 결과로 퇴화합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine {
    params: AnalysisParams,
    indicators: IndicatorEngine,
    patterns: PatternDetector,
    levels: LevelDetector,
    signals: SignalGenerator,
    recommendation: RecommendationEngine,
}

impl AnalysisEngine {
    /// 기본 파라미터로 엔진을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정한 파라미터로 엔진을 생성합니다.
    ///
    /// 기간이 0이거나 MACD 기간 순서가 뒤집혔거나 배수/임계값이 양수가
    /// 아니면 [`AnalyticsError::InvalidParameter`]를 반환합니다.
    pub fn with_params(params: AnalysisParams) -> AnalyticsResult<Self> {
        Self::validate(&params)?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    /// 현재 파라미터를 반환합니다.
    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// 모든 단계가 완전한 결과를 내는 데 필요한 최소 캔들 수.
    ///
    /// 가장 긴 요구 조건이 지배합니다: 장기 SMA 기간, MACD 시그널까지의
    /// 길이(`slow + signal - 1`), RSI 기간 + 1, 볼린저 기간, 레벨 탐색
    /// 구간.
    pub fn min_candles(&self) -> usize {
        let ind = &self.params.indicators;
        let macd_min = ind.macd.slow_period + ind.macd.signal_period - 1;
        ind.sma_long
            .period
            .max(macd_min)
            .max(ind.rsi.period + 1)
            .max(ind.bollinger.period)
            .max(self.params.levels.lookback)
    }

    /// 캔들 스냅샷 하나에 대해 전체 파이프라인을 실행합니다.
    ///
    /// 이 경로는 실패하지 않습니다. 캔들이 부족하면 지표는 0, 패턴/레벨
    /// 목록은 비고, 신호는 관망 하나로 퇴화하여 중립 추천이 나옵니다.
    pub fn analyze(
        &self,
        symbol: &str,
        candles: &[Candle],
        current_price: Decimal,
    ) -> MarketAnalysis {
        let span = analysis_span!("analyze", symbol);
        let _guard = span.enter();

        let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
        let snapshot = self.indicators.snapshot(&closes, &self.params.indicators);
        debug!(candles = candles.len(), rsi = %snapshot.rsi, "지표 스냅샷 계산 완료");

        let patterns = self.patterns.detect(candles);
        let levels = self.levels.detect(candles, self.params.levels);
        debug!(
            patterns = patterns.len(),
            levels = levels.len(),
            "패턴/레벨 감지 완료"
        );

        // 지표가 하나도 계산될 수 없는 길이면 스냅샷의 0들은 값이 아니라
        // 부재이므로, 규칙 평가를 건너뛰고 근거 없음 관망으로 퇴화
        let signals = if closes.len() < self.params.indicators.min_prices() {
            vec![self.signals.no_evidence()]
        } else {
            self.signals.generate(&snapshot)
        };
        debug!(signals = signals.len(), "신호 생성 완료");

        let support_prices: Vec<Decimal> = levels
            .iter()
            .filter(|l| l.is_support())
            .map(|l| l.price)
            .collect();
        let resistance_prices: Vec<Decimal> = levels
            .iter()
            .filter(|l| l.is_resistance())
            .map(|l| l.price)
            .collect();

        let recommendation = self.recommendation.synthesize(
            current_price,
            &signals,
            &snapshot,
            &patterns,
            &support_prices,
            &resistance_prices,
        );
        info!(
            direction = %recommendation.direction,
            confidence = recommendation.confidence,
            risk = %recommendation.risk_level,
            "추천 종합 완료"
        );

        MarketAnalysis {
            snapshot,
            patterns,
            levels,
            signals,
            recommendation,
        }
    }

    /// 엄격 진입 경로: 캔들이 최소 개수에 못 미치면 에러를 반환합니다.
    ///
    /// 퇴화한 중립 결과 대신 데이터 부족을 명시적으로 다루고 싶은
    /// 호출자를 위한 경로입니다.
    pub fn try_analyze(
        &self,
        symbol: &str,
        candles: &[Candle],
        current_price: Decimal,
    ) -> AnalyticsResult<MarketAnalysis> {
        let required = self.min_candles();
        if candles.len() < required {
            return Err(AnalyticsError::InsufficientData {
                required,
                provided: candles.len(),
            });
        }
        Ok(self.analyze(symbol, candles, current_price))
    }

    fn validate(params: &AnalysisParams) -> AnalyticsResult<()> {
        let ind = &params.indicators;
        let periods = [
            ("rsi_period", ind.rsi.period),
            ("sma_short_period", ind.sma_short.period),
            ("sma_long_period", ind.sma_long.period),
            ("ema_period", ind.ema.period),
            ("macd_fast_period", ind.macd.fast_period),
            ("macd_slow_period", ind.macd.slow_period),
            ("macd_signal_period", ind.macd.signal_period),
            ("bollinger_period", ind.bollinger.period),
            ("level_lookback", params.levels.lookback),
            ("max_levels", params.levels.max_levels),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(AnalyticsError::InvalidParameter(format!(
                    "{name}은(는) 0일 수 없습니다"
                )));
            }
        }
        if ind.macd.fast_period >= ind.macd.slow_period {
            return Err(AnalyticsError::InvalidParameter(
                "macd_fast_period는 macd_slow_period보다 작아야 합니다".to_string(),
            ));
        }
        if ind.bollinger.std_dev_multiplier <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameter(
                "bollinger_std_dev는 양수여야 합니다".to_string(),
            ));
        }
        if params.levels.merge_threshold <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameter(
                "level_merge_threshold는 양수여야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pulse_core::SignalAction;
    use rust_decimal_macros::dec;

    /// 완만한 상승 추세의 캔들 시리즈.
    fn sample_candles(count: usize) -> Vec<Candle> {
        let start = Utc::now() - Duration::hours(count as i64);
        (0..count)
            .map(|i| {
                let open = Decimal::from(100 + i as i64) + Decimal::from(i as i64 % 3);
                let close = open + dec!(0.5);
                Candle::new(
                    start + Duration::hours(i as i64),
                    open,
                    close + dec!(0.3),
                    open - dec!(0.4),
                    close,
                )
            })
            .collect()
    }

    #[test]
    fn test_default_min_candles() {
        let engine = AnalysisEngine::new();

        // SMA(50)가 가장 긴 요구 조건
        assert_eq!(engine.min_candles(), 50);
    }

    #[test]
    fn test_analyze_produces_full_bundle() {
        let engine = AnalysisEngine::new();
        let candles = sample_candles(60);
        let current = candles.last().unwrap().close;

        let analysis = engine.analyze("BTCUSDT", &candles, current);

        assert!(!analysis.snapshot.sma50.is_zero());
        assert!(!analysis.signals.is_empty());
        assert_eq!(analysis.recommendation.take_profit_targets.len(), 3);
        assert!(analysis.recommendation.confidence <= 100);
    }

    #[test]
    fn test_analyze_degrades_on_short_input() {
        let engine = AnalysisEngine::new();
        let candles = sample_candles(3);

        let analysis = engine.analyze("BTCUSDT", &candles, dec!(100));

        assert_eq!(analysis.snapshot, IndicatorSnapshot::default());
        assert!(analysis.levels.is_empty());
        assert_eq!(analysis.signals.len(), 1);
        assert_eq!(analysis.signals[0].action, SignalAction::Hold);
        assert_eq!(analysis.recommendation.direction, SignalAction::Hold);
    }

    #[test]
    fn test_oversold_partial_history_still_signals_buy() {
        let engine = AnalysisEngine::new();
        // 순하락 16개: RSI(14)는 계산되어 0이지만 나머지 지표는 아직 빈 구간
        let start = Utc::now() - Duration::hours(16);
        let candles: Vec<Candle> = (0..16)
            .map(|i| {
                let close = Decimal::from(100 - i as i64);
                Candle::new(
                    start + Duration::hours(i as i64),
                    close + dec!(1),
                    close + dec!(1.2),
                    close - dec!(0.2),
                    close,
                )
            })
            .collect();

        let analysis = engine.analyze("DROP", &candles, dec!(85));

        // 계산된 RSI 0은 부재가 아니라 과매도 값
        assert_eq!(analysis.snapshot.rsi, Decimal::ZERO);
        assert!(analysis.snapshot.sma20.is_zero());
        assert_eq!(analysis.signals.len(), 1);
        assert_eq!(analysis.signals[0].action, SignalAction::Buy);
        assert_eq!(analysis.signals[0].indicator, "RSI");
        assert_eq!(analysis.recommendation.direction, SignalAction::Buy);
    }

    #[test]
    fn test_try_analyze_rejects_short_input() {
        let engine = AnalysisEngine::new();
        let candles = sample_candles(10);

        let err = engine.try_analyze("BTCUSDT", &candles, dec!(100)).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::InsufficientData {
                required: 50,
                provided: 10,
            }
        );

        assert!(engine
            .try_analyze("BTCUSDT", &sample_candles(50), dec!(100))
            .is_ok());
    }

    #[test]
    fn test_params_from_config() {
        let config = AnalysisConfig::default();
        let params = AnalysisParams::from(&config);

        assert_eq!(params, AnalysisParams::default());
        assert_eq!(params.indicators.macd.slow_period, 26);
        assert_eq!(params.levels.merge_threshold, dec!(0.02));
    }

    #[test]
    fn test_with_params_validates() {
        let mut params = AnalysisParams::default();
        params.indicators.rsi.period = 0;
        assert!(matches!(
            AnalysisEngine::with_params(params),
            Err(AnalyticsError::InvalidParameter(_))
        ));

        let mut params = AnalysisParams::default();
        params.indicators.macd.fast_period = 30;
        assert!(AnalysisEngine::with_params(params).is_err());

        assert!(AnalysisEngine::with_params(AnalysisParams::default()).is_ok());
    }
}
