//! 전체 분석 파이프라인 통합 테스트
//!
//! 캔들 스냅샷 하나로 지표 -> 패턴 -> 레벨 -> 신호 -> 추천까지 한 번에
//! 실행하고 산출물 묶음의 일관성을 검증합니다.

use chrono::{Duration, Utc};
use pulse_analytics::{AnalysisEngine, AnalysisParams};
use pulse_core::{AnalysisConfig, Candle, IndicatorSnapshot, RiskLevel, SignalAction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 동일한 가격이 반복되는 캔들 시리즈.
///
/// 고가/저가에 약간의 범위를 줘서 도지 패턴은 감지되지만 국소 극값은
/// 생기지 않습니다.
fn flat_candles(count: usize, price: Decimal) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            Candle::new(
                start + Duration::hours(i as i64),
                price,
                price + dec!(1),
                price - dec!(1),
                price,
            )
        })
        .collect()
}

#[test]
fn test_flat_market_is_deterministic() {
    let engine = AnalysisEngine::new();
    let candles = flat_candles(60, dec!(100));

    let analysis = engine.analyze("FLAT", &candles, dec!(100));

    // 가격 변화가 없으면 평균 하락이 0이므로 RSI는 100으로 수렴
    assert_eq!(analysis.snapshot.rsi, dec!(100));
    assert_eq!(analysis.snapshot.sma20, dec!(100));
    assert_eq!(analysis.snapshot.macd.histogram, Decimal::ZERO);

    // 표준편차 0이면 밴드가 중간값으로 붕괴
    assert_eq!(analysis.snapshot.bollinger.upper, dec!(100));
    assert_eq!(analysis.snapshot.bollinger.lower, dec!(100));

    // 시가 == 종가이므로 모든 캔들 쌍에서 도지가 감지됨
    assert!(analysis.patterns.iter().all(|p| p.name == "Doji"));
    assert_eq!(analysis.patterns.len(), candles.len() - 1);

    // 엄격 부등호 극값이 없으므로 레벨도 없음
    assert!(analysis.levels.is_empty());

    // RSI 100 -> 과매수 매도 신호 하나, 방향은 매도
    assert_eq!(analysis.signals.len(), 1);
    assert_eq!(analysis.signals[0].action, SignalAction::Sell);
    assert_eq!(analysis.recommendation.direction, SignalAction::Sell);

    // 저항선이 없으므로 진입가는 현재가의 1.02 * 0.995 배
    assert_eq!(analysis.recommendation.entry_point, dec!(101.49));
    assert_eq!(
        analysis.recommendation.stop_loss,
        analysis.recommendation.entry_point * dec!(1.04)
    );

    // RSI 극단 +15만 발화하여 신뢰도 65
    assert_eq!(analysis.recommendation.confidence, 65);
    assert_eq!(analysis.recommendation.risk_level, RiskLevel::Low);
}

#[test]
fn test_short_history_degrades_to_neutral() {
    let engine = AnalysisEngine::new();
    let candles = flat_candles(5, dec!(100));

    let analysis = engine.analyze("SHORT", &candles, dec!(100));

    assert_eq!(analysis.snapshot, IndicatorSnapshot::default());
    assert!(analysis.levels.is_empty());
    assert_eq!(analysis.signals.len(), 1);
    assert_eq!(analysis.signals[0].action, SignalAction::Hold);

    let rec = &analysis.recommendation;
    assert_eq!(rec.direction, SignalAction::Hold);
    assert_eq!(rec.entry_point, dec!(100));
    for target in &rec.take_profit_targets {
        assert_eq!(target.price, dec!(100));
        assert_eq!(target.percentage, Decimal::ZERO);
    }
    assert_eq!(rec.stop_loss, dec!(95));
}

#[test]
fn test_levels_feed_recommendation() {
    let engine = AnalysisEngine::new();
    // 평평한 시장에 깊은 저점 하나를 심어 지지선을 만듦
    let mut candles = flat_candles(60, dec!(100));
    let dip = candles.len() - 10;
    candles[dip].low = dec!(92);

    let analysis = engine.analyze("DIP", &candles, dec!(100));

    let support = analysis
        .levels
        .iter()
        .find(|l| l.is_support())
        .expect("심은 저점이 지지선으로 감지되어야 함");
    assert_eq!(support.price, dec!(92));
    assert_eq!(support.strength, 1);

    // 방향은 여전히 매도(RSI 100)이므로 지지선은 손절에 쓰이지 않지만,
    // 레벨 목록은 산출물에 그대로 실려야 함
    assert!(analysis.levels.len() <= 5);
    assert!(analysis.levels.iter().all(|l| l.strength >= 1));
}

#[test]
fn test_config_driven_engine_matches_default() {
    let params = AnalysisParams::from(&AnalysisConfig::default());
    let engine = AnalysisEngine::with_params(params).expect("기본 설정은 유효해야 함");
    let candles = flat_candles(60, dec!(250));

    let from_config = engine.analyze("CFG", &candles, dec!(250));
    let from_default = AnalysisEngine::new().analyze("CFG", &candles, dec!(250));

    assert_eq!(from_config, from_default);
}

#[test]
fn test_analysis_serializes_for_dashboard() {
    let engine = AnalysisEngine::new();
    let candles = flat_candles(60, dec!(100));

    let analysis = engine.analyze("SER", &candles, dec!(100));
    let json = serde_json::to_value(&analysis).expect("직렬화 실패");

    assert_eq!(json["recommendation"]["direction"], "sell");
    assert_eq!(json["signals"][0]["confidence"], "high");
    assert_eq!(json["snapshot"]["rsi"], "100");
}
