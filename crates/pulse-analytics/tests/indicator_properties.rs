//! 파이프라인 불변식 속성 테스트
//!
//! 무작위 입력에 대해 항상 성립해야 하는 성질을 proptest로 검증합니다:
//! 시리즈 길이 규칙, 밴드 순서, 레벨 병합 상한, 신뢰도 범위.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use pulse_analytics::{
    BollingerParams, EmaParams, IndicatorEngine, LevelDetector, LevelParams, RecommendationEngine,
    RsiParams, SignalGenerator,
};
use pulse_core::{Candle, IndicatorSnapshot, MacdSnapshot, SignalAction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 1.00 ~ 1000.00 범위의 가격 (소수 둘째 자리).
fn price_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// 무작위 가격 시리즈.
fn price_series(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(price_strategy(), 0..max_len)
}

/// 무작위 캔들 시리즈. 고가/저가가 시가/종가를 감싸도록 구성합니다.
fn candle_series(max_len: usize) -> impl Strategy<Value = Vec<Candle>> {
    prop::collection::vec(
        (price_strategy(), price_strategy(), 0i64..200, 0i64..200),
        0..max_len,
    )
    .prop_map(|rows| {
        let start = Utc::now();
        rows.into_iter()
            .enumerate()
            .map(|(i, (open, close, up, down))| {
                let high = open.max(close) + Decimal::new(up, 2);
                let low = (open.min(close) - Decimal::new(down, 2)).max(Decimal::new(1, 2));
                Candle::new(start + Duration::hours(i as i64), open, high, low, close)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ema_length_follows_input(prices in price_series(80), period in 1usize..30) {
        let engine = IndicatorEngine::new();
        let series = engine.ema(&prices, EmaParams { period });

        if prices.len() >= period {
            prop_assert_eq!(series.len(), prices.len() - period + 1);
        } else {
            prop_assert!(series.is_empty());
        }
    }

    #[test]
    fn constant_series_rsi_is_100(price in price_strategy(), len in 15usize..60) {
        let engine = IndicatorEngine::new();
        let prices = vec![price; len];

        let series = engine.rsi(&prices, RsiParams::default());
        prop_assert!(!series.is_empty());
        prop_assert!(series.iter().all(|rsi| *rsi == dec!(100)));
    }

    #[test]
    fn bollinger_bands_are_ordered(prices in price_series(80), period in 1usize..30) {
        let engine = IndicatorEngine::new();
        let series = engine.bollinger_bands(
            &prices,
            BollingerParams { period, std_dev_multiplier: dec!(2.0) },
        );

        for i in 0..series.len() {
            prop_assert!(series.lower[i] <= series.middle[i]);
            prop_assert!(series.middle[i] <= series.upper[i]);
        }
    }

    #[test]
    fn level_detection_respects_bounds(candles in candle_series(60)) {
        let detector = LevelDetector::new();
        let params = LevelParams::default();
        let levels = detector.detect(&candles, params);

        // 병합 결과는 상한 이하이고 강도는 항상 1 이상
        prop_assert!(levels.len() <= params.max_levels);
        prop_assert!(levels.iter().all(|level| level.strength >= 1));

        // 강도 내림차순 정렬 유지
        for pair in levels.windows(2) {
            prop_assert!(pair[0].strength >= pair[1].strength);
        }

        // 캔들이 lookback 미만이면 항상 빈 결과
        if candles.len() < params.lookback {
            prop_assert!(levels.is_empty());
        }
    }

    #[test]
    fn recommendation_confidence_stays_in_range(
        rsi in (0i64..10_000).prop_map(|v| Decimal::new(v, 2)),
        macd in -1000i64..1000,
        histogram in -1000i64..1000,
        current in price_strategy(),
    ) {
        let generator = SignalGenerator::new();
        let engine = RecommendationEngine::new();
        let snapshot = IndicatorSnapshot {
            rsi,
            macd: MacdSnapshot {
                macd: Decimal::new(macd, 2),
                signal: Decimal::ZERO,
                histogram: Decimal::new(histogram, 2),
            },
            ..IndicatorSnapshot::default()
        };

        let signals = generator.generate(&snapshot);
        let rec = engine.synthesize(current, &signals, &snapshot, &[], &[], &[]);

        prop_assert!(rec.confidence <= 100);
        prop_assert!(rec.confidence >= 50);
        prop_assert_eq!(rec.take_profit_targets.len(), 3);

        // 관망이면 목표가는 현재가, 오프셋은 0
        if rec.direction == SignalAction::Hold {
            for target in &rec.take_profit_targets {
                prop_assert_eq!(target.price, current);
                prop_assert_eq!(target.percentage, Decimal::ZERO);
            }
        }
    }
}
