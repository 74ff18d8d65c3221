//! 캔들 패턴 감지 모듈.
//!
//! 연속된 두 캔들(직전, 현재)을 보고 다섯 가지 반전/중립 패턴을
//! 감지합니다. 규칙은 서로 배타적이지 않아 한 캔들이 여러 패턴으로
//! 보고될 수 있습니다.

use pulse_core::{Candle, CandlePattern, PatternKind};
use rust_decimal_macros::dec;

/// 캔들 패턴 감지기.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDetector;

impl PatternDetector {
    /// 새 감지기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 캔들 시리즈에서 패턴을 감지합니다.
    ///
    /// 인덱스 1부터 (직전, 현재) 쌍을 순회하며, 각 캔들에 대해 도지,
    /// 해머, 유성형, 장악형 규칙을 순서대로 평가합니다. 캔들이 2개
    /// 미만이면 빈 벡터를 반환합니다.
    pub fn detect(&self, candles: &[Candle]) -> Vec<CandlePattern> {
        let mut patterns = Vec::new();

        for i in 1..candles.len() {
            let prev = &candles[i - 1];
            let current = &candles[i];

            if let Some(pattern) = self.doji(current, i) {
                patterns.push(pattern);
            }
            if let Some(pattern) = self.hammer(current, i) {
                patterns.push(pattern);
            }
            if let Some(pattern) = self.shooting_star(current, i) {
                patterns.push(pattern);
            }
            if let Some(pattern) = self.bullish_engulfing(prev, current, i) {
                patterns.push(pattern);
            }
            if let Some(pattern) = self.bearish_engulfing(prev, current, i) {
                patterns.push(pattern);
            }
        }

        patterns
    }

    /// 도지: 몸통이 전체 범위의 10% 미만.
    fn doji(&self, candle: &Candle, index: usize) -> Option<CandlePattern> {
        if candle.body() < candle.range() * dec!(0.1) {
            Some(
                CandlePattern::new(
                    index,
                    PatternKind::Neutral,
                    "Doji",
                    "Indecision in the market - price opened and closed at nearly the same level",
                )
                .with_action("Wait for confirmation from next candle before entering position"),
            )
        } else {
            None
        }
    }

    /// 해머: 긴 아래꼬리(몸통의 2배 초과), 짧은 위꼬리, 양봉 마감.
    fn hammer(&self, candle: &Candle, index: usize) -> Option<CandlePattern> {
        let body = candle.body();
        if candle.lower_shadow() > body * dec!(2)
            && candle.upper_shadow() < body * dec!(0.5)
            && candle.close > candle.open
        {
            Some(
                CandlePattern::new(
                    index,
                    PatternKind::Bullish,
                    "Hammer",
                    "Potential bullish reversal - buyers rejected lower prices",
                )
                .with_action(
                    "Consider entering long position if confirmed by next candle closing higher",
                ),
            )
        } else {
            None
        }
    }

    /// 유성형: 해머의 거울상. 긴 위꼬리, 짧은 아래꼬리, 음봉 마감.
    fn shooting_star(&self, candle: &Candle, index: usize) -> Option<CandlePattern> {
        let body = candle.body();
        if candle.upper_shadow() > body * dec!(2)
            && candle.lower_shadow() < body * dec!(0.5)
            && candle.close < candle.open
        {
            Some(
                CandlePattern::new(
                    index,
                    PatternKind::Bearish,
                    "Shooting Star",
                    "Potential bearish reversal - sellers rejected higher prices",
                )
                .with_action(
                    "Consider entering short position or taking profits on long positions",
                ),
            )
        } else {
            None
        }
    }

    /// 상승 장악형: 음봉 직후 그 몸통을 완전히 덮는 양봉.
    fn bullish_engulfing(
        &self,
        prev: &Candle,
        current: &Candle,
        index: usize,
    ) -> Option<CandlePattern> {
        if prev.close < prev.open
            && current.close > current.open
            && current.open < prev.close
            && current.close > prev.open
        {
            Some(
                CandlePattern::new(
                    index,
                    PatternKind::Bullish,
                    "Bullish Engulfing",
                    "Strong bullish reversal signal - buyers overwhelmed sellers",
                )
                .with_action(
                    "Strong buy signal - consider entering long position with stop below pattern low",
                ),
            )
        } else {
            None
        }
    }

    /// 하락 장악형: 양봉 직후 그 몸통을 완전히 덮는 음봉.
    fn bearish_engulfing(
        &self,
        prev: &Candle,
        current: &Candle,
        index: usize,
    ) -> Option<CandlePattern> {
        if prev.close > prev.open
            && current.close < current.open
            && current.open > prev.close
            && current.close < prev.open
        {
            Some(
                CandlePattern::new(
                    index,
                    PatternKind::Bearish,
                    "Bearish Engulfing",
                    "Strong bearish reversal signal - sellers overwhelmed buyers",
                )
                .with_action(
                    "Strong sell signal - consider entering short position or exiting long positions",
                ),
            )
        } else {
            None
        }
    }
}
