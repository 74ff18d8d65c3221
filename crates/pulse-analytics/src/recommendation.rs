//! 트레이드 추천 종합 모듈.
//!
//! 신호 목록, 지표 스냅샷, 패턴, 지지/저항 가격을 하나의 추천으로
//! 종합합니다. 방향은 신호 다수결, 신뢰도는 기본 50점에 근거 항목별
//! 가점을 더해 산출합니다.

use pulse_core::{
    BollingerSnapshot, CandlePattern, IndicatorSnapshot, RiskLevel, SignalAction, TakeProfitTarget,
    TargetLabel, TradeRecommendation, TradeSignal,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 아무 근거 항목도 발화하지 않았을 때의 추천 사유.
const INSUFFICIENT_DATA_REASONING: &str =
    "Insufficient data for strong recommendation. Consider waiting for clearer signals.";

/// 관망 추천의 진입가 사유.
const HOLD_ENTRY_REASONING: &str = "No clear entry signal - wait for confirmation";

/// 레벨이 없을 때의 진입가 사유.
const NO_LEVEL_ENTRY_REASONING: &str = "Entry at current price with tight stop-loss";

/// 트레이드 추천 엔진.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// 새 엔진을 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 분석 산출물을 하나의 추천으로 종합합니다.
    ///
    /// `support_prices`와 `resistance_prices`는 레벨 탐지기가 낸 레벨의
    /// 가격만 뽑은 목록입니다. 입력이 모두 비어 있어도 실패하지 않고
    /// 관망 추천으로 퇴화합니다.
    pub fn synthesize(
        &self,
        current_price: Decimal,
        signals: &[TradeSignal],
        snapshot: &IndicatorSnapshot,
        patterns: &[CandlePattern],
        support_prices: &[Decimal],
        resistance_prices: &[Decimal],
    ) -> TradeRecommendation {
        let direction = self.vote_direction(signals);
        let (confidence, reasoning) =
            self.score_confidence(direction, current_price, snapshot, patterns);

        let (entry_point, entry_reasoning) =
            self.entry_point(direction, current_price, support_prices, resistance_prices);
        let take_profit_targets = self.take_profit_targets(direction, entry_point, current_price);
        let stop_loss = self.stop_loss(
            direction,
            entry_point,
            current_price,
            support_prices,
            resistance_prices,
        );
        let risk_level = self.risk_level(&snapshot.bollinger);

        TradeRecommendation {
            direction,
            entry_point,
            entry_reasoning,
            take_profit_targets,
            stop_loss,
            confidence,
            risk_level,
            reasoning,
        }
    }

    /// 신호 다수결로 방향을 결정합니다. 동률이면 관망입니다.
    fn vote_direction(&self, signals: &[TradeSignal]) -> SignalAction {
        let buy_count = signals.iter().filter(|s| s.is_buy()).count();
        let sell_count = signals.iter().filter(|s| s.is_sell()).count();

        if buy_count > sell_count {
            SignalAction::Buy
        } else if sell_count > buy_count {
            SignalAction::Sell
        } else {
            SignalAction::Hold
        }
    }

    /// 신뢰도를 계산하고 발화한 근거 문장을 모읍니다.
    ///
    /// 기본 50점에서 출발하여 RSI 극단값/중립, MACD 모멘텀, 방향과
    /// 일치하는 패턴, 볼린저 밴드 이탈 순서로 가점하고 100점에서
    /// 자릅니다.
    fn score_confidence(
        &self,
        direction: SignalAction,
        current_price: Decimal,
        snapshot: &IndicatorSnapshot,
        patterns: &[CandlePattern],
    ) -> (u8, String) {
        let mut confidence: u8 = 50;
        let mut parts: Vec<String> = Vec::new();

        // RSI: 극단값이 우선이고, 아니면 중립 구간에 소폭 가점
        if snapshot.rsi < dec!(30) {
            confidence += 15;
            parts.push("RSI shows oversold conditions (strong buy signal)".to_string());
        } else if snapshot.rsi > dec!(70) {
            confidence += 15;
            parts.push("RSI shows overbought conditions (strong sell signal)".to_string());
        } else if snapshot.rsi >= dec!(40) && snapshot.rsi <= dec!(60) {
            confidence += 5;
            parts.push("RSI is neutral".to_string());
        }

        // MACD: 히스토그램 부호와 라인 위치가 일치하는 모멘텀
        let macd = &snapshot.macd;
        if macd.histogram > Decimal::ZERO && macd.macd > macd.signal {
            confidence += 15;
            parts.push("MACD shows bullish momentum".to_string());
        } else if macd.histogram < Decimal::ZERO && macd.macd < macd.signal {
            confidence += 15;
            parts.push("MACD shows bearish momentum".to_string());
        }

        // 패턴: 방향과 극성이 일치하는 패턴이 하나라도 있으면 가점
        let bullish: Vec<&CandlePattern> = patterns.iter().filter(|p| p.is_bullish()).collect();
        let bearish: Vec<&CandlePattern> = patterns.iter().filter(|p| p.is_bearish()).collect();
        if !bullish.is_empty() && direction == SignalAction::Buy {
            confidence += 10;
            parts.push(format!(
                "Detected {} bullish pattern(s): {}",
                bullish.len(),
                joined_names(&bullish)
            ));
        } else if !bearish.is_empty() && direction == SignalAction::Sell {
            confidence += 10;
            parts.push(format!(
                "Detected {} bearish pattern(s): {}",
                bearish.len(),
                joined_names(&bearish)
            ));
        }

        // 볼린저 밴드: 방향과 일치하는 밴드 이탈
        if current_price < snapshot.bollinger.lower && direction == SignalAction::Buy {
            confidence += 10;
            parts.push("Price is below lower Bollinger Band (potential bounce)".to_string());
        } else if current_price > snapshot.bollinger.upper && direction == SignalAction::Sell {
            confidence += 10;
            parts.push("Price is above upper Bollinger Band (potential pullback)".to_string());
        }

        let confidence = confidence.min(100);
        let reasoning = if parts.is_empty() {
            INSUFFICIENT_DATA_REASONING.to_string()
        } else {
            format!("{}.", parts.join(". "))
        };

        (confidence, reasoning)
    }

    /// 진입가와 그 사유를 결정합니다.
    ///
    /// 매수는 현재가에 가장 가까운 지지선 근처(지지선이 없으면 현재가의
    /// 98%)로, 매도는 가장 가까운 저항선 근처로 당깁니다. 관망은
    /// 현재가 그대로입니다.
    fn entry_point(
        &self,
        direction: SignalAction,
        current_price: Decimal,
        support_prices: &[Decimal],
        resistance_prices: &[Decimal],
    ) -> (Decimal, String) {
        match direction {
            SignalAction::Buy => match nearest_to(support_prices, current_price) {
                Some(support) => (
                    current_price.min(support * dec!(1.005)),
                    format!("Entry near support level at ${:.2}", support),
                ),
                None => (
                    current_price.min(current_price * dec!(0.98) * dec!(1.005)),
                    NO_LEVEL_ENTRY_REASONING.to_string(),
                ),
            },
            SignalAction::Sell => match nearest_to(resistance_prices, current_price) {
                Some(resistance) => (
                    current_price.max(resistance * dec!(0.995)),
                    format!("Entry near resistance level at ${:.2}", resistance),
                ),
                None => (
                    current_price.max(current_price * dec!(1.02) * dec!(0.995)),
                    NO_LEVEL_ENTRY_REASONING.to_string(),
                ),
            },
            SignalAction::Hold => (current_price, HOLD_ENTRY_REASONING.to_string()),
        }
    }

    /// 보수적/중간/공격적 익절 목표 3개를 계산합니다.
    ///
    /// 진입가에서 ±6% / ±12% / ±25% 고정 오프셋이며, 관망이면 세 목표
    /// 모두 현재가에 0%입니다.
    fn take_profit_targets(
        &self,
        direction: SignalAction,
        entry_point: Decimal,
        current_price: Decimal,
    ) -> Vec<TakeProfitTarget> {
        let tiers = [
            (TargetLabel::Conservative, dec!(6)),
            (TargetLabel::Moderate, dec!(12)),
            (TargetLabel::Aggressive, dec!(25)),
        ];

        tiers
            .into_iter()
            .map(|(label, percentage)| match direction {
                SignalAction::Buy => TakeProfitTarget::new(
                    label,
                    entry_point * (Decimal::ONE + percentage / Decimal::ONE_HUNDRED),
                    percentage,
                ),
                SignalAction::Sell => TakeProfitTarget::new(
                    label,
                    entry_point * (Decimal::ONE - percentage / Decimal::ONE_HUNDRED),
                    percentage,
                ),
                SignalAction::Hold => TakeProfitTarget::new(label, current_price, Decimal::ZERO),
            })
            .collect()
    }

    /// 손절가를 계산합니다.
    ///
    /// 매수는 진입가보다 엄격히 낮은 지지선 중 가장 높은 것의 99%
    /// (없으면 진입가의 96%), 매도는 진입가보다 엄격히 높은 저항선 중
    /// 가장 낮은 것의 101% (없으면 진입가의 104%), 관망은 현재가의
    /// 95%입니다.
    fn stop_loss(
        &self,
        direction: SignalAction,
        entry_point: Decimal,
        current_price: Decimal,
        support_prices: &[Decimal],
        resistance_prices: &[Decimal],
    ) -> Decimal {
        match direction {
            SignalAction::Buy => support_prices
                .iter()
                .filter(|&&price| price < entry_point)
                .max()
                .map(|&support| support * dec!(0.99))
                .unwrap_or(entry_point * dec!(0.96)),
            SignalAction::Sell => resistance_prices
                .iter()
                .filter(|&&price| price > entry_point)
                .min()
                .map(|&resistance| resistance * dec!(1.01))
                .unwrap_or(entry_point * dec!(1.04)),
            SignalAction::Hold => current_price * dec!(0.95),
        }
    }

    /// 볼린저 밴드 상대 폭으로 리스크 수준을 분류합니다.
    ///
    /// 폭이 8% 초과면 높음, 4% 초과면 보통, 그 외에는 낮음입니다.
    fn risk_level(&self, bollinger: &BollingerSnapshot) -> RiskLevel {
        let width_pct = bollinger.relative_width_pct();
        if width_pct > dec!(8) {
            RiskLevel::High
        } else if width_pct > dec!(4) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// 목표 가격에 가장 가까운 레벨. 거리가 같으면 앞선 레벨이 이깁니다.
fn nearest_to(prices: &[Decimal], target: Decimal) -> Option<Decimal> {
    prices.iter().copied().reduce(|nearest, candidate| {
        if (candidate - target).abs() < (nearest - target).abs() {
            candidate
        } else {
            nearest
        }
    })
}

/// 패턴 이름을 쉼표로 연결합니다.
fn joined_names(patterns: &[&CandlePattern]) -> String {
    patterns
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
