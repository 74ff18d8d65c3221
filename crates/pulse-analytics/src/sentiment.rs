//! 시장 심리 집계 모듈.
//!
//! 자산별 24시간 변동률을 집계하여 시장 전체 분위기, 공포/탐욕 지수,
//! 상승/하락 상위 자산을 산출합니다.

use pulse_core::{MarketMood, MarketSentiment, MarketTicker};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 상위 목록에 담을 최대 자산 수.
const TOP_MOVERS: usize = 5;

/// 시장 심리 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentCalculator;

impl SentimentCalculator {
    /// 새 계산기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 시세 목록에서 시장 심리를 계산합니다.
    ///
    /// 평균 변동률이 +2%를 넘으면 강세, -2% 아래면 약세, 그 외에는
    /// 중립입니다. 공포/탐욕 지수는 `50 + 평균 * 5`를 0~100으로 자른
    /// 값입니다. 빈 목록이면 중립 기본값을 반환합니다.
    pub fn calculate(&self, tickers: &[MarketTicker]) -> MarketSentiment {
        if tickers.is_empty() {
            return MarketSentiment::default();
        }

        let total: Decimal = tickers.iter().map(|t| t.change_24h_pct).sum();
        let average = total / Decimal::from(tickers.len());

        let mood = if average > dec!(2) {
            MarketMood::Bullish
        } else if average < dec!(-2) {
            MarketMood::Bearish
        } else {
            MarketMood::Neutral
        };

        let fear_greed_index =
            (dec!(50) + average * dec!(5)).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

        // 변동률 내림차순으로 정렬한 뒤 양 끝에서 상위/하위를 뽑음
        let mut sorted = tickers.to_vec();
        sorted.sort_by(|a, b| b.change_24h_pct.cmp(&a.change_24h_pct));

        let top_gainers: Vec<MarketTicker> = sorted.iter().take(TOP_MOVERS).cloned().collect();
        // 하위는 최악이 먼저 오도록 역순으로 수집
        let top_losers: Vec<MarketTicker> = sorted.iter().rev().take(TOP_MOVERS).cloned().collect();

        MarketSentiment {
            mood,
            average_change_pct: average,
            fear_greed_index,
            top_gainers,
            top_losers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str, change: Decimal) -> MarketTicker {
        MarketTicker::new(symbol, symbol, dec!(100), change)
    }

    #[test]
    fn test_empty_tickers_return_default() {
        let calculator = SentimentCalculator::new();

        let sentiment = calculator.calculate(&[]);
        assert_eq!(sentiment, MarketSentiment::default());
    }

    #[test]
    fn test_mood_thresholds() {
        let calculator = SentimentCalculator::new();

        let bullish = calculator.calculate(&[ticker("BTC", dec!(3)), ticker("ETH", dec!(2))]);
        assert_eq!(bullish.mood, MarketMood::Bullish);
        assert_eq!(bullish.average_change_pct, dec!(2.5));

        let bearish = calculator.calculate(&[ticker("BTC", dec!(-5)), ticker("ETH", dec!(-1))]);
        assert_eq!(bearish.mood, MarketMood::Bearish);

        // 정확히 ±2는 중립
        let neutral = calculator.calculate(&[ticker("BTC", dec!(2))]);
        assert_eq!(neutral.mood, MarketMood::Neutral);
    }

    #[test]
    fn test_fear_greed_index_is_clamped() {
        let calculator = SentimentCalculator::new();

        // 50 + 2.5 * 5 = 62.5
        let sentiment = calculator.calculate(&[ticker("BTC", dec!(3)), ticker("ETH", dec!(2))]);
        assert_eq!(sentiment.fear_greed_index, dec!(62.5));

        // 50 + 30 * 5 = 200 -> 100으로 절단
        let greedy = calculator.calculate(&[ticker("BTC", dec!(30))]);
        assert_eq!(greedy.fear_greed_index, dec!(100));

        // 50 - 20 * 5 = -50 -> 0으로 절단
        let fearful = calculator.calculate(&[ticker("BTC", dec!(-20))]);
        assert_eq!(fearful.fear_greed_index, dec!(0));
    }

    #[test]
    fn test_top_movers_ordering() {
        let calculator = SentimentCalculator::new();
        let tickers: Vec<MarketTicker> = [8, -3, 5, -7, 1, 0, 12]
            .iter()
            .enumerate()
            .map(|(i, change)| ticker(&format!("A{i}"), Decimal::from(*change)))
            .collect();

        let sentiment = calculator.calculate(&tickers);

        let gainer_changes: Vec<Decimal> = sentiment
            .top_gainers
            .iter()
            .map(|t| t.change_24h_pct)
            .collect();
        assert_eq!(
            gainer_changes,
            vec![dec!(12), dec!(8), dec!(5), dec!(1), dec!(0)]
        );

        // 최악이 먼저
        let loser_changes: Vec<Decimal> = sentiment
            .top_losers
            .iter()
            .map(|t| t.change_24h_pct)
            .collect();
        assert_eq!(
            loser_changes,
            vec![dec!(-7), dec!(-3), dec!(0), dec!(1), dec!(5)]
        );
    }

    #[test]
    fn test_fewer_than_five_tickers_overlap() {
        let calculator = SentimentCalculator::new();
        let tickers = [ticker("BTC", dec!(4)), ticker("ETH", dec!(-4))];

        let sentiment = calculator.calculate(&tickers);
        assert_eq!(sentiment.top_gainers.len(), 2);
        assert_eq!(sentiment.top_losers.len(), 2);
        assert_eq!(sentiment.top_gainers[0].symbol, "BTC");
        assert_eq!(sentiment.top_losers[0].symbol, "ETH");
    }
}
