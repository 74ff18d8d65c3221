//! 시장 심리 도메인 타입.
//!
//! 자산별 24시간 변동률을 집계한 시장 전체 분위기 요약입니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 자산별 24시간 시세 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTicker {
    /// 자산 심볼
    pub symbol: String,
    /// 자산 이름
    pub name: String,
    /// 현재 가격
    pub price: Decimal,
    /// 24시간 변동률 (%)
    pub change_24h_pct: Decimal,
}

impl MarketTicker {
    /// 새 시세 요약을 생성합니다.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        change_24h_pct: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change_24h_pct,
        }
    }
}

/// 전반적 시장 분위기.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketMood {
    /// 강세장
    Bullish,
    /// 중립
    #[default]
    Neutral,
    /// 약세장
    Bearish,
}

impl std::fmt::Display for MarketMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketMood::Bullish => write!(f, "BULLISH"),
            MarketMood::Neutral => write!(f, "NEUTRAL"),
            MarketMood::Bearish => write!(f, "BEARISH"),
        }
    }
}

/// 시장 심리 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    /// 전반적 분위기
    pub mood: MarketMood,
    /// 평균 24시간 변동률 (%)
    pub average_change_pct: Decimal,
    /// 공포/탐욕 지수 (0~100)
    pub fear_greed_index: Decimal,
    /// 상승률 상위 자산 (최대 5개)
    pub top_gainers: Vec<MarketTicker>,
    /// 하락률 상위 자산 (최대 5개, 최악이 먼저)
    pub top_losers: Vec<MarketTicker>,
}

impl Default for MarketSentiment {
    fn default() -> Self {
        Self {
            mood: MarketMood::Neutral,
            average_change_pct: Decimal::ZERO,
            fear_greed_index: Decimal::from(50),
            top_gainers: Vec::new(),
            top_losers: Vec::new(),
        }
    }
}
