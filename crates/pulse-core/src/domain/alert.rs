//! 알림 레코드 및 트리거 사유.
//!
//! 분석 패스에서 발생한 신호의 일부(방향, 신뢰도, 트리거 사유, 가격,
//! 시각)는 외부 저장 계층이 알림 이력으로 보관합니다. 이 모듈은 그
//! 레코드의 값 타입과 생성 규칙을 정의합니다.

use crate::domain::signal::{SignalAction, TradeSignal};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 알림이 발생한 사유.
///
/// 외부 태그 직렬화를 사용하므로 `{"rsi_below_30": "..."}` 형태의
/// JSON이 됩니다. 소비 측은 향후 추가될 변형에 대비해 기본 분기를
/// 두고 매칭해야 합니다.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerReason {
    /// 추세 추종 진입 (상승 추세 여부)
    TrendFollowing(bool),
    /// 가격 돌파
    PriceBreak(String),
    /// 익절 도달 (목표가)
    TakeProfit(Option<Decimal>),
    /// RSI 과매도 (30 미만)
    // rename_all은 숫자 앞 구분자를 넣지 않으므로 ("rsi_below30") 태그를 직접 지정
    #[serde(rename = "rsi_below_30")]
    RsiBelow30(String),
    /// 손익비 조건 충족
    RiskReward(Option<f64>),
    /// 손절 도달 (손절가)
    StopLoss(Option<Decimal>),
    /// MACD 교차
    MacdCrossover(String),
    /// RSI 과매수 (70 초과)
    #[serde(rename = "rsi_above_70")]
    RsiAbove70(String),
}

impl TriggerReason {
    /// 사람이 읽을 수 있는 한 줄 요약을 반환합니다.
    pub fn summary(&self) -> String {
        match self {
            TriggerReason::TrendFollowing(true) => "Trend following (uptrend)".to_string(),
            TriggerReason::TrendFollowing(false) => "Trend following (downtrend)".to_string(),
            TriggerReason::PriceBreak(detail) => detail.clone(),
            TriggerReason::TakeProfit(Some(price)) => {
                format!("Take profit target reached at {}", price)
            }
            TriggerReason::TakeProfit(None) => "Take profit target reached".to_string(),
            TriggerReason::RsiBelow30(detail) => detail.clone(),
            TriggerReason::RiskReward(Some(ratio)) => {
                format!("Risk/reward ratio {:.2}", ratio)
            }
            TriggerReason::RiskReward(None) => "Risk/reward conditions met".to_string(),
            TriggerReason::StopLoss(Some(price)) => {
                format!("Stop loss triggered at {}", price)
            }
            TriggerReason::StopLoss(None) => "Stop loss triggered".to_string(),
            TriggerReason::MacdCrossover(detail) => detail.clone(),
            TriggerReason::RsiAbove70(detail) => detail.clone(),
        }
    }
}

/// 알림 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// 레코드 ID
    pub id: Uuid,
    /// 자산 심볼
    pub symbol: String,
    /// 신호 방향
    pub signal: SignalAction,
    /// 수치화된 신뢰도 (0~100)
    pub confidence: u8,
    /// 트리거 시점 가격
    pub price_at_trigger: Decimal,
    /// 트리거 시각
    pub timestamp: DateTime<Utc>,
    /// 트리거 사유 (식별 불가능한 지표는 생략)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_reason: Option<TriggerReason>,
}

impl Alert {
    /// 매매 신호에서 알림 레코드를 생성합니다.
    ///
    /// 정성적 신뢰도는 수치로 변환되고 (high 90 / medium 60 / low 30),
    /// 트리거 사유는 신호를 발생시킨 지표에서 유도됩니다.
    pub fn from_signal(
        signal: &TradeSignal,
        symbol: impl Into<String>,
        price: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let trigger_reason = match (signal.indicator.as_str(), signal.action) {
            ("RSI", SignalAction::Buy) => Some(TriggerReason::RsiBelow30(signal.reason.clone())),
            ("RSI", SignalAction::Sell) => Some(TriggerReason::RsiAbove70(signal.reason.clone())),
            ("MACD", _) => Some(TriggerReason::MacdCrossover(signal.reason.clone())),
            _ => None,
        };

        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            signal: signal.action,
            confidence: signal.confidence.score(),
            price_at_trigger: price,
            timestamp,
            trigger_reason,
        }
    }
}
