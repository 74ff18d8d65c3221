//! 매매 신호 도메인 타입.
//!
//! 이 모듈은 지표 스냅샷에서 생성되는 매매 신호 관련 타입을 정의합니다:
//! - `SignalAction` - 신호 방향 (매수/매도/관망)
//! - `SignalConfidence` - 정성적 신뢰도
//! - `TradeSignal` - 매매 신호 엔티티

use serde::{Deserialize, Serialize};

/// 신호 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAction {
    /// 매수
    Buy,
    /// 매도
    Sell,
    /// 관망
    Hold,
}

impl SignalAction {
    /// 방향성이 있는 신호인지 확인합니다 (관망 제외).
    pub fn is_directional(&self) -> bool {
        !matches!(self, SignalAction::Hold)
    }
}

impl std::fmt::Display for SignalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "BUY"),
            SignalAction::Sell => write!(f, "SELL"),
            SignalAction::Hold => write!(f, "HOLD"),
        }
    }
}

/// 신호의 정성적 신뢰도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalConfidence {
    /// 높음
    High,
    /// 보통
    Medium,
    /// 낮음
    Low,
}

impl SignalConfidence {
    /// 알림 레코드에 저장되는 수치 신뢰도로 변환합니다.
    pub fn score(&self) -> u8 {
        match self {
            SignalConfidence::High => 90,
            SignalConfidence::Medium => 60,
            SignalConfidence::Low => 30,
        }
    }
}

impl std::fmt::Display for SignalConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalConfidence::High => write!(f, "HIGH"),
            SignalConfidence::Medium => write!(f, "MEDIUM"),
            SignalConfidence::Low => write!(f, "LOW"),
        }
    }
}

/// 지표가 생성한 매매 신호.
///
/// 하나의 스냅샷에서 여러 신호가 공존할 수 있습니다. `Hold`는 방향성
/// 신호가 하나도 발화하지 않았을 때만 단독으로 생성됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    /// 신호 방향
    pub action: SignalAction,
    /// 신호 사유
    pub reason: String,
    /// 정성적 신뢰도
    pub confidence: SignalConfidence,
    /// 신호를 발생시킨 지표 이름
    pub indicator: String,
}

impl TradeSignal {
    /// 새 신호를 생성합니다.
    pub fn new(
        action: SignalAction,
        confidence: SignalConfidence,
        indicator: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            action,
            reason: reason.into(),
            confidence,
            indicator: indicator.into(),
        }
    }

    /// 매수 신호를 생성합니다.
    pub fn buy(
        confidence: SignalConfidence,
        indicator: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(SignalAction::Buy, confidence, indicator, reason)
    }

    /// 매도 신호를 생성합니다.
    pub fn sell(
        confidence: SignalConfidence,
        indicator: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(SignalAction::Sell, confidence, indicator, reason)
    }

    /// 관망 신호를 생성합니다.
    pub fn hold(reason: impl Into<String>) -> Self {
        Self::new(SignalAction::Hold, SignalConfidence::Low, "Overall", reason)
    }

    /// 매수 신호인지 확인합니다.
    pub fn is_buy(&self) -> bool {
        self.action == SignalAction::Buy
    }

    /// 매도 신호인지 확인합니다.
    pub fn is_sell(&self) -> bool {
        self.action == SignalAction::Sell
    }
}
