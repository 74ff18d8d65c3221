//! 트레이드 추천 도메인 타입.
//!
//! 분석 파이프라인의 최종 산출물인 추천과 그 구성 요소를 정의합니다:
//! - `TakeProfitTarget` - 단계별 익절 목표
//! - `RiskLevel` - 변동성 기반 리스크 분류
//! - `TradeRecommendation` - 진입가/익절/손절/신뢰도를 모은 추천

use crate::domain::signal::SignalAction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 익절 목표 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetLabel {
    /// 보수적 목표
    Conservative,
    /// 중간 목표
    Moderate,
    /// 공격적 목표
    Aggressive,
}

impl std::fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLabel::Conservative => write!(f, "Conservative"),
            TargetLabel::Moderate => write!(f, "Moderate"),
            TargetLabel::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// 단계별 익절 목표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitTarget {
    /// 목표 구분
    pub label: TargetLabel,
    /// 목표 가격
    pub price: Decimal,
    /// 진입가 대비 오프셋 (%)
    pub percentage: Decimal,
}

impl TakeProfitTarget {
    /// 새 익절 목표를 생성합니다.
    pub fn new(label: TargetLabel, price: Decimal, percentage: Decimal) -> Self {
        Self {
            label,
            price,
            percentage,
        }
    }
}

/// 리스크 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// 낮음
    Low,
    /// 보통
    Medium,
    /// 높음
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// 분석 패스 하나가 산출하는 트레이드 추천.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecommendation {
    /// 추천 방향
    pub direction: SignalAction,
    /// 제안 진입가
    pub entry_point: Decimal,
    /// 진입가 산정 사유
    pub entry_reasoning: String,
    /// 익절 목표 (보수적/중간/공격적 3단계)
    pub take_profit_targets: Vec<TakeProfitTarget>,
    /// 손절가
    pub stop_loss: Decimal,
    /// 신뢰도 (0~100)
    pub confidence: u8,
    /// 리스크 수준
    pub risk_level: RiskLevel,
    /// 추천 근거
    pub reasoning: String,
}

impl TradeRecommendation {
    /// 첫 번째(보수적) 목표 기준 손익비를 반환합니다.
    ///
    /// 손절 폭이 0이면 (진입가 == 손절가) `None`을 반환합니다.
    pub fn risk_reward_ratio(&self) -> Option<Decimal> {
        let target = self.take_profit_targets.first()?;
        let risk = (self.entry_point - self.stop_loss).abs();
        if risk.is_zero() {
            return None;
        }
        let reward = (target.price - self.entry_point).abs();
        Some(reward / risk)
    }
}
