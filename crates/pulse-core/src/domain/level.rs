//! 지지/저항 레벨 도메인 타입.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 레벨 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    /// 지지선
    Support,
    /// 저항선
    Resistance,
}

impl std::fmt::Display for LevelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelKind::Support => write!(f, "SUPPORT"),
            LevelKind::Resistance => write!(f, "RESISTANCE"),
        }
    }
}

/// 지지/저항 레벨.
///
/// 단일 극값에서 출발하여 인접한 극값이 병합될 때마다 `strength`가
/// 증가합니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// 레벨 가격
    pub price: Decimal,
    /// 레벨 유형
    pub kind: LevelKind,
    /// 병합된 극값의 수 (최소 1)
    pub strength: u32,
}

impl PriceLevel {
    /// 단일 극값에서 새 레벨을 생성합니다.
    pub fn new(price: Decimal, kind: LevelKind) -> Self {
        Self {
            price,
            kind,
            strength: 1,
        }
    }

    /// 인접한 극값을 이 레벨에 병합합니다.
    ///
    /// 가격은 기존 가격과 새 가격의 단순 평균으로 대체됩니다
    /// (강도 가중 평균이 아니라 매번 두 값의 평균이므로 병합 순서에
    /// 따라 결과가 달라집니다).
    pub fn merge(&mut self, price: Decimal) {
        self.strength += 1;
        self.price = (self.price + price) / Decimal::from(2);
    }

    /// 지지선인지 확인합니다.
    pub fn is_support(&self) -> bool {
        self.kind == LevelKind::Support
    }

    /// 저항선인지 확인합니다.
    pub fn is_resistance(&self) -> bool {
        self.kind == LevelKind::Resistance
    }
}
