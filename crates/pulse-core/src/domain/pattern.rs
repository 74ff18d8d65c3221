//! 캔들 패턴 도메인 타입.
//!
//! 패턴은 캔들 시퀀스 내 위치(인덱스)로 식별됩니다. 한 위치가 여러 패턴
//! 규칙에 동시에 매칭될 수 있으며, 매칭된 패턴은 모두 유지됩니다.

use serde::{Deserialize, Serialize};

/// 패턴 방향성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// 강세 (매수 우위)
    Bullish,
    /// 약세 (매도 우위)
    Bearish,
    /// 중립 (방향성 없음)
    Neutral,
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternKind::Bullish => write!(f, "BULLISH"),
            PatternKind::Bearish => write!(f, "BEARISH"),
            PatternKind::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// 감지된 캔들 패턴.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePattern {
    /// 캔들 시퀀스 내 위치
    pub index: usize,
    /// 방향성
    pub kind: PatternKind,
    /// 패턴 이름
    pub name: String,
    /// 패턴 설명
    pub description: String,
    /// 제안 대응 (선택)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trading_action: Option<String>,
}

impl CandlePattern {
    /// 새 패턴을 생성합니다.
    pub fn new(
        index: usize,
        kind: PatternKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            index,
            kind,
            name: name.into(),
            description: description.into(),
            trading_action: None,
        }
    }

    /// 제안 대응을 설정합니다.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.trading_action = Some(action.into());
        self
    }

    /// 강세 패턴인지 확인합니다.
    pub fn is_bullish(&self) -> bool {
        self.kind == PatternKind::Bullish
    }

    /// 약세 패턴인지 확인합니다.
    pub fn is_bearish(&self) -> bool {
        self.kind == PatternKind::Bearish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_builder() {
        let pattern = CandlePattern::new(3, PatternKind::Bullish, "Hammer", "설명")
            .with_action("다음 캔들 확인 후 진입");

        assert_eq!(pattern.index, 3);
        assert!(pattern.is_bullish());
        assert!(pattern.trading_action.is_some());
    }

    #[test]
    fn test_pattern_kind_serde() {
        let json = serde_json::to_string(&PatternKind::Bearish).unwrap();
        assert_eq!(json, r#""bearish""#);
    }
}
