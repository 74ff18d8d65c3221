//! 지표 스냅샷.
//!
//! 파생 시리즈(RSI, MACD, 볼린저 밴드 등)는 중간 결과이고, 대시보드는
//! 각 시리즈의 마지막 값만 사용합니다. 이 모듈은 그 "마지막 값 묶음"을
//! 정의합니다. 시리즈가 비어 있으면 해당 필드는 0입니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// MACD 시리즈의 최신 값.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSnapshot {
    /// MACD 라인
    pub macd: Decimal,
    /// 시그널 라인
    pub signal: Decimal,
    /// 히스토그램 (MACD - 시그널)
    pub histogram: Decimal,
}

/// 볼린저 밴드의 최신 값.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerSnapshot {
    /// 상단 밴드
    pub upper: Decimal,
    /// 중간 밴드 (SMA)
    pub middle: Decimal,
    /// 하단 밴드
    pub lower: Decimal,
}

impl BollingerSnapshot {
    /// 밴드 상대 폭을 백분율로 반환합니다: `((upper - lower) / middle) * 100`.
    ///
    /// 중간 밴드가 0이면 (데이터 부족으로 스냅샷이 비어 있는 경우) 0을
    /// 반환합니다.
    pub fn relative_width_pct(&self) -> Decimal {
        if self.middle.is_zero() {
            return Decimal::ZERO;
        }
        (self.upper - self.lower) / self.middle * Decimal::from(100)
    }
}

/// 각 지표 시리즈의 마지막 값을 모은 스냅샷.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// RSI (0~100)
    pub rsi: Decimal,
    /// MACD 스냅샷
    pub macd: MacdSnapshot,
    /// 20기간 SMA
    pub sma20: Decimal,
    /// 50기간 SMA
    pub sma50: Decimal,
    /// 20기간 EMA
    pub ema20: Decimal,
    /// 볼린저 밴드 스냅샷
    pub bollinger: BollingerSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_all_zero() {
        let snapshot = IndicatorSnapshot::default();

        assert_eq!(snapshot.rsi, Decimal::ZERO);
        assert_eq!(snapshot.macd.histogram, Decimal::ZERO);
        assert_eq!(snapshot.bollinger.middle, Decimal::ZERO);
    }

    #[test]
    fn test_relative_width() {
        let bands = BollingerSnapshot {
            upper: dec!(105),
            middle: dec!(100),
            lower: dec!(95),
        };
        assert_eq!(bands.relative_width_pct(), dec!(10));

        // 빈 스냅샷에서는 0으로 나누지 않음
        assert_eq!(BollingerSnapshot::default().relative_width_pct(), Decimal::ZERO);
    }
}
