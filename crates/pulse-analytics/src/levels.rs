//! 지지/저항 레벨 탐지 모듈.
//!
//! 최근 구간의 저가/고가에서 국소 극값을 찾아 레벨 후보로 삼고, 가까운
//! 같은 종류 후보를 병합한 뒤 강도순 상위 몇 개만 남깁니다.

use pulse_core::{Candle, LevelKind, PriceLevel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 레벨 탐지 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelParams {
    /// 검사할 최근 캔들 수
    pub lookback: usize,
    /// 병합 임계값 (기존 레벨 가격 대비 상대 거리)
    pub merge_threshold: Decimal,
    /// 반환할 최대 레벨 수
    pub max_levels: usize,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            lookback: 20,
            merge_threshold: dec!(0.02),
            max_levels: 5,
        }
    }
}

/// 지지/저항 레벨 탐지기.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelDetector;

impl LevelDetector {
    /// 새 탐지기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 레벨을 탐지합니다.
    ///
    /// 마지막 `lookback`개 캔들에서 양쪽 2개 이웃보다 엄격히 낮은 저가를
    /// 지지로, 엄격히 높은 고가를 저항으로 수집합니다. 지지 전체를 먼저,
    /// 저항 전체를 그 다음에 인덱스 순으로 수집하며, 이 순서대로 병합이
    /// 진행됩니다. 캔들이 `lookback`개 미만이면 빈 벡터를 반환합니다.
    pub fn detect(&self, candles: &[Candle], params: LevelParams) -> Vec<PriceLevel> {
        if candles.len() < params.lookback {
            return Vec::new();
        }

        let recent = &candles[candles.len() - params.lookback..];
        let interior_end = recent.len().saturating_sub(2);
        let mut raw: Vec<PriceLevel> = Vec::new();

        // 국소 저점 (지지)
        for i in 2..interior_end {
            let low = recent[i].low;
            if low < recent[i - 1].low
                && low < recent[i - 2].low
                && low < recent[i + 1].low
                && low < recent[i + 2].low
            {
                raw.push(PriceLevel::new(low, LevelKind::Support));
            }
        }

        // 국소 고점 (저항)
        for i in 2..interior_end {
            let high = recent[i].high;
            if high > recent[i - 1].high
                && high > recent[i - 2].high
                && high > recent[i + 1].high
                && high > recent[i + 2].high
            {
                raw.push(PriceLevel::new(high, LevelKind::Resistance));
            }
        }

        // 가까운 같은 종류 레벨 병합. 기존 레벨의 현재 가격과 비교하므로
        // 수집 순서에 따라 결과가 달라집니다.
        let mut merged: Vec<PriceLevel> = Vec::new();
        for candidate in raw {
            let existing = merged.iter_mut().find(|level| {
                level.kind == candidate.kind
                    && !level.price.is_zero()
                    && ((candidate.price - level.price).abs() / level.price)
                        < params.merge_threshold
            });

            match existing {
                Some(level) => level.merge(candidate.price),
                None => merged.push(candidate),
            }
        }

        // 강도 내림차순 (안정 정렬이므로 동률은 수집 순서 유지)
        merged.sort_by(|a, b| b.strength.cmp(&a.strength));
        merged.truncate(params.max_levels);
        merged
    }
}
