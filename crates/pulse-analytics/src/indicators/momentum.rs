//! 모멘텀 지표 모듈.
//!
//! RSI(상대강도지수)를 계산합니다. 고정 윈도우의 단순 평균 상승/하락을
//! 사용하는 변형이며, Wilder 지수 평활은 사용하지 않습니다.

use rust_decimal::Decimal;

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsiParams {
    /// 계산 기간
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 모멘텀 지표 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentumCalculator;

impl MomentumCalculator {
    /// 새 계산기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// RSI 시리즈를 계산합니다.
    ///
    /// 각 값은 직전 `period`개 가격 변화의 단순 평균 상승분과 하락분으로
    /// 구합니다. 평균 하락이 0이면 100입니다.
    ///
    /// 가격이 `period + 1`개 미만이면 빈 시리즈를 반환합니다. 그 외에는
    /// `prices.len() - period`개의 값이 나옵니다.
    pub fn rsi(&self, prices: &[Decimal], params: RsiParams) -> Vec<Decimal> {
        let period = params.period;
        if period == 0 || prices.len() <= period {
            return Vec::new();
        }

        // 전일 대비 변화량
        let changes: Vec<Decimal> = prices.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let period_count = Decimal::from(period);
        let hundred = Decimal::ONE_HUNDRED;

        let mut series = Vec::with_capacity(changes.len() - period + 1);
        for window in changes.windows(period) {
            let mut gain_sum = Decimal::ZERO;
            let mut loss_sum = Decimal::ZERO;
            for change in window {
                if *change > Decimal::ZERO {
                    gain_sum += *change;
                } else if *change < Decimal::ZERO {
                    loss_sum += change.abs();
                }
            }

            let avg_loss = loss_sum / period_count;
            if avg_loss.is_zero() {
                series.push(hundred);
                continue;
            }

            let avg_gain = gain_sum / period_count;
            let rs = avg_gain / avg_loss;
            series.push(hundred - hundred / (Decimal::ONE + rs));
        }

        series
    }
}
