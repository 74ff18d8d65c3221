//! 변동성 지표 모듈.
//!
//! 볼린저 밴드를 계산합니다. 표준편차는 모집단 분산(기간으로 나눔)을
//! 사용합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 볼린저 밴드 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerParams {
    /// 계산 기간
    pub period: usize,
    /// 표준편차 배수
    pub std_dev_multiplier: Decimal,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: dec!(2.0),
        }
    }
}

/// 볼린저 밴드 시리즈.
///
/// 세 밴드는 항상 같은 길이입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BollingerSeries {
    /// 상단 밴드 (중간 + 배수 x 표준편차)
    pub upper: Vec<Decimal>,
    /// 중간 밴드 (SMA)
    pub middle: Vec<Decimal>,
    /// 하단 밴드 (중간 - 배수 x 표준편차)
    pub lower: Vec<Decimal>,
}

impl BollingerSeries {
    /// 시리즈 길이를 반환합니다.
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// 시리즈가 비었는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// 변동성 지표 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolatilityIndicators;

impl VolatilityIndicators {
    /// 새 계산기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 볼린저 밴드 시리즈를 계산합니다.
    ///
    /// 각 윈도우마다 중간 밴드는 평균, 상단/하단 밴드는
    /// `평균 +- 배수 x 모집단 표준편차`입니다. 가격이 `period`개 미만이면
    /// 빈 시리즈를 반환합니다.
    pub fn bollinger_bands(&self, prices: &[Decimal], params: BollingerParams) -> BollingerSeries {
        let period = params.period;
        if period == 0 || prices.len() < period {
            return BollingerSeries::default();
        }

        let period_count = Decimal::from(period);
        let capacity = prices.len() - period + 1;
        let mut upper = Vec::with_capacity(capacity);
        let mut middle = Vec::with_capacity(capacity);
        let mut lower = Vec::with_capacity(capacity);

        for window in prices.windows(period) {
            let mean = window.iter().copied().sum::<Decimal>() / period_count;
            let variance = window
                .iter()
                .map(|price| {
                    let diff = *price - mean;
                    diff * diff
                })
                .sum::<Decimal>()
                / period_count;
            let deviation = params.std_dev_multiplier * self.sqrt_decimal(variance);

            upper.push(mean + deviation);
            middle.push(mean);
            lower.push(mean - deviation);
        }

        BollingerSeries {
            upper,
            middle,
            lower,
        }
    }

    /// Decimal 제곱근 계산 (Newton-Raphson 방법).
    ///
    /// Decimal 타입에는 제곱근 함수가 없으므로 직접 근사합니다.
    fn sqrt_decimal(&self, value: Decimal) -> Decimal {
        if value <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut x = value;
        let two = dec!(2);

        // 10회 반복이면 충분한 정밀도
        for _ in 0..10 {
            x = (x + value / x) / two;
        }

        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_bands_constant_prices_collapse() {
        let volatility = VolatilityIndicators::new();
        let prices = vec![dec!(100); 25];

        let series = volatility.bollinger_bands(&prices, BollingerParams::default());
        assert_eq!(series.len(), 6);
        for i in 0..series.len() {
            assert_eq!(series.middle[i], dec!(100));
            assert_eq!(series.upper[i], dec!(100));
            assert_eq!(series.lower[i], dec!(100));
        }
    }

    #[test]
    fn test_bollinger_bands_known_window() {
        let volatility = VolatilityIndicators::new();
        // 평균 3, 모집단 분산 ((2-3)^2 + (4-3)^2) / 2 = 1
        let prices = vec![dec!(2), dec!(4)];
        let params = BollingerParams {
            period: 2,
            std_dev_multiplier: dec!(2.0),
        };

        let series = volatility.bollinger_bands(&prices, params);
        assert_eq!(series.len(), 1);
        assert_eq!(series.middle[0], dec!(3));
        assert_eq!(series.upper[0].round_dp(6), dec!(5));
        assert_eq!(series.lower[0].round_dp(6), dec!(1));
    }

    #[test]
    fn test_bollinger_bands_population_variance() {
        let volatility = VolatilityIndicators::new();
        // 평균 3, 모집단 분산 (4 + 4 + 4 + 4) / 4 = 4 -> 표준편차 2
        let prices = vec![dec!(1), dec!(1), dec!(5), dec!(5)];
        let params = BollingerParams {
            period: 4,
            std_dev_multiplier: dec!(1.0),
        };

        let series = volatility.bollinger_bands(&prices, params);
        assert_eq!(series.middle[0], dec!(3));
        assert_eq!(series.upper[0].round_dp(6), dec!(5));
        assert_eq!(series.lower[0].round_dp(6), dec!(1));
    }

    #[test]
    fn test_bollinger_bands_insufficient_data() {
        let volatility = VolatilityIndicators::new();
        let prices = vec![dec!(100); 10];

        let series = volatility.bollinger_bands(&prices, BollingerParams::default());
        assert!(series.is_empty());
        assert!(series.upper.is_empty());
        assert!(series.lower.is_empty());
    }

    #[test]
    fn test_sqrt_decimal_converges() {
        let volatility = VolatilityIndicators::new();

        assert_eq!(volatility.sqrt_decimal(dec!(0)), dec!(0));
        assert_eq!(volatility.sqrt_decimal(dec!(-4)), dec!(0));
        assert_eq!(volatility.sqrt_decimal(dec!(1)), dec!(1));
        assert_eq!(volatility.sqrt_decimal(dec!(4)).round_dp(10), dec!(2));
        assert_eq!(volatility.sqrt_decimal(dec!(144)).round_dp(10), dec!(12));
        assert_eq!(
            volatility.sqrt_decimal(dec!(2)).round_dp(6),
            dec!(1.414214)
        );
    }
}
