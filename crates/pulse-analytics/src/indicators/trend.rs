//! 추세 지표 모듈.
//!
//! 단순이동평균(SMA), 지수이동평균(EMA), MACD를 계산합니다.
//!
//! 모든 시리즈는 압축 형태입니다. 인덱스 0이 첫 유효 값이고, 원본 가격
//! 인덱스로는 `period - 1`부터 대응합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// SMA 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmaParams {
    /// 계산 기간
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// EMA 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmaParams {
    /// 계산 기간
    pub period: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// MACD 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdParams {
    /// 빠른 EMA 기간
    pub fast_period: usize,
    /// 느린 EMA 기간
    pub slow_period: usize,
    /// 시그널 EMA 기간
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

/// MACD 계산 결과 시리즈.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    /// MACD 라인 (빠른 EMA - 느린 EMA, 각자의 시작점 기준 앞 정렬)
    pub macd_line: Vec<Decimal>,
    /// 시그널 라인 (MACD 라인의 EMA)
    pub signal_line: Vec<Decimal>,
    /// 히스토그램 (MACD 라인 끝부분 - 시그널 라인)
    pub histogram: Vec<Decimal>,
}

/// 추세 지표 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendIndicators;

impl TrendIndicators {
    /// 새 계산기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// SMA 시리즈를 계산합니다.
    ///
    /// 가격이 `period`개 미만이면 빈 시리즈, 그 외에는
    /// `prices.len() - period + 1`개의 윈도우 평균을 반환합니다.
    pub fn sma(&self, prices: &[Decimal], params: SmaParams) -> Vec<Decimal> {
        let period = params.period;
        if period == 0 || prices.len() < period {
            return Vec::new();
        }

        let period_count = Decimal::from(period);
        prices
            .windows(period)
            .map(|window| window.iter().copied().sum::<Decimal>() / period_count)
            .collect()
    }

    /// EMA 시리즈를 계산합니다.
    ///
    /// 첫 값은 처음 `period`개 가격의 SMA로 시드하고, 이후
    /// `k = 2 / (period + 1)` 평활 상수로 이어갑니다. 출력 길이는 SMA와
    /// 같은 `prices.len() - period + 1`개입니다.
    pub fn ema(&self, prices: &[Decimal], params: EmaParams) -> Vec<Decimal> {
        let period = params.period;
        if period == 0 || prices.len() < period {
            return Vec::new();
        }

        let period_count = Decimal::from(period);
        let multiplier = dec!(2) / (period_count + Decimal::ONE);
        let seed = prices[..period].iter().copied().sum::<Decimal>() / period_count;

        let mut series = Vec::with_capacity(prices.len() - period + 1);
        series.push(seed);
        let mut prev = seed;
        for price in &prices[period..] {
            let ema = *price * multiplier + prev * (Decimal::ONE - multiplier);
            series.push(ema);
            prev = ema;
        }

        series
    }

    /// MACD 시리즈를 계산합니다.
    ///
    /// MACD 라인은 빠른/느린 EMA를 앞에서부터 짝지어 뺀 값입니다. 두 EMA는
    /// 서로 다른 가격 인덱스에서 시작하므로 이 짝짓기에는 의도된 시차가
    /// 있습니다. 히스토그램은 MACD 라인의 끝 `signal_line.len()`개를
    /// 시그널 라인과 맞춰 뺀 값입니다.
    pub fn macd(&self, prices: &[Decimal], params: MacdParams) -> MacdSeries {
        let fast = self.ema(
            prices,
            EmaParams {
                period: params.fast_period,
            },
        );
        let slow = self.ema(
            prices,
            EmaParams {
                period: params.slow_period,
            },
        );

        let macd_line: Vec<Decimal> = fast
            .iter()
            .zip(slow.iter())
            .map(|(fast_value, slow_value)| fast_value - slow_value)
            .collect();

        let signal_line = self.ema(
            &macd_line,
            EmaParams {
                period: params.signal_period,
            },
        );

        // 시그널 라인은 항상 MACD 라인보다 짧거나 같음
        let offset = macd_line.len() - signal_line.len();
        let histogram: Vec<Decimal> = signal_line
            .iter()
            .enumerate()
            .map(|(i, signal_value)| macd_line[offset + i] - signal_value)
            .collect();

        MacdSeries {
            macd_line,
            signal_line,
            histogram,
        }
    }
}
