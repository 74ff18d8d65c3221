//! 기술적 지표 모듈.
//!
//! 종가 시리즈에서 대시보드가 쓰는 지표를 계산합니다:
//! - 추세: SMA, EMA, MACD ([`trend`])
//! - 모멘텀: RSI ([`momentum`])
//! - 변동성: 볼린저 밴드 ([`volatility`])
//!
//! 모든 시리즈는 압축 형태로, 값이 정의되는 첫 인덱스부터만 담깁니다.
//! 입력이 부족하면 에러 대신 빈 시리즈를 반환하고, 스냅샷 조립 시 빈
//! 시리즈는 0으로 대체됩니다.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{MomentumCalculator, RsiParams};
pub use trend::{EmaParams, MacdParams, MacdSeries, SmaParams, TrendIndicators};
pub use volatility::{BollingerParams, BollingerSeries, VolatilityIndicators};

use pulse_core::{BollingerSnapshot, IndicatorSnapshot, MacdSnapshot};
use rust_decimal::Decimal;

/// 스냅샷 계산에 쓰는 지표 파라미터 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorParams {
    /// RSI 파라미터
    pub rsi: RsiParams,
    /// 단기 SMA 파라미터
    pub sma_short: SmaParams,
    /// 장기 SMA 파라미터
    pub sma_long: SmaParams,
    /// EMA 파라미터
    pub ema: EmaParams,
    /// MACD 파라미터
    pub macd: MacdParams,
    /// 볼린저 밴드 파라미터
    pub bollinger: BollingerParams,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi: RsiParams::default(),
            sma_short: SmaParams { period: 20 },
            sma_long: SmaParams { period: 50 },
            ema: EmaParams::default(),
            macd: MacdParams::default(),
            bollinger: BollingerParams::default(),
        }
    }
}

impl IndicatorParams {
    /// 스냅샷 필드를 하나라도 채울 수 있는 최소 가격 개수.
    ///
    /// 이보다 짧은 입력에서는 모든 시리즈가 비어 스냅샷이 전부 0이
    /// 됩니다. 계산된 0 값(예: 순하락 구간의 RSI 0)과 "계산 불가"를
    /// 구분하는 기준입니다.
    pub fn min_prices(&self) -> usize {
        (self.rsi.period + 1)
            .min(self.sma_short.period)
            .min(self.sma_long.period)
            .min(self.ema.period)
            .min(self.macd.slow_period)
            .min(self.bollinger.period)
    }
}

/// 지표 계산 퍼사드.
///
/// 추세/모멘텀/변동성 계산기를 묶어 단일 진입점을 제공합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEngine {
    /// 추세 지표
    pub trend: TrendIndicators,
    /// 모멘텀 지표
    pub momentum: MomentumCalculator,
    /// 변동성 지표
    pub volatility: VolatilityIndicators,
}

impl IndicatorEngine {
    /// 새 엔진을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// RSI 시리즈. [`MomentumCalculator::rsi`] 참고.
    pub fn rsi(&self, prices: &[Decimal], params: RsiParams) -> Vec<Decimal> {
        self.momentum.rsi(prices, params)
    }

    /// SMA 시리즈. [`TrendIndicators::sma`] 참고.
    pub fn sma(&self, prices: &[Decimal], params: SmaParams) -> Vec<Decimal> {
        self.trend.sma(prices, params)
    }

    /// EMA 시리즈. [`TrendIndicators::ema`] 참고.
    pub fn ema(&self, prices: &[Decimal], params: EmaParams) -> Vec<Decimal> {
        self.trend.ema(prices, params)
    }

    /// MACD 시리즈. [`TrendIndicators::macd`] 참고.
    pub fn macd(&self, prices: &[Decimal], params: MacdParams) -> MacdSeries {
        self.trend.macd(prices, params)
    }

    /// 볼린저 밴드 시리즈. [`VolatilityIndicators::bollinger_bands`] 참고.
    pub fn bollinger_bands(&self, prices: &[Decimal], params: BollingerParams) -> BollingerSeries {
        self.volatility.bollinger_bands(prices, params)
    }

    /// 최신 값 스냅샷을 계산합니다.
    ///
    /// 모든 시리즈를 계산한 뒤 각 시리즈의 마지막 값만 모읍니다. 빈
    /// 시리즈는 0으로 대체되어 하류 단계가 "근거 없음"으로 취급합니다.
    pub fn snapshot(&self, prices: &[Decimal], params: &IndicatorParams) -> IndicatorSnapshot {
        let macd = self.trend.macd(prices, params.macd);
        let bollinger = self.volatility.bollinger_bands(prices, params.bollinger);

        IndicatorSnapshot {
            rsi: last_or_zero(&self.momentum.rsi(prices, params.rsi)),
            macd: MacdSnapshot {
                macd: last_or_zero(&macd.macd_line),
                signal: last_or_zero(&macd.signal_line),
                histogram: last_or_zero(&macd.histogram),
            },
            sma20: last_or_zero(&self.trend.sma(prices, params.sma_short)),
            sma50: last_or_zero(&self.trend.sma(prices, params.sma_long)),
            ema20: last_or_zero(&self.trend.ema(prices, params.ema)),
            bollinger: BollingerSnapshot {
                upper: last_or_zero(&bollinger.upper),
                middle: last_or_zero(&bollinger.middle),
                lower: last_or_zero(&bollinger.lower),
            },
        }
    }
}

/// 시리즈의 마지막 값, 비어 있으면 0.
fn last_or_zero(series: &[Decimal]) -> Decimal {
    series.last().copied().unwrap_or(Decimal::ZERO)
}
