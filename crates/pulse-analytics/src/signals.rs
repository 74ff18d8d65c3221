//! 매매 신호 생성 모듈.
//!
//! 최신 지표 스냅샷에 고정된 규칙 목록을 적용합니다. RSI 극단값과 MACD
//! 교차를 보며, 아무 규칙도 발화하지 않으면 관망 신호 하나로
//! 퇴화합니다.

use pulse_core::{IndicatorSnapshot, SignalConfidence, TradeSignal};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 관망 신호에 쓰는 사유.
const NO_SIGNAL_REASON: &str = "No strong signals detected";

/// 매매 신호 생성기.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator;

impl SignalGenerator {
    /// 새 생성기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 스냅샷에서 신호 목록을 생성합니다.
    ///
    /// 규칙은 RSI, MACD 순서로 평가되고 지표마다 최대 한 개의 신호가
    /// 나옵니다. 스냅샷 값만 보고 평가하므로, 계산된 RSI 0(순하락 구간)도
    /// 과매도 매수로 발화합니다. 지표가 하나도 계산될 수 없는 길이의
    /// 입력은 엔진이 이 단계 대신 [`Self::no_evidence`]로 퇴화시킵니다.
    pub fn generate(&self, snapshot: &IndicatorSnapshot) -> Vec<TradeSignal> {
        let mut signals = Vec::new();

        if let Some(signal) = self.rsi_signal(snapshot) {
            signals.push(signal);
        }
        if let Some(signal) = self.macd_signal(snapshot) {
            signals.push(signal);
        }

        if signals.is_empty() {
            signals.push(TradeSignal::hold(NO_SIGNAL_REASON));
        }

        signals
    }

    /// 근거 없음 관망 신호를 생성합니다.
    ///
    /// 지표가 하나도 계산되지 않은 (입력이 너무 짧은) 분석 패스에서
    /// 신호 목록 대신 쓰입니다.
    pub fn no_evidence(&self) -> TradeSignal {
        TradeSignal::hold(NO_SIGNAL_REASON)
    }

    /// RSI 극단값 규칙: 30 미만이면 과매도 매수, 70 초과면 과매수 매도.
    fn rsi_signal(&self, snapshot: &IndicatorSnapshot) -> Option<TradeSignal> {
        if snapshot.rsi < dec!(30) {
            Some(TradeSignal::buy(
                SignalConfidence::High,
                "RSI",
                "RSI indicates oversold conditions",
            ))
        } else if snapshot.rsi > dec!(70) {
            Some(TradeSignal::sell(
                SignalConfidence::High,
                "RSI",
                "RSI indicates overbought conditions",
            ))
        } else {
            None
        }
    }

    /// MACD 교차 규칙: 히스토그램 부호와 라인 위치가 일치할 때만 발화.
    fn macd_signal(&self, snapshot: &IndicatorSnapshot) -> Option<TradeSignal> {
        let macd = &snapshot.macd;
        if macd.histogram > Decimal::ZERO && macd.macd > macd.signal {
            Some(TradeSignal::buy(
                SignalConfidence::Medium,
                "MACD",
                "Bullish MACD crossover detected",
            ))
        } else if macd.histogram < Decimal::ZERO && macd.macd < macd.signal {
            Some(TradeSignal::sell(
                SignalConfidence::Medium,
                "MACD",
                "Bearish MACD crossover detected",
            ))
        } else {
            None
        }
    }
}
