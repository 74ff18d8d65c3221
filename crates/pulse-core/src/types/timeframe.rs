//! 차트 타임프레임 정의.
//!
//! 대시보드가 노출하는 시간 간격과 타임프레임별 과거 데이터 조회 기간을
//! 정의합니다.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 차트 타임프레임.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// 1시간봉
    H1,
    /// 4시간봉
    H4,
    /// 일봉
    #[default]
    D1,
}

impl Timeframe {
    /// 간격 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }

    /// 이 타임프레임의 캔들 하나가 차지하는 기간을 반환합니다.
    pub fn candle_duration(&self) -> Duration {
        match self {
            Timeframe::H1 => Duration::hours(1),
            Timeframe::H4 => Duration::hours(4),
            Timeframe::D1 => Duration::days(1),
        }
    }

    /// 이 타임프레임의 초 단위 값을 반환합니다.
    pub fn as_secs(&self) -> i64 {
        self.candle_duration().num_seconds()
    }

    /// 차트를 그릴 때 조회하는 과거 데이터 기간(일)을 반환합니다.
    pub fn lookback_days(&self) -> u32 {
        match self {
            Timeframe::H1 => 1,
            Timeframe::H4 => 7,
            Timeframe::D1 => 90,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    /// 간격 문자열에서 파싱합니다. UI 표기("1H", "4H", "Daily")도 허용합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1h" | "h1" => Ok(Timeframe::H1),
            "4h" | "h4" => Ok(Timeframe::H4),
            "1d" | "d1" | "daily" => Ok(Timeframe::D1),
            _ => Err(format!("Invalid timeframe: {}", s)),
        }
    }
}
