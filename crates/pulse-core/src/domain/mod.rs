//! 시장 분석을 위한 도메인 모델.

mod alert;
mod candle;
mod level;
mod pattern;
mod recommendation;
mod sentiment;
mod signal;
mod snapshot;

pub use alert::*;
pub use candle::*;
pub use level::*;
pub use pattern::*;
pub use recommendation::*;
pub use sentiment::*;
pub use signal::*;
pub use snapshot::*;
