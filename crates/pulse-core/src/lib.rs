//! # Pulse Core
//!
//! 마켓 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 분석 파이프라인 전반에서 사용되는 기본 타입을 제공합니다:
//! - 캔들 및 시세 데이터 구조체
//! - 지표 스냅샷
//! - 캔들 패턴, 지지/저항 레벨, 매매 신호
//! - 트레이드 추천 및 알림 레코드
//! - 타임프레임 정의
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
