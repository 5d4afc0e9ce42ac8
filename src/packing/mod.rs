//! # 원 패킹 기반 카드 배치
//!
//! 단위 원판 안에 N개의 원을 겹치지 않게 배치한 사전 계산 결과(패킹 테이블)를
//! 조회하고, 패킹 계열(family)의 반지름 생성 함수로 각 원의 상대 반지름을 복원합니다.
//!
//! 좌표와 반지름은 항상 [`Circle`] 쌍으로 묶여 다뤄지므로 `radii[i]`와 `coords[i]`의
//! 인덱스 정합성이 구조적으로 보장됩니다.

pub mod catalog;
pub mod family;
pub mod radii;
pub mod table;
pub mod types;

// 라이브러리 사용자가 편리하게 접근할 수 있도록 주요 구조체들을 공개합니다.
pub use catalog::{CachedCatalog, DirectoryCatalog, MemoryCatalog, PackingCatalog};
pub use family::{FamilySpec, PackingFamily};
pub use radii::{compute_radii, compute_radii_by_name};
pub use types::{Circle, Monotonicity, PackingSolution};
