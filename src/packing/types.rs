use super::family::PackingFamily;
use super::radii::compute_radii;
use crate::error::{DobbleError, DobbleResult};

/// 반지름 생성 함수 출력의 자연 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
}

/// 정규화 좌표계([-1, 1]²)의 원 하나
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: (f64, f64),
    pub radius: f64,
}

/// 패킹 테이블에서 읽어온 (계열, N) 하나의 해
///
/// `centers`는 작은 원부터 큰 원 순서로 저장되어 있어야 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingSolution {
    pub family: PackingFamily,
    pub centers: Vec<(f64, f64)>,
    pub largest_radius: f64,
}

impl PackingSolution {
    pub fn num_circles(&self) -> usize {
        self.centers.len()
    }

    /// 요청한 원 개수와 실제 중심 좌표 개수가 다르면 실패
    pub fn check_count(&self, num_circles: usize) -> DobbleResult<()> {
        if self.num_circles() != num_circles {
            return Err(DobbleError::CircleCount {
                family: self.family.to_string(),
                expected: num_circles,
                found: self.num_circles(),
            });
        }
        Ok(())
    }

    /// 중심 좌표와 복원된 반지름을 인덱스별로 묶습니다.
    pub fn circles(&self) -> DobbleResult<Vec<Circle>> {
        let radii = compute_radii(self.largest_radius, self.num_circles(), self.family)?;
        Ok(self
            .centers
            .iter()
            .zip(radii)
            .map(|(&center, radius)| Circle { center, radius })
            .collect())
    }
}
