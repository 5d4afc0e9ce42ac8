use super::family::PackingFamily;
use super::types::Monotonicity;
use crate::error::{DobbleError, DobbleResult};

/// 패킹의 모든 원에 대한 상대 반지름 계산
///
/// `f(1..=N)`을 평가하고, 감소 함수라면 뒤집어서 항상 작은 원 → 큰 원 순서가 되게 한 뒤,
/// 마지막 값이 `largest_radius`와 정확히 일치하도록 전체를 스케일링합니다.
pub fn compute_radii(
    largest_radius: f64,
    num_circles: usize,
    family: PackingFamily,
) -> DobbleResult<Vec<f64>> {
    if !(largest_radius > 0.0 && largest_radius.is_finite()) {
        return Err(DobbleError::invalid(format!(
            "largest radius must be positive, got {}",
            largest_radius
        )));
    }
    if num_circles == 0 {
        return Err(DobbleError::invalid("a packing needs at least one circle"));
    }

    let mut vals: Vec<f64> = (1..=num_circles).map(|k| family.relative_radius(k)).collect();
    if family.monotonicity() == Monotonicity::Decreasing {
        vals.reverse();
    }

    let ratio = largest_radius / vals[num_circles - 1];
    let mut radii: Vec<f64> = vals.iter().map(|v| v * ratio).collect();
    // 부동소수점 오차 없이 최대 반지름에 고정
    radii[num_circles - 1] = largest_radius;

    Ok(radii)
}

/// [`compute_radii`]의 이름 기반 버전
pub fn compute_radii_by_name(
    largest_radius: f64,
    num_circles: usize,
    packing_type: &str,
) -> DobbleResult<Vec<f64>> {
    let family = PackingFamily::from_name(packing_type)?;
    compute_radii(largest_radius, num_circles, family)
}
