// src/bindings/macros.rs

/// DobbleResult를 반환하는 Rust 함수용 PyFunction 바인딩 생성 매크로
///
/// 사용법:
/// `create_binding!(파이썬_함수명, Rust_함수_경로, [인자1: 타입1, ...] -> 반환_타입);`
///
/// 예시:
/// `create_binding!(radius_to_pixels, crate::ops::radius_to_pixels, [rel_radius: f64, bg_size: u32] -> u32);`
#[macro_export]
macro_rules! create_binding {
    ($py_fn_name:ident, $rust_fn:path, [$($arg:ident : $ty:ty),* $(,)?] -> $ret:ty) => {
        #[pyo3::prelude::pyfunction]
        pub fn $py_fn_name($($arg: $ty),*) -> pyo3::PyResult<$ret> {
            Ok($rust_fn($($arg),*)?)
        }
    };
}
