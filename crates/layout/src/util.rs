/// Largest char boundary of `s` at or below `index`.
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Robust floating point comparison for measurements.
pub fn floats_fuzzy_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.01;
    (a - b).abs() < EPSILON
}
