/// 3x3 neighborhood indexed `[row][col]`; row 0 is `dy = -1`, col 0 is `dx = -1`.
pub type Neighborhood = [[f32; 3]; 3];

/// Evaluate `f(dx, dy)` over the 3x3 neighborhood offsets.
pub fn gather(mut f: impl FnMut(f64, f64) -> f32) -> Neighborhood {
    let mut n = [[0.0; 3]; 3];
    for (row, dy) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
        for (col, dx) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
            n[row][col] = f(dx, dy);
        }
    }
    n
}

/// Sobel gradient `(gx, gy)`.
///
/// Written as paired differences so a flat neighborhood yields exactly zero.
pub fn sobel(n: &Neighborhood) -> (f32, f32) {
    let gx = (n[0][2] - n[0][0]) + 2.0 * (n[1][2] - n[1][0]) + (n[2][2] - n[2][0]);
    let gy = (n[2][0] - n[0][0]) + 2.0 * (n[2][1] - n[0][1]) + (n[2][2] - n[0][2]);
    (gx, gy)
}

/// Euclidean gradient magnitude.
pub fn magnitude(n: &Neighborhood) -> f32 {
    let (gx, gy) = sobel(n);
    (gx * gx + gy * gy).sqrt()
}
