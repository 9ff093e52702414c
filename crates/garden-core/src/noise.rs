//! Lightweight 2D value noise used by the wander scene.
//!
//! This is lattice value noise (hashed corner values, quintic fade, bilinear
//! lerp), not gradient noise. Output lies roughly in `(-3, 1)` because the
//! signed remainder of the hash keeps its sign.

/// Sample the noise field at `(x, y)`.
pub fn value_noise(x: f64, y: f64) -> f64 {
    let xi = x.floor() as i64;
    let yi = y.floor() as i64;
    let xf = x - xi as f64;
    let yf = y - yi as f64;

    let top_right = hash2(xi + 1, yi + 1);
    let top_left = hash2(xi, yi + 1);
    let bottom_right = hash2(xi + 1, yi);
    let bottom_left = hash2(xi, yi);

    let u = fade(xf);
    let v = fade(yf);

    let top = lerp(top_left, top_right, u);
    let bottom = lerp(bottom_left, bottom_right, u);
    lerp(bottom, top, v)
}

/// Integer lattice hash mapped to `(n % 1024) / 512 - 1`.
pub fn hash2(x: i64, y: i64) -> f64 {
    let mut n = x
        .wrapping_mul(374_761_393)
        .wrapping_add(y.wrapping_mul(668_265_263));
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    n ^= n >> 16;
    (n % 1024) as f64 / 512.0 - 1.0
}

#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
