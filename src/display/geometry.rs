//! Circle rasterisation by octant symmetry, and fixed-point scaling for value draws.
//!
//! The controller has no circle primitive. A circle is decomposed into point draws:
//! for each offset `a` from 0 upward the arc height is `b = isqrt(r² - a²)` (one pixel
//! lower on the very first step), and the eight mirror images of `(a, b)` are emitted.
//! The walk stops once `a` passes the previous `b`.
//!
//! Filled circles repeat the walk for every radius from `r` down to 1 with a step of
//! two and 2x2 points, which covers the disc with concentric rings.
//!
//! ```rust
//! use t5uic1::display::{circle_points, filled_circle_points};
//!
//! assert_eq!(circle_points(100, 100, 10).len(), 64);
//! assert_eq!(filled_circle_points(100, 100, 5).len(), 72);
//! ```

/// One point draw produced by the circle generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CirclePoint {
    pub x: i32,
    pub y: i32,
    /// Edge length of the square drawn at `(x, y)`
    pub size: u8,
}

/// Points of a circle outline, 8 per step, 1x1 each.
pub fn circle_points(cx: i32, cy: i32, radius: u16) -> Vec<CirclePoint> {
    let mut points = Vec::new();
    octant_walk(&mut points, cx, cy, radius, 1, 1);
    points
}

/// Points of a filled circle: rings from `radius` down to 1, 2x2 points every second step.
pub fn filled_circle_points(cx: i32, cy: i32, radius: u16) -> Vec<CirclePoint> {
    let mut points = Vec::new();
    for ring in (1..=radius).rev() {
        octant_walk(&mut points, cx, cy, ring, 2, 2);
    }
    points
}

fn octant_walk(points: &mut Vec<CirclePoint>, cx: i32, cy: i32, radius: u16, step: i64, size: u8) {
    let r_squared = i64::from(radius) * i64::from(radius);
    let mut a: i64 = 0;
    let mut b: i64 = 0;

    // `a <= b` holds against the previous step's b, so `a <= radius` here
    while a <= b {
        b = (r_squared - a * a).isqrt();
        if a == 0 {
            b -= 1;
        }

        let (a32, b32) = (a as i32, b as i32);
        let offsets = [
            (a32, b32),
            (b32, a32),
            (b32, -a32),
            (a32, -b32),
            (-a32, -b32),
            (-b32, -a32),
            (-b32, a32),
            (-a32, b32),
        ];
        points.extend(offsets.iter().map(|&(dx, dy)| CirclePoint {
            x: cx.saturating_add(dx),
            y: cy.saturating_add(dy),
            size,
        }));

        a += step;
    }
}

/// Scale a real number into the fixed-point integer `draw_float_value` sends.
///
/// `fixed_point(12.34, 2)` is `1234`. Rounds to the nearest integer; NaN maps to 0 and
/// out-of-range values saturate.
pub fn fixed_point(value: f64, fractional_digits: u8) -> i64 {
    (value * 10f64.powi(i32::from(fractional_digits))).round() as i64
}
