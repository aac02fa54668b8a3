//! 2x3 affine transforms for rotation about a pivot.
//!
//! The matrix maps source coordinates to destination coordinates:
//!
//! ```text
//! | a  b  tx |   | x |
//! | c  d  ty | * | y |
//!                | 1 |
//! ```

/// A 2x3 affine transform stored row-major as `[a, b, tx, c, d, ty]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    m: [f64; 6],
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: AffineTransform = AffineTransform {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Build a transform from raw coefficients.
    pub fn from_coefficients(m: [f64; 6]) -> Self {
        Self { m }
    }

    /// Rotation by `angle_degrees` about `center`, scaled by `scale`.
    ///
    /// Positive angles rotate counter-clockwise as displayed (y axis down):
    ///
    /// ```text
    /// |  alpha  beta  (1 - alpha) * cx - beta * cy |
    /// | -beta   alpha  beta * cx + (1 - alpha) * cy |
    /// ```
    ///
    /// with `alpha = scale * cos(angle)` and `beta = scale * sin(angle)`.
    pub fn rotation(center: (f64, f64), angle_degrees: f64, scale: f64) -> Self {
        let angle = angle_degrees.to_radians();
        let alpha = scale * angle.cos();
        let beta = scale * angle.sin();

        let tx = (1.0 - alpha) * center.0 - beta * center.1;
        let ty = beta * center.0 + (1.0 - alpha) * center.1;

        Self {
            m: [alpha, beta, tx, -beta, alpha, ty],
        }
    }

    /// Shift the translation terms by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.m[2] += dx;
        self.m[5] += dy;
    }

    /// Raw coefficients `[a, b, tx, c, d, ty]`.
    pub fn coefficients(&self) -> [f64; 6] {
        self.m
    }

    /// Uniform scale of the linear part (row norm of the first row).
    pub fn scale(&self) -> f64 {
        self.m[0].hypot(self.m[1])
    }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m[0] * x + self.m[1] * y + self.m[2],
            self.m[3] * x + self.m[4] * y + self.m[5],
        )
    }

    /// Inverse transform.
    ///
    /// A singular matrix yields the all-zero transform rather than NaNs.
    pub fn inverse(&self) -> Self {
        let [a, b, c, d, e, f] = self.m;

        let determinant = a * e - b * d;
        let inv_det = if determinant != 0.0 {
            1.0 / determinant
        } else {
            0.0
        };

        let new_a = e * inv_det;
        let new_b = -b * inv_det;
        let new_d = -d * inv_det;
        let new_e = a * inv_det;
        let new_c = -(new_a * c + new_b * f);
        let new_f = -(new_d * c + new_e * f);

        Self {
            m: [new_a, new_b, new_c, new_d, new_e, new_f],
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
