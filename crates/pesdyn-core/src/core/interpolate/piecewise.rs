/// Polynomial pieces of degree at most three joined at increasing knots.
///
/// On the interval `[knots[i], knots[i + 1]]` the value is
/// `c[0] + c[1]·t + c[2]·t² + c[3]·t³` with `t = x − knots[i]` and
/// `c = coefficients[i]`. Points outside the knot range are extrapolated with the
/// first or last piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial {
    knots: Vec<f64>,
    coefficients: Vec<[f64; 4]>,
}

impl PiecewisePolynomial {
    /// Callers guarantee at least two strictly increasing knots and one
    /// coefficient row per interval.
    pub(crate) fn from_parts(knots: Vec<f64>, coefficients: Vec<[f64; 4]>) -> Self {
        debug_assert!(knots.len() >= 2);
        debug_assert_eq!(knots.len(), coefficients.len() + 1);
        Self {
            knots,
            coefficients,
        }
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn coefficients(&self) -> &[[f64; 4]] {
        &self.coefficients
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Index of the piece used to evaluate `x`.
    pub fn interval_index(&self, x: f64) -> usize {
        let last = self.coefficients.len() - 1;
        self.knots
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(last)
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let i = self.interval_index(x);
        let t = x - self.knots[i];
        let [c0, c1, c2, c3] = self.coefficients[i];
        c0 + t * (c1 + t * (c2 + t * c3))
    }

    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    pub fn derivative(&self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .map(|&[_, c1, c2, c3]| [c1, 2.0 * c2, 3.0 * c3, 0.0])
            .collect();
        Self {
            knots: self.knots.clone(),
            coefficients,
        }
    }
}
