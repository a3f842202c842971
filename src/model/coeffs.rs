/// Lennard-Jones 12-6 parameters for one pair of atom types.
///
/// `epsilon` is the well depth, `sigma` the particle size, and `cutoff`
/// the optional interaction range appended to the emitted `pair_coeff`
/// line when present.
#[derive(Debug, Clone, PartialEq)]
pub struct LjParams {
    pub epsilon: f64,
    pub sigma: f64,
    pub cutoff: Option<f64>,
}

impl LjParams {
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self {
            epsilon,
            sigma,
            cutoff: None,
        }
    }

    pub fn with_cutoff(epsilon: f64, sigma: f64, cutoff: f64) -> Self {
        Self {
            epsilon,
            sigma,
            cutoff: Some(cutoff),
        }
    }

    /// Converts raw 12-6 `A`/`B` coefficients (`A/r¹² − B/r⁶`) to the
    /// epsilon/sigma form: `epsilon = B²/(4A)`, `sigma = (B/A)^(1/6)`.
    ///
    /// A degenerate sigma of zero is replaced with 1.0 so downstream
    /// mixing rules never divide by zero.
    pub fn from_ab(a: f64, b: f64) -> Self {
        if a == 0.0 {
            return Self::new(0.0, 1.0);
        }
        let epsilon = b * b / (4.0 * a);
        let mut sigma = (b / a).powf(1.0 / 6.0);
        if sigma == 0.0 {
            sigma = 1.0;
        }
        Self::new(epsilon, sigma)
    }
}

/// Pair interaction coefficients scoped to two atom type tags.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCoeff {
    pub type_i: String,
    pub type_j: String,
    /// Pair style name inserted before the parameters, for hybrid styles.
    pub style: Option<String>,
    pub params: LjParams,
}

impl PairCoeff {
    pub fn new(type_i: impl Into<String>, type_j: impl Into<String>, params: LjParams) -> Self {
        Self {
            type_i: type_i.into(),
            type_j: type_j.into(),
            style: None,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ab_recovers_epsilon_and_sigma() {
        // A = 4 eps s^12, B = 4 eps s^6
        let eps = 0.6;
        let sigma: f64 = 3.0;
        let a = 4.0 * eps * sigma.powi(12);
        let b = 4.0 * eps * sigma.powi(6);
        let lj = LjParams::from_ab(a, b);
        assert!((lj.epsilon - eps).abs() < 1e-12);
        assert!((lj.sigma - sigma).abs() < 1e-12);
        assert_eq!(lj.cutoff, None);
    }

    #[test]
    fn from_ab_guards_degenerate_sigma() {
        let lj = LjParams::from_ab(1.0, 0.0);
        assert_eq!(lj.epsilon, 0.0);
        assert_eq!(lj.sigma, 1.0);
    }

    #[test]
    fn from_ab_guards_zero_repulsion() {
        let lj = LjParams::from_ab(0.0, 0.0);
        assert_eq!(lj.epsilon, 0.0);
        assert_eq!(lj.sigma, 1.0);
    }
}
