use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchmarkError {
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Closed-form motion of `m x'' + b x' + k x = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassDamperSpringAnalyticalSolution {
    mass: f64,
    b: f64,
    k: f64,
    x0: f64,
    xdot0: f64,
}

impl MassDamperSpringAnalyticalSolution {
    pub fn new(mass: f64, b: f64, k: f64) -> Result<Self, BenchmarkError> {
        for (name, value, positive) in [("mass", mass, true), ("b", b, false), ("k", k, true)] {
            let valid = value.is_finite() && if positive { value > 0.0 } else { value >= 0.0 };
            if !valid {
                return Err(BenchmarkError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            mass,
            b,
            k,
            x0: 0.0,
            xdot0: 0.0,
        })
    }

    pub fn set_initial_conditions(&mut self, x0: f64, xdot0: f64) {
        self.x0 = x0;
        self.xdot0 = xdot0;
    }

    pub fn natural_frequency(&self) -> f64 {
        (self.k / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.b / (2.0 * (self.k * self.mass).sqrt())
    }

    pub fn x(&self, t: f64) -> f64 {
        self.state(t).0
    }

    pub fn xdot(&self, t: f64) -> f64 {
        self.state(t).1
    }

    pub fn xddot(&self, t: f64) -> f64 {
        let (x, xdot) = self.state(t);
        -(self.b * xdot + self.k * x) / self.mass
    }

    /// Position and velocity at time `t`.
    pub fn state(&self, t: f64) -> (f64, f64) {
        let wn = self.natural_frequency();
        let zeta = self.damping_ratio();
        let (x0, v0) = (self.x0, self.xdot0);

        if (zeta - 1.0).abs() < 1e-9 {
            let decay = (-wn * t).exp();
            let c = v0 + wn * x0;
            let x = decay * (x0 + c * t);
            let xdot = decay * (c - wn * (x0 + c * t));
            (x, xdot)
        } else if zeta < 1.0 {
            let wd = wn * (1.0 - zeta * zeta).sqrt();
            let sigma = zeta * wn;
            let a = x0;
            let b = (v0 + sigma * x0) / wd;
            let (sin, cos) = (wd * t).sin_cos();
            let decay = (-sigma * t).exp();
            let x = decay * (a * cos + b * sin);
            let xdot = decay * ((b * wd - sigma * a) * cos - (a * wd + sigma * b) * sin);
            (x, xdot)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -wn * (zeta - root);
            let r2 = -wn * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solution(mass: f64, b: f64, k: f64, x0: f64, v0: f64) -> MassDamperSpringAnalyticalSolution {
        let mut s = MassDamperSpringAnalyticalSolution::new(mass, b, k).unwrap();
        s.set_initial_conditions(x0, v0);
        s
    }

    /// Central-difference check that the closed form satisfies the ODE.
    fn assert_satisfies_ode(s: &MassDamperSpringAnalyticalSolution, t: f64) {
        let h = 1e-5;
        let numeric_velocity = (s.x(t + h) - s.x(t - h)) / (2.0 * h);
        let numeric_acceleration = (s.xdot(t + h) - s.xdot(t - h)) / (2.0 * h);
        assert_relative_eq!(numeric_velocity, s.xdot(t), epsilon = 1e-6);
        assert_relative_eq!(numeric_acceleration, s.xddot(t), epsilon = 1e-5);
    }

    #[test]
    fn undamped_motion_is_a_cosine() {
        let s = solution(2.0, 0.0, 8.0, 0.5, 0.0);
        assert_relative_eq!(s.natural_frequency(), 2.0);
        for t in [0.0, 0.3, 1.7] {
            assert_relative_eq!(s.x(t), 0.5 * (2.0 * t).cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn every_damping_regime_matches_initial_conditions_and_ode() {
        for b in [0.5, 4.0, 10.0] {
            let s = solution(1.0, b, 4.0, 1.0, -0.5);
            assert_relative_eq!(s.x(0.0), 1.0, epsilon = 1e-12);
            assert_relative_eq!(s.xdot(0.0), -0.5, epsilon = 1e-12);
            for t in [0.1, 0.8, 2.5] {
                assert_satisfies_ode(&s, t);
            }
        }
    }

    #[test]
    fn rejects_non_physical_parameters() {
        assert!(MassDamperSpringAnalyticalSolution::new(0.0, 1.0, 1.0).is_err());
        assert!(MassDamperSpringAnalyticalSolution::new(1.0, -1.0, 1.0).is_err());
        assert!(MassDamperSpringAnalyticalSolution::new(1.0, 0.0, f64::INFINITY).is_err());
    }
}
