//! Closed-form damped harmonic oscillator.
//!
//! Coefficients are derived once for a fixed timestep, angular frequency and
//! damping ratio, after which each update is four multiply-adds. The three
//! regimes (over-, critically and under-damped) use the analytic solution of
//! `x'' + 2ζωx' + ω²x = ω²·target` over one step, so the filter is stable for
//! any positive frequency and damping.

/// Per-axis spring coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pos_pos: f64,
    pos_vel: f64,
    vel_pos: f64,
    vel_vel: f64,
}

impl Spring {
    /// Precompute coefficients for a step of `delta_time` seconds.
    ///
    /// `angular_frequency` sets stiffness, `damping_ratio` shapes the
    /// response: below 1 oscillates, 1 is critical, above 1 creeps in without
    /// overshoot. Negative inputs are treated as zero; a zero frequency gives
    /// the identity spring (nothing moves).
    pub fn new(delta_time: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let omega = angular_frequency.max(0.0);
        let zeta = damping_ratio.max(0.0);

        if omega < f64::EPSILON {
            return Self {
                pos_pos: 1.0,
                pos_vel: 0.0,
                vel_pos: 0.0,
                vel_vel: 1.0,
            };
        }

        if zeta > 1.0 + f64::EPSILON {
            // over-damped
            let za = -omega * zeta;
            let zb = omega * (zeta * zeta - 1.0).sqrt();
            let z1 = za - zb;
            let z2 = za + zb;
            let e1 = (z1 * delta_time).exp();
            let e2 = (z2 * delta_time).exp();
            let inv_two_zb = 1.0 / (2.0 * zb);
            let e1_over_two_zb = e1 * inv_two_zb;
            let e2_over_two_zb = e2 * inv_two_zb;
            let z1e1_over_two_zb = z1 * e1_over_two_zb;
            let z2e2_over_two_zb = z2 * e2_over_two_zb;
            Self {
                pos_pos: e1_over_two_zb * z2 - z2e2_over_two_zb + e2,
                pos_vel: -e1_over_two_zb + e2_over_two_zb,
                vel_pos: (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2,
                vel_vel: -z1e1_over_two_zb + z2e2_over_two_zb,
            }
        } else if zeta < 1.0 - f64::EPSILON {
            // under-damped
            let omega_zeta = omega * zeta;
            let alpha = omega * (1.0 - zeta * zeta).sqrt();
            let exp_term = (-omega_zeta * delta_time).exp();
            let cos_term = (alpha * delta_time).cos();
            let sin_term = (alpha * delta_time).sin();
            let inv_alpha = 1.0 / alpha;
            let exp_sin = exp_term * sin_term;
            let exp_cos = exp_term * cos_term;
            let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term * inv_alpha;
            Self {
                pos_pos: exp_cos + exp_omega_zeta_sin_over_alpha,
                pos_vel: exp_sin * inv_alpha,
                vel_pos: -exp_sin * alpha - omega_zeta * exp_omega_zeta_sin_over_alpha,
                vel_vel: exp_cos - exp_omega_zeta_sin_over_alpha,
            }
        } else {
            // critically damped
            let exp_term = (-omega * delta_time).exp();
            let time_exp = delta_time * exp_term;
            let time_exp_freq = time_exp * omega;
            Self {
                pos_pos: time_exp_freq + exp_term,
                pos_vel: time_exp,
                vel_pos: -omega * time_exp_freq,
                vel_vel: -time_exp_freq + exp_term,
            }
        }
    }

    /// Advance one step toward `equilibrium`, returning `(position, velocity)`.
    #[inline]
    pub fn update(&self, position: f64, velocity: f64, equilibrium: f64) -> (f64, f64) {
        let offset = position - equilibrium;
        let new_position = offset * self.pos_pos + velocity * self.pos_vel + equilibrium;
        let new_velocity = offset * self.vel_pos + velocity * self.vel_vel;
        (new_position, new_velocity)
    }
}

/// Frequency/damping pair shared by every follower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringTuning {
    pub frequency: f64,
    pub damping: f64,
}

impl SpringTuning {
    /// Spring for one fixed simulation step.
    pub fn spring(&self, delta_time: f64) -> Spring {
        Spring::new(delta_time, self.frequency, self.damping)
    }
}
