//! User adoption.
//!
//! Product users and token holders each follow a logistic curve that starts
//! at an initial value and reaches a target after ten years:
//!
//! ```text
//! L(m)     = 1 / (1 + exp(-velocity × (m − 60) / 12))
//! value(m) = initial + (target − initial) × (L(m) − L(0)) / (L(120) − L(0))
//! ```
//!
//! `m` is the month since launch.  Higher velocities give a steeper S-curve
//! around the five-year mark.  Past ten years the curve keeps saturating
//! towards slightly above the target.

use te_core::{Params, TeError, TeResult, Timestep, keys};

use crate::UserAdoption;

const TEN_YEARS: f64 = 120.0;
const MIDPOINT: f64 = 60.0;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AdoptionCurve {
    pub initial:   f64,
    pub after_10y: f64,
    pub velocity:  f64,
}

impl AdoptionCurve {
    fn from_params(params: &Params, initial: &str, after: &str, velocity: &str) -> TeResult<Self> {
        let initial = params.number_or(initial, 0.0)?;
        let after_10y = params.number_or(after, initial)?;
        let v = params.number_or(velocity, 1.0)?;
        if v <= 0.0 {
            return Err(TeError::Configuration(format!("{velocity} must be positive, got {v}")));
        }
        Ok(Self { initial, after_10y, velocity: v })
    }

    fn logistic(&self, month: f64) -> f64 {
        1.0 / (1.0 + (-self.velocity * (month - MIDPOINT) / 12.0).exp())
    }

    /// The curve's value `month` months after launch.
    pub fn at(&self, month: u32) -> f64 {
        let start = self.logistic(0.0);
        let span = self.logistic(TEN_YEARS) - start;
        let progress = (self.logistic(month as f64) - start) / span;
        self.initial + (self.after_10y - self.initial) * progress
    }
}

/// Both adoption curves plus the revenue each product user brings in.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AdoptionModel {
    pub product_users:    AdoptionCurve,
    pub token_holders:    AdoptionCurve,
    /// USD per user per month.
    pub revenue_per_user: f64,
}

impl AdoptionModel {
    /// Every adoption parameter is optional.  Without them adoption and
    /// revenue stay at zero.
    pub fn from_params(params: &Params) -> TeResult<Self> {
        Ok(Self {
            product_users: AdoptionCurve::from_params(
                params,
                keys::INITIAL_PRODUCT_USERS,
                keys::PRODUCT_USERS_AFTER_10Y,
                keys::PRODUCT_ADOPTION_VELOCITY,
            )?,
            token_holders: AdoptionCurve::from_params(
                params,
                keys::INITIAL_TOKEN_HOLDERS,
                keys::TOKEN_HOLDERS_AFTER_10Y,
                keys::TOKEN_ADOPTION_VELOCITY,
            )?,
            revenue_per_user: params.number_or(keys::AVG_PRODUCT_USER_REVENUE, 0.0)?,
        })
    }

    pub fn at(&self, timestep: Timestep) -> UserAdoption {
        let month = timestep.months_since_launch();
        let product_users = self.product_users.at(month);
        UserAdoption {
            product_users,
            token_holders: self.token_holders.at(month),
            product_revenue: product_users * self.revenue_per_user,
        }
    }
}
