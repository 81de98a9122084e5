//! The read-only parameter bundle consumed by every policy.
//!
//! Parameter files are flat JSON objects mapping names to numbers or strings:
//!
//! ```json
//! {
//!   "agent_behavior": "static",
//!   "launch_date": "01.01.25",
//!   "initial_total_supply": 1000000000,
//!   "avg_token_selling_allocation": 0.3
//! }
//! ```
//!
//! Lookups are by name so that an absent key surfaces as
//! [`TeError::MissingParameter`] naming exactly that key.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{TeError, TeResult};

/// Well-known parameter names.
pub mod keys {
    pub const AGENT_BEHAVIOR: &str = "agent_behavior";
    pub const AVG_TOKEN_SELLING_ALLOCATION: &str = "avg_token_selling_allocation";
    pub const AVG_TOKEN_HOLDING_ALLOCATION: &str = "avg_token_holding_allocation";
    pub const AVG_TOKEN_UTILITY_ALLOCATION: &str = "avg_token_utility_allocation";
    pub const AVG_TOKEN_UTILITY_REMOVAL: &str = "avg_token_utility_removal";

    pub const LAUNCH_DATE: &str = "launch_date";
    pub const INITIAL_TOTAL_SUPPLY: &str = "initial_total_supply";

    pub const INITIAL_LP_TOKEN_ALLOCATION: &str = "initial_lp_token_allocation";
    pub const INITIAL_TOKEN_PRICE: &str = "initial_token_price";
    pub const LP_VOLATILITY: &str = "lp_volatility";

    pub const INCENTIVISATION_MONTHLY_EMISSION: &str = "incentivisation_monthly_emission";
    pub const AIRDROP_MONTHLY_AMOUNT: &str = "airdrop_monthly_amount";
    pub const AIRDROP_MONTHS: &str = "airdrop_months";
    pub const BURN_BUCKET: &str = "burn_bucket";
    pub const PROTOCOL_BUCKET_BURN_RATE: &str = "protocol_bucket_burn_rate";

    pub const INITIAL_PRODUCT_USERS: &str = "initial_product_users";
    pub const PRODUCT_USERS_AFTER_10Y: &str = "product_users_after_10y";
    pub const PRODUCT_ADOPTION_VELOCITY: &str = "product_adoption_velocity";
    pub const INITIAL_TOKEN_HOLDERS: &str = "initial_token_holders";
    pub const TOKEN_HOLDERS_AFTER_10Y: &str = "token_holders_after_10y";
    pub const TOKEN_ADOPTION_VELOCITY: &str = "token_adoption_velocity";
    pub const AVG_PRODUCT_USER_REVENUE: &str = "avg_product_user_revenue";

    pub const STAKING_SHARE: &str = "staking_share";
    pub const STAKING_APR: &str = "staking_apr";
    pub const STAKING_REVENUE_SHARE: &str = "staking_revenue_share";

    pub const INITIAL_CASH_BALANCE: &str = "initial_cash_balance";
    pub const BUSINESS_MONTHLY_EXPENDITURE: &str = "business_monthly_expenditure";
}

/// One parameter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// A named parameter bundle.  Read-only once a run starts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.values.insert(key.to_owned(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ── Typed lookups ─────────────────────────────────────────────────────

    /// A required numeric parameter.
    pub fn number(&self, key: &str) -> TeResult<f64> {
        match self.values.get(key) {
            None => Err(TeError::missing(key)),
            Some(ParamValue::Number(v)) => Ok(*v),
            Some(ParamValue::Text(_)) => Err(TeError::Configuration(format!(
                "parameter `{key}` must be numeric"
            ))),
        }
    }

    /// An optional numeric parameter; absent keys yield `default`.
    pub fn number_or(&self, key: &str, default: f64) -> TeResult<f64> {
        if self.contains(key) { self.number(key) } else { Ok(default) }
    }

    /// A required share in `[0, 1]`.
    pub fn fraction(&self, key: &str) -> TeResult<f64> {
        check_fraction(key, self.number(key)?)
    }

    /// An optional share in `[0, 1]`; absent keys yield `default`.
    pub fn fraction_or(&self, key: &str, default: f64) -> TeResult<f64> {
        check_fraction(key, self.number_or(key, default)?)
    }

    /// A required string parameter.
    pub fn text(&self, key: &str) -> TeResult<&str> {
        match self.values.get(key) {
            None => Err(TeError::missing(key)),
            Some(ParamValue::Text(s)) => Ok(s),
            Some(ParamValue::Number(_)) => Err(TeError::Configuration(format!(
                "parameter `{key}` must be a string"
            ))),
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Parse a flat JSON object.
    pub fn from_json_reader<R: Read>(reader: R) -> TeResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(s: &str) -> TeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_path(path: &Path) -> TeResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

fn check_fraction(key: &str, v: f64) -> TeResult<f64> {
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(TeError::Configuration(format!(
            "parameter `{key}` must be a fraction in [0, 1], got {v}"
        )))
    }
}
