//! Business cash-flow bookkeeping.

use te_core::{Params, TeResult, keys};

use crate::BusinessAssumptions;

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct BusinessTerms {
    /// USD spent every month.
    pub monthly_expenditure: f64,
}

impl BusinessTerms {
    pub fn from_params(params: &Params) -> TeResult<Self> {
        Ok(Self {
            monthly_expenditure: params.number_or(keys::BUSINESS_MONTHLY_EXPENDITURE, 0.0)?,
        })
    }

    /// Advance `prev` by one month of revenue, expenditure and buyback spend.
    pub fn advance(&self, prev: &BusinessAssumptions, revenue: f64, buyback_usd: f64) -> BusinessAssumptions {
        BusinessAssumptions {
            cash_balance:    prev.cash_balance + revenue - self.monthly_expenditure - buyback_usd,
            revenue,
            expenditures:    self.monthly_expenditure,
            buyback_usd,
            buyback_usd_cum: prev.buyback_usd_cum + buyback_usd,
        }
    }
}
