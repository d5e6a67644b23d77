// ABOUTME: Cost descriptor - per-token pricing for a model variant.
// ABOUTME: All arithmetic is exact decimal to keep monetary values drift-free.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Decimal places kept on estimated costs, matching USD micro-cent precision.
const COST_SCALE: u32 = 5;

/// Pricing for one model variant, in USD per `unit_size` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCosts {
    pub input_price: Decimal,
    pub output_price: Decimal,
    pub unit_size: u32,
}

impl ModelCosts {
    /// Create a cost descriptor, validating the pricing invariants.
    pub fn new(input_price: Decimal, output_price: Decimal, unit_size: u32) -> Result<Self, ModelError> {
        let costs = Self {
            input_price,
            output_price,
            unit_size,
        };
        costs.validate()?;
        Ok(costs)
    }

    /// Convenience constructor for the common per-million-token pricing.
    pub fn per_million(input_price: Decimal, output_price: Decimal) -> Result<Self, ModelError> {
        Self::new(input_price, output_price, 1_000_000)
    }

    /// Check the pricing invariants: non-negative prices, non-zero unit.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.input_price < Decimal::ZERO {
            return Err(ModelError::InvalidSpec(format!(
                "input price cannot be negative (got {})",
                self.input_price
            )));
        }
        if self.output_price < Decimal::ZERO {
            return Err(ModelError::InvalidSpec(format!(
                "output price cannot be negative (got {})",
                self.output_price
            )));
        }
        if self.unit_size == 0 {
            return Err(ModelError::InvalidSpec(
                "unit size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Estimate the USD cost of a request.
    ///
    /// Computed as `(input / unit) * input_price + (output / unit) * output_price`
    /// in exact decimal arithmetic, rounded to five decimal places.
    pub fn estimate_cost(&self, input_tokens: i64, output_tokens: i64) -> Result<Decimal, ModelError> {
        if input_tokens < 0 {
            return Err(ModelError::InvalidTokenCount(input_tokens));
        }
        if output_tokens < 0 {
            return Err(ModelError::InvalidTokenCount(output_tokens));
        }

        let unit = Decimal::from(self.unit_size);
        let cost = Decimal::from(input_tokens) * self.input_price / unit
            + Decimal::from(output_tokens) * self.output_price / unit;
        Ok(cost.round_dp(COST_SCALE))
    }
}
