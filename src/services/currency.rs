use crate::models::Currency;

/// Fixed USD conversion table
const USD_RATES: &[(&str, f64)] = &[("USD", 1.0), ("INR", 83.0), ("EUR", 0.92), ("GBP", 0.79)];

/// Units of `code` per US dollar. Unknown codes are treated as USD.
pub fn usd_rate(code: &str) -> f64 {
    USD_RATES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code.trim()))
        .map(|(_, rate)| *rate)
        .unwrap_or(1.0)
}

impl Currency {
    pub fn usd_rate(&self) -> f64 {
        usd_rate(self.code())
    }

    /// Converts a USD-denominated amount into this currency
    pub fn from_usd(&self, amount_usd: f64) -> f64 {
        amount_usd * self.usd_rate()
    }
}
