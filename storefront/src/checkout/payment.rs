//! UPI payment links

use crate::core::UpiConfig;
use crate::utils::round_money;
use reqwest::Url;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

/// Build a `upi://pay` deep link for `amount`
pub fn upi_payment_link(upi: &UpiConfig, amount: Decimal) -> AppResult<String> {
    let amount = format!("{:.2}", round_money(amount));
    let url = Url::parse_with_params(
        "upi://pay",
        &[
            ("pa", upi.payee_address.as_str()),
            ("pn", upi.payee_name.as_str()),
            ("cu", upi.currency.as_str()),
            ("am", amount.as_str()),
        ],
    )
    .map_err(|e| AppError::internal(format!("Failed to build UPI link: {}", e)))?;
    Ok(url.into())
}
