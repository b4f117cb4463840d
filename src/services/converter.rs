use thiserror::Error;

use crate::services::currency::{Currency, CurrencyTable};
use crate::services::format::{format_amount, round_amount};
use crate::services::rate_provider::RateError;
use crate::state::AppState;

/// Why a conversion message could not be served. The first five variants are
/// user mistakes and render verbatim in the reply; `Rate` wraps quote-service
/// faults and renders as a generic apology.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Неверное число параметров.")]
    BadArgumentCount,
    #[error("Валюта конвертации не может совпадать с исходной валютой.")]
    SameCurrency,
    #[error("Неверная исходная валюта.")]
    UnknownSourceCurrency,
    #[error("Неверная валюта конвертации.")]
    UnknownTargetCurrency,
    #[error("Введена неверная сумма.")]
    BadAmount,
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// A validated conversion request: two distinct known currencies and a
/// parsed amount.
#[derive(Debug)]
pub struct ConversionRequest<'a> {
    pub source: &'a Currency,
    pub target: &'a Currency,
    pub amount: f64,
}

/// Splits a raw message into `<source> <target> <amount>` and validates each
/// field, failing on the first broken rule.
///
/// The split is on single spaces and keeps empty tokens, so doubled or
/// trailing spaces count against the three-token rule. The same-currency
/// check compares the raw tokens before any table lookup. The amount must
/// be finite: `inf` and `NaN` parse as `f64` but are not valid amounts.
pub fn parse_request<'a>(
    table: &'a CurrencyTable,
    text: &str,
) -> Result<ConversionRequest<'a>, ConversionError> {
    let tokens: Vec<&str> = text.split(' ').collect();
    let (source_token, target_token, amount_token) = match tokens.as_slice() {
        [source, target, amount] => (*source, *target, *amount),
        _ => return Err(ConversionError::BadArgumentCount),
    };

    if source_token == target_token {
        return Err(ConversionError::SameCurrency);
    }
    let source = table
        .get(source_token)
        .ok_or(ConversionError::UnknownSourceCurrency)?;
    let target = table
        .get(target_token)
        .ok_or(ConversionError::UnknownTargetCurrency)?;
    let amount: f64 = amount_token
        .parse()
        .map_err(|_| ConversionError::BadAmount)?;
    if !amount.is_finite() {
        return Err(ConversionError::BadAmount);
    }

    Ok(ConversionRequest {
        source,
        target,
        amount,
    })
}

/// Runs the full conversion flow for one message: validate, fetch the live
/// rate for the pair, compute the converted amount, and build the reply.
pub async fn convert(state: &AppState, text: &str) -> Result<String, ConversionError> {
    let request = parse_request(&state.currencies, text)?;
    let quote = state
        .rates
        .get_rate(&request.source.code, &request.target.code)
        .await?;
    let converted = round_amount(request.amount * quote.rate);

    let source_word = state
        .inflector
        .agree_with_number(&request.source.token, request.amount);
    // The target word agrees with the input amount when it is whole,
    // otherwise with the rounded conversion result.
    let target_quantity = if request.amount.fract() == 0.0 {
        request.amount
    } else {
        converted
    };
    let target_word = state
        .inflector
        .agree_with_number(&request.target.token, target_quantity);

    Ok(format!(
        "{} {} = {} {}",
        format_amount(request.amount),
        source_word,
        format_amount(converted),
        target_word
    ))
}
