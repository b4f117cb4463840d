use currencybot_backend::services::chatbot::generate_reply;
use currencybot_backend::services::converter::{convert, parse_request, ConversionError};
use currencybot_backend::services::currency::CurrencyTable;
use currencybot_backend::services::inflection::RussianInflector;
use currencybot_backend::services::rate_provider::{RateError, RateProvider, RateQuote};
use currencybot_backend::state::AppState;

use async_trait::async_trait;
use std::sync::Arc;

struct FixedRate(f64);

#[async_trait]
impl RateProvider for FixedRate {
    async fn get_rate(&self, source: &str, target: &str) -> Result<RateQuote, RateError> {
        Ok(RateQuote {
            pair: format!("{source}{target}"),
            rate: self.0,
        })
    }
}

struct UnreachableRateService;

#[async_trait]
impl RateProvider for UnreachableRateService {
    async fn get_rate(&self, source: &str, target: &str) -> Result<RateQuote, RateError> {
        Err(RateError::MissingPair {
            pair: format!("{source}{target}"),
        })
    }
}

fn state_with_rate(rate: f64) -> AppState {
    AppState::new(
        CurrencyTable::defaults(),
        Arc::new(FixedRate(rate)),
        Arc::new(RussianInflector::new()),
    )
}

#[test]
fn test_token_count_validation() {
    let table = CurrencyTable::defaults();
    assert!(matches!(
        parse_request(&table, "евро доллар 1 2"),
        Err(ConversionError::BadArgumentCount)
    ));
    assert!(matches!(
        parse_request(&table, "евро доллар"),
        Err(ConversionError::BadArgumentCount)
    ));
    // The split keeps empty tokens, so a doubled space breaks the count.
    assert!(matches!(
        parse_request(&table, "евро  доллар 10"),
        Err(ConversionError::BadArgumentCount)
    ));
    assert!(matches!(
        parse_request(&table, ""),
        Err(ConversionError::BadArgumentCount)
    ));
}

#[test]
fn test_same_currency_is_checked_before_membership() {
    let table = CurrencyTable::defaults();
    assert!(matches!(
        parse_request(&table, "евро евро 5"),
        Err(ConversionError::SameCurrency)
    ));
    // Even a currency the table does not know trips the same-currency rule
    // first: the comparison is on raw tokens.
    assert!(matches!(
        parse_request(&table, "тенге тенге 5"),
        Err(ConversionError::SameCurrency)
    ));
}

#[test]
fn test_unknown_currencies() {
    let table = CurrencyTable::defaults();
    assert!(matches!(
        parse_request(&table, "тенге доллар 5"),
        Err(ConversionError::UnknownSourceCurrency)
    ));
    assert!(matches!(
        parse_request(&table, "евро тенге 5"),
        Err(ConversionError::UnknownTargetCurrency)
    ));
    // Lookup is case-sensitive.
    assert!(matches!(
        parse_request(&table, "Евро доллар 5"),
        Err(ConversionError::UnknownSourceCurrency)
    ));
}

#[test]
fn test_bad_amount() {
    let table = CurrencyTable::defaults();
    assert!(matches!(
        parse_request(&table, "евро доллар пять"),
        Err(ConversionError::BadAmount)
    ));
    assert!(matches!(
        parse_request(&table, "евро доллар 12,5"),
        Err(ConversionError::BadAmount)
    ));
}

#[test]
fn test_non_finite_amounts_are_rejected() {
    let table = CurrencyTable::defaults();
    // These all parse as f64 but are not amounts.
    for amount in ["inf", "-inf", "infinity", "nan", "NaN"] {
        assert!(matches!(
            parse_request(&table, &format!("евро доллар {amount}")),
            Err(ConversionError::BadAmount)
        ));
    }
}

#[test]
fn test_valid_request_resolves_codes() {
    let table = CurrencyTable::defaults();
    let request = parse_request(&table, "евро доллар 10.5").unwrap();
    assert_eq!(request.source.code, "EUR");
    assert_eq!(request.target.code, "USD");
    assert_eq!(request.amount, 10.5);
}

#[tokio::test]
async fn test_whole_products_render_as_integers() {
    let state = state_with_rate(1.1);
    let reply = convert(&state, "евро доллар 10").await.unwrap();
    assert_eq!(reply, "10 евро = 11 долларов");
}

#[tokio::test]
async fn test_fractional_products_render_with_two_decimals() {
    let state = state_with_rate(1.15);
    let reply = convert(&state, "евро доллар 3").await.unwrap();
    assert_eq!(reply, "3 евро = 3.45 доллара");
}

#[tokio::test]
async fn test_target_word_agrees_with_whole_input_amount() {
    // 2 × 2.6 = 5.2, but the target word agrees with the whole input
    // amount 2, hence "доллара" and not "долларов".
    let state = state_with_rate(2.6);
    let reply = convert(&state, "евро доллар 2").await.unwrap();
    assert_eq!(reply, "2 евро = 5.20 доллара");

    // Same rule with a singular result word.
    let state = state_with_rate(90.5);
    let reply = convert(&state, "доллар рубль 1").await.unwrap();
    assert_eq!(reply, "1 доллар = 90.50 рубль");
}

#[tokio::test]
async fn test_target_word_agrees_with_result_for_fractional_input() {
    let state = state_with_rate(2.0);
    let reply = convert(&state, "евро доллар 2.5").await.unwrap();
    assert_eq!(reply, "2.50 евро = 5 долларов");
}

#[tokio::test]
async fn test_rate_faults_are_not_validation_errors() {
    let state = AppState::new(
        CurrencyTable::defaults(),
        Arc::new(UnreachableRateService),
        Arc::new(RussianInflector::new()),
    );
    let err = convert(&state, "евро доллар 10").await.unwrap_err();
    assert!(matches!(err, ConversionError::Rate(_)));
}

#[tokio::test]
async fn test_generate_reply_renders_validation_errors() {
    let state = state_with_rate(1.1);
    let reply = generate_reply(&state, "евро доллар пять").await;
    assert_eq!(reply, "Произошла ошибка: Введена неверная сумма.");

    // An infinite amount never reaches the rate lookup or the reply builder.
    let reply = generate_reply(&state, "евро доллар inf").await;
    assert_eq!(reply, "Произошла ошибка: Введена неверная сумма.");

    let reply = generate_reply(&state, "рубль доллар").await;
    assert_eq!(reply, "Произошла ошибка: Неверное число параметров.");
}

#[tokio::test]
async fn test_generate_reply_answers_commands() {
    let state = state_with_rate(1.1);

    let reply = generate_reply(&state, "/values").await;
    assert_eq!(reply, "Доступные валюты для конвертации:\nевро\nдоллар\nрубль");

    let reply = generate_reply(&state, "/help").await;
    assert!(reply.starts_with("Чтобы узнать сумму конвертации"));
    assert!(reply.contains("<исходная валюта> <валюта конвертации> <сумма перевода>"));
}
