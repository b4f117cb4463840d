use tracing::error;

use crate::services::converter::{convert, ConversionError};
use crate::services::currency::CurrencyTable;
use crate::state::AppState;

const HELP_TEXT: &str = "Чтобы узнать сумму конвертации по текущему курсу, введите команду в следующем формате:\n<исходная валюта> <валюта конвертации> <сумма перевода>.\nДля получения списка доступных валют для конвертации введите команду \"/values\".";

const ERROR_PREFIX: &str = "Произошла ошибка";

const RATE_FAILURE_TEXT: &str = "не удалось получить курс валют. Попробуйте позже.";

/// What an incoming message asks the bot to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Values,
    Convert(&'a str),
}

/// Commands are the whole message, matched exactly; everything else is
/// treated as a conversion request.
pub fn parse_command(text: &str) -> Command<'_> {
    match text {
        "/start" | "/help" => Command::Help,
        "/values" => Command::Values,
        _ => Command::Convert(text),
    }
}

/// Produces exactly one reply for one incoming message.
pub async fn generate_reply(state: &AppState, text: &str) -> String {
    match parse_command(text) {
        Command::Help => HELP_TEXT.to_string(),
        Command::Values => values_text(&state.currencies),
        Command::Convert(input) => match convert(state, input).await {
            Ok(reply) => reply,
            Err(ConversionError::Rate(err)) => {
                error!("rate lookup failed: {err}");
                format!("{ERROR_PREFIX}: {RATE_FAILURE_TEXT}")
            }
            Err(err) => format!("{ERROR_PREFIX}: {err}"),
        },
    }
}

fn values_text(currencies: &CurrencyTable) -> String {
    let mut text = String::from("Доступные валюты для конвертации:");
    for token in currencies.tokens() {
        text.push('\n');
        text.push_str(token);
    }
    text
}
