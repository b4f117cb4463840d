pub mod chatbot;
pub mod converter;
pub mod currency;
pub mod format;
pub mod inflection;
pub mod rate_provider;
