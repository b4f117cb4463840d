// src/state.rs
use std::sync::Arc;

use crate::services::currency::CurrencyTable;
use crate::services::inflection::Inflector;
use crate::services::rate_provider::RateProvider;

pub type SharedState = Arc<AppState>;

/// Read-only dependencies of the conversion flow: the enumerated currency
/// table and the two injected capabilities.
pub struct AppState {
    pub currencies: CurrencyTable,
    pub rates: Arc<dyn RateProvider>,
    pub inflector: Arc<dyn Inflector>,
}

impl AppState {
    pub fn new(
        currencies: CurrencyTable,
        rates: Arc<dyn RateProvider>,
        inflector: Arc<dyn Inflector>,
    ) -> Self {
        Self {
            currencies,
            rates,
            inflector,
        }
    }
}
