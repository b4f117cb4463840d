/// A currency the bot can convert: the word users type and the ISO code the
/// rate service understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub token: String,
    pub code: String,
}

impl Currency {
    pub fn new(token: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            code: code.into(),
        }
    }
}

/// The fixed set of supported currencies. Insertion order is the order the
/// `/values` listing shows them in.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    entries: Vec<Currency>,
}

impl CurrencyTable {
    pub fn new(entries: Vec<Currency>) -> Self {
        Self { entries }
    }

    /// The currencies the bot supports out of the box.
    pub fn defaults() -> Self {
        Self::new(vec![
            Currency::new("евро", "EUR"),
            Currency::new("доллар", "USD"),
            Currency::new("рубль", "RUB"),
        ])
    }

    /// Exact, case-sensitive lookup by the word users type.
    pub fn get(&self, token: &str) -> Option<&Currency> {
        self.entries.iter().find(|currency| currency.token == token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|currency| currency.token.as_str())
    }
}
