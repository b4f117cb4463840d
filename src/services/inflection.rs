use std::collections::HashMap;

/// Picks the form of a word that grammatically agrees with a quantity,
/// e.g. "1 рубль", "2 рубля", "5 рублей".
pub trait Inflector: Send + Sync {
    fn agree_with_number(&self, word: &str, quantity: f64) -> String;
}

/// Russian cardinal-agreement bucket for a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberClass {
    /// Nominative singular: 1, 21, 101, ...
    One,
    /// Genitive singular: 2-4, 22-24, fractional tails in that range, ...
    Few,
    /// Genitive plural: everything else, including 11-14.
    Many,
}

fn number_class(quantity: f64) -> NumberClass {
    // rem_euclid keeps negative and fractional quantities in positive
    // residue ranges, matching the floored modulo the word forms are
    // tabulated against.
    let tail10 = quantity.rem_euclid(10.0);
    let tail100 = quantity.rem_euclid(100.0);
    if tail10 == 1.0 && tail100 != 11.0 {
        NumberClass::One
    } else if (2.0..=4.0).contains(&tail10) && !(10.0..20.0).contains(&tail100) {
        NumberClass::Few
    } else {
        NumberClass::Many
    }
}

#[derive(Debug, Clone)]
struct WordForms {
    one: String,
    few: String,
    many: String,
}

/// Inflector for the Russian currency words the bot supports. Words it does
/// not know pass through unchanged.
pub struct RussianInflector {
    forms: HashMap<String, WordForms>,
}

impl RussianInflector {
    pub fn new() -> Self {
        let mut forms = HashMap::new();
        for (one, few, many) in [
            ("евро", "евро", "евро"),
            ("доллар", "доллара", "долларов"),
            ("рубль", "рубля", "рублей"),
        ] {
            forms.insert(
                one.to_string(),
                WordForms {
                    one: one.to_string(),
                    few: few.to_string(),
                    many: many.to_string(),
                },
            );
        }
        Self { forms }
    }
}

impl Default for RussianInflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector for RussianInflector {
    fn agree_with_number(&self, word: &str, quantity: f64) -> String {
        match self.forms.get(word) {
            Some(forms) => match number_class(quantity) {
                NumberClass::One => forms.one.clone(),
                NumberClass::Few => forms.few.clone(),
                NumberClass::Many => forms.many.clone(),
            },
            None => word.to_string(),
        }
    }
}
