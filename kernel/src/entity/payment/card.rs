use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

const VISIBLE_DIGITS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CardIssuer(String);

impl CardIssuer {
    pub fn new(issuer: impl Into<String>) -> Self {
        Self(issuer.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CardLastDigits(String);

impl CardLastDigits {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// Keeps the final four characters of the card number, or all of them when shorter.
    pub fn from_card_number(number: &str) -> Self {
        let skip = number.chars().count().saturating_sub(VISIBLE_DIGITS);
        Self(number.chars().skip(skip).collect())
    }
}
