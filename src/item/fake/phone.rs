use std::{collections::BTreeMap, fmt, str::FromStr};

use fake::{Fake, faker::phone_number::raw::PhoneNumber, locales::EN};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

/// Label of a phone entry in the by-category shape.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhoneCategory {
    Cell,
    Work,
    Home,
}

pub const PHONE_CATEGORIES: [PhoneCategory; 3] =
    [PhoneCategory::Cell, PhoneCategory::Work, PhoneCategory::Home];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhoneInfo {
    pub number: String,
    /// Only ever set on the `Cell` entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_allowed: Option<bool>,
}

/// The `phone` field of a person: a bare number, or numbers keyed by category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Phones {
    Single(String),
    ByCategory(BTreeMap<PhoneCategory, PhoneInfo>),
}

/// Which [`Phones`] shape the generator produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PhoneMode {
    #[default]
    Single,
    ByCategory,
}

impl FromStr for PhoneMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(PhoneMode::Single),
            "by-category" => Ok(PhoneMode::ByCategory),
            other => Err(format!(
                "unknown phone mode '{}', expected 'single' or 'by-category'",
                other
            )),
        }
    }
}

impl fmt::Display for PhoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneMode::Single => f.write_str("single"),
            PhoneMode::ByCategory => f.write_str("by-category"),
        }
    }
}

pub fn fake_phones<R: Rng + ?Sized>(rng: &mut R, mode: PhoneMode) -> Phones {
    match mode {
        PhoneMode::Single => Phones::Single(fake_number(rng)),
        PhoneMode::ByCategory => Phones::ByCategory(fake_phone_map(rng)),
    }
}

fn fake_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    PhoneNumber(EN).fake_with_rng(rng)
}

/// Picks 1 to 3 shuffled categories. With more than one, a coin flip decides
/// whether they all share a single number.
fn fake_phone_map<R: Rng + ?Sized>(rng: &mut R) -> BTreeMap<PhoneCategory, PhoneInfo> {
    let count = rng.random_range(1..=PHONE_CATEGORIES.len());

    let mut categories = PHONE_CATEGORIES;
    categories.shuffle(rng);

    let shared = if count > 1 && rng.random_bool(0.5) {
        Some(fake_number(rng))
    } else {
        None
    };

    let mut phones = BTreeMap::new();
    for category in categories.into_iter().take(count) {
        let number = match &shared {
            Some(number) => number.clone(),
            None => fake_number(rng),
        };
        let sms_allowed = (category == PhoneCategory::Cell).then(|| rng.random_bool(0.5));
        phones.insert(category, PhoneInfo { number, sms_allowed });
    }
    phones
}
