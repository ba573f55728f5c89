use std::cell::{Cell, RefCell};
use std::fmt;

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::age::{BIRTHDAY_FORMAT, calculate_age};
use super::phone::{PhoneMode, Phones, fake_phones};
use crate::{core::item::ItemReader, error::BatchError};

/// Roughly one hundred years, in days.
const BIRTHDAY_SPAN_DAYS: i32 = 36_525;

const GENDERS: [&str; 2] = ["male", "female"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub city: String,
    pub state_code: String,
    pub zip_code: String,
    pub phone: Phones,
    pub email: String,
    pub birthday: String,
    pub age: i64,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first_name:{}, last_name:{}, birthday:{}, age:{}",
            self.first_name, self.last_name, self.birthday, self.age
        )
    }
}

/// Builds one fake person, drawing every field from `rng`.
///
/// The age is derived from the generated birthday; if that fails no person is
/// returned.
pub fn generate_person<R: Rng + ?Sized>(
    rng: &mut R,
    phone_mode: PhoneMode,
) -> Result<Person, BatchError> {
    let today = OffsetDateTime::now_utc().date();
    let birthday = fake_birthday(rng, today)?.format(BIRTHDAY_FORMAT)?;
    let age = calculate_age(&birthday)?;

    let building: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);

    let person = Person {
        first_name: FirstName(EN).fake_with_rng(rng),
        last_name: LastName(EN).fake_with_rng(rng),
        gender: GENDERS[rng.random_range(0..GENDERS.len())].to_string(),
        address_line_1: format!("{} {}", building, street),
        address_line_2: String::new(),
        city: CityName(EN).fake_with_rng(rng),
        state_code: StateAbbr(EN).fake_with_rng(rng),
        zip_code: ZipCode(EN).fake_with_rng(rng),
        phone: fake_phones(rng, phone_mode),
        email: SafeEmail(EN).fake_with_rng(rng),
        birthday,
        age,
    };

    Ok(person)
}

/// Uniform over the last hundred years, today included.
fn fake_birthday<R: Rng + ?Sized>(rng: &mut R, today: Date) -> Result<Date, BatchError> {
    let latest = today.to_julian_day();
    let earliest = latest - BIRTHDAY_SPAN_DAYS;

    Ok(Date::from_julian_day(rng.random_range(earliest..=latest))?)
}

/// Reads `number_of_items` fake persons, then stops.
///
/// The random source belongs to the reader, so each batch is independent of any
/// other and a seeded reader always yields the same batch.
pub struct PersonReader {
    count: Cell<usize>,
    rng: RefCell<StdRng>,
    phone_mode: PhoneMode,
}

impl ItemReader<Person> for PersonReader {
    fn read(&self) -> Option<Result<Person, BatchError>> {
        if self.count.get() == 0 {
            return None;
        }

        self.count.set(self.count.get() - 1);

        let result = generate_person(&mut *self.rng.borrow_mut(), self.phone_mode);
        if let Ok(person) = &result {
            debug!("Person: {}", person);
        }
        Some(result)
    }
}

#[derive(Default)]
pub struct PersonReaderBuilder {
    number_of_items: usize,
    seed: Option<u64>,
    phone_mode: PhoneMode,
}

impl PersonReaderBuilder {
    pub fn new() -> PersonReaderBuilder {
        PersonReaderBuilder::default()
    }

    pub fn number_of_items(mut self, number_of_items: usize) -> PersonReaderBuilder {
        self.number_of_items = number_of_items;
        self
    }

    /// Fixes the random source. Without a seed the reader draws one from the OS.
    pub fn seed(mut self, seed: Option<u64>) -> PersonReaderBuilder {
        self.seed = seed;
        self
    }

    pub fn phone_mode(mut self, phone_mode: PhoneMode) -> PersonReaderBuilder {
        self.phone_mode = phone_mode;
        self
    }

    pub fn build(self) -> PersonReader {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        PersonReader {
            count: self.number_of_items.into(),
            rng: RefCell::new(rng),
            phone_mode: self.phone_mode,
        }
    }
}
