/// Age in whole years from a `YYYY-MM-DD` birthday.
pub mod age;

/// A reader producing fake persons from a per-batch random source.
pub mod person_reader;

/// Phone entries, either a single number or numbers keyed by category.
pub mod phone;

pub use person_reader::{Person, PersonReader, PersonReaderBuilder, generate_person};
pub use phone::{PhoneCategory, PhoneInfo, PhoneMode, Phones};
