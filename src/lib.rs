#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # fake-pii-json

 Generates synthetic person records (fake PII) and emits them as JSON, either by
 writing a file once or by serving them over HTTP.

 ## Core Concepts

- **PersonReader:** an `ItemReader` producing fake persons from its own random
  source. A seeded reader always yields the same batch.
- **read_batch:** drains a reader into an ordered batch, all or nothing.
- **JsonItemWriter:** an `ItemWriter` encoding a batch as a two-space indented
  JSON array.
- **Step:** reads a whole batch and hands it to a writer.

 ## Features

| **Feature** | **Description**                                              |
|-------------|--------------------------------------------------------------|
| server      | Enables the HTTP endpoints (`/health`, `/api/persons`)       |
| full        | Enables all available features                               |

 ## Getting Started

```rust
# use fake_pii_json::{
#     core::step::{Step, StepBuilder, StepStatus},
#     error::BatchError,
#     item::fake::{Person, PersonReaderBuilder, PhoneMode},
#     item::json::JsonItemWriterBuilder,
# };
# use std::env::temp_dir;
fn main() -> Result<(), BatchError> {
    let reader = PersonReaderBuilder::new()
        .number_of_items(20)
        .seed(Some(7))
        .phone_mode(PhoneMode::ByCategory)
        .build();

    let writer = JsonItemWriterBuilder::new().from_path(temp_dir().join("persons.json"));

    let step: Step<Person> = StepBuilder::new().reader(&reader).writer(&writer).build();
    let result = step.execute()?;

    assert_eq!(result.write_count, 20);
    assert!(step.get_status() == StepStatus::SUCCESS);

    Ok(())
}
```
 */

/// Command line flags and the validated run configuration
pub mod config;

/// Core module for batch operations
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Entry points generating persons into memory or a JSON file
pub mod generate;

/// Set of items readers / writers (fake persons, JSON)
pub mod item;

#[cfg(feature = "server")]
/// HTTP endpoints serving generated persons
pub mod server;
