/// JSON output for generated batches.
///
/// [`to_json_pretty`] turns a batch into the bytes written to a file or a response
/// body, and [`JsonItemWriter`] writes those bytes to any [`std::io::Write`] sink,
/// so that a [`crate::core::step::Step`] can emit the batch.
///
/// ```
/// use fake_pii_json::item::json::to_json_pretty;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let users = vec![User { id: 1, name: "Alice".to_string() }];
/// let json = to_json_pretty(&users).unwrap();
///
/// assert_eq!(
///     String::from_utf8(json).unwrap(),
///     "[\n  {\n    \"id\": 1,\n    \"name\": \"Alice\"\n  }\n]"
/// );
/// ```
pub mod json_writer;

// Re-export the main types for easier access
pub use json_writer::{JsonItemWriter, JsonItemWriterBuilder, to_json_pretty};
