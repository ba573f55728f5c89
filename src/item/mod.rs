/// This module provides a fake person reader backed by a per-batch random source.
pub mod fake;

/// This module provides the JSON encoder and item writer.
pub mod json;
