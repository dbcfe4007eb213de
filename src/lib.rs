//! Typed, validated field extraction over decoded JSON values.

/// Key-based interpretation of `serde_json::Value` trees with a closed error set.
pub mod json;
