// src/decryptor/mod.rs

//! High-level decode facade.
//!
//! Core API: `decrypt(reader, writer)?` for streams, `decrypt_file(path)?` for
//! files named `<name>.encrypted`.

pub(crate) mod decrypt;

pub use decrypt::{decrypt, decrypt_file};
