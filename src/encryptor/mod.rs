// src/encryptor/mod.rs

//! High-level encode facade.
//!
//! Core API: `encrypt(reader, writer)?` for streams, `encrypt_file(path)?` for
//! the whole-file round trip with the default runner.

pub(crate) mod encrypt;

pub use encrypt::{encrypt, encrypt_file};
