// src/lib.rs

//! Byte-shift file obfuscation.
//!
//! Encode adds one to every byte (mod 256) and writes `<file>.encrypted`;
//! decode subtracts one and writes the original name back. Output is exactly
//! as long as the input, with no header.
//!
//! **This is not encryption.** There is no key, no integrity check and no
//! confidentiality; the `.encrypted` name is a convention only.

#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod codec;
pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod paths;
pub mod progress;
pub mod runner;
pub mod stream;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_file};
pub use encryptor::{encrypt, encrypt_file};
pub use error::ShiftcryptError;

pub use builders::RunnerBuilder;
pub use codec::{transform, transform_in_place, TransformDirection};
pub use paths::{decrypted_path, encrypted_path};
pub use progress::{FnProgress, LogProgress, NoProgress, ProgressObserver, RunState};
pub use runner::RoundTripRunner;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch, run_files};
