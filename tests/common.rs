//! tests/common.rs
//! Common constants and utilities shared across test files

use std::path::{Path, PathBuf};

/// Scenario input from the byte-shift contract: both wrap points plus the sign boundary
#[allow(dead_code)] // Used across multiple test files
pub const EDGE_BYTES: &[u8] = &[0x00, 0xFF, 0x7F];

/// `EDGE_BYTES` after one encode
#[allow(dead_code)] // Used across multiple test files
pub const EDGE_BYTES_ENCODED: &[u8] = &[0x01, 0x00, 0x80];

#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"test data";

/// Chunk sizes that exercise single-byte, odd and default-sized progress steps
#[allow(dead_code)] // Used across multiple test files
pub const TEST_CHUNK_SIZES: &[usize] = &[1, 3, 4096, 64 * 1024];

/// Every byte value once, in order
#[allow(dead_code)] // Used across multiple test files
pub fn all_byte_values() -> Vec<u8> {
    (0..=255u8).collect()
}

/// Write `data` to `dir/name` and return the path
#[allow(dead_code)] // Used across multiple test files
pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
    path
}
