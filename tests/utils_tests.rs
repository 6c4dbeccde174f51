//! tests/utils_tests.rs
//! Unit tests for the diagnostic hex dump

mod common;
use common::{all_byte_values, EDGE_BYTES};

use shiftcrypt_rs::consts::DIAGNOSTIC_TAIL_LEN;
use shiftcrypt_rs::utils::{log_tail, tail_hex};

#[test]
fn tail_hex_short_input_is_rendered_whole() {
    assert_eq!(tail_hex(EDGE_BYTES, DIAGNOSTIC_TAIL_LEN), "00 ff 7f");
}

#[test]
fn tail_hex_empty() {
    assert_eq!(tail_hex(&[], DIAGNOSTIC_TAIL_LEN), "");
}

#[test]
fn tail_hex_keeps_only_the_last_bytes() {
    let rendered = tail_hex(&all_byte_values(), DIAGNOSTIC_TAIL_LEN);
    assert_eq!(
        rendered,
        "f0 f1 f2 f3 f4 f5 f6 f7 f8 f9 fa fb fc fd fe ff"
    );
    assert_eq!(rendered.split(' ').count(), DIAGNOSTIC_TAIL_LEN);
}

#[test]
fn tail_hex_pads_to_two_digits() {
    assert_eq!(tail_hex(&[0x0a, 0x01], 16), "0a 01");
}

#[test]
fn tail_hex_zero_count() {
    assert_eq!(tail_hex(EDGE_BYTES, 0), "");
}

#[test]
fn log_tail_without_logger_is_harmless() {
    log_tail("no logger installed", &all_byte_values());
}

#[test]
fn log_tail_takes_any_display_label() {
    let path = std::path::Path::new("some/file.bin");
    log_tail(path.display(), EDGE_BYTES);
    log_tail(format_args!("chunk {}", 3), &[]);
}
