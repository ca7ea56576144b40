//! Program image loading.

use std::fs;
use std::io;
use std::path::Path;

/// Reads a raw little-endian program image from disk.
///
/// The image is a flat byte string of 32-bit instruction words; the caller
/// places it in RAM (conventionally at address 0) with
/// [`crate::mem::Ram::load_at`].
pub fn load_program(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Flattens 32-bit instruction words into the little-endian byte image the
/// loader and RAM expect.
pub fn words_to_image(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
