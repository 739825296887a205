//! Bulk Loader
//!
//! Decodes flat binary snapshot files of fixed-width key/value records.
//!
//! ## Record Format
//!
//! ```text
//! ┌──────────────────┬──────────────────┐
//! │  key (i32, ne)   │ value (i32, ne)  │
//! └──────────────────┴──────────────────┘
//! ```
//!
//! Eight bytes per record, native byte order, no header, no record
//! count, no checksum. A file that ends mid-record is treated as ending
//! at the last complete record; the partial tail is discarded.

use std::io::{self, Read};

use bytes::Buf;

/// Size of one encoded record: 4-byte key + 4-byte value
pub const RECORD_SIZE: usize = 8;

/// Streaming reader over a binary snapshot
pub struct BulkFile<R> {
    inner: R,
}

impl<R: Read> BulkFile<R> {
    /// Wrap a byte source
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Decode the next record
    ///
    /// Returns `Ok(None)` at end of input, including a truncated final
    /// record (fewer than eight bytes remaining). Any other read
    /// failure is an error.
    pub fn next_record(&mut self) -> io::Result<Option<(i32, i32)>> {
        let mut buf = [0u8; RECORD_SIZE];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(err) => return Err(err),
        }

        let mut record = &buf[..];
        let key = record.get_i32_ne();
        let value = record.get_i32_ne();
        Ok(Some((key, value)))
    }
}
