//! Assigning text, raw bytes and buffers to a characteristic value
//!
//! Each function converts its input into a byte sequence and hands it to [`Characteristic::set_value`], returning
//! that call's result unchanged. Nothing is retried and no state is kept between calls.

use tracing::trace;

use crate::{ByteBuffer, Characteristic, Encoding, Result};

/// Encodes `text` with the encoding named `encoding` and assigns the bytes to `characteristic`.
///
/// # Errors
///
/// Fails with [`ErrorKind::UnsupportedEncoding`](crate::error::ErrorKind::UnsupportedEncoding) if `encoding` is
/// not a known encoding name, in which case `characteristic` is not touched.
pub fn write_text_value<C: Characteristic + ?Sized>(characteristic: &C, text: &str, encoding: &str) -> Result<bool> {
    let encoding = Encoding::for_name(encoding)?;
    Ok(write_encoded_text(characteristic, text, encoding))
}

/// Encodes `text` with an already resolved `encoding` and assigns the bytes to `characteristic`.
pub fn write_encoded_text<C: Characteristic + ?Sized>(characteristic: &C, text: &str, encoding: Encoding) -> bool {
    let bytes = encoding.encode(text);
    trace!(
        characteristic = %characteristic.uuid(),
        %encoding,
        len = bytes.len(),
        "assigning text value"
    );
    characteristic.set_value(&bytes)
}

/// Assigns `value` to `characteristic` unchanged.
pub fn write_raw_value<C: Characteristic + ?Sized>(characteristic: &C, value: &[u8]) -> bool {
    trace!(characteristic = %characteristic.uuid(), len = value.len(), "assigning raw value");
    characteristic.set_value(value)
}

/// Assigns the contents of `buffer` to `characteristic`.
///
/// A heap buffer hands over its whole backing array. A direct buffer is copied into a new array of `capacity`
/// bytes. In both cases the position and limit of `buffer` are ignored, so bytes before the position and after the
/// limit are included.
pub fn write_buffer_value<C: Characteristic + ?Sized>(characteristic: &C, buffer: &ByteBuffer) -> bool {
    let bytes = buffer.value_bytes();
    trace!(
        characteristic = %characteristic.uuid(),
        len = bytes.len(),
        direct = buffer.is_direct(),
        position = buffer.position(),
        "assigning buffer value"
    );
    characteristic.set_value(&bytes)
}
