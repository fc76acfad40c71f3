//! Loosely typed characteristic values
//!
//! Hosts which receive values from a dynamic caller (bytes, text, a single number, or a buffer) can hold them in a
//! [`Value`] and let [`write_value`] pick the matching write operation.

use crate::error::ErrorKind;
use crate::writer::{write_buffer_value, write_encoded_text, write_raw_value};
use crate::{ByteBuffer, Characteristic, Encoding, Error, Result};

/// A characteristic value in one of the shapes accepted by [`write_value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bytes(Vec<u8>),
    Text(String),
    /// A single number, written as a one-byte value
    Byte(u8),
    #[cfg_attr(feature = "serde", serde(skip))]
    Buffer(ByteBuffer),
}

impl Value {
    /// Parses a comma-separated list of hex bytes such as `"0x01,0x02"` or `"0x7F"` into [`Value::Bytes`].
    ///
    /// This is for callers that receive hex literals and want them written as bytes. [`write_value`] never parses
    /// text this way: a [`Value::Text`] of `"0x01"` is written as the encoded characters `0`, `x`, `0`, `1`.
    pub fn from_hex_list(s: &str) -> Result<Value> {
        s.split(',')
            .map(|token| {
                let token = token.trim();
                let digits = token
                    .strip_prefix("0x")
                    .or_else(|| token.strip_prefix("0X"))
                    .unwrap_or(token);
                u8::from_str_radix(digits, 16).map_err(|err| {
                    Error::new(
                        ErrorKind::InvalidParameter,
                        Some(Box::new(err)),
                        format!("invalid hex byte {token:?}"),
                    )
                })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Value::Bytes)
    }

    /// Converts this value to the bytes that would be assigned to a characteristic.
    ///
    /// Text is encoded with `encoding`, or [`Encoding::DEFAULT`] when `None`. Buffers follow the same rules as
    /// [`write_buffer_value`].
    pub fn to_bytes(&self, encoding: Option<&str>) -> Result<Vec<u8>> {
        Ok(match self {
            Value::Bytes(bytes) => bytes.clone(),
            Value::Text(text) => resolve(encoding)?.encode(text),
            Value::Byte(byte) => vec![*byte],
            Value::Buffer(buffer) => buffer.value_bytes().into_owned(),
        })
    }
}

/// Assigns `value` to `characteristic`, dispatching on the shape of the value.
///
/// `encoding` only applies to [`Value::Text`]; when `None` the text is encoded with [`Encoding::DEFAULT`]. For the
/// other shapes the encoding name is ignored, even if it names no known encoding.
pub fn write_value<C: Characteristic + ?Sized>(
    characteristic: &C,
    value: &Value,
    encoding: Option<&str>,
) -> Result<bool> {
    Ok(match value {
        Value::Bytes(bytes) => write_raw_value(characteristic, bytes),
        Value::Text(text) => write_encoded_text(characteristic, text, resolve(encoding)?),
        Value::Byte(byte) => write_raw_value(characteristic, &[*byte]),
        Value::Buffer(buffer) => write_buffer_value(characteristic, buffer),
    })
}

fn resolve(encoding: Option<&str>) -> Result<Encoding> {
    encoding.map_or(Ok(Encoding::DEFAULT), Encoding::for_name)
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<u8> for Value {
    fn from(byte: u8) -> Self {
        Value::Byte(byte)
    }
}

impl From<ByteBuffer> for Value {
    fn from(buffer: ByteBuffer) -> Self {
        Value::Buffer(buffer)
    }
}
