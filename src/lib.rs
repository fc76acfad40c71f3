#![warn(rust_2018_idioms)]

//! Helpers for assigning values to Bluetooth LE GATT characteristics.
//!
//! A characteristic value can be supplied as text in a named character encoding, as raw bytes, or as a
//! [`ByteBuffer`] which is either heap-backed or direct. Each is turned into a byte sequence and handed to the
//! [`Characteristic::set_value`] operation of the platform's characteristic object, whose result is returned
//! unchanged.
//!
//! ```
//! use charvalue::{write_raw_value, write_text_value, LocalCharacteristic, Uuid};
//!
//! let characteristic = LocalCharacteristic::new(Uuid::nil());
//!
//! assert!(write_text_value(&characteristic, "AB", "UTF-8")?);
//! assert_eq!(characteristic.value(), Some(vec![0x41, 0x42]));
//!
//! assert!(write_raw_value(&characteristic, &[0x01, 0x02, 0x03]));
//! assert_eq!(characteristic.value(), Some(vec![0x01, 0x02, 0x03]));
//! # Ok::<(), charvalue::Error>(())
//! ```
//!
//! Assigning a value does not transmit it. The over-the-air write is a separate request made through the
//! platform's Bluetooth stack.

mod buffer;
mod characteristic;
pub mod encoding;
pub mod error;
pub mod value;
pub mod writer;

pub use buffer::ByteBuffer;
pub use characteristic::{Characteristic, CharacteristicProperties, LocalCharacteristic};
pub use encoding::Encoding;
pub use error::Error;
pub use uuid::Uuid;
pub use value::{write_value, Value};
pub use writer::{write_buffer_value, write_encoded_text, write_raw_value, write_text_value};

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;
