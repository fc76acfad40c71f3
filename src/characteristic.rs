use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// A Bluetooth GATT characteristic whose local value can be assigned.
///
/// Assigning a value only sets the characteristic's pending local value. Sending it to the remote device is a
/// separate write request made by the platform stack.
pub trait Characteristic {
    /// The [`Uuid`] identifying the type of this GATT characteristic
    fn uuid(&self) -> Uuid;

    /// Stores `value` as the pending local value. Returns `false` if the value was not accepted.
    fn set_value(&self, value: &[u8]) -> bool;
}

impl<T: Characteristic + ?Sized> Characteristic for &T {
    fn uuid(&self) -> Uuid {
        (**self).uuid()
    }

    fn set_value(&self, value: &[u8]) -> bool {
        (**self).set_value(value)
    }
}

impl<T: Characteristic + ?Sized> Characteristic for Box<T> {
    fn uuid(&self) -> Uuid {
        (**self).uuid()
    }

    fn set_value(&self, value: &[u8]) -> bool {
        (**self).set_value(value)
    }
}

impl<T: Characteristic + ?Sized> Characteristic for Arc<T> {
    fn uuid(&self) -> Uuid {
        (**self).uuid()
    }

    fn set_value(&self, value: &[u8]) -> bool {
        (**self).set_value(value)
    }
}

/// Bluetooth GATT characteristic properties
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CharacteristicProperties {
    pub broadcast: bool,
    pub read: bool,
    pub write_without_response: bool,
    pub write: bool,
    pub notify: bool,
    pub indicate: bool,
    pub authenticated_signed_writes: bool,
    pub extended_properties: bool,
    pub reliable_write: bool,
    pub writable_auxiliaries: bool,
}

impl CharacteristicProperties {
    /// Raw transmutation from [`u32`].
    ///
    /// Extended properties are in the upper bits.
    pub fn from_bits(bits: u32) -> Self {
        CharacteristicProperties {
            broadcast: (bits & (1 << 0)) != 0,
            read: (bits & (1 << 1)) != 0,
            write_without_response: (bits & (1 << 2)) != 0,
            write: (bits & (1 << 3)) != 0,
            notify: (bits & (1 << 4)) != 0,
            indicate: (bits & (1 << 5)) != 0,
            authenticated_signed_writes: (bits & (1 << 6)) != 0,
            extended_properties: (bits & (1 << 7)) != 0,
            reliable_write: (bits & (1 << 8)) != 0,
            writable_auxiliaries: (bits & (1 << 9)) != 0,
        }
    }

    /// Raw transmutation to [`u32`].
    ///
    /// Extended properties are in the upper bits.
    pub fn to_bits(self) -> u32 {
        u32::from(self.broadcast)
            | (u32::from(self.read) << 1)
            | (u32::from(self.write_without_response) << 2)
            | (u32::from(self.write) << 3)
            | (u32::from(self.notify) << 4)
            | (u32::from(self.indicate) << 5)
            | (u32::from(self.authenticated_signed_writes) << 6)
            | (u32::from(self.extended_properties) << 7)
            | (u32::from(self.reliable_write) << 8)
            | (u32::from(self.writable_auxiliaries) << 9)
    }
}

/// An in-memory characteristic which keeps the last value assigned to it.
#[derive(Debug, Default)]
pub struct LocalCharacteristic {
    uuid: Uuid,
    properties: CharacteristicProperties,
    max_len: Option<usize>,
    value: Mutex<Option<Vec<u8>>>,
}

impl LocalCharacteristic {
    pub fn new(uuid: Uuid) -> Self {
        Self::with_properties(uuid, CharacteristicProperties::default())
    }

    pub fn with_properties(uuid: Uuid, properties: CharacteristicProperties) -> Self {
        LocalCharacteristic {
            uuid,
            properties,
            max_len: None,
            value: Mutex::new(None),
        }
    }

    /// Rejects values longer than `max_len` bytes.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn properties(&self) -> CharacteristicProperties {
        self.properties
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// The last value accepted by [`Characteristic::set_value`], if any
    pub fn value(&self) -> Option<Vec<u8>> {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Characteristic for LocalCharacteristic {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn set_value(&self, value: &[u8]) -> bool {
        if self.max_len.is_some_and(|max| value.len() > max) {
            return false;
        }
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(value.to_vec());
        true
    }
}
