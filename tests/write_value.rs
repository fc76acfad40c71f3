use std::sync::{Arc, Mutex};

use charvalue::error::ErrorKind;
use charvalue::{
    write_buffer_value, write_raw_value, write_text_value, write_value, ByteBuffer, Characteristic, LocalCharacteristic,
    Uuid, Value,
};
use tracing_subscriber::EnvFilter;

const RX_CHARACTERISTIC: Uuid = Uuid::from_u128(0x6e400002_b5a3_f393_e0a9_e50e24dcca9e);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every value it is handed and answers with a fixed result.
#[derive(Default)]
struct Stub {
    accept: bool,
    received: Mutex<Vec<Vec<u8>>>,
}

impl Stub {
    fn accepting() -> Self {
        Stub {
            accept: true,
            ..Default::default()
        }
    }

    fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

impl Characteristic for Stub {
    fn uuid(&self) -> Uuid {
        RX_CHARACTERISTIC
    }

    fn set_value(&self, value: &[u8]) -> bool {
        self.received.lock().unwrap().push(value.to_vec());
        self.accept
    }
}

#[test]
fn text_value_end_to_end() {
    init_tracing();
    let stub = Stub::accepting();
    assert!(write_text_value(&stub, "AB", "UTF-8").unwrap());
    assert_eq!(stub.received(), vec![vec![0x41, 0x42]]);
}

#[test]
fn text_value_returns_stub_result() {
    init_tracing();
    let stub = Stub::default();
    assert!(!write_text_value(&stub, "AB", "UTF-8").unwrap());
    assert_eq!(stub.received(), vec![vec![0x41, 0x42]]);
}

#[test]
fn invalid_encoding_is_an_error() {
    init_tracing();
    let stub = Stub::accepting();
    let err = write_text_value(&stub, "AB", "not-a-real-encoding").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
    assert!(stub.received().is_empty());
}

#[test]
fn raw_value_end_to_end() {
    init_tracing();
    let stub = Stub::accepting();
    assert!(write_raw_value(&stub, &[0x01, 0x02, 0x03]));
    assert_eq!(stub.received(), vec![vec![0x01, 0x02, 0x03]]);
}

#[test]
fn buffers_ignore_position() {
    init_tracing();
    let stub = Stub::accepting();

    let mut heap = ByteBuffer::wrap(b"hello".to_vec());
    let mut skipped = [0u8; 3];
    heap.get(&mut skipped).unwrap();
    assert!(write_buffer_value(&stub, &heap));

    let mut direct = ByteBuffer::direct_from(b"world".to_vec());
    direct.get(&mut skipped).unwrap();
    assert_eq!(direct.remaining(), 2);
    assert!(write_buffer_value(&stub, &direct));

    assert_eq!(stub.received(), vec![b"hello".to_vec(), b"world".to_vec()]);
}

#[test]
fn shared_local_characteristic() {
    init_tracing();
    let characteristic = Arc::new(LocalCharacteristic::new(RX_CHARACTERISTIC).with_max_len(4));

    assert!(write_value(&characteristic, &Value::from("ping"), None).unwrap());
    assert_eq!(characteristic.value(), Some(b"ping".to_vec()));

    assert!(!write_value(&characteristic, &Value::from("too long"), None).unwrap());
    assert_eq!(characteristic.value(), Some(b"ping".to_vec()));

    let value = Value::from_hex_list("0xDE,0xAD").unwrap();
    assert!(write_value(&characteristic, &value, Some("UTF-8")).unwrap());
    assert_eq!(characteristic.value(), Some(vec![0xde, 0xad]));
}
