//! Named character encodings used for text characteristic values
//!
//! Only the standard charsets that every host platform is required to
//! provide are recognized. Names are matched case-insensitively against the
//! canonical name and its registered aliases.

use std::fmt;
use std::str::FromStr;

use crate::error::ErrorKind;
use crate::{Error, Result};

/// A character encoding which can turn text into a characteristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Encoding {
    /// Seven-bit ASCII
    UsAscii,
    /// ISO Latin alphabet No. 1
    Iso8859_1,
    /// Eight-bit UCS transformation format
    Utf8,
    /// UTF-16, big-endian byte order, no byte order mark
    Utf16Be,
    /// UTF-16, little-endian byte order, no byte order mark
    Utf16Le,
    /// UTF-16, big-endian byte order, preceded by a byte order mark
    Utf16,
}

const ALIASES: &[(Encoding, &[&str])] = &[
    (
        Encoding::UsAscii,
        &[
            "us-ascii",
            "ascii",
            "us",
            "646",
            "iso646-us",
            "iso_646.irv:1983",
            "iso_646.irv:1991",
            "iso-ir-6",
            "ansi_x3.4-1968",
            "ansi_x3.4-1986",
            "cp367",
            "ibm367",
            "csascii",
            "default",
        ],
    ),
    (
        Encoding::Iso8859_1,
        &[
            "iso-8859-1",
            "iso8859-1",
            "iso8859_1",
            "iso_8859-1",
            "iso_8859_1",
            "iso_8859-1:1987",
            "8859_1",
            "iso-ir-100",
            "latin1",
            "l1",
            "ibm819",
            "ibm-819",
            "cp819",
            "819",
            "csisolatin1",
        ],
    ),
    (Encoding::Utf8, &["utf-8", "utf8", "unicode-1-1-utf-8"]),
    (
        Encoding::Utf16Be,
        &["utf-16be", "utf_16be", "x-utf-16be", "iso-10646-ucs-2", "unicodebigunmarked"],
    ),
    (
        Encoding::Utf16Le,
        &["utf-16le", "utf_16le", "x-utf-16le", "unicodelittleunmarked"],
    ),
    (Encoding::Utf16, &["utf-16", "utf_16", "utf16", "unicode", "unicodebig"]),
];

impl Encoding {
    /// The encoding used for text values when the caller does not name one.
    pub const DEFAULT: Encoding = Encoding::Iso8859_1;

    /// Looks up an encoding by its canonical name or one of its aliases.
    ///
    /// Fails with [`ErrorKind::UnsupportedEncoding`] if the name is not a legal charset name or does not name a
    /// known encoding.
    pub fn for_name(name: &str) -> Result<Encoding> {
        if !is_legal_name(name) {
            return Err(Error::new(
                ErrorKind::UnsupportedEncoding,
                None,
                format!("illegal charset name {name:?}"),
            ));
        }

        let lowered = name.to_ascii_lowercase();
        ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&lowered.as_str()))
            .map(|(encoding, _)| *encoding)
            .ok_or_else(|| Error::new(ErrorKind::UnsupportedEncoding, None, name))
    }

    /// The canonical name of this encoding
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::UsAscii => "US-ASCII",
            Encoding::Iso8859_1 => "ISO-8859-1",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16 => "UTF-16",
        }
    }

    /// Encodes `text` into a byte sequence.
    ///
    /// Characters the encoding cannot represent are written as `?`. Unmarked UTF-16 output starts with a byte
    /// order mark unless the text is empty.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Encoding::UsAscii => encode_single_byte(text, 0x7f),
            Encoding::Iso8859_1 => encode_single_byte(text, 0xff),
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Encoding::Utf16 if text.is_empty() => Vec::new(),
            Encoding::Utf16 => {
                let mut bytes = Vec::with_capacity(2 + text.len() * 2);
                bytes.extend_from_slice(&[0xfe, 0xff]);
                bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                bytes
            }
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::DEFAULT
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::for_name(s)
    }
}

impl TryFrom<String> for Encoding {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Encoding::for_name(&name)
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        encoding.name().to_owned()
    }
}

fn encode_single_byte(text: &str, max: u32) -> Vec<u8> {
    text.chars()
        .map(|c| if u32::from(c) <= max { u32::from(c) as u8 } else { b'?' })
        .collect()
}

// Charset names start with a letter or digit and otherwise contain only
// letters, digits, '-', '+', ':', '_' and '.'.
fn is_legal_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | ':' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(Encoding::for_name("UTF-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::for_name("utf8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::for_name("Latin1").unwrap(), Encoding::Iso8859_1);
        assert_eq!(Encoding::for_name("ASCII").unwrap(), Encoding::UsAscii);
        assert_eq!(Encoding::for_name("UnicodeLittleUnmarked").unwrap(), Encoding::Utf16Le);
        assert_eq!("utf-16".parse::<Encoding>().unwrap(), Encoding::Utf16);
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["not-a-real-encoding", "", "-utf8", "utf 8", "UTF-32X"] {
            let err = Encoding::for_name(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding, "{name:?}");
        }
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Encoding::for_name("l1").unwrap().to_string(), "ISO-8859-1");
        assert_eq!(Encoding::default(), Encoding::Iso8859_1);
    }

    #[test]
    fn single_byte_encodings_replace_unmappable() {
        assert_eq!(Encoding::UsAscii.encode("aé€"), b"a??");
        assert_eq!(Encoding::Iso8859_1.encode("aé€"), vec![b'a', 0xe9, b'?']);
        assert_eq!(Encoding::UsAscii.encode("😀"), b"?");
    }

    #[test]
    fn utf16_variants() {
        assert_eq!(Encoding::Utf16Be.encode("A€"), vec![0x00, 0x41, 0x20, 0xac]);
        assert_eq!(Encoding::Utf16Le.encode("A€"), vec![0x41, 0x00, 0xac, 0x20]);
        assert_eq!(Encoding::Utf16.encode("A"), vec![0xfe, 0xff, 0x00, 0x41]);
        assert!(Encoding::Utf16.encode("").is_empty());
        assert_eq!(Encoding::Utf16Be.encode("😀"), vec![0xd8, 0x3d, 0xde, 0x00]);
    }

    #[test]
    fn utf8_is_passthrough() {
        assert_eq!(Encoding::Utf8.encode("AB"), vec![0x41, 0x42]);
        assert_eq!(Encoding::Utf8.encode("é"), vec![0xc3, 0xa9]);
        assert!(Encoding::Utf8.encode("").is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_charset_names() {
        assert_eq!(serde_json::to_string(&Encoding::Utf8).unwrap(), r#""UTF-8""#);
        assert_eq!(serde_json::to_string(&Encoding::Utf16Le).unwrap(), r#""UTF-16LE""#);
        assert_eq!(serde_json::from_str::<Encoding>(r#""latin1""#).unwrap(), Encoding::Iso8859_1);

        let err = serde_json::from_str::<Encoding>(r#""not-a-real-encoding""#).unwrap_err();
        assert!(err.to_string().contains("unsupported character encoding"));
    }
}
