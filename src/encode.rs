use base64::{
  alphabet,
  engine::{general_purpose, GeneralPurpose, GeneralPurposeConfig},
  DecodeError, Engine,
};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// A JSON formatter that writes `", "` between members, `": "` after keys,
/// and escapes every character outside printable ASCII as `\uXXXX`.
///
/// Characters above the BMP are written as a surrogate pair,
/// e.g. `"😀"` becomes `"\ud83d\ude00"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
  fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    if first {
      Ok(())
    } else {
      writer.write_all(b", ")
    }
  }

  fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    if first {
      Ok(())
    } else {
      writer.write_all(b", ")
    }
  }

  fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    writer.write_all(b": ")
  }

  fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
    // quotes, backslashes and C0 controls never reach here,
    // serde_json routes them through `write_char_escape`
    let mut start = 0;
    for (i, c) in fragment.char_indices() {
      if (' '..='~').contains(&c) {
        continue;
      }
      writer.write_all(fragment[start..i].as_bytes())?;
      let mut units = [0u16; 2];
      for unit in c.encode_utf16(&mut units) {
        write!(writer, "\\u{:04x}", unit)?;
      }
      start = i + c.len_utf8();
    }
    writer.write_all(fragment[start..].as_bytes())
  }
}

/// Serialize `value` with [`AsciiFormatter`].
pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
  let mut buf = Vec::new();
  let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
  value.serialize(&mut serializer)?;
  Ok(buf)
}

/// Standard alphabet with canonical padding, but non-zero trailing bits are accepted.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
  &alphabet::STANDARD,
  GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode standard base64, skipping bytes outside the alphabet
/// (line breaks, whitespace) instead of rejecting them.
pub fn decode_base64(data: &str) -> Result<Vec<u8>, DecodeError> {
  let filtered: Vec<u8> = data
    .bytes()
    .filter(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
    .collect();
  LENIENT.decode(filtered)
}

pub fn encode_base64(bytes: impl AsRef<[u8]>) -> String {
  general_purpose::STANDARD.encode(bytes)
}
