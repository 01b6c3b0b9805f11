use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// The single JSON line printed on stdout when a run ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusLine {
    Success { success: bool, output: String },
    Failure { error: String },
}

impl StatusLine {
    pub fn success(output: impl Into<String>) -> Self {
        StatusLine::Success {
            success: true,
            output: output.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        StatusLine::Failure {
            error: message.into(),
        }
    }

    /// Serialize as `{"key": value, ...}` with ASCII-only output, the form
    /// line-oriented supervisors expect regardless of their stdout encoding.
    pub fn to_json_line(&self) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        match self.serialize(&mut ser) {
            Ok(()) => String::from_utf8(buf)
                .unwrap_or_else(|_| String::from(r#"{"error": "invalid status encoding"}"#)),
            Err(_) => String::from(r#"{"error": "failed to serialize status"}"#),
        }
    }
}

/// Compact JSON with `", "` and `": "` separators and non-ASCII escaped.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
