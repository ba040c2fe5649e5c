//! Whitespace-delimited token I/O for [`BigUint`].

use std::io::{self, BufRead, Write};

use crate::BigUint;

/// Read one whitespace-delimited token from `reader` and parse it.
///
/// Leading ASCII whitespace is skipped. Returns `Ok(None)` if the input ends
/// before a token starts. A malformed token surfaces as
/// [`io::ErrorKind::InvalidData`] wrapping the [`crate::BigUintError`]; the
/// token is consumed either way.
///
/// ```
/// use std::io::Cursor;
/// use decbig::read_biguint;
///
/// let mut input = Cursor::new("  12 000345\n");
/// assert_eq!(read_biguint(&mut input).unwrap().unwrap().to_string(), "12");
/// assert_eq!(read_biguint(&mut input).unwrap().unwrap().to_string(), "345");
/// assert!(read_biguint(&mut input).unwrap().is_none());
/// ```
pub fn read_biguint<R: BufRead>(reader: &mut R) -> io::Result<Option<BigUint>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(b);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    let text = String::from_utf8(token).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    text.parse::<BigUint>()
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the decimal rendering of `value` to `writer`.
pub fn write_biguint<W: Write>(writer: &mut W, value: &BigUint) -> io::Result<()> {
    writer.write_all(value.to_decimal_string().as_bytes())
}
