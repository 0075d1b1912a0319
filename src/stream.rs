//! # Textual I/O (feature `streams`)
//!
//! - [`Outputs`]: `Display` on the wrapper, forwarding to `V`'s `Display` (width,
//!   precision and fill flags included), plus [`write`] onto an `io::Write`.
//! - [`Inputs`]: `FromStr` on the wrapper with `V`'s own error type, plus [`read`] of
//!   one whitespace-delimited token from an `io::BufRead`.
//!
//! Neither adds validation of its own: a value that `V` cannot format or parse fails
//! exactly the way `V` does.

use core::fmt;
use core::str::FromStr;

use crate::capability::{Inputs, Outputs};
use crate::strong::{get, Strong};

impl<Tag: Outputs, V: fmt::Display> fmt::Display for Strong<Tag, V> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(get(self), f)
    }
}

impl<Tag: Inputs, V: FromStr> FromStr for Strong<Tag, V> {
    type Err = V::Err;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        V::from_str(s).map(Strong::new)
    }
}

#[cfg(feature = "std")]
pub use self::io_stream::{read, write};

#[cfg(feature = "std")]
mod io_stream {
    use std::error::Error;
    use std::io::{self, BufRead, ErrorKind, Write};
    use std::str::{self, FromStr};

    use crate::capability::{Inputs, Outputs};
    use crate::strong::{get, get_mut, Strong};

    /// Write the underlying value to `stream` with `V`'s `Display`, returning the
    /// stream for chaining.
    pub fn write<'s, W, Tag, V>(stream: &'s mut W, value: &Strong<Tag, V>) -> io::Result<&'s mut W>
    where
        W: Write + ?Sized,
        Tag: Outputs,
        V: core::fmt::Display,
    {
        write!(stream, "{}", get(value))?;
        Ok(stream)
    }

    /// Read one whitespace-delimited token from `stream` and parse it into `value`,
    /// returning the stream for chaining.
    ///
    /// Leading ASCII whitespace is skipped; the delimiter after the token is left in
    /// the stream. On failure `value` is left untouched:
    /// - no token before end of input: [`ErrorKind::UnexpectedEof`];
    /// - token is not UTF-8 or `V` rejects it: [`ErrorKind::InvalidData`] carrying the
    ///   underlying error.
    pub fn read<'s, R, Tag, V>(stream: &'s mut R, value: &mut Strong<Tag, V>) -> io::Result<&'s mut R>
    where
        R: BufRead + ?Sized,
        Tag: Inputs,
        V: FromStr,
        V::Err: Into<Box<dyn Error + Send + Sync>>,
    {
        let token = read_token(stream)?;
        if token.is_empty() {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "no token before end of input"));
        }
        let text = str::from_utf8(&token).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        let parsed = V::from_str(text).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        *get_mut(value) = parsed;
        Ok(stream)
    }

    fn read_token<R: BufRead + ?Sized>(stream: &mut R) -> io::Result<Vec<u8>> {
        let mut token = Vec::new();
        loop {
            let (used, done) = {
                let buf = match stream.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    break;
                }
                let mut used = 0;
                let mut done = false;
                for &byte in buf {
                    if byte.is_ascii_whitespace() {
                        if token.is_empty() {
                            used += 1;
                            continue;
                        }
                        done = true;
                        break;
                    }
                    token.push(byte);
                    used += 1;
                }
                (used, done)
            };
            stream.consume(used);
            if done {
                break;
            }
        }
        Ok(token)
    }
}
