use crate::codec::{Codec, Decode};
use crate::endian::{convert_byte_order, machine_byte_order, FixedWidth};
use crate::error::CodecError;
use crate::io::text;
use crate::mode::{EncodingMode, WireFamily};
use anyhow::Result;
use std::any;
use std::io::{self, BufRead, ErrorKind, Read};

pub struct Reader<R: BufRead> {
    r: R,
    r_len: usize,
}

impl<R: BufRead> From<R> for Reader<R> {
    fn from(r: R) -> Self {
        Self { r, r_len: 0 }
    }
}

impl<R: BufRead> Reader<R> {
    pub fn into_inner(self) -> R {
        self.r
    }

    /// Total bytes consumed through this reader.
    pub fn r_len(&self) -> usize {
        self.r_len
    }

    /// Constructs a `T`, validating its type tag first if `mode` includes one.
    pub fn read_value<T: Decode>(&mut self, mode: EncodingMode) -> Result<T> {
        log::trace!(
            "Reading {} as {:?}, {:?}",
            T::type_name(),
            mode.wire_family(),
            mode.type_tag_policy()
        );
        self.with_type_tag::<T, _, _>(mode, |r, mode| match mode.wire_family() {
            WireFamily::Binary => T::decode_binary(r, mode),
            WireFamily::Text => T::decode_text(r, mode),
        })
    }

    /// Overwrites `dest`, validating its type tag first if `mode` includes one.
    pub fn read_in_place<T: Decode>(&mut self, dest: &mut T, mode: EncodingMode) -> Result<()> {
        log::trace!(
            "Reading {} in place as {:?}, {:?}",
            T::type_name(),
            mode.wire_family(),
            mode.type_tag_policy()
        );
        self.with_type_tag::<T, _, _>(mode, |r, mode| dest.decode_in_place(r, mode))
    }

    fn with_type_tag<T, F, X>(&mut self, mode: EncodingMode, read_body: F) -> Result<X>
    where
        T: Codec,
        F: FnOnce(&mut Self, EncodingMode) -> Result<X>,
    {
        if !mode.includes_type_tag() {
            return read_body(self, mode);
        }

        let inner_mode = mode.demoted();
        let expected = T::type_name();
        match mode.wire_family() {
            WireFamily::Binary => {
                let found = String::decode_binary(self, inner_mode)?;
                Self::verify_type_tag(expected, found)?;
                read_body(self, inner_mode)
            }
            WireFamily::Text => {
                self.skip_whitespace()?;
                let found = self.read_text_while(|b| b != b'(' && !b.is_ascii_whitespace())?;
                Self::verify_type_tag(expected, found)?;
                if T::PARENTHESIZED {
                    read_body(self, inner_mode)
                } else {
                    self.expect_punct("(")?;
                    let x = read_body(self, inner_mode)?;
                    self.expect_punct(")")?;
                    Ok(x)
                }
            }
        }
    }

    fn verify_type_tag(expected: String, found: String) -> Result<()> {
        if expected != found {
            log::debug!("Type tag mismatch. Expected {expected}, found {found}.");
            return Err(CodecError::TypeMismatch { expected, found }.into());
        }
        Ok(())
    }

    /* Binary primitives. */

    pub fn read_raw(&mut self, buf: &mut [u8]) -> Result<()> {
        self.r.read_exact(buf)?;
        self.r_len += buf.len();
        Ok(())
    }

    /// Reads exactly `len` bytes without trusting `len` for the up-front allocation.
    pub fn read_raw_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(super::PREALLOC_LIMIT));
        let r_len = (&mut self.r).take(len as u64).read_to_end(&mut buf)?;
        self.r_len += r_len;
        if r_len != len {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("{r_len} of {len} bytes available"),
            )
            .into());
        }
        Ok(buf)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_raw(&mut buf)?;
        Ok(buf[0])
    }

    /// Reads bytes in `mode`'s byte order and converts them to machine order.
    pub fn read_fixed<S: FixedWidth>(&mut self, mode: EncodingMode) -> Result<S> {
        let mut buf = S::Bytes::default();
        self.read_raw(buf.as_mut())?;
        let mut val = S::from_machine_bytes(buf);
        convert_byte_order(&mut val, mode.byte_order(), machine_byte_order());
        Ok(val)
    }

    /* Text primitives. */

    pub fn peek_byte(&mut self) -> Result<Option<u8>> {
        let buf = self.r.fill_buf()?;
        Ok(buf.first().copied())
    }

    fn consume(&mut self, amt: usize) {
        self.r.consume(amt);
        self.r_len += amt;
    }

    pub fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.peek_byte()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.consume(1);
        }
        Ok(())
    }

    /// Skips whitespace, then peeks.
    pub fn peek_punct(&mut self) -> Result<Option<u8>> {
        self.skip_whitespace()?;
        self.peek_byte()
    }

    /// Consumes the non-space characters of `punct` in order, skipping whitespace around each.
    pub fn expect_punct(&mut self, punct: &str) -> Result<()> {
        for expected in punct.bytes().filter(|b| !b.is_ascii_whitespace()) {
            match self.peek_punct()? {
                Some(b) if b == expected => self.consume(1),
                found => {
                    return Err(text::syntax_error(
                        format!("{:?}", expected as char),
                        found.map(|b| (b as char).to_string()).unwrap_or_default(),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Consumes a maximal run of bytes satisfying `pred`, which must be valid UTF-8.
    pub fn read_text_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> Result<String> {
        let mut buf = vec![];
        while let Some(b) = self.peek_byte()? {
            if !pred(b) {
                break;
            }
            buf.push(b);
            self.consume(1);
        }
        Ok(String::from_utf8(buf)?)
    }

    /// Skips whitespace, then reads up to the next delimiter, whitespace, or EOF.
    pub fn read_token(&mut self) -> Result<String> {
        self.skip_whitespace()?;
        self.read_text_while(|b| !text::is_delimiter(b))
    }

    /// Reads a token and parses it with `FromStr`.
    pub fn read_parsed_token<T: std::str::FromStr>(&mut self) -> Result<T> {
        let token = self.read_token()?;
        token
            .parse::<T>()
            .map_err(|_| text::syntax_error(any::type_name::<T>().to_string(), token))
    }

    /// Reads a literal enclosed in `quote`s and returns it unescaped.
    pub fn read_quoted(&mut self, quote: u8) -> Result<String> {
        self.expect_punct(&(quote as char).to_string())?;
        let mut buf = vec![];
        loop {
            let b = match self.peek_byte()? {
                None => {
                    return Err(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "EOF inside a quoted literal",
                    )
                    .into())
                }
                Some(b) => b,
            };
            self.consume(1);
            if b == quote {
                break;
            }
            if b != b'\\' {
                buf.push(b);
                continue;
            }

            let escaped = self.read_byte()?;
            match text::unescape_simple(escaped) {
                Some(c) => buf.push(c),
                None if escaped == b'u' => {
                    self.expect_punct("{")?;
                    let hex = self.read_text_while(|b| b.is_ascii_hexdigit())?;
                    self.expect_punct("}")?;
                    let c = u32::from_str_radix(&hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| text::syntax_error("a unicode escape".into(), hex))?;
                    let mut utf8 = [0u8; 4];
                    buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                }
                None => {
                    return Err(text::syntax_error(
                        "an escape sequence".into(),
                        (escaped as char).to_string(),
                    ))
                }
            }
        }
        Ok(String::from_utf8(buf)?)
    }

    /// Reads `(e0, e1, ...)`, handing each element to `sink`.
    pub fn read_text_list<T, F>(&mut self, mode: EncodingMode, mut sink: F) -> Result<()>
    where
        T: Decode,
        F: FnMut(T),
    {
        self.expect_punct("(")?;
        if self.peek_punct()? == Some(b')') {
            return self.expect_punct(")");
        }
        loop {
            sink(self.read_value::<T>(mode)?);
            match self.peek_punct()? {
                Some(b',') => self.expect_punct(",")?,
                Some(b')') => return self.expect_punct(")"),
                found => {
                    return Err(text::syntax_error(
                        "',' or ')'".into(),
                        found.map(|b| (b as char).to_string()).unwrap_or_default(),
                    ))
                }
            }
        }
    }
}
