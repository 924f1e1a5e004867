//! Primitive wire types.
//!
//! Only the non-flexible (pre-KIP-482) encodings are implemented: every
//! request/response in this crate uses a plain `RequestHeader`/`ResponseHeader`
//! rather than the tagged-fields "flexible" versions, which keeps this layer
//! small without changing any of the broker-level semantics this crate is
//! actually about.
//!
//! # References
//! - <https://kafka.apache.org/protocol#protocol_types>

use std::io::{Read, Write};

use super::traits::{ReadError, ReadType, WriteError, WriteType};

impl<R: Read> ReadType<R> for bool {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf)?;
        Ok(buf[0] != 0)
    }
}

impl<W: Write> WriteType<W> for bool {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        writer.write_all(&[*self as u8])?;
        Ok(())
    }
}

impl<R: Read> ReadType<R> for i8 {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf)?;
        Ok(i8::from_be_bytes(buf))
    }
}

impl<W: Write> WriteType<W> for i8 {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl<R: Read> ReadType<R> for i16 {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }
}

impl<W: Write> WriteType<W> for i16 {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl<R: Read> ReadType<R> for i32 {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }
}

impl<W: Write> WriteType<W> for i32 {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl<R: Read> ReadType<R> for i64 {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let mut buf = [0u8; 8];
        reader.read_exact(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }
}

impl<W: Write> WriteType<W> for i64 {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

/// `NULLABLE_STRING`: an `i16` length prefix, `-1` meaning null.
impl<R: Read> ReadType<R> for Option<String> {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i16::read(reader)?;
        match len {
            l if l < -1 => Err(ReadError::Malformed(
                format!("invalid negative length for nullable string: {l}").into(),
            )),
            -1 => Ok(None),
            l => {
                let len = usize::try_from(l)?;
                let mut buf = vec![0u8; len];
                reader.read_exact(&mut buf)?;
                let s = String::from_utf8(buf).map_err(|e| ReadError::Malformed(Box::new(e)))?;
                Ok(Some(s))
            }
        }
    }
}

impl<W: Write> WriteType<W> for Option<String> {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        match self {
            Some(s) => s.write(writer),
            None => (-1i16).write(writer),
        }
    }
}

/// `STRING`: an `i16` length prefix, always present.
impl<R: Read> ReadType<R> for String {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i16::read(reader)?;
        let len = usize::try_from(len).map_err(|e| ReadError::Malformed(Box::new(e)))?;
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        String::from_utf8(buf).map_err(|e| ReadError::Malformed(Box::new(e)))
    }
}

impl<W: Write> WriteType<W> for String {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        let len = i16::try_from(self.len()).map_err(WriteError::Overflow)?;
        len.write(writer)?;
        writer.write_all(self.as_bytes())?;
        Ok(())
    }
}

/// `NULLABLE_BYTES`: an `i32` length prefix, `-1` meaning null.
impl<R: Read> ReadType<R> for Option<Vec<u8>> {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i32::read(reader)?;
        match len {
            l if l < -1 => Err(ReadError::Malformed(
                format!("invalid negative length for nullable bytes: {l}").into(),
            )),
            -1 => Ok(None),
            l => {
                let len = usize::try_from(l)?;
                let mut buf = vec![0u8; len];
                reader.read_exact(&mut buf)?;
                Ok(Some(buf))
            }
        }
    }
}

impl<W: Write> WriteType<W> for Option<Vec<u8>> {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        match self {
            Some(buf) => {
                let l = i32::try_from(buf.len()).map_err(|e| WriteError::Malformed(Box::new(e)))?;
                l.write(writer)?;
                writer.write_all(buf)?;
                Ok(())
            }
            None => (-1i32).write(writer),
        }
    }
}

/// `BYTES`: an `i32` length prefix, never null.
impl<R: Read> ReadType<R> for Vec<u8> {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i32::read(reader)?;
        if len < 0 {
            return Err(ReadError::Malformed(
                format!("invalid length for bytes: {len}").into(),
            ));
        }
        let len = usize::try_from(len)?;
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}

impl<W: Write> WriteType<W> for Vec<u8> {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        let len = i32::try_from(self.len()).map_err(|e| WriteError::Malformed(Box::new(e)))?;
        len.write(writer)?;
        writer.write_all(self)?;
        Ok(())
    }
}

/// `ARRAY<STRING>`: an `i32` length prefix, `-1` treated like an empty array
/// (we never round-trip the null/empty distinction for string arrays).
impl<R: Read> ReadType<R> for Vec<String> {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i32::read(reader)?;
        if len < 0 {
            return Ok(vec![]);
        }
        let len = usize::try_from(len)?;
        let mut v = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            v.push(String::read(reader)?);
        }
        Ok(v)
    }
}

impl<W: Write> WriteType<W> for Vec<String> {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        let len = i32::try_from(self.len())?;
        len.write(writer)?;
        for item in self {
            item.write(writer)?;
        }
        Ok(())
    }
}

impl<R: Read> ReadType<R> for Vec<i32> {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i32::read(reader)?;
        if len < 0 {
            return Ok(vec![]);
        }
        let len = usize::try_from(len)?;
        let mut v = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            v.push(i32::read(reader)?);
        }
        Ok(v)
    }
}

impl<W: Write> WriteType<W> for Vec<i32> {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        let len = i32::try_from(self.len())?;
        len.write(writer)?;
        for item in self {
            item.write(writer)?;
        }
        Ok(())
    }
}

impl<R: Read> ReadType<R> for Vec<i64> {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let len = i32::read(reader)?;
        if len < 0 {
            return Ok(vec![]);
        }
        let len = usize::try_from(len)?;
        let mut v = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            v.push(i64::read(reader)?);
        }
        Ok(v)
    }
}

impl<W: Write> WriteType<W> for Vec<i64> {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        let len = i32::try_from(self.len())?;
        len.write(writer)?;
        for item in self {
            item.write(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip<T>(value: T)
    where
        T: WriteType<Vec<u8>> + ReadType<Cursor<Vec<u8>>> + PartialEq + std::fmt::Debug,
    {
        let mut buf = Vec::new();
        value.write(&mut buf).unwrap();
        let restored = T::read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(value, restored);
    }

    #[test]
    fn bool_roundtrip() {
        roundtrip(true);
        roundtrip(false);
    }

    #[test]
    fn bool_nonzero_is_true() {
        assert!(bool::read(&mut Cursor::new(vec![42])).unwrap());
    }

    #[test]
    fn integers_roundtrip() {
        roundtrip(7i8);
        roundtrip(-7i16);
        roundtrip(123_456i32);
        roundtrip(9_000_000_000_i64);
    }

    #[test]
    fn string_roundtrip() {
        roundtrip("hello kafka".to_string());
    }

    #[test]
    fn nullable_string_roundtrip() {
        roundtrip(Some("hi".to_string()));
        roundtrip(None::<String>);
    }

    #[test]
    fn nullable_string_rejects_bad_length() {
        let mut buf = Vec::new();
        (-2i16).write(&mut buf).unwrap();
        let err = Option::<String>::read(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, ReadError::Malformed(_)));
    }

    #[test]
    fn bytes_roundtrip() {
        roundtrip(vec![1u8, 2, 3]);
        roundtrip(Some(vec![4u8, 5]));
        roundtrip(None::<Vec<u8>>);
    }

    #[test]
    fn string_array_treats_negative_length_as_empty() {
        let mut buf = Vec::new();
        (-1i32).write(&mut buf).unwrap();
        let got = Vec::<String>::read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(got, Vec::<String>::new());
    }
}
