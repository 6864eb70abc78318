//! Unreal length-prefixed string serialization
//!
//! Strings carry an `i32` length prefix counting the NUL terminator:
//! positive for 8-bit data, negative for UTF-16LE code units, zero for the
//! empty string. The engine writes pure-ASCII text in the 8-bit form and
//! everything else as UTF-16LE; re-applying that policy on encode keeps
//! engine-written containers byte-identical.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

use crate::error::{Error, Result};

/// Read one length-prefixed string from the cursor.
pub fn read_ue_string(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let len = cursor.read_i32::<LittleEndian>()?;
    if len == 0 {
        return Ok(String::new());
    }

    let remaining = cursor
        .get_ref()
        .len()
        .saturating_sub(cursor.position() as usize);

    if len > 0 {
        let len = len as usize;
        if len > remaining {
            return Err(Error::UnexpectedEof);
        }
        let mut bytes = vec![0u8; len];
        cursor.read_exact(&mut bytes)?;
        // Drop the NUL terminator
        bytes.pop();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    } else {
        let units = i64::from(len).unsigned_abs() as usize;
        if units * 2 > remaining {
            return Err(Error::UnexpectedEof);
        }
        let mut data = vec![0u16; units];
        for unit in &mut data {
            *unit = cursor.read_u16::<LittleEndian>()?;
        }
        // Drop the NUL terminator
        data.pop();
        Ok(String::from_utf16_lossy(&data))
    }
}

/// Write one length-prefixed string.
pub fn write_ue_string<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    if text.is_empty() {
        writer.write_i32::<LittleEndian>(0)?;
        return Ok(());
    }

    if text.is_ascii() {
        writer.write_i32::<LittleEndian>(text.len() as i32 + 1)?;
        writer.write_all(text.as_bytes())?;
        writer.write_u8(0)?;
    } else {
        let units: Vec<u16> = text.encode_utf16().collect();
        writer.write_i32::<LittleEndian>(-(units.len() as i32 + 1))?;
        for unit in units {
            writer.write_u16::<LittleEndian>(unit)?;
        }
        writer.write_u16::<LittleEndian>(0)?;
    }
    Ok(())
}
