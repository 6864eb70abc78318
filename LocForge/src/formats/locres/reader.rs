//! `.locres` file reading and parsing

use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use super::strings::read_ue_string;
use super::{LOCRES_MAGIC, LocresEntry, LocresNamespace, LocresResource, LocresVersion};
use crate::error::{Error, Result};

/// Read a .locres file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::InvalidLocresMagic`] if the file does not start with the
/// locres magic GUID.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InvalidLocresMagic`]: crate::Error::InvalidLocresMagic
pub fn read_locres<P: AsRef<Path>>(path: P) -> Result<LocresResource> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_locres_bytes(&buffer)
}

/// Parse .locres data from bytes
///
/// # Errors
///
/// Returns [`Error::InvalidLocresMagic`] for a missing magic GUID,
/// [`Error::UnsupportedLocresVersion`] for an unknown version byte, and
/// [`Error::Io`] / [`Error::UnexpectedEof`] for truncated data.
///
/// [`Error::InvalidLocresMagic`]: crate::Error::InvalidLocresMagic
/// [`Error::UnsupportedLocresVersion`]: crate::Error::UnsupportedLocresVersion
/// [`Error::Io`]: crate::Error::Io
/// [`Error::UnexpectedEof`]: crate::Error::UnexpectedEof
pub fn parse_locres_bytes(data: &[u8]) -> Result<LocresResource> {
    let mut cursor = Cursor::new(data);

    let mut magic = [0u8; 16];
    cursor.read_exact(&mut magic)?;
    if magic != LOCRES_MAGIC {
        return Err(Error::InvalidLocresMagic(magic));
    }

    let version = LocresVersion::from_byte(cursor.read_u8()?)?;

    // Offset of the deduplicated string array, -1 when absent
    let array_offset = cursor.read_i64::<LittleEndian>()?;
    let localized_strings = if array_offset >= 0 {
        let table_start = cursor.position();
        cursor.seek(SeekFrom::Start(array_offset as u64))?;
        let localized_strings = read_string_array(&mut cursor, version)?;
        cursor.seek(SeekFrom::Start(table_start))?;
        localized_strings
    } else {
        Vec::new()
    };

    // Total entry count; recomputed on encode
    if version.is_optimized() {
        let _entries_count = cursor.read_u32::<LittleEndian>()?;
    }

    let namespace_count = cursor.read_u32::<LittleEndian>()? as usize;
    let mut namespaces = Vec::with_capacity(namespace_count);

    for _ in 0..namespace_count {
        let key_hash = if version.is_optimized() {
            cursor.read_u32::<LittleEndian>()?
        } else {
            0
        };
        let name = read_ue_string(&mut cursor)?;

        let key_count = cursor.read_u32::<LittleEndian>()? as usize;
        let mut entries = Vec::with_capacity(key_count);

        for _ in 0..key_count {
            let entry_key_hash = if version.is_optimized() {
                cursor.read_u32::<LittleEndian>()?
            } else {
                0
            };
            let key = read_ue_string(&mut cursor)?;
            let source_hash = cursor.read_u32::<LittleEndian>()?;

            let string_index = cursor.read_i32::<LittleEndian>()?;
            let translation = usize::try_from(string_index)
                .ok()
                .and_then(|idx| localized_strings.get(idx))
                .ok_or(Error::InvalidStringIndex(string_index))?
                .clone();

            entries.push(LocresEntry {
                key,
                key_hash: entry_key_hash,
                source_hash,
                translation,
            });
        }

        namespaces.push(LocresNamespace {
            name,
            key_hash,
            entries,
        });
    }

    let resource = LocresResource {
        version,
        namespaces,
    };
    tracing::debug!(
        "parsed locres container: {} namespaces, {} entries",
        resource.namespaces.len(),
        resource.entry_count()
    );
    Ok(resource)
}

/// Read the localized string array at the end of the file.
fn read_string_array(
    cursor: &mut Cursor<&[u8]>,
    version: LocresVersion,
) -> Result<Vec<String>> {
    let count = cursor.read_i32::<LittleEndian>()?;
    let count = usize::try_from(count)
        .map_err(|_| Error::InvalidFormat(format!("negative string array count: {count}")))?;

    let mut localized_strings = Vec::with_capacity(count);
    for _ in 0..count {
        let text = read_ue_string(cursor)?;
        if version.is_optimized() {
            // Refcount; recomputed on encode
            let _refcount = cursor.read_i32::<LittleEndian>()?;
        }
        localized_strings.push(text);
    }
    Ok(localized_strings)
}
