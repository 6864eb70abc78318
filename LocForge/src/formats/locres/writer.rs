//! `.locres` file writing

use byteorder::{LittleEndian, WriteBytesExt};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::strings::write_ue_string;
use super::{LOCRES_MAGIC, LocresResource};
use crate::error::Result;

/// Deduplicated localized string array, built in first-use order.
///
/// The engine assigns indices on first use while walking namespaces in
/// file order; reproducing that walk keeps re-encoded containers
/// byte-identical to engine output.
struct LocalizedStringArray {
    strings: Vec<(String, i32)>,
    indices: HashMap<String, i32>,
}

impl LocalizedStringArray {
    fn new() -> Self {
        Self {
            strings: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Add a string, returning its index and bumping its refcount.
    fn add(&mut self, text: &str) -> i32 {
        if let Some(&idx) = self.indices.get(text) {
            self.strings[idx as usize].1 += 1;
            return idx;
        }
        let idx = self.strings.len() as i32;
        self.strings.push((text.to_string(), 1));
        self.indices.insert(text.to_string(), idx);
        idx
    }
}

/// Write a .locres file to disk
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_locres<P: AsRef<Path>>(path: P, resource: &LocresResource) -> Result<()> {
    let bytes = locres_to_bytes(resource)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Serialize a container back to its binary layout.
///
/// Structural fields the merge never touches (key hashes, source hashes,
/// namespace and entry order) are re-emitted verbatim; the entry count,
/// string array and its offset are recomputed, so
/// `locres_to_bytes(parse_locres_bytes(b)?) == b` holds for any
/// engine-written container.
pub fn locres_to_bytes(resource: &LocresResource) -> Result<Vec<u8>> {
    let version = resource.version;
    let mut out: Vec<u8> = Vec::new();

    out.extend_from_slice(&LOCRES_MAGIC);
    out.write_u8(version.as_byte())?;

    // String array offset placeholder, backpatched once the tables are out
    let offset_field = out.len();
    out.write_i64::<LittleEndian>(-1)?;

    if version.is_optimized() {
        out.write_u32::<LittleEndian>(resource.entry_count() as u32)?;
    }

    let mut array = LocalizedStringArray::new();

    out.write_u32::<LittleEndian>(resource.namespaces.len() as u32)?;
    for namespace in &resource.namespaces {
        if version.is_optimized() {
            out.write_u32::<LittleEndian>(namespace.key_hash)?;
        }
        write_ue_string(&mut out, &namespace.name)?;

        out.write_u32::<LittleEndian>(namespace.entries.len() as u32)?;
        for entry in &namespace.entries {
            if version.is_optimized() {
                out.write_u32::<LittleEndian>(entry.key_hash)?;
            }
            write_ue_string(&mut out, &entry.key)?;
            out.write_u32::<LittleEndian>(entry.source_hash)?;
            out.write_i32::<LittleEndian>(array.add(&entry.translation))?;
        }
    }

    let array_offset = out.len() as i64;
    out.write_i32::<LittleEndian>(array.strings.len() as i32)?;
    for (text, refcount) in &array.strings {
        write_ue_string(&mut out, text)?;
        if version.is_optimized() {
            out.write_i32::<LittleEndian>(*refcount)?;
        }
    }
    out[offset_field..offset_field + 8].copy_from_slice(&array_offset.to_le_bytes());

    tracing::debug!(
        "encoded locres container: {} namespaces, {} entries, {} unique strings",
        resource.namespaces.len(),
        resource.entry_count(),
        array.strings.len()
    );
    Ok(out)
}
