//! # LocForge
//!
//! A pure-Rust toolkit for shipping game translations: merge translated
//! strings back into Unreal Engine `.locres` localization containers, and
//! bundle content directories into `.pak` archives through an external
//! packer.
//!
//! ## Merging translations
//!
//! ```no_run
//! use locforge::formats::locres::{read_locres, write_locres};
//! use locforge::merge::merge_translations;
//! use locforge::translation::load_strings_csv;
//!
//! let table = load_strings_csv("Game_strings.csv")?;
//! let mut resource = read_locres("Game.locres")?;
//!
//! let report = merge_translations(&mut resource, &table);
//! println!("updated {} of {} entries", report.updated, report.total);
//!
//! write_locres("Game_ru.locres", &resource)?;
//! # Ok::<(), locforge::Error>(())
//! ```
//!
//! ## Packing a content tree
//!
//! ```no_run
//! use locforge::pak::{PackOptions, pack_directory};
//!
//! pack_directory("mods/ru", "output/ru.pak", &PackOptions::default())?;
//! # Ok::<(), locforge::Error>(())
//! ```

pub mod error;
pub mod formats;
pub mod merge;
pub mod pak;
pub mod translation;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::locres::{
        LocresEntry, LocresNamespace, LocresResource, LocresVersion, locres_to_bytes,
        parse_locres_bytes, read_locres, write_locres,
    };
    pub use crate::merge::{MergeReport, TranslationTable, merge_translations, stable_id};
    pub use crate::pak::{PackOptions, pack_directory};
    pub use crate::translation::load_strings_csv;
}
