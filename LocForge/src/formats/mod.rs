//! File format handlers for Unreal Engine containers

pub mod locres;

// Re-export main container types
pub use locres::{
    LocresEntry, LocresNamespace, LocresResource, LocresVersion, locres_to_bytes,
    parse_locres_bytes, read_locres, write_locres,
};
