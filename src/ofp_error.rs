use thiserror::Error;

use crate::object_id::{Family, ObjectId};
use crate::ofp_header::OfpVersion;

/// Result type for wire type and length resolution.
pub type TypeMapResult<T> = Result<T, TypeMapError>;

/// Contract violations detected while resolving wire types and lengths.
///
/// None of these are recoverable parse errors: they mean the caller handed this layer a
/// handle or value it promised not to, or that the translation tables are incomplete.
/// Every accessor checks its preconditions before writing, so an `Err` leaves the buffer
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeMapError {
    #[error("wire object {id:?} has no wire buffer attached")]
    NoBuffer { id: ObjectId },

    #[error("access of {width} bytes at offset {offset} exceeds wire buffer length {extent}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        extent: usize,
    },

    #[error("unsupported OpenFlow version byte {0:#04x}")]
    UnsupportedVersion(u8),

    #[error("{family} wire type {wire_type:#06x} is out of range for {version}")]
    WireTypeOutOfRange {
        family: Family,
        version: OfpVersion,
        wire_type: u16,
    },

    #[error("{family} wire type {wire_type:#06x} has no object mapping for {version}")]
    UnmappedWireType {
        family: Family,
        version: OfpVersion,
        wire_type: u16,
    },

    #[error("{id:?} has no wire type for {version}")]
    UnmappedObject { id: ObjectId, version: OfpVersion },

    #[error("OXM masked type {masked_type:#08x} has no object mapping for {version}")]
    UnmappedOxm { masked_type: u32, version: OfpVersion },

    #[error("{0:?} is not an OXM object")]
    NotOxm(ObjectId),

    #[error("length {length} does not fit in a {bits}-bit length field")]
    LengthOutOfRange { length: usize, bits: u32 },

    #[error("{0:?} requires a parent object")]
    MissingParent(ObjectId),

    #[error("{id:?} requires a {expected:?} parent, found {found:?}")]
    WrongParent {
        id: ObjectId,
        expected: ObjectId,
        found: ObjectId,
    },

    #[error("{id:?} length {length} is shorter than its fixed header of {fixed} bytes")]
    LengthUnderflow {
        id: ObjectId,
        length: usize,
        fixed: usize,
    },

    #[error("no fixed length registered for {id:?} at {version}")]
    UnknownFixedLength { id: ObjectId, version: OfpVersion },

    #[error("length of {0:?} is derived from its parent and cannot be set")]
    ReadOnlyLength(ObjectId),

    #[error("{0:?} carries no wire type field")]
    NoWireIdentity(ObjectId),
}
