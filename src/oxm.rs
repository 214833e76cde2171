//! OpenFlow Extensible Match (OXM) TLV headers.
//!
//! The header is one big-endian 32-bit word:
//!
//! ```text
//!  31            16 15      9   8   7        0
//! +----------------+---------+----+----------+
//! |     class      |  field  |mask|  length  |
//! +----------------+---------+----+----------+
//! ```
//!
//! Class, field and mask bit together form the "masked type" used for table lookups.

use crate::bits::{bit, field, set_field, test_bit};
use crate::object_id::ObjectId;
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::type_maps::TranslationTables;
use crate::wire_object::WireObject;

pub const OXM_HDR_OFFSET: usize = 0;

/// OXM class of the OpenFlow basic match fields.
pub const OFPXMC_OPENFLOW_BASIC: u16 = 0x8000;

const LENGTH_SHIFT: u32 = 0;
const LENGTH_BITS: u32 = 8;
const HASMASK_BIT: u32 = 8;
const FIELD_SHIFT: u32 = 9;
const FIELD_BITS: u32 = 7;
const CLASS_SHIFT: u32 = 16;
const CLASS_BITS: u32 = 16;
const MASKED_TYPE_SHIFT: u32 = 8;
const MASKED_TYPE_BITS: u32 = 24;

/// Packed OXM type-length header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OxmHeader(u32);

impl OxmHeader {
    pub fn new(class: u16, field_num: u8, has_mask: bool, length: u8) -> OxmHeader {
        let x = set_field(0, CLASS_SHIFT, CLASS_BITS, class as u32);
        let x = set_field(x, FIELD_SHIFT, FIELD_BITS, field_num as u32);
        let x = bit(HASMASK_BIT, x, has_mask);
        OxmHeader(set_field(x, LENGTH_SHIFT, LENGTH_BITS, length as u32))
    }

    pub fn from_wire(word: u32) -> OxmHeader {
        OxmHeader(word)
    }

    pub fn to_wire(self) -> u32 {
        self.0
    }

    pub fn class(self) -> u16 {
        field(self.0, CLASS_SHIFT, CLASS_BITS) as u16
    }

    pub fn field(self) -> u8 {
        field(self.0, FIELD_SHIFT, FIELD_BITS) as u8
    }

    pub fn has_mask(self) -> bool {
        test_bit(HASMASK_BIT, self.0)
    }

    /// Payload length in bytes, header excluded.
    pub fn length(self) -> u8 {
        field(self.0, LENGTH_SHIFT, LENGTH_BITS) as u8
    }

    /// Class, field and mask bit as one 24-bit value.
    pub fn masked_type(self) -> u32 {
        field(self.0, MASKED_TYPE_SHIFT, MASKED_TYPE_BITS)
    }

    pub fn with_length(self, length: u8) -> OxmHeader {
        OxmHeader(set_field(self.0, LENGTH_SHIFT, LENGTH_BITS, length as u32))
    }

    pub fn with_masked_type(self, masked_type: u32) -> OxmHeader {
        OxmHeader(set_field(self.0, MASKED_TYPE_SHIFT, MASKED_TYPE_BITS, masked_type))
    }
}

fn read_header(obj: &WireObject) -> TypeMapResult<OxmHeader> {
    obj.read_u32(OXM_HDR_OFFSET).map(OxmHeader::from_wire)
}

fn write_header(obj: &WireObject, hdr: OxmHeader) -> TypeMapResult<()> {
    obj.write_u32(OXM_HDR_OFFSET, hdr.to_wire())
}

/// Get the payload length of an OXM object from the wire buffer.
pub fn wire_length(obj: &WireObject) -> TypeMapResult<usize> {
    read_header(obj).map(|h| h.length() as usize)
}

/// Set the payload length of an OXM object, keeping the masked type bits.
pub fn set_wire_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    if bytes > u8::MAX as usize {
        return Err(TypeMapError::LengthOutOfRange {
            length: bytes,
            bits: LENGTH_BITS,
        });
    }
    let hdr = read_header(obj)?;
    write_header(obj, hdr.with_length(bytes as u8))
}

/// Get the object ID of an OXM object from its wire masked type.
pub fn wire_object_id(tables: &TranslationTables, obj: &WireObject) -> TypeMapResult<ObjectId> {
    let hdr = read_header(obj)?;
    tables.oxm_object_id(obj.version(), hdr.masked_type())
}

/// Set the masked type of an OXM object from `id`, keeping the length bits.
pub fn set_wire_object_id(tables: &TranslationTables,
                          obj: &WireObject,
                          id: ObjectId)
                          -> TypeMapResult<()> {
    if !id.is_oxm() {
        return Err(TypeMapError::NotOxm(id));
    }
    let masked_type = tables.oxm_masked_type(obj.version(), id)
        .ok_or(TypeMapError::UnmappedObject {
            id: id,
            version: obj.version(),
        })?;
    let hdr = read_header(obj)?;
    write_header(obj, hdr.with_masked_type(masked_type))
}
