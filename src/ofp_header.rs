use std::fmt;
use std::mem::size_of;

use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::wire_buffer::WireBuffer;

/// OpenFlow protocol versions understood by the type maps.
///
/// Discriminants are the `version` byte of the message header, so ordering by
/// discriminant is ordering by protocol revision.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OfpVersion {
    V1_0 = 0x01,
    V1_1 = 0x02,
    V1_2 = 0x03,
    V1_3 = 0x04,
}

impl OfpVersion {
    pub const ALL: [OfpVersion; 4] = [OfpVersion::V1_0,
                                      OfpVersion::V1_1,
                                      OfpVersion::V1_2,
                                      OfpVersion::V1_3];

    /// Map a header `version` byte to an `OfpVersion`.
    pub fn of_wire(v: u8) -> TypeMapResult<OfpVersion> {
        match v {
            0x01 => Ok(OfpVersion::V1_0),
            0x02 => Ok(OfpVersion::V1_1),
            0x03 => Ok(OfpVersion::V1_2),
            0x04 => Ok(OfpVersion::V1_3),
            v => Err(TypeMapError::UnsupportedVersion(v)),
        }
    }

    /// Return the header `version` byte.
    pub fn wire(self) -> u8 {
        self as u8
    }

    /// Dense index for per-version tables.
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for OfpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            OfpVersion::V1_0 => f.write_str("OpenFlow 1.0"),
            OfpVersion::V1_1 => f.write_str("OpenFlow 1.1"),
            OfpVersion::V1_2 => f.write_str("OpenFlow 1.2"),
            OfpVersion::V1_3 => f.write_str("OpenFlow 1.3"),
        }
    }
}

/// OpenFlow Header
///
/// The first fields of every OpenFlow message, no matter the protocol version.
/// This is parsed to determine version and length of the remaining message, so that
/// it can be properly handled.
#[repr(C)]
pub struct OfpHeader {
    version: u8,
    typ: u8,
    length: u16,
    xid: u32,
}

impl OfpHeader {
    /// Byte offset of the `version` field.
    pub const VERSION_OFFSET: usize = 0;
    /// Byte offset of the `type` field.
    pub const TYPE_OFFSET: usize = 1;
    /// Byte offset of the `length` field.
    pub const LENGTH_OFFSET: usize = 2;
    /// Byte offset of the `xid` field.
    pub const XID_OFFSET: usize = 4;

    /// Create an `OfpHeader` out of the arguments.
    pub fn new(version: u8, typ: u8, length: u16, xid: u32) -> OfpHeader {
        OfpHeader {
            version: version,
            typ: typ,
            length: length,
            xid: xid,
        }
    }

    /// Return the byte-size of an `OfpHeader`.
    pub fn size() -> usize {
        size_of::<OfpHeader>()
    }

    /// Fills the start of a wire buffer at `offset` with the header fields of an `OfpHeader`.
    pub fn marshal(buf: &mut WireBuffer, offset: usize, header: &OfpHeader) -> TypeMapResult<()> {
        buf.set_u8(offset + Self::VERSION_OFFSET, header.version)?;
        buf.set_u8(offset + Self::TYPE_OFFSET, header.typ)?;
        buf.set_u16(offset + Self::LENGTH_OFFSET, header.length)?;
        buf.set_u32(offset + Self::XID_OFFSET, header.xid)
    }

    /// Reads an `OfpHeader` from the wire buffer at `offset`.
    pub fn parse(buf: &WireBuffer, offset: usize) -> TypeMapResult<OfpHeader> {
        Ok(OfpHeader {
            version: buf.get_u8(offset + Self::VERSION_OFFSET)?,
            typ: buf.get_u8(offset + Self::TYPE_OFFSET)?,
            length: buf.get_u16(offset + Self::LENGTH_OFFSET)?,
            xid: buf.get_u32(offset + Self::XID_OFFSET)?,
        })
    }

    /// Return the `version` field of a header.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Return the raw OpenFlow message type code of a header.
    pub fn type_code(&self) -> u8 {
        self.typ
    }

    /// Return the `length` field of a header. Includes the length of the header itself.
    pub fn length(&self) -> usize {
        self.length as usize
    }

    /// Return the `xid` field of a header, the transaction id associated with this packet.
    ///  Replies use the same id to facilitate pairing.
    pub fn xid(&self) -> u32 {
        self.xid
    }
}
