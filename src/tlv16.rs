//! Objects that start with a 16-bit type followed by a 16-bit length: actions, action IDs,
//! instructions, queue properties, table feature properties, meter bands and hello
//! elements.

use crate::extension::{extension_object_id, set_extension_object_id};
use crate::object_id::{Family, ObjectId};
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::type_maps::{TranslationTables, EXPERIMENTER_TYPE};
use crate::wire_object::WireObject;

pub const TLV16_WIRE_TYPE_OFFSET: usize = 0;
pub const TLV16_WIRE_LENGTH_OFFSET: usize = 2;

/// Get the length field from the wire.
pub fn wire_length(obj: &WireObject) -> TypeMapResult<usize> {
    obj.read_u16(TLV16_WIRE_LENGTH_OFFSET).map(|v| v as usize)
}

/// Set the length field in the wire buffer.
pub fn set_wire_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    obj.write_u16(TLV16_WIRE_LENGTH_OFFSET, u16_length(bytes)?)
}

/// Narrow a length for a 16-bit length field.
pub(crate) fn u16_length(bytes: usize) -> TypeMapResult<u16> {
    if bytes > u16::MAX as usize {
        Err(TypeMapError::LengthOutOfRange {
            length: bytes,
            bits: 16,
        })
    } else {
        Ok(bytes as u16)
    }
}

/// Get the raw type field. Meaningless without knowing the object's family.
pub(crate) fn wire_type(obj: &WireObject) -> TypeMapResult<u16> {
    obj.read_u16(TLV16_WIRE_TYPE_OFFSET)
}

/// Write the wire type for `id`, plus experimenter id and sub-type for vendor extensions.
pub fn set_wire_object_id(tables: &TranslationTables,
                          obj: &WireObject,
                          id: ObjectId)
                          -> TypeMapResult<()> {
    let wire_type = tables.wire_type(obj.version(), id)
        .ok_or(TypeMapError::UnmappedObject {
            id: id,
            version: obj.version(),
        })?;
    // Extension fields go first: they lie past the type field, so once they fit the type
    // write cannot fail.
    if wire_type == EXPERIMENTER_TYPE {
        set_extension_object_id(tables, obj, id)?;
    }
    obj.write_u16(TLV16_WIRE_TYPE_OFFSET, wire_type)
}

/// Get the object ID of a `family` object from its wire type.
pub fn wire_object_id(tables: &TranslationTables,
                      family: Family,
                      obj: &WireObject)
                      -> TypeMapResult<ObjectId> {
    let wire_type = wire_type(obj)?;
    if wire_type == EXPERIMENTER_TYPE && family.generic_experimenter().is_some() {
        return extension_object_id(tables, family, obj);
    }
    tables.object_id(family, obj.version(), wire_type)
}
