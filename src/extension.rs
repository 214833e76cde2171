//! Vendor ("experimenter") extensions multiplexed behind the generic experimenter wire type.
//!
//! An extension object carries a 32-bit experimenter id at offset 4 and a vendor sub-type
//! at offset 8. The sub-type width is a property of the vendor: BSN uses 32 bits, Nicira
//! 16 bits.

use log::debug;

use crate::object_id::{ActionKind, Family, ObjectId};
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::type_maps::TranslationTables;
use crate::wire_object::WireObject;

pub const EXPERIMENTER_ID_OFFSET: usize = 4;
pub const EXPERIMENTER_SUBTYPE_OFFSET: usize = 8;

/// Big Switch Networks.
pub const BSN_EXPERIMENTER_ID: u32 = 0x005c16c7;
/// Nicira.
pub const NICIRA_EXPERIMENTER_ID: u32 = 0x00002320;

/// Width of a vendor's sub-type field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubtypeWidth {
    U16,
    U32,
}

/// One registered vendor extension, bound to both the action and the action-ID form of
/// `action`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtensionEntry {
    pub experimenter: u32,
    pub subtype: u32,
    pub width: SubtypeWidth,
    pub action: ActionKind,
}

impl ExtensionEntry {
    pub fn new(experimenter: u32,
               subtype: u32,
               width: SubtypeWidth,
               action: ActionKind)
               -> ExtensionEntry {
        ExtensionEntry {
            experimenter: experimenter,
            subtype: subtype,
            width: width,
            action: action,
        }
    }
}

/// The extensions known to this build.
pub fn standard_extensions() -> Vec<ExtensionEntry> {
    vec![ExtensionEntry::new(BSN_EXPERIMENTER_ID, 1, SubtypeWidth::U32, ActionKind::BsnMirror),
         ExtensionEntry::new(BSN_EXPERIMENTER_ID,
                             2,
                             SubtypeWidth::U32,
                             ActionKind::BsnSetTunnelDst),
         ExtensionEntry::new(NICIRA_EXPERIMENTER_ID,
                             18,
                             SubtypeWidth::U16,
                             ActionKind::NiciraDecTtl)]
}

fn read_subtype(obj: &WireObject, width: SubtypeWidth) -> TypeMapResult<u32> {
    match width {
        SubtypeWidth::U16 => obj.read_u16(EXPERIMENTER_SUBTYPE_OFFSET).map(|v| v as u32),
        SubtypeWidth::U32 => obj.read_u32(EXPERIMENTER_SUBTYPE_OFFSET),
    }
}

fn write_entry(obj: &WireObject, entry: &ExtensionEntry) -> TypeMapResult<()> {
    // Bounds are checked up front so a short buffer is left untouched.
    let end = match entry.width {
        SubtypeWidth::U16 => EXPERIMENTER_SUBTYPE_OFFSET + 2,
        SubtypeWidth::U32 => EXPERIMENTER_SUBTYPE_OFFSET + 4,
    };
    let start = obj.absolute_offset(EXPERIMENTER_ID_OFFSET)?;
    let extent = obj.wbuf()?.borrow().len();
    if obj.absolute_offset(end)? > extent {
        return Err(TypeMapError::OutOfBounds {
            offset: start,
            width: end - EXPERIMENTER_ID_OFFSET,
            extent: extent,
        });
    }
    obj.write_u32(EXPERIMENTER_ID_OFFSET, entry.experimenter)?;
    match entry.width {
        SubtypeWidth::U16 => obj.write_u16(EXPERIMENTER_SUBTYPE_OFFSET, entry.subtype as u16),
        SubtypeWidth::U32 => obj.write_u32(EXPERIMENTER_SUBTYPE_OFFSET, entry.subtype),
    }
}

/// Resolve the identity of a `family` object whose wire type is the experimenter code.
///
/// Unknown experimenter ids and sub-types resolve to the family's generic experimenter
/// identifier; only the action families have registered extensions.
pub fn extension_object_id(tables: &TranslationTables,
                           family: Family,
                           obj: &WireObject)
                           -> TypeMapResult<ObjectId> {
    let generic = match family.generic_experimenter() {
        Some(id) => id,
        None => return Err(TypeMapError::NoWireIdentity(obj.object_id())),
    };
    match family {
        Family::Action | Family::ActionId => (),
        _ => return Ok(generic),
    }

    let exp_id = obj.read_u32(EXPERIMENTER_ID_OFFSET)?;
    let width = match tables.extensions().iter().find(|e| e.experimenter == exp_id) {
        Some(e) => e.width,
        None => {
            debug!("unknown experimenter {:#010x}, treating {} as generic", exp_id, family);
            return Ok(generic);
        }
    };
    let subtype = read_subtype(obj, width)?;
    let entry = tables.extensions()
        .iter()
        .find(|e| e.experimenter == exp_id && e.subtype == subtype);
    match entry.and_then(|e| family.action(e.action)) {
        Some(id) => Ok(id),
        None => {
            debug!("unknown subtype {} for experimenter {:#010x}, treating {} as generic",
                   subtype,
                   exp_id,
                   family);
            Ok(generic)
        }
    }
}

/// Write the experimenter id and sub-type registered for `id`.
///
/// Identifiers without a registered extension leave the buffer untouched.
pub fn set_extension_object_id(tables: &TranslationTables,
                               obj: &WireObject,
                               id: ObjectId)
                               -> TypeMapResult<()> {
    match id.action_kind().and_then(|k| tables.extension_for(k)) {
        Some(entry) => write_entry(obj, entry),
        None => Ok(()),
    }
}

/// Push the experimenter id and sub-type for a freshly built extension object.
pub fn push_extension_defaults(tables: &TranslationTables, obj: &WireObject) -> TypeMapResult<()> {
    set_extension_object_id(tables, obj, obj.object_id())
}
