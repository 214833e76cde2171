//! Wire length and identity of any object handle, with the codec chosen from the
//! handle's own `ObjectId`.

use crate::lengths;
use crate::object_id::ObjectId;
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::oxm;
use crate::tlv16;
use crate::type_maps::TranslationTables;
use crate::wire_object::WireObject;

/// Get the length of `obj` as recorded on the wire.
pub fn wire_length(tables: &TranslationTables, obj: &WireObject) -> TypeMapResult<usize> {
    match obj.object_id() {
        ObjectId::Message => lengths::message_length(obj),
        ObjectId::Action(_) |
        ObjectId::ActionId(_) |
        ObjectId::Instruction(_) |
        ObjectId::QueueProp(_) |
        ObjectId::TableFeatureProp(_) |
        ObjectId::MeterBand(_) |
        ObjectId::HelloElem(_) => tlv16::wire_length(obj),
        ObjectId::Oxm { .. } => oxm::wire_length(obj),
        ObjectId::PacketQueue => lengths::packet_queue_length(obj),
        ObjectId::MeterStats => lengths::meter_stats_length(obj),
        ObjectId::ListMeterBandStats => lengths::meter_band_stats_list_length(tables, obj),
        ObjectId::FlowStatsEntry |
        ObjectId::Bucket |
        ObjectId::TableFeatures |
        ObjectId::GroupDescStatsEntry => lengths::u16_len_length(obj),
    }
}

/// Record `bytes` as the wire length of `obj`.
pub fn set_wire_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    match obj.object_id() {
        ObjectId::Message => lengths::set_message_length(obj, bytes),
        ObjectId::Action(_) |
        ObjectId::ActionId(_) |
        ObjectId::Instruction(_) |
        ObjectId::QueueProp(_) |
        ObjectId::TableFeatureProp(_) |
        ObjectId::MeterBand(_) |
        ObjectId::HelloElem(_) => tlv16::set_wire_length(obj, bytes),
        ObjectId::Oxm { .. } => oxm::set_wire_length(obj, bytes),
        ObjectId::PacketQueue => lengths::set_packet_queue_length(obj, bytes),
        ObjectId::MeterStats => lengths::set_meter_stats_length(obj, bytes),
        ObjectId::ListMeterBandStats => Err(TypeMapError::ReadOnlyLength(obj.object_id())),
        ObjectId::FlowStatsEntry |
        ObjectId::Bucket |
        ObjectId::TableFeatures |
        ObjectId::GroupDescStatsEntry => lengths::set_u16_len_length(obj, bytes),
    }
}

/// Resolve the identity encoded on the wire for `obj`.
///
/// The handle's own identifier only selects the family; the result comes from the buffer.
pub fn wire_object_id(tables: &TranslationTables, obj: &WireObject) -> TypeMapResult<ObjectId> {
    let id = obj.object_id();
    match id.family() {
        Some(family) => tlv16::wire_object_id(tables, family, obj),
        None if id.is_oxm() => oxm::wire_object_id(tables, obj),
        None => Err(TypeMapError::NoWireIdentity(id)),
    }
}

/// Encode `id` into the type field of `obj`.
pub fn set_wire_object_id(tables: &TranslationTables,
                          obj: &WireObject,
                          id: ObjectId)
                          -> TypeMapResult<()> {
    if id.family().is_some() {
        tlv16::set_wire_object_id(tables, obj, id)
    } else if id.is_oxm() {
        oxm::set_wire_object_id(tables, obj, id)
    } else {
        Err(TypeMapError::NoWireIdentity(id))
    }
}
