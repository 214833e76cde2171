//! Length fields that do not sit at the TLV16 position.

use crate::object_id::ObjectId;
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::ofp_header::{OfpHeader, OfpVersion};
use crate::tlv16::u16_length;
use crate::type_maps::TranslationTables;
use crate::wire_object::WireObject;

pub const U16_LEN_LENGTH_OFFSET: usize = 0;
pub const METER_STATS_LENGTH_OFFSET: usize = 4;

fn get_u16_length(obj: &WireObject, offset: usize) -> TypeMapResult<usize> {
    obj.read_u16(offset).map(|v| v as usize)
}

fn set_u16_length(obj: &WireObject, offset: usize, bytes: usize) -> TypeMapResult<()> {
    obj.write_u16(offset, u16_length(bytes)?)
}

/// Get the length of a message object as reported in its OpenFlow header.
pub fn message_length(obj: &WireObject) -> TypeMapResult<usize> {
    get_u16_length(obj, OfpHeader::LENGTH_OFFSET)
}

/// Set the length of a message object in its OpenFlow header.
pub fn set_message_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    set_u16_length(obj, OfpHeader::LENGTH_OFFSET, bytes)
}

/// Get the wire length for an object with a u16 length as first member.
pub fn u16_len_length(obj: &WireObject) -> TypeMapResult<usize> {
    get_u16_length(obj, U16_LEN_LENGTH_OFFSET)
}

/// Set the wire length for an object with a u16 length as first member.
pub fn set_u16_len_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    set_u16_length(obj, U16_LEN_LENGTH_OFFSET, bytes)
}

/// Offset of the packet queue length field. 1.2 widened the queue id to 32 bits and
/// added a port number ahead of it.
pub fn packet_queue_length_offset(version: OfpVersion) -> usize {
    if version >= OfpVersion::V1_2 { 8 } else { 4 }
}

pub fn packet_queue_length(obj: &WireObject) -> TypeMapResult<usize> {
    get_u16_length(obj, packet_queue_length_offset(obj.version()))
}

pub fn set_packet_queue_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    set_u16_length(obj, packet_queue_length_offset(obj.version()), bytes)
}

/// Get the wire length of a meter stats object. It's almost a TLV, with the meter id
/// ahead of the length.
pub fn meter_stats_length(obj: &WireObject) -> TypeMapResult<usize> {
    get_u16_length(obj, METER_STATS_LENGTH_OFFSET)
}

pub fn set_meter_stats_length(obj: &WireObject, bytes: usize) -> TypeMapResult<()> {
    set_u16_length(obj, METER_STATS_LENGTH_OFFSET, bytes)
}

/// Length of a meter band stats list: whatever of its meter stats parent follows the
/// parent's fixed header. Relies on the parent's length already being set.
pub fn meter_band_stats_list_length(tables: &TranslationTables,
                                    obj: &WireObject)
                                    -> TypeMapResult<usize> {
    let parent = obj.parent().ok_or(TypeMapError::MissingParent(obj.object_id()))?;
    if parent.object_id() != ObjectId::MeterStats {
        return Err(TypeMapError::WrongParent {
            id: obj.object_id(),
            expected: ObjectId::MeterStats,
            found: parent.object_id(),
        });
    }
    let fixed = tables.fixed_length(parent.version(), ObjectId::MeterStats)
        .ok_or(TypeMapError::UnknownFixedLength {
            id: ObjectId::MeterStats,
            version: parent.version(),
        })?;
    parent.length()
        .checked_sub(fixed)
        .ok_or(TypeMapError::LengthUnderflow {
            id: ObjectId::MeterStats,
            length: parent.length(),
            fixed: fixed,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_maps::TablesBuilder;
    use crate::wire_buffer::WireBuffer;
    use proptest::prelude::*;

    fn object(version: OfpVersion, id: ObjectId, bytes: Vec<u8>) -> WireObject<'static> {
        let len = bytes.len();
        WireObject::new(version, id, len).attach(WireBuffer::from_bytes(bytes).shared(), 0)
    }

    #[test]
    fn test_packet_queue_offset_by_version() {
        assert_eq!(packet_queue_length_offset(OfpVersion::V1_0), 4);
        assert_eq!(packet_queue_length_offset(OfpVersion::V1_1), 4);
        assert_eq!(packet_queue_length_offset(OfpVersion::V1_2), 8);
        assert_eq!(packet_queue_length_offset(OfpVersion::V1_3), 8);
    }

    #[test]
    fn test_packet_queue_length_per_version() {
        for version in OfpVersion::ALL.iter() {
            let obj = object(*version, ObjectId::PacketQueue, vec![0; 16]);
            set_packet_queue_length(&obj, 48).unwrap();
            assert_eq!(packet_queue_length(&obj).unwrap(), 48);
            let off = packet_queue_length_offset(*version);
            assert_eq!(obj.read_u16(off).unwrap(), 48);
        }
    }

    #[test]
    fn test_packet_queue_wrong_offset_not_observed() {
        // A 1.0-style length at offset 4 is invisible to a 1.3 queue.
        let obj = object(OfpVersion::V1_3, ObjectId::PacketQueue, vec![0; 16]);
        obj.write_u16(4, 24).unwrap();
        assert_eq!(packet_queue_length(&obj).unwrap(), 0);
        let obj = object(OfpVersion::V1_0, ObjectId::PacketQueue, vec![0; 16]);
        obj.write_u16(8, 24).unwrap();
        assert_eq!(packet_queue_length(&obj).unwrap(), 0);
    }

    #[test]
    fn test_message_length() {
        let obj = object(OfpVersion::V1_0,
                         ObjectId::Message,
                         vec![0x01, 0x00, 0x00, 0x08, 0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(message_length(&obj).unwrap(), 8);
        set_message_length(&obj, 0x0102).unwrap();
        assert_eq!(message_length(&obj).unwrap(), 0x0102);
        assert_eq!(obj.wbuf().unwrap().borrow().as_bytes(),
                   &[0x01, 0x00, 0x01, 0x02, 0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_u16_len_and_meter_stats() {
        let obj = object(OfpVersion::V1_3, ObjectId::Bucket, vec![0; 8]);
        set_u16_len_length(&obj, 32).unwrap();
        assert_eq!(u16_len_length(&obj).unwrap(), 32);
        assert_eq!(obj.read_u16(0).unwrap(), 32);

        let obj = object(OfpVersion::V1_3, ObjectId::MeterStats, vec![0; 40]);
        set_meter_stats_length(&obj, 56).unwrap();
        assert_eq!(meter_stats_length(&obj).unwrap(), 56);
        assert_eq!(obj.read_u16(4).unwrap(), 56);
        assert_eq!(obj.read_u32(0).unwrap(), 0);
    }

    #[test]
    fn test_meter_band_stats_list_length() {
        let tables = TablesBuilder::new()
            .fixed_length(OfpVersion::V1_3, ObjectId::MeterStats, 8)
            .build();
        let stats = object(OfpVersion::V1_3, ObjectId::MeterStats, vec![0; 20]);
        let list = stats.child(ObjectId::ListMeterBandStats, 8, 12);
        assert_eq!(meter_band_stats_list_length(&tables, &list).unwrap(), 12);

        let tables = TranslationTables::default();
        let stats = object(OfpVersion::V1_3, ObjectId::MeterStats, vec![0; 72]);
        let list = stats.child(ObjectId::ListMeterBandStats, 40, 32);
        assert_eq!(meter_band_stats_list_length(&tables, &list).unwrap(), 32);
    }

    #[test]
    fn test_meter_band_stats_list_requires_meter_stats_parent() {
        let tables = TranslationTables::default();
        let orphan = object(OfpVersion::V1_3, ObjectId::ListMeterBandStats, vec![0; 8]);
        assert_eq!(meter_band_stats_list_length(&tables, &orphan).unwrap_err(),
                   TypeMapError::MissingParent(ObjectId::ListMeterBandStats));

        let queue = object(OfpVersion::V1_3, ObjectId::PacketQueue, vec![0; 32]);
        let list = queue.child(ObjectId::ListMeterBandStats, 16, 16);
        assert_eq!(meter_band_stats_list_length(&tables, &list).unwrap_err(),
                   TypeMapError::WrongParent {
                       id: ObjectId::ListMeterBandStats,
                       expected: ObjectId::MeterStats,
                       found: ObjectId::PacketQueue,
                   });
    }

    #[test]
    fn test_meter_band_stats_list_bad_parent_length() {
        let tables = TranslationTables::default();
        let stats = object(OfpVersion::V1_3, ObjectId::MeterStats, vec![0; 20]);
        let list = stats.child(ObjectId::ListMeterBandStats, 40, 0);
        assert_eq!(meter_band_stats_list_length(&tables, &list).unwrap_err(),
                   TypeMapError::LengthUnderflow {
                       id: ObjectId::MeterStats,
                       length: 20,
                       fixed: 40,
                   });
        let stats = object(OfpVersion::V1_0, ObjectId::MeterStats, vec![0; 48]);
        let list = stats.child(ObjectId::ListMeterBandStats, 40, 8);
        assert_eq!(meter_band_stats_list_length(&tables, &list).unwrap_err(),
                   TypeMapError::UnknownFixedLength {
                       id: ObjectId::MeterStats,
                       version: OfpVersion::V1_0,
                   });
    }

    type LengthGet = fn(&WireObject) -> TypeMapResult<usize>;
    type LengthSet = fn(&WireObject, usize) -> TypeMapResult<()>;

    /// Set then get `len` through a codec whose field sits at `off`, on a buffer of `fill`.
    fn check_length(version: OfpVersion,
                    id: ObjectId,
                    get: LengthGet,
                    set: LengthSet,
                    off: usize,
                    len: usize,
                    fill: u8)
                    -> Result<(), TestCaseError> {
        let obj = object(version, id, vec![fill; 16]);
        set(&obj, len).unwrap();
        prop_assert_eq!(get(&obj).unwrap(), len);
        let bytes = obj.wbuf().unwrap().borrow().as_bytes().to_vec();
        for (i, b) in bytes.iter().enumerate() {
            if i != off && i != off + 1 {
                prop_assert_eq!(*b, fill, "byte {} of {:?}", i, id);
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_lengths_round_trip(len in 0usize..=0xffff, fill in any::<u8>()) {
            check_length(OfpVersion::V1_3, ObjectId::Message, message_length,
                         set_message_length, 2, len, fill)?;
            check_length(OfpVersion::V1_3, ObjectId::FlowStatsEntry, u16_len_length,
                         set_u16_len_length, 0, len, fill)?;
            check_length(OfpVersion::V1_0, ObjectId::PacketQueue, packet_queue_length,
                         set_packet_queue_length, 4, len, fill)?;
            check_length(OfpVersion::V1_3, ObjectId::PacketQueue, packet_queue_length,
                         set_packet_queue_length, 8, len, fill)?;
            check_length(OfpVersion::V1_3, ObjectId::MeterStats, meter_stats_length,
                         set_meter_stats_length, 4, len, fill)?;
        }
    }
}
