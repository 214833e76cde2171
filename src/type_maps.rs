//! Version-indexed translation between wire type codes and object identifiers.
//!
//! A `TranslationTables` value is built once, through `TablesBuilder` or
//! `TranslationTables::default()` for the standard OpenFlow data, and passed by reference
//! to every codec call. It is never mutated afterwards.

use std::collections::HashMap;

use crate::extension::ExtensionEntry;
use crate::object_id::{ActionKind, Family, ObjectId, OxmField};
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::ofp_header::OfpVersion;
use crate::openflow_tables;
use crate::oxm::OxmHeader;

/// Wire type shared by every vendor extension of a TLV16 family.
pub const EXPERIMENTER_TYPE: u16 = 0xffff;

/// Code to identifier map for one TLV16 family, one table per protocol version.
#[derive(Clone, Debug)]
struct FamilyMap {
    item_count: u16,
    by_version: [HashMap<u16, ObjectId>; 4],
}

impl FamilyMap {
    fn new() -> FamilyMap {
        FamilyMap {
            item_count: 0,
            by_version: Default::default(),
        }
    }
}

/// Translation tables for all families and versions.
#[derive(Clone, Debug)]
pub struct TranslationTables {
    families: HashMap<Family, FamilyMap>,
    object_to_type: [HashMap<ObjectId, u16>; 4],
    oxm_to_object: [HashMap<u32, ObjectId>; 4],
    object_to_oxm: [HashMap<ObjectId, u32>; 4],
    fixed_lengths: [HashMap<ObjectId, usize>; 4],
    extensions: Vec<ExtensionEntry>,
}

impl TranslationTables {
    /// Wire type code for `id` at `version`, if the object exists in that version.
    ///
    /// Experimenter objects, including registered vendor extensions, map to
    /// `EXPERIMENTER_TYPE`.
    pub fn wire_type(&self, version: OfpVersion, id: ObjectId) -> Option<u16> {
        self.object_to_type[version.index()].get(&id).cloned()
    }

    /// Number of wire type codes known for `family`, experimenter excluded.
    pub fn item_count(&self, family: Family) -> u16 {
        self.families.get(&family).map_or(0, |m| m.item_count)
    }

    /// Reverse lookup of a TLV16 wire type code.
    ///
    /// Codes at or beyond the family's item count are out of range; codes in range with no
    /// entry for this version mean the table is incomplete.
    pub fn object_id(&self,
                     family: Family,
                     version: OfpVersion,
                     wire_type: u16)
                     -> TypeMapResult<ObjectId> {
        let map = self.families.get(&family);
        let item_count = map.map_or(0, |m| m.item_count);
        if wire_type >= item_count {
            return Err(TypeMapError::WireTypeOutOfRange {
                family: family,
                version: version,
                wire_type: wire_type,
            });
        }
        map.and_then(|m| m.by_version[version.index()].get(&wire_type))
            .cloned()
            .ok_or(TypeMapError::UnmappedWireType {
                family: family,
                version: version,
                wire_type: wire_type,
            })
    }

    /// All (code, identifier) pairs of `family` at `version`, in code order.
    pub fn entries(&self, family: Family, version: OfpVersion) -> Vec<(u16, ObjectId)> {
        let mut v: Vec<(u16, ObjectId)> = match self.families.get(&family) {
            Some(m) => m.by_version[version.index()].iter().map(|(c, id)| (*c, *id)).collect(),
            None => vec![],
        };
        v.sort_by_key(|e| e.0);
        v
    }

    /// Resolve an OXM masked type (class, field and has-mask bits) to an identifier.
    pub fn oxm_object_id(&self, version: OfpVersion, masked_type: u32) -> TypeMapResult<ObjectId> {
        self.oxm_to_object[version.index()]
            .get(&masked_type)
            .cloned()
            .ok_or(TypeMapError::UnmappedOxm {
                masked_type: masked_type,
                version: version,
            })
    }

    /// Masked type for an OXM identifier at `version`.
    pub fn oxm_masked_type(&self, version: OfpVersion, id: ObjectId) -> Option<u32> {
        self.object_to_oxm[version.index()].get(&id).cloned()
    }

    /// All OXM identifiers valid at `version`.
    pub fn oxm_objects(&self, version: OfpVersion) -> Vec<ObjectId> {
        self.object_to_oxm[version.index()].keys().cloned().collect()
    }

    /// Byte length of the non-variable prefix of `id` at `version`.
    pub fn fixed_length(&self, version: OfpVersion, id: ObjectId) -> Option<usize> {
        self.fixed_lengths[version.index()].get(&id).cloned()
    }

    pub fn extensions(&self) -> &[ExtensionEntry] {
        &self.extensions
    }

    /// Registered extension entry for a vendor action kind.
    pub fn extension_for(&self, kind: ActionKind) -> Option<&ExtensionEntry> {
        self.extensions.iter().find(|e| e.action == kind)
    }
}

impl Default for TranslationTables {
    fn default() -> TranslationTables {
        openflow_tables::standard().build()
    }
}

/// Builds `TranslationTables`. Forward and reverse maps are filled from the same calls so
/// they stay inverses of each other.
#[derive(Clone, Debug, Default)]
pub struct TablesBuilder {
    wire_types: Vec<(Family, OfpVersion, u16, ObjectId)>,
    experimenters: Vec<(Family, OfpVersion)>,
    oxms: Vec<(OfpVersion, u16, OxmField, bool)>,
    fixed_lengths: Vec<(OfpVersion, ObjectId, usize)>,
    extensions: Vec<ExtensionEntry>,
}

impl TablesBuilder {
    pub fn new() -> TablesBuilder {
        TablesBuilder::default()
    }

    /// Map `code` to `id` in `family` at `version`, both directions.
    pub fn wire_type(mut self,
                     family: Family,
                     version: OfpVersion,
                     code: u16,
                     id: ObjectId)
                     -> TablesBuilder {
        self.wire_types.push((family, version, code, id));
        self
    }

    /// Register every `(code, id)` in `entries` for `family` at each of `versions`.
    pub fn wire_types(mut self,
                      family: Family,
                      versions: &[OfpVersion],
                      entries: &[(u16, ObjectId)])
                      -> TablesBuilder {
        for v in versions {
            for &(code, id) in entries {
                self = self.wire_type(family, *v, code, id);
            }
        }
        self
    }

    /// `family` carries experimenter objects at `version`.
    pub fn experimenter(mut self, family: Family, version: OfpVersion) -> TablesBuilder {
        self.experimenters.push((family, version));
        self
    }

    /// OXM `field` of `class` is valid at `version`, along with its masked variant when
    /// `maskable`.
    pub fn oxm(mut self,
               version: OfpVersion,
               class: u16,
               field: OxmField,
               maskable: bool)
               -> TablesBuilder {
        self.oxms.push((version, class, field, maskable));
        self
    }

    pub fn fixed_length(mut self, version: OfpVersion, id: ObjectId, len: usize) -> TablesBuilder {
        self.fixed_lengths.push((version, id, len));
        self
    }

    pub fn extension(mut self, entry: ExtensionEntry) -> TablesBuilder {
        self.extensions.push(entry);
        self
    }

    pub fn build(self) -> TranslationTables {
        let mut families: HashMap<Family, FamilyMap> = HashMap::new();
        let mut object_to_type: [HashMap<ObjectId, u16>; 4] = Default::default();
        for (family, version, code, id) in self.wire_types {
            let map = families.entry(family).or_insert_with(FamilyMap::new);
            map.item_count = map.item_count.max(code.saturating_add(1));
            map.by_version[version.index()].insert(code, id);
            object_to_type[version.index()].insert(id, code);
        }

        for (family, version) in self.experimenters {
            families.entry(family).or_insert_with(FamilyMap::new);
            let fwd = &mut object_to_type[version.index()];
            if let Some(generic) = family.generic_experimenter() {
                fwd.insert(generic, EXPERIMENTER_TYPE);
            }
            for e in &self.extensions {
                if let Some(id) = family.action(e.action) {
                    fwd.insert(id, EXPERIMENTER_TYPE);
                }
            }
        }

        let mut oxm_to_object: [HashMap<u32, ObjectId>; 4] = Default::default();
        let mut object_to_oxm: [HashMap<ObjectId, u32>; 4] = Default::default();
        for (version, class, field, maskable) in self.oxms {
            let variants: &[bool] = if maskable { &[false, true] } else { &[false] };
            for &masked in variants {
                let id = ObjectId::Oxm {
                    field: field,
                    masked: masked,
                };
                let masked_type = OxmHeader::new(class, field.number(), masked, 0).masked_type();
                oxm_to_object[version.index()].insert(masked_type, id);
                object_to_oxm[version.index()].insert(id, masked_type);
            }
        }

        let mut fixed_lengths: [HashMap<ObjectId, usize>; 4] = Default::default();
        for (version, id, len) in self.fixed_lengths {
            fixed_lengths[version.index()].insert(id, len);
        }

        TranslationTables {
            families: families,
            object_to_type: object_to_type,
            oxm_to_object: oxm_to_object,
            object_to_oxm: object_to_oxm,
            fixed_lengths: fixed_lengths,
            extensions: self.extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_id::{HelloElemKind, InstructionKind, MeterBandKind};

    #[test]
    fn test_forward_and_reverse_agree() {
        let tables = TranslationTables::default();
        for family in Family::ALL.iter() {
            for version in OfpVersion::ALL.iter() {
                for (code, id) in tables.entries(*family, *version) {
                    assert_eq!(tables.wire_type(*version, id), Some(code));
                    assert_eq!(tables.object_id(*family, *version, code).unwrap(), id);
                }
            }
        }
    }

    #[test]
    fn test_assigned_codes_resolve() {
        // Every code in range either resolves or is a known gap in that version's numbering.
        let tables = TranslationTables::default();
        let gaps_1_2 = [1u16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 13, 14, 26, 27];
        for code in 0..tables.item_count(Family::Action) {
            let res = tables.object_id(Family::Action, OfpVersion::V1_2, code);
            if gaps_1_2.contains(&code) {
                assert_eq!(res.unwrap_err(),
                           TypeMapError::UnmappedWireType {
                               family: Family::Action,
                               version: OfpVersion::V1_2,
                               wire_type: code,
                           });
            } else {
                assert!(res.is_ok(), "action code {} unresolved in 1.2", code);
            }
        }
        for code in 0..25 {
            assert!(tables.object_id(Family::Action, OfpVersion::V1_1, code).is_ok());
        }
        for code in 0..28 {
            if ![1u16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 13, 14].contains(&code) {
                assert!(tables.object_id(Family::ActionId, OfpVersion::V1_3, code).is_ok());
            }
        }
    }

    #[test]
    fn test_out_of_range_code() {
        let tables = TranslationTables::default();
        assert_eq!(tables.item_count(Family::Action), 28);
        assert_eq!(tables.object_id(Family::Action, OfpVersion::V1_3, 28).unwrap_err(),
                   TypeMapError::WireTypeOutOfRange {
                       family: Family::Action,
                       version: OfpVersion::V1_3,
                       wire_type: 28,
                   });
        assert_eq!(tables.object_id(Family::HelloElem, OfpVersion::V1_3, 1).unwrap(),
                   ObjectId::HelloElem(HelloElemKind::VersionBitmap));
        assert!(tables.object_id(Family::HelloElem, OfpVersion::V1_3, EXPERIMENTER_TYPE)
            .is_err());
    }

    #[test]
    fn test_absent_object_has_no_wire_type() {
        let tables = TranslationTables::default();
        assert_eq!(tables.wire_type(OfpVersion::V1_0,
                                    ObjectId::Instruction(InstructionKind::GotoTable)),
                   None);
        assert_eq!(tables.wire_type(OfpVersion::V1_2,
                                    ObjectId::Instruction(InstructionKind::Meter)),
                   None);
        assert_eq!(tables.wire_type(OfpVersion::V1_3,
                                    ObjectId::Instruction(InstructionKind::Meter)),
                   Some(6));
        assert_eq!(tables.wire_type(OfpVersion::V1_2, ObjectId::MeterBand(MeterBandKind::Drop)),
                   None);
    }

    #[test]
    fn test_experimenter_forward_only() {
        let tables = TranslationTables::default();
        for v in OfpVersion::ALL.iter() {
            assert_eq!(tables.wire_type(*v, ObjectId::Action(ActionKind::Experimenter)),
                       Some(EXPERIMENTER_TYPE));
            assert_eq!(tables.wire_type(*v, ObjectId::Action(ActionKind::BsnMirror)),
                       Some(EXPERIMENTER_TYPE));
        }
        assert_eq!(tables.wire_type(OfpVersion::V1_0,
                                    ObjectId::ActionId(ActionKind::NiciraDecTtl)),
                   None);
        assert_eq!(tables.wire_type(OfpVersion::V1_3,
                                    ObjectId::ActionId(ActionKind::NiciraDecTtl)),
                   Some(EXPERIMENTER_TYPE));
    }

    #[test]
    fn test_injected_tables() {
        let tables = TablesBuilder::new()
            .wire_type(Family::MeterBand,
                       OfpVersion::V1_0,
                       5,
                       ObjectId::MeterBand(MeterBandKind::Drop))
            .fixed_length(OfpVersion::V1_0, ObjectId::MeterStats, 8)
            .build();
        assert_eq!(tables.item_count(Family::MeterBand), 6);
        assert_eq!(tables.object_id(Family::MeterBand, OfpVersion::V1_0, 5).unwrap(),
                   ObjectId::MeterBand(MeterBandKind::Drop));
        assert!(tables.object_id(Family::MeterBand, OfpVersion::V1_3, 5).is_err());
        assert_eq!(tables.fixed_length(OfpVersion::V1_0, ObjectId::MeterStats), Some(8));
        assert!(tables.extensions().is_empty());
    }

    #[test]
    fn test_oxm_tables() {
        let tables = TranslationTables::default();
        assert!(tables.oxm_objects(OfpVersion::V1_0).is_empty());
        let id = ObjectId::Oxm {
            field: OxmField::Ipv4Src,
            masked: true,
        };
        let mt = tables.oxm_masked_type(OfpVersion::V1_2, id).unwrap();
        assert_eq!(mt, 0x80_0017);
        assert_eq!(tables.oxm_object_id(OfpVersion::V1_2, mt).unwrap(), id);
        let tunnel = ObjectId::Oxm {
            field: OxmField::TunnelId,
            masked: false,
        };
        assert_eq!(tables.oxm_masked_type(OfpVersion::V1_2, tunnel), None);
        assert!(tables.oxm_masked_type(OfpVersion::V1_3, tunnel).is_some());
    }
}
