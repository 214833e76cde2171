//! Standard OpenFlow 1.0 - 1.3 wire type assignments.

use crate::extension::standard_extensions;
use crate::object_id::{ActionKind, Family, HelloElemKind, InstructionKind, MeterBandKind,
                       ObjectId, OxmField, QueuePropKind, TableFeaturePropKind};
use crate::ofp_header::{OfpHeader, OfpVersion};
use crate::oxm::OFPXMC_OPENFLOW_BASIC;
use crate::type_maps::TablesBuilder;

use crate::object_id::ActionKind::*;

const ACTIONS_1_0: &[(u16, ActionKind)] = &[(0, Output),
                                            (1, SetVlanVid),
                                            (2, SetVlanPcp),
                                            (3, StripVlan),
                                            (4, SetDlSrc),
                                            (5, SetDlDst),
                                            (6, SetNwSrc),
                                            (7, SetNwDst),
                                            (8, SetNwTos),
                                            (9, SetTpSrc),
                                            (10, SetTpDst),
                                            (11, Enqueue)];

const ACTIONS_1_1: &[(u16, ActionKind)] = &[(0, Output),
                                            (1, SetVlanVid),
                                            (2, SetVlanPcp),
                                            (3, SetDlSrc),
                                            (4, SetDlDst),
                                            (5, SetNwSrc),
                                            (6, SetNwDst),
                                            (7, SetNwTos),
                                            (8, SetNwEcn),
                                            (9, SetTpSrc),
                                            (10, SetTpDst),
                                            (11, CopyTtlOut),
                                            (12, CopyTtlIn),
                                            (13, SetMplsLabel),
                                            (14, SetMplsTc),
                                            (15, SetMplsTtl),
                                            (16, DecMplsTtl),
                                            (17, PushVlan),
                                            (18, PopVlan),
                                            (19, PushMpls),
                                            (20, PopMpls),
                                            (21, SetQueue),
                                            (22, Group),
                                            (23, SetNwTtl),
                                            (24, DecNwTtl)];

// 1.2 drops the individual set-field actions in favour of OXM-based SetField.
const ACTIONS_1_2: &[(u16, ActionKind)] = &[(0, Output),
                                            (11, CopyTtlOut),
                                            (12, CopyTtlIn),
                                            (15, SetMplsTtl),
                                            (16, DecMplsTtl),
                                            (17, PushVlan),
                                            (18, PopVlan),
                                            (19, PushMpls),
                                            (20, PopMpls),
                                            (21, SetQueue),
                                            (22, Group),
                                            (23, SetNwTtl),
                                            (24, DecNwTtl),
                                            (25, SetField)];

const ACTIONS_1_3_EXTRA: &[(u16, ActionKind)] = &[(26, PushPbb), (27, PopPbb)];

const INSTRUCTIONS: &[(u16, InstructionKind)] = &[(1, InstructionKind::GotoTable),
                                                  (2, InstructionKind::WriteMetadata),
                                                  (3, InstructionKind::WriteActions),
                                                  (4, InstructionKind::ApplyActions),
                                                  (5, InstructionKind::ClearActions)];

const TABLE_FEATURE_PROPS: &[(u16, TableFeaturePropKind)] =
    &[(0, TableFeaturePropKind::Instructions),
      (1, TableFeaturePropKind::InstructionsMiss),
      (2, TableFeaturePropKind::NextTables),
      (3, TableFeaturePropKind::NextTablesMiss),
      (4, TableFeaturePropKind::WriteActions),
      (5, TableFeaturePropKind::WriteActionsMiss),
      (6, TableFeaturePropKind::ApplyActions),
      (7, TableFeaturePropKind::ApplyActionsMiss),
      (8, TableFeaturePropKind::Match),
      (10, TableFeaturePropKind::Wildcards),
      (12, TableFeaturePropKind::WriteSetfield),
      (13, TableFeaturePropKind::WriteSetfieldMiss),
      (14, TableFeaturePropKind::ApplySetfield),
      (15, TableFeaturePropKind::ApplySetfieldMiss)];

const OXM_FIELDS_1_2: &[OxmField] = &[OxmField::InPort,
                                      OxmField::InPhyPort,
                                      OxmField::Metadata,
                                      OxmField::EthDst,
                                      OxmField::EthSrc,
                                      OxmField::EthType,
                                      OxmField::VlanVid,
                                      OxmField::VlanPcp,
                                      OxmField::IpDscp,
                                      OxmField::IpEcn,
                                      OxmField::IpProto,
                                      OxmField::Ipv4Src,
                                      OxmField::Ipv4Dst,
                                      OxmField::TcpSrc,
                                      OxmField::TcpDst,
                                      OxmField::UdpSrc,
                                      OxmField::UdpDst,
                                      OxmField::SctpSrc,
                                      OxmField::SctpDst,
                                      OxmField::Icmpv4Type,
                                      OxmField::Icmpv4Code,
                                      OxmField::ArpOp,
                                      OxmField::ArpSpa,
                                      OxmField::ArpTpa,
                                      OxmField::ArpSha,
                                      OxmField::ArpTha,
                                      OxmField::Ipv6Src,
                                      OxmField::Ipv6Dst,
                                      OxmField::Ipv6Flabel,
                                      OxmField::Icmpv6Type,
                                      OxmField::Icmpv6Code,
                                      OxmField::Ipv6NdTarget,
                                      OxmField::Ipv6NdSll,
                                      OxmField::Ipv6NdTll,
                                      OxmField::MplsLabel,
                                      OxmField::MplsTc];

const OXM_FIELDS_1_3_EXTRA: &[OxmField] = &[OxmField::MplsBos,
                                            OxmField::PbbIsid,
                                            OxmField::TunnelId,
                                            OxmField::Ipv6Exthdr];

fn actions(family: Family, entries: &[(u16, ActionKind)]) -> Vec<(u16, ObjectId)> {
    entries.iter()
        .filter_map(|&(code, kind)| family.action(kind).map(|id| (code, id)))
        .collect()
}

/// Builder pre-loaded with the standard assignments and registered vendor extensions.
pub fn standard() -> TablesBuilder {
    use crate::ofp_header::OfpVersion::*;

    let mut b = TablesBuilder::new()
        .wire_types(Family::Action, &[V1_0], &actions(Family::Action, ACTIONS_1_0))
        .wire_types(Family::Action, &[V1_1], &actions(Family::Action, ACTIONS_1_1))
        .wire_types(Family::Action, &[V1_2, V1_3], &actions(Family::Action, ACTIONS_1_2))
        .wire_types(Family::Action, &[V1_3], &actions(Family::Action, ACTIONS_1_3_EXTRA))
        .wire_types(Family::ActionId, &[V1_3], &actions(Family::ActionId, ACTIONS_1_2))
        .wire_types(Family::ActionId,
                    &[V1_3],
                    &actions(Family::ActionId, ACTIONS_1_3_EXTRA));

    let instructions: Vec<(u16, ObjectId)> =
        INSTRUCTIONS.iter().map(|&(c, k)| (c, ObjectId::Instruction(k))).collect();
    b = b.wire_types(Family::Instruction, &[V1_1, V1_2, V1_3], &instructions)
        .wire_type(Family::Instruction,
                   V1_3,
                   6,
                   ObjectId::Instruction(InstructionKind::Meter));

    b = b.wire_type(Family::QueueProp,
                   V1_0,
                   1,
                   ObjectId::QueueProp(QueuePropKind::MinRate))
        .wire_type(Family::QueueProp,
                   V1_1,
                   1,
                   ObjectId::QueueProp(QueuePropKind::MinRate))
        .wire_types(Family::QueueProp,
                    &[V1_2, V1_3],
                    &[(1, ObjectId::QueueProp(QueuePropKind::MinRate)),
                      (2, ObjectId::QueueProp(QueuePropKind::MaxRate))]);

    let props: Vec<(u16, ObjectId)> =
        TABLE_FEATURE_PROPS.iter().map(|&(c, k)| (c, ObjectId::TableFeatureProp(k))).collect();
    b = b.wire_types(Family::TableFeatureProp, &[V1_3], &props)
        .wire_types(Family::MeterBand,
                    &[V1_3],
                    &[(1, ObjectId::MeterBand(MeterBandKind::Drop)),
                      (2, ObjectId::MeterBand(MeterBandKind::DscpRemark))])
        .wire_type(Family::HelloElem,
                   V1_3,
                   1,
                   ObjectId::HelloElem(HelloElemKind::VersionBitmap));

    for v in OfpVersion::ALL.iter() {
        b = b.experimenter(Family::Action, *v);
    }
    for v in &[V1_1, V1_2, V1_3] {
        b = b.experimenter(Family::Instruction, *v);
    }
    for v in &[V1_2, V1_3] {
        b = b.experimenter(Family::QueueProp, *v);
    }
    b = b.experimenter(Family::ActionId, V1_3)
        .experimenter(Family::TableFeatureProp, V1_3)
        .experimenter(Family::MeterBand, V1_3);

    for field in OXM_FIELDS_1_2 {
        b = b.oxm(V1_2, OFPXMC_OPENFLOW_BASIC, *field, field.maskable())
            .oxm(V1_3, OFPXMC_OPENFLOW_BASIC, *field, field.maskable());
    }
    for field in OXM_FIELDS_1_3_EXTRA {
        b = b.oxm(V1_3, OFPXMC_OPENFLOW_BASIC, *field, field.maskable());
    }

    for v in OfpVersion::ALL.iter() {
        b = b.fixed_length(*v, ObjectId::Message, OfpHeader::size());
    }
    b = b.fixed_length(V1_0, ObjectId::PacketQueue, 8)
        .fixed_length(V1_1, ObjectId::PacketQueue, 8)
        .fixed_length(V1_2, ObjectId::PacketQueue, 16)
        .fixed_length(V1_3, ObjectId::PacketQueue, 16)
        .fixed_length(V1_3, ObjectId::MeterStats, 40);

    for e in standard_extensions() {
        b = b.extension(e);
    }
    b
}
