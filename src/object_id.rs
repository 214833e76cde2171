use std::fmt;

/// Variants shared by the action and action-ID families.
///
/// Table-features properties describe supported actions with action-ID entries whose
/// wire codes match the corresponding actions, so both families use the same kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Output,
    SetVlanVid,
    SetVlanPcp,
    StripVlan,
    SetDlSrc,
    SetDlDst,
    SetNwSrc,
    SetNwDst,
    SetNwTos,
    SetNwEcn,
    SetTpSrc,
    SetTpDst,
    Enqueue,
    CopyTtlOut,
    CopyTtlIn,
    SetMplsLabel,
    SetMplsTc,
    SetMplsTtl,
    DecMplsTtl,
    PushVlan,
    PopVlan,
    PushMpls,
    PopMpls,
    SetQueue,
    Group,
    SetNwTtl,
    DecNwTtl,
    SetField,
    PushPbb,
    PopPbb,
    /// Generic experimenter action with an unrecognized vendor payload.
    Experimenter,
    BsnMirror,
    BsnSetTunnelDst,
    NiciraDecTtl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    GotoTable,
    WriteMetadata,
    WriteActions,
    ApplyActions,
    ClearActions,
    Meter,
    Experimenter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueuePropKind {
    MinRate,
    MaxRate,
    Experimenter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableFeaturePropKind {
    Instructions,
    InstructionsMiss,
    NextTables,
    NextTablesMiss,
    WriteActions,
    WriteActionsMiss,
    ApplyActions,
    ApplyActionsMiss,
    Match,
    Wildcards,
    WriteSetfield,
    WriteSetfieldMiss,
    ApplySetfield,
    ApplySetfieldMiss,
    Experimenter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeterBandKind {
    Drop,
    DscpRemark,
    Experimenter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HelloElemKind {
    VersionBitmap,
}

/// OpenFlow basic match fields, discriminants are the on-wire OXM field numbers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OxmField {
    InPort = 0,
    InPhyPort = 1,
    Metadata = 2,
    EthDst = 3,
    EthSrc = 4,
    EthType = 5,
    VlanVid = 6,
    VlanPcp = 7,
    IpDscp = 8,
    IpEcn = 9,
    IpProto = 10,
    Ipv4Src = 11,
    Ipv4Dst = 12,
    TcpSrc = 13,
    TcpDst = 14,
    UdpSrc = 15,
    UdpDst = 16,
    SctpSrc = 17,
    SctpDst = 18,
    Icmpv4Type = 19,
    Icmpv4Code = 20,
    ArpOp = 21,
    ArpSpa = 22,
    ArpTpa = 23,
    ArpSha = 24,
    ArpTha = 25,
    Ipv6Src = 26,
    Ipv6Dst = 27,
    Ipv6Flabel = 28,
    Icmpv6Type = 29,
    Icmpv6Code = 30,
    Ipv6NdTarget = 31,
    Ipv6NdSll = 32,
    Ipv6NdTll = 33,
    MplsLabel = 34,
    MplsTc = 35,
    MplsBos = 36,
    PbbIsid = 37,
    TunnelId = 38,
    Ipv6Exthdr = 39,
}

impl OxmField {
    /// Return the 7-bit OXM field number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Whether the field admits a masked variant on the wire.
    pub fn maskable(self) -> bool {
        match self {
            OxmField::Metadata | OxmField::EthDst | OxmField::EthSrc | OxmField::VlanVid |
            OxmField::Ipv4Src | OxmField::Ipv4Dst | OxmField::ArpSpa | OxmField::ArpTpa |
            OxmField::ArpSha | OxmField::ArpTha | OxmField::Ipv6Src | OxmField::Ipv6Dst |
            OxmField::Ipv6Flabel | OxmField::PbbIsid | OxmField::TunnelId |
            OxmField::Ipv6Exthdr => true,
            _ => false,
        }
    }
}

/// Internal identity of a wire structure: its family plus the variant within it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectId {
    /// A top-level OpenFlow message.
    Message,
    Action(ActionKind),
    ActionId(ActionKind),
    Instruction(InstructionKind),
    QueueProp(QueuePropKind),
    TableFeatureProp(TableFeaturePropKind),
    MeterBand(MeterBandKind),
    HelloElem(HelloElemKind),
    Oxm { field: OxmField, masked: bool },
    PacketQueue,
    MeterStats,
    ListMeterBandStats,
    FlowStatsEntry,
    Bucket,
    TableFeatures,
    GroupDescStatsEntry,
}

impl ObjectId {
    /// Return the TLV16 family this identifier belongs to, if any.
    pub fn family(&self) -> Option<Family> {
        match *self {
            ObjectId::Action(_) => Some(Family::Action),
            ObjectId::ActionId(_) => Some(Family::ActionId),
            ObjectId::Instruction(_) => Some(Family::Instruction),
            ObjectId::QueueProp(_) => Some(Family::QueueProp),
            ObjectId::TableFeatureProp(_) => Some(Family::TableFeatureProp),
            ObjectId::MeterBand(_) => Some(Family::MeterBand),
            ObjectId::HelloElem(_) => Some(Family::HelloElem),
            _ => None,
        }
    }

    pub fn is_oxm(&self) -> bool {
        match *self {
            ObjectId::Oxm { .. } => true,
            _ => false,
        }
    }

    /// The vendor kind carried by an action or action-ID identifier.
    pub fn action_kind(&self) -> Option<ActionKind> {
        match *self {
            ObjectId::Action(k) | ObjectId::ActionId(k) => Some(k),
            _ => None,
        }
    }
}

/// Structure families whose header is a 16-bit type followed by a 16-bit length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Action,
    ActionId,
    Instruction,
    QueueProp,
    TableFeatureProp,
    MeterBand,
    HelloElem,
}

impl Family {
    pub const ALL: [Family; 7] = [Family::Action,
                                  Family::ActionId,
                                  Family::Instruction,
                                  Family::QueueProp,
                                  Family::TableFeatureProp,
                                  Family::MeterBand,
                                  Family::HelloElem];

    /// The identifier a structure of this family resolves to when it carries the generic
    /// experimenter wire type and no registered extension matches.
    ///
    /// Hello elements have no experimenter variant.
    pub fn generic_experimenter(self) -> Option<ObjectId> {
        match self {
            Family::Action => Some(ObjectId::Action(ActionKind::Experimenter)),
            Family::ActionId => Some(ObjectId::ActionId(ActionKind::Experimenter)),
            Family::Instruction => Some(ObjectId::Instruction(InstructionKind::Experimenter)),
            Family::QueueProp => Some(ObjectId::QueueProp(QueuePropKind::Experimenter)),
            Family::TableFeatureProp => {
                Some(ObjectId::TableFeatureProp(TableFeaturePropKind::Experimenter))
            }
            Family::MeterBand => Some(ObjectId::MeterBand(MeterBandKind::Experimenter)),
            Family::HelloElem => None,
        }
    }

    /// Wrap an action kind in this family's identifier. Only meaningful for the action
    /// families.
    pub fn action(self, kind: ActionKind) -> Option<ObjectId> {
        match self {
            Family::Action => Some(ObjectId::Action(kind)),
            Family::ActionId => Some(ObjectId::ActionId(kind)),
            _ => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Family::Action => "action",
            Family::ActionId => "action id",
            Family::Instruction => "instruction",
            Family::QueueProp => "queue property",
            Family::TableFeatureProp => "table feature property",
            Family::MeterBand => "meter band",
            Family::HelloElem => "hello element",
        };
        f.write_str(name)
    }
}
