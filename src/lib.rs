//! Wire type and length resolution for OpenFlow protocol objects.
//!
//! Given a handle to a structure inside a wire buffer, these functions find the
//! structure's on-wire length and translate between its wire type code and its
//! `ObjectId`, across OpenFlow 1.0 - 1.3 and the registered vendor extensions.
//!
//! Every call takes the `TranslationTables` explicitly; build them once with
//! `TranslationTables::default()` or a `TablesBuilder`.

mod bits;
pub mod extension;
pub mod lengths;
pub mod object_id;
pub mod ofp_error;
pub mod ofp_header;
pub mod ofp_object;
pub mod openflow_tables;
pub mod oxm;
pub mod tlv16;
pub mod type_maps;
pub mod wire_buffer;
pub mod wire_object;

pub use object_id::{ActionKind, Family, ObjectId, OxmField};
pub use ofp_error::{TypeMapError, TypeMapResult};
pub use ofp_header::OfpVersion;
pub use type_maps::{TablesBuilder, TranslationTables};
pub use wire_buffer::{SharedBuffer, WireBuffer};
pub use wire_object::WireObject;
