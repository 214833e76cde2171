use log::trace;

use crate::object_id::ObjectId;
use crate::ofp_error::{TypeMapError, TypeMapResult};
use crate::ofp_header::{OfpHeader, OfpVersion};
use crate::wire_buffer::SharedBuffer;

/// Wire Object
///
/// Handle to one structure living inside a shared, possibly nested, wire buffer. A handle
/// created with `child` borrows its parent; the parent link is fixed for the handle's
/// lifetime and never owns the parent.
#[derive(Clone, Debug)]
pub struct WireObject<'p> {
    version: OfpVersion,
    object_id: ObjectId,
    offset: usize,
    length: usize,
    parent: Option<&'p WireObject<'p>>,
    wbuf: Option<SharedBuffer>,
}

impl<'p> WireObject<'p> {
    /// Create a handle not yet attached to any wire buffer.
    pub fn new(version: OfpVersion, object_id: ObjectId, length: usize) -> WireObject<'p> {
        WireObject {
            version: version,
            object_id: object_id,
            offset: 0,
            length: length,
            parent: None,
            wbuf: None,
        }
    }

    /// Attach the handle to `wbuf` at absolute `offset`.
    pub fn attach(mut self, wbuf: SharedBuffer, offset: usize) -> WireObject<'p> {
        self.wbuf = Some(wbuf);
        self.offset = offset;
        self
    }

    /// Build a handle for the top-level message at the start of `wbuf`, taking version and
    /// length from the OpenFlow header.
    pub fn message(wbuf: SharedBuffer) -> TypeMapResult<WireObject<'static>> {
        let header = OfpHeader::parse(&wbuf.borrow(), 0)?;
        let version = OfpVersion::of_wire(header.version())?;
        trace!("message handle: {} type {} length {}",
               version,
               header.type_code(),
               header.length());
        Ok(WireObject::new(version, ObjectId::Message, header.length()).attach(wbuf, 0))
    }

    /// Create a handle for a structure nested `offset` bytes into this one. The child
    /// shares this handle's buffer and version.
    pub fn child<'c>(&'c self,
                     object_id: ObjectId,
                     offset: usize,
                     length: usize)
                     -> WireObject<'c> {
        WireObject {
            version: self.version,
            object_id: object_id,
            offset: offset,
            length: length,
            parent: Some(self),
            wbuf: self.wbuf.clone(),
        }
    }

    pub fn version(&self) -> OfpVersion {
        self.version
    }

    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }

    /// Offset relative to the parent, or into the buffer when there is no parent.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// In-memory length of the object. Kept equal to the wire length field by callers.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    pub fn parent(&self) -> Option<&WireObject<'p>> {
        self.parent
    }

    /// Return the attached wire buffer.
    pub fn wbuf(&self) -> TypeMapResult<&SharedBuffer> {
        self.wbuf.as_ref().ok_or(TypeMapError::NoBuffer { id: self.object_id })
    }

    /// Absolute start of this object; `None` if the chain of offsets overflows.
    fn base(&self) -> Option<usize> {
        match self.parent {
            Some(p) => p.base()?.checked_add(self.offset),
            None => Some(self.offset),
        }
    }

    /// Resolve a field `rel` bytes into this object to an absolute buffer offset.
    pub fn absolute_offset(&self, rel: usize) -> TypeMapResult<usize> {
        let wbuf = self.wbuf()?;
        self.base()
            .and_then(|b| b.checked_add(rel))
            .ok_or_else(|| {
                TypeMapError::OutOfBounds {
                    offset: self.offset,
                    width: rel,
                    extent: wbuf.borrow().len(),
                }
            })
    }

    pub fn read_u16(&self, rel: usize) -> TypeMapResult<u16> {
        let off = self.absolute_offset(rel)?;
        self.wbuf()?.borrow().get_u16(off)
    }

    pub fn write_u16(&self, rel: usize, value: u16) -> TypeMapResult<()> {
        let off = self.absolute_offset(rel)?;
        trace!("{:?}: u16 {:#06x} at {}", self.object_id, value, off);
        self.wbuf()?.borrow_mut().set_u16(off, value)
    }

    pub fn read_u32(&self, rel: usize) -> TypeMapResult<u32> {
        let off = self.absolute_offset(rel)?;
        self.wbuf()?.borrow().get_u32(off)
    }

    pub fn write_u32(&self, rel: usize, value: u32) -> TypeMapResult<()> {
        let off = self.absolute_offset(rel)?;
        trace!("{:?}: u32 {:#010x} at {}", self.object_id, value, off);
        self.wbuf()?.borrow_mut().set_u32(off, value)
    }
}
