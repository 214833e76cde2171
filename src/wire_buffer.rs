use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use byteorder::{BigEndian, ByteOrder};

use crate::ofp_error::{TypeMapError, TypeMapResult};

/// A wire buffer shared between a message and the objects nested inside it.
pub type SharedBuffer = Rc<RefCell<WireBuffer>>;

/// Fixed-size byte store with bounds-checked big-endian accessors at absolute offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireBuffer {
    buf: Vec<u8>,
}

impl WireBuffer {
    /// Create a zero-filled buffer of `len` bytes.
    pub fn new(len: usize) -> WireBuffer {
        WireBuffer { buf: vec![0; len] }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> WireBuffer {
        WireBuffer { buf: bytes }
    }

    /// Wrap the buffer for sharing between object handles.
    pub fn shared(self) -> SharedBuffer {
        Rc::new(RefCell::new(self))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    fn span(&self, offset: usize, width: usize) -> TypeMapResult<Range<usize>> {
        match offset.checked_add(width) {
            Some(end) if end <= self.buf.len() => Ok(offset..end),
            _ => {
                Err(TypeMapError::OutOfBounds {
                    offset: offset,
                    width: width,
                    extent: self.buf.len(),
                })
            }
        }
    }

    pub fn get_u8(&self, offset: usize) -> TypeMapResult<u8> {
        let r = self.span(offset, 1)?;
        Ok(self.buf[r.start])
    }

    pub fn set_u8(&mut self, offset: usize, value: u8) -> TypeMapResult<()> {
        let r = self.span(offset, 1)?;
        self.buf[r.start] = value;
        Ok(())
    }

    pub fn get_u16(&self, offset: usize) -> TypeMapResult<u16> {
        let r = self.span(offset, 2)?;
        Ok(BigEndian::read_u16(&self.buf[r]))
    }

    pub fn set_u16(&mut self, offset: usize, value: u16) -> TypeMapResult<()> {
        let r = self.span(offset, 2)?;
        BigEndian::write_u16(&mut self.buf[r], value);
        Ok(())
    }

    pub fn get_u32(&self, offset: usize) -> TypeMapResult<u32> {
        let r = self.span(offset, 4)?;
        Ok(BigEndian::read_u32(&self.buf[r]))
    }

    pub fn set_u32(&mut self, offset: usize, value: u32) -> TypeMapResult<()> {
        let r = self.span(offset, 4)?;
        BigEndian::write_u32(&mut self.buf[r], value);
        Ok(())
    }
}
