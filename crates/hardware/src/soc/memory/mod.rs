//! System Memory (RAM).
//!
//! This module implements the LS-8 main memory. It provides:
//! 1. **Storage:** A flat, zero-initialised array of 8-bit cells.
//! 2. **Bounds Checking:** Every read and write outside `0..size` raises a fault.
//! 3. **Bulk Loading:** Placement of a whole program image in one checked operation.

use crate::common::constants::DEFAULT_RAM_SIZE;
use crate::common::error::Fault;

/// Main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    cells: Vec<u8>,
}

impl Ram {
    /// Creates a zero-filled memory of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of addressable cells.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    /// Number of addressable cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether memory has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads one byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address.
    ///
    /// # Returns
    ///
    /// The stored byte, or an out-of-range fault carrying `addr`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells.get(addr).copied().ok_or(Fault::memory(addr))
    }

    /// Writes one byte.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address.
    /// * `val` - The byte to store.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let cell = self.cells.get_mut(addr).ok_or(Fault::memory(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `base`.
    ///
    /// Nothing is written unless the whole slice fits. On failure the fault
    /// names the first address past the end of memory that would be touched.
    pub fn load_at(&mut self, base: usize, data: &[u8]) -> Result<(), Fault> {
        let end = base.saturating_add(data.len());
        if end > self.cells.len() {
            return Err(Fault::memory(self.cells.len().max(base)));
        }
        self.cells[base..end].copy_from_slice(data);
        Ok(())
    }

    /// Read-only view of the whole memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new(DEFAULT_RAM_SIZE)
    }
}
