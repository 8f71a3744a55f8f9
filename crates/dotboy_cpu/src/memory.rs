use crate::cpu::Bus;

/// Size of the addressable space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat 64 KiB byte store backing the CPU.
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory").field("size", &MEMORY_SIZE).finish()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Zero the whole store.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn load(&mut self, bytes: &[u8], base: u16) {
        let base = base as usize;
        // Anything that runs past 0xFFFF wraps back to 0x0000.
        let head = bytes.len().min(MEMORY_SIZE - base);
        self.data[base..base + head].copy_from_slice(&bytes[..head]);

        let rest = &bytes[head..];
        if !rest.is_empty() {
            log::debug!(
                "load of {} bytes at 0x{base:04X} wraps past 0xFFFF",
                bytes.len()
            );
            for chunk in rest.chunks(MEMORY_SIZE) {
                self.data[..chunk.len()].copy_from_slice(chunk);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_memory_reads_zero() {
        let mut mem = Memory::new();
        assert_eq!(mem.read8(0x0000), 0);
        assert_eq!(mem.read8(0xC000), 0);
        assert_eq!(mem.read8(0xFFFF), 0);
    }

    #[test]
    fn write_then_read() {
        let mut mem = Memory::new();
        mem.write8(0xFFFF, 0xAB);
        mem.write8(0x1234, 0xCD);
        assert_eq!(mem.read8(0xFFFF), 0xAB);
        assert_eq!(mem.read8(0x1234), 0xCD);
    }

    #[test]
    fn load_keeps_bytes_outside_range() {
        let mut mem = Memory::new();
        mem.write8(0x00FF, 0x11);
        mem.write8(0x0103, 0x22);
        mem.load(&[0xDE, 0xAD, 0xBE], 0x0100);

        assert_eq!(mem.read8(0x00FF), 0x11);
        assert_eq!(&mem.as_slice()[0x0100..0x0103], &[0xDE, 0xAD, 0xBE]);
        assert_eq!(mem.read8(0x0103), 0x22);
    }

    #[test]
    fn load_wraps_at_top_of_address_space() {
        let mut mem = Memory::new();
        mem.load(&[0x01, 0x02, 0x03], 0xFFFE);
        assert_eq!(mem.read8(0xFFFE), 0x01);
        assert_eq!(mem.read8(0xFFFF), 0x02);
        assert_eq!(mem.read8(0x0000), 0x03);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut mem = Memory::new();
        mem.load(&[0xFF; 16], 0x8000);
        mem.clear();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn default_bus_load_matches_bulk_copy() {
        struct Plain([u8; MEMORY_SIZE]);
        impl Bus for Plain {
            fn read8(&mut self, addr: u16) -> u8 {
                self.0[addr as usize]
            }
            fn write8(&mut self, addr: u16, value: u8) {
                self.0[addr as usize] = value;
            }
        }

        let program = [0x3E, 0x1F, 0x06, 0x21, 0x80];
        let mut plain = Box::new(Plain([0; MEMORY_SIZE]));
        let mut mem = Memory::new();
        plain.load(&program, 0xFFFD);
        mem.load(&program, 0xFFFD);
        assert_eq!(&plain.0[..], mem.as_slice());
    }
}
