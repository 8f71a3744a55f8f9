/// Abstraction over the memory the CPU executes from.
///
/// Every address in the 16-bit space is readable and writable; there are no
/// faults. Peripherals are out of scope, so this stays a plain byte store
/// contract.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Copy `bytes` into the bus starting at `base`.
    ///
    /// Addresses wrap at 0xFFFF. Bytes outside the written range keep
    /// whatever they held before. The default implementation writes one
    /// byte at a time; flat stores can override it with a bulk copy.
    fn load(&mut self, bytes: &[u8], base: u16) {
        let mut addr = base;
        for &byte in bytes {
            self.write8(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}
