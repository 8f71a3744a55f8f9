use super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Read the byte at PC and advance PC by one.
    ///
    /// This is the only place PC is incremented implicitly.
    #[inline]
    pub(crate) fn fetch8(&mut self) -> u8 {
        let value = self.bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian 16-bit operand (low byte first).
    #[inline]
    pub(crate) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_be_bytes([hi, lo])
    }

    /// Push a 16-bit value onto the stack.
    ///
    /// The stack grows downward. The low byte is written first at SP-1,
    /// then the high byte at SP-2, so memory[SP] = high, memory[SP+1] = low.
    #[inline]
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write8(self.regs.sp, lo);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write8(self.regs.sp, hi);
    }

    /// Pop a 16-bit value; exact inverse of [`Cpu::push_u16`].
    #[inline]
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let hi = self.bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let lo = self.bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_be_bytes([hi, lo])
    }

    /// Conditional call helper used by CALL cc,a16.
    ///
    /// The two operand bytes are always consumed. When taken, the address
    /// of the following instruction is pushed and PC jumps to the target.
    pub(crate) fn call_cond(&mut self, cond: bool) {
        let addr = self.fetch16();
        if cond {
            let ret = self.regs.pc;
            self.push_u16(ret);
            self.regs.pc = addr;
        }
    }
}
