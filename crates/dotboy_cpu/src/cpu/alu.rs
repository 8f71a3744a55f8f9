use super::{Bus, Cpu, Flags, Reg16};

impl<B: Bus> Cpu<B> {
    /// Core 8-bit ADD/ADC operation.
    ///
    /// Returns the truncated sum and rewrites all four flags: Z from the
    /// 8-bit result, N cleared, H on a carry out of bit 3, C on a carry out
    /// of bit 7.
    pub(crate) fn add8(&mut self, left: u8, right: u8, carry_in: bool) -> u8 {
        let carry = carry_in as u8;

        let half = (left & 0x0F) + (right & 0x0F) + carry;
        let full = left as u16 + right as u16 + carry as u16;
        let result = full as u8;

        // Flags: Z N H C
        self.regs.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, half > 0x0F);
        self.set_flag(Flags::C, full > 0xFF);
        result
    }

    /// 16-bit increment for `INC rr`. No flags are affected.
    #[inline]
    pub(crate) fn inc16(&mut self, reg: Reg16) {
        let value = self.regs.get16(reg).wrapping_add(1);
        self.regs.set16(reg, value);
    }

    /// 16-bit decrement for `DEC rr`. No flags are affected.
    #[inline]
    pub(crate) fn dec16(&mut self, reg: Reg16) {
        let value = self.regs.get16(reg).wrapping_sub(1);
        self.regs.set16(reg, value);
    }
}
