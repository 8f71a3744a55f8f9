use super::{Bus, Cpu, Flags, Instr, Operand};

impl<B: Bus> Cpu<B> {
    /// Apply the effect of one decoded instruction.
    ///
    /// The opcode byte has already been fetched and its cycles charged;
    /// operands are fetched from here as each shape requires.
    pub(super) fn execute(&mut self, instr: Instr) {
        match instr {
            Instr::Nop => {}

            Instr::Stop => {
                // STOP is encoded as 0x10 0x00.
                let _ = self.fetch8();
                self.stop();
            }

            Instr::LdImm8(dst) => {
                let value = self.fetch8();
                self.regs.set8(dst, value);
            }

            Instr::Ld8(dst, src) => {
                let value = self.regs.get8(src);
                self.regs.set8(dst, value);
            }

            Instr::LdFromHl(dst) => {
                let value = self.bus.read8(self.regs.hl());
                self.regs.set8(dst, value);
            }

            Instr::LdImm16(dst) => {
                let value = self.fetch16();
                self.regs.set16(dst, value);
            }

            Instr::Add { src, carry } => {
                let value = self.read_operand(src);
                let carry_in = carry && self.get_flag(Flags::C);
                let a = self.regs.a;
                self.regs.a = self.add8(a, value, carry_in);
            }

            Instr::Inc16(reg) => self.inc16(reg),
            Instr::Dec16(reg) => self.dec16(reg),

            Instr::Call(cond) => {
                let taken = self.regs.condition(cond);
                self.call_cond(taken);
            }

            Instr::Push(reg) => {
                let value = self.regs.get16(reg);
                self.push_u16(value);
            }

            Instr::Pop(reg) => {
                let value = self.pop_u16();
                self.regs.set16(reg, value);
            }
        }
    }

    #[inline]
    fn read_operand(&mut self, src: Operand) -> u8 {
        match src {
            Operand::Reg(reg) => self.regs.get8(reg),
            Operand::IndirectHl => self.bus.read8(self.regs.hl()),
            Operand::Imm8 => self.fetch8(),
        }
    }
}

