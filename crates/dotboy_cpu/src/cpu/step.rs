use crate::error::{CpuError, Result};

use super::{Bus, Cpu, CpuState};

impl<B: Bus> Cpu<B> {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// An opcode with no table entry halts the CPU and is reported as
    /// [`CpuError::UnimplementedOpcode`]. PC has already moved past the
    /// offending byte; nothing else is touched. A halted CPU does not fetch
    /// and reports 0 cycles.
    pub fn step(&mut self) -> Result<u32> {
        if self.state == CpuState::Halted {
            return Ok(0);
        }

        let addr = self.regs.pc;
        let opcode = self.fetch8();

        let Some(entry) = self.table.get(opcode).copied() else {
            log::error!(
                "CPU halted: opcode 0x{opcode:02X} not implemented at PC=0x{addr:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            self.state = CpuState::Halted;
            return Err(CpuError::UnimplementedOpcode { opcode, addr });
        };

        log::trace!(
            "0x{addr:04X}: {opcode:02X} {name:<12} ({cycles} cycles)",
            name = entry.name,
            cycles = entry.cycles,
        );

        self.cycles += u64::from(entry.cycles);
        self.execute(entry.instr);
        Ok(entry.cycles)
    }

    /// Step until the cycle budget is used up, the CPU halts, or an
    /// unimplemented opcode is hit.
    ///
    /// The budget is checked before each instruction, so the last one may
    /// end past it. With a budget of zero this only returns on a halt or
    /// an error.
    pub fn run(&mut self) -> Result<()> {
        while self.budget == 0 || self.cycles < self.budget {
            if self.state == CpuState::Halted {
                return Ok(());
            }
            self.step()?;
        }

        log::debug!(
            "cycle budget reached: {} of {} cycles at PC=0x{:04X}",
            self.cycles,
            self.budget,
            self.regs.pc
        );
        Ok(())
    }
}
