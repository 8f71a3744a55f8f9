use crate::memory::Memory;

use super::{Bus, Cpu, CpuState, OpcodeTable, Registers, OPCODES};

impl Default for Cpu<Memory> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu<Memory> {
    /// CPU in its post-boot state with an empty 64 KiB memory.
    pub fn new() -> Self {
        Self::with_bus(Memory::new())
    }
}

impl<B: Bus> Cpu<B> {
    /// CPU in its post-boot state executing from `bus`.
    pub fn with_bus(bus: B) -> Self {
        Self {
            regs: Registers::power_on(),
            bus,
            table: &*OPCODES,
            cycles: 0,
            budget: 0,
            state: CpuState::Running,
        }
    }

    /// Swap in a different opcode table, e.g. one extended with extra
    /// entries on top of [`OpcodeTable::dmg`].
    pub fn with_table(mut self, table: &'static OpcodeTable) -> Self {
        self.table = table;
        self
    }

    /// Zero every register (SP goes back to 0xFFFE), clear the cycle
    /// counter and leave the halted state.
    ///
    /// Memory and the cycle budget are left as they are.
    pub fn reset(&mut self) {
        self.regs = Registers {
            sp: 0xFFFE,
            ..Registers::default()
        };
        self.cycles = 0;
        self.state = CpuState::Running;
        log::debug!("CPU reset");
    }

    /// Copy `program` into memory at `base` and point PC at it.
    pub fn load_program(&mut self, program: &[u8], base: u16) {
        self.bus.load(program, base);
        self.regs.pc = base;
        log::debug!(
            "loaded {} byte program at 0x{base:04X}",
            program.len()
        );
    }

    /// Halt execution. Subsequent `step`/`run` calls do nothing until
    /// [`Cpu::reset`].
    pub fn stop(&mut self) {
        if self.state != CpuState::Halted {
            log::debug!("CPU stopped at PC=0x{:04X}", self.regs.pc);
        }
        self.state = CpuState::Halted;
    }
}
