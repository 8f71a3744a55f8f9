mod alu;
mod bus;
mod exec;
mod helpers;
mod init;
mod opcodes;
mod regs;
mod step;


pub use bus::Bus;
pub use opcodes::{Instr, Opcode, OpcodeTable, Operand, OPCODES};
pub use regs::{Cond, Flags, Reg16, Reg8, Registers};

use crate::memory::Memory;

/// Execution state of the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    Running,
    /// Entered on an unimplemented opcode, a STOP instruction, or an
    /// explicit [`Cpu::stop`]. Only [`Cpu::reset`] leaves this state.
    Halted,
}

/// Game Boy CPU core.
///
/// Owns its bus exclusively. Instructions are looked up in an
/// [`OpcodeTable`] and executed one at a time; each table entry carries a
/// fixed cycle cost that is charged before the effect runs.
pub struct Cpu<B: Bus = Memory> {
    pub regs: Registers,
    bus: B,
    table: &'static OpcodeTable,
    /// Total cycles (T-cycles) charged since construction or the last reset.
    cycles: u64,
    /// `run` stops once `cycles` reaches this value. Zero means unbounded.
    budget: u64,
    state: CpuState,
}

impl<B: Bus + std::fmt::Debug> std::fmt::Debug for Cpu<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("bus", &self.bus)
            .field("opcodes", &self.table.len())
            .field("cycles", &self.cycles)
            .field("budget", &self.budget)
            .field("state", &self.state)
            .finish()
    }
}

impl<B: Bus> Cpu<B> {
    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    #[inline]
    pub fn table(&self) -> &'static OpcodeTable {
        self.table
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn cycle_budget(&self) -> u64 {
        self.budget
    }

    /// Set the number of cycles `run` may consume. Zero means no limit.
    pub fn set_cycle_budget(&mut self, budget: u64) {
        self.budget = budget;
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.get_flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, on: bool) {
        self.regs.set_flag(flag, on);
    }
}
