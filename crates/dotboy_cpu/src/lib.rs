//! Instruction-level core for the Game Boy (DMG) CPU.
//!
//! [`Cpu`] fetches opcodes from a [`Bus`], looks them up in an
//! [`OpcodeTable`] and charges each entry's fixed cycle cost against an
//! optional budget.

pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::{
    Bus, Cond, Cpu, CpuState, Flags, Instr, Opcode, OpcodeTable, Operand, Reg16, Reg8, Registers,
    OPCODES,
};
pub use error::{CpuError, Result};
pub use memory::{Memory, MEMORY_SIZE};
