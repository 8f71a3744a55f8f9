//! Error type for the CPU core

use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@CpuError]>
pub type Result<T> = std::result::Result<T, CpuError>;

/// The only way execution can fail: every register and memory operation is
/// total, so the core stops only on an opcode it has no table entry for.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    #[error("opcode not implemented: 0x{opcode:02X} at 0x{addr:04X}")]
    UnimplementedOpcode {
        /// The offending byte
        opcode: u8,
        /// Address the byte was fetched from
        addr: u16,
    },
}
