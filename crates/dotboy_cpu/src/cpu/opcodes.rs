use lazy_static::lazy_static;

use super::{Cond, Reg16, Reg8};

/// Source operand for 8-bit ALU instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Reg(Reg8),
    /// Byte at the address held in HL.
    IndirectHl,
    /// Byte fetched from the instruction stream.
    Imm8,
}

/// Effect of a single opcode.
///
/// Variants describe an instruction shape; the concrete registers and
/// conditions come from the table entry. `Cpu::execute` is the only place
/// that interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instr {
    Nop,
    /// STOP: swallows the padding byte that follows and halts the CPU.
    Stop,
    /// LD r, d8
    LdImm8(Reg8),
    /// LD dst, src
    Ld8(Reg8, Reg8),
    /// LD r, (HL)
    LdFromHl(Reg8),
    /// LD rr, d16
    LdImm16(Reg16),
    /// ADD A, src / ADC A, src
    Add { src: Operand, carry: bool },
    Inc16(Reg16),
    Dec16(Reg16),
    /// CALL cc, a16
    Call(Cond),
    Push(Reg16),
    Pop(Reg16),
}

/// One opcode table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    /// Mnemonic, for logs and diagnostics only.
    pub name: &'static str,
    /// Fixed cost in T-cycles, charged before the effect runs.
    pub cycles: u32,
    pub instr: Instr,
}

/// Mapping from opcode byte to its entry. Absent bytes are unimplemented.
#[derive(Clone, Debug)]
pub struct OpcodeTable {
    entries: [Option<Opcode>; 256],
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl OpcodeTable {
    pub const fn empty() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    /// The built-in DMG catalogue.
    pub fn dmg() -> Self {
        let mut table = Self::empty();
        for &(opcode, name, cycles, instr) in DMG_OPCODES {
            table.insert(opcode, name, cycles, instr);
        }
        table
    }

    /// Add an entry.
    ///
    /// # Panics
    ///
    /// Panics if `opcode` already has an entry or `cycles` is zero. Tables
    /// are built once at startup, so either is a bug in the table itself.
    pub fn insert(
        &mut self,
        opcode: u8,
        name: &'static str,
        cycles: u32,
        instr: Instr,
    ) -> &mut Self {
        let slot = &mut self.entries[opcode as usize];
        assert!(
            slot.is_none(),
            "duplicate opcode table entry for 0x{opcode:02X} ({name})"
        );
        assert!(cycles > 0, "opcode 0x{opcode:02X} ({name}) has no cycle cost");
        *slot = Some(Opcode {
            name,
            cycles,
            instr,
        });
        self
    }

    #[inline]
    pub fn get(&self, opcode: u8) -> Option<&Opcode> {
        self.entries[opcode as usize].as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Implemented opcodes in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Opcode)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(op, entry)| entry.as_ref().map(|e| (op as u8, e)))
    }
}

lazy_static! {
    /// Process-wide instance of [`OpcodeTable::dmg`].
    pub static ref OPCODES: OpcodeTable = OpcodeTable::dmg();
}

use Instr::*;

// Cycle costs follow the Game Boy CPU manual timing table (T-cycles).
#[rustfmt::skip]
const DMG_OPCODES: &[(u8, &str, u32, Instr)] = &[
    (0x00, "NOP", 4, Nop),
    (0x10, "STOP", 4, Stop),

    // 8-bit loads
    (0x06, "LD B, d8", 8, LdImm8(Reg8::B)),
    (0x0E, "LD C, d8", 8, LdImm8(Reg8::C)),
    (0x16, "LD D, d8", 8, LdImm8(Reg8::D)),
    (0x1E, "LD E, d8", 8, LdImm8(Reg8::E)),
    (0x26, "LD H, d8", 8, LdImm8(Reg8::H)),
    (0x2E, "LD L, d8", 8, LdImm8(Reg8::L)),
    (0x3E, "LD A, d8", 8, LdImm8(Reg8::A)),

    (0x78, "LD A, B", 4, Ld8(Reg8::A, Reg8::B)),
    (0x79, "LD A, C", 4, Ld8(Reg8::A, Reg8::C)),
    (0x7A, "LD A, D", 4, Ld8(Reg8::A, Reg8::D)),
    (0x7B, "LD A, E", 4, Ld8(Reg8::A, Reg8::E)),
    (0x7C, "LD A, H", 4, Ld8(Reg8::A, Reg8::H)),
    (0x7D, "LD A, L", 4, Ld8(Reg8::A, Reg8::L)),
    (0x7F, "LD A, A", 4, Ld8(Reg8::A, Reg8::A)),

    (0x66, "LD H, (HL)", 8, LdFromHl(Reg8::H)),
    (0x7E, "LD A, (HL)", 8, LdFromHl(Reg8::A)),

    // 16-bit loads
    (0x01, "LD BC, d16", 12, LdImm16(Reg16::BC)),
    (0x11, "LD DE, d16", 12, LdImm16(Reg16::DE)),
    (0x21, "LD HL, d16", 12, LdImm16(Reg16::HL)),
    (0x31, "LD SP, d16", 12, LdImm16(Reg16::SP)),

    // 8-bit ALU
    (0x80, "ADD A, B", 4, Add { src: Operand::Reg(Reg8::B), carry: false }),
    (0x81, "ADD A, C", 4, Add { src: Operand::Reg(Reg8::C), carry: false }),
    (0x82, "ADD A, D", 4, Add { src: Operand::Reg(Reg8::D), carry: false }),
    (0x83, "ADD A, E", 4, Add { src: Operand::Reg(Reg8::E), carry: false }),
    (0x84, "ADD A, H", 4, Add { src: Operand::Reg(Reg8::H), carry: false }),
    (0x85, "ADD A, L", 4, Add { src: Operand::Reg(Reg8::L), carry: false }),
    (0x86, "ADD A, (HL)", 8, Add { src: Operand::IndirectHl, carry: false }),
    (0x87, "ADD A, A", 4, Add { src: Operand::Reg(Reg8::A), carry: false }),
    (0xC6, "ADD A, d8", 8, Add { src: Operand::Imm8, carry: false }),

    (0x88, "ADC A, B", 4, Add { src: Operand::Reg(Reg8::B), carry: true }),
    (0x89, "ADC A, C", 4, Add { src: Operand::Reg(Reg8::C), carry: true }),
    (0x8A, "ADC A, D", 4, Add { src: Operand::Reg(Reg8::D), carry: true }),
    (0x8B, "ADC A, E", 4, Add { src: Operand::Reg(Reg8::E), carry: true }),
    (0x8C, "ADC A, H", 4, Add { src: Operand::Reg(Reg8::H), carry: true }),
    (0x8D, "ADC A, L", 4, Add { src: Operand::Reg(Reg8::L), carry: true }),
    (0x8E, "ADC A, (HL)", 8, Add { src: Operand::IndirectHl, carry: true }),
    (0x8F, "ADC A, A", 4, Add { src: Operand::Reg(Reg8::A), carry: true }),
    (0xCE, "ADC A, d8", 8, Add { src: Operand::Imm8, carry: true }),

    // 16-bit INC/DEC
    (0x03, "INC BC", 8, Inc16(Reg16::BC)),
    (0x13, "INC DE", 8, Inc16(Reg16::DE)),
    (0x23, "INC HL", 8, Inc16(Reg16::HL)),
    (0x33, "INC SP", 8, Inc16(Reg16::SP)),

    (0x0B, "DEC BC", 8, Dec16(Reg16::BC)),
    (0x1B, "DEC DE", 8, Dec16(Reg16::DE)),
    (0x2B, "DEC HL", 8, Dec16(Reg16::HL)),
    (0x3B, "DEC SP", 8, Dec16(Reg16::SP)),

    // Calls
    (0xC4, "CALL NZ, a16", 12, Call(Cond::NZ)),
    (0xCC, "CALL Z, a16", 12, Call(Cond::Z)),
    (0xD4, "CALL NC, a16", 12, Call(Cond::NC)),
    (0xDC, "CALL C, a16", 12, Call(Cond::C)),

    // Stack
    (0xC5, "PUSH BC", 16, Push(Reg16::BC)),
    (0xD5, "PUSH DE", 16, Push(Reg16::DE)),
    (0xE5, "PUSH HL", 16, Push(Reg16::HL)),
    (0xF5, "PUSH AF", 16, Push(Reg16::AF)),

    (0xC1, "POP BC", 12, Pop(Reg16::BC)),
    (0xD1, "POP DE", 12, Pop(Reg16::DE)),
    (0xE1, "POP HL", 12, Pop(Reg16::HL)),
    (0xF1, "POP AF", 12, Pop(Reg16::AF)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dmg_table_has_every_catalogue_entry() {
        assert_eq!(OPCODES.len(), DMG_OPCODES.len());
        for &(opcode, name, cycles, instr) in DMG_OPCODES {
            let entry = OPCODES.get(opcode).unwrap();
            assert_eq!(entry.name, name);
            assert_eq!(entry.cycles, cycles);
            assert_eq!(entry.instr, instr);
        }
    }

    #[test]
    fn cycle_costs_are_published_values() {
        for (opcode, entry) in OPCODES.iter() {
            assert!(
                matches!(entry.cycles, 4 | 8 | 12 | 16 | 20),
                "0x{opcode:02X} {} costs {}",
                entry.name,
                entry.cycles
            );
        }
        assert_eq!(OPCODES.get(0x00).unwrap().cycles, 4);
        assert_eq!(OPCODES.get(0x3E).unwrap().cycles, 8);
        assert_eq!(OPCODES.get(0x80).unwrap().cycles, 4);
        assert_eq!(OPCODES.get(0x21).unwrap().cycles, 12);
        assert_eq!(OPCODES.get(0xC5).unwrap().cycles, 16);
    }

    #[test]
    fn unknown_opcodes_are_absent() {
        for opcode in [0xCB, 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xFF] {
            assert!(OPCODES.get(opcode).is_none(), "0x{opcode:02X}");
        }
    }

    #[test]
    fn iter_is_sorted_by_opcode() {
        let ops: Vec<u8> = OPCODES.iter().map(|(op, _)| op).collect();
        let mut sorted = ops.clone();
        sorted.sort_unstable();
        assert_eq!(ops, sorted);
        assert_eq!(ops.first(), Some(&0x00));
    }

    #[test]
    #[should_panic(expected = "duplicate opcode table entry")]
    fn insert_rejects_duplicates() {
        let mut table = OpcodeTable::dmg();
        table.insert(0x00, "NOP", 4, Nop);
    }

    #[test]
    fn insert_extends_a_table() {
        let mut table = OpcodeTable::empty();
        assert!(table.is_empty());
        table
            .insert(0x00, "NOP", 4, Nop)
            .insert(0x47, "LD B, A", 4, Ld8(Reg8::B, Reg8::A));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0x47).unwrap().name, "LD B, A");
    }
}
