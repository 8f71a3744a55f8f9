use anyhow::{Context, Result};
use dotboy_cpu::{Cpu, Registers};
use typed_builder::TypedBuilder;

/// Default load address: where the DMG boot ROM hands over to cartridge code.
pub const DEFAULT_BASE_ADDRESS: u16 = 0x0100;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    pub program: Vec<u8>,
    #[builder(default = DEFAULT_BASE_ADDRESS)]
    pub base_address: u16,
    /// Zero means run until the CPU halts or fails.
    #[builder(default = 0)]
    pub cycle_budget: u64,
    /// Zero the registers before loading instead of keeping the post-boot
    /// values.
    #[builder(default = false)]
    pub reset_registers: bool,
}

/// CPU state after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub registers: Registers,
    pub cycles: u64,
    pub halted: bool,
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = &self.registers;
        writeln!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.sp,
            r.pc
        )?;
        write!(
            f,
            "flags={:08b} cycles={} halted={}",
            r.f, self.cycles, self.halted
        )
    }
}

pub fn run(config: RunConfig) -> Result<RunReport> {
    let RunConfig {
        program,
        base_address,
        cycle_budget,
        reset_registers,
    } = config;

    let mut cpu = Cpu::new();
    if reset_registers {
        cpu.reset();
    }
    cpu.load_program(&program, base_address);
    cpu.set_cycle_budget(cycle_budget);

    log::info!(
        "running {} bytes at 0x{base_address:04X} (budget: {})",
        program.len(),
        if cycle_budget == 0 {
            "unbounded".to_string()
        } else {
            format!("{cycle_budget} cycles")
        }
    );

    cpu.run()
        .with_context(|| format!("execution stopped after {} cycles", cpu.cycles()))?;

    Ok(RunReport {
        registers: cpu.regs,
        cycles: cpu.cycles(),
        halted: cpu.is_halted(),
    })
}

/// Parse a decimal or `0x`-prefixed hexadecimal number.
pub fn parse_number<T>(text: &str) -> Result<T>
where
    T: TryFrom<u64>,
    <T as TryFrom<u64>>::Error: std::error::Error + Send + Sync + 'static,
{
    let value = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    }
    .with_context(|| format!("invalid number '{text}'"))?;

    T::try_from(value).with_context(|| format!("number '{text}' is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_hex_and_decimal() {
        assert_eq!(parse_number::<u16>("0x0100").unwrap(), 0x0100);
        assert_eq!(parse_number::<u16>("0XFFFE").unwrap(), 0xFFFE);
        assert_eq!(parse_number::<u64>("1000").unwrap(), 1000);
    }

    #[test]
    fn parse_number_rejects_garbage_and_overflow() {
        assert!(parse_number::<u16>("0x10000").is_err());
        assert!(parse_number::<u16>("abc").is_err());
        assert!(parse_number::<u64>("").is_err());
    }

    #[test]
    fn run_reports_final_state() {
        let config = RunConfig::builder()
            .program(vec![0x3E, 0x1F, 0x06, 0x21, 0x80])
            .base_address(0x0000)
            .cycle_budget(20)
            .reset_registers(true)
            .build();

        let report = run(config).unwrap();
        assert_eq!(report.registers.a, 0x40);
        assert_eq!(report.registers.f, 0b0010_0000);
        assert_eq!(report.cycles, 20);
        assert!(!report.halted);
    }

    #[test]
    fn run_defaults_to_post_boot_state() {
        // ADD A, d8; STOP
        let config = RunConfig::builder()
            .program(vec![0xC6, 0x01, 0x10, 0x00])
            .build();

        let report = run(config).unwrap();
        assert_eq!(report.registers.a, 0x02);
        assert_eq!(report.registers.pc, DEFAULT_BASE_ADDRESS + 4);
        assert!(report.halted);
    }

    #[test]
    fn run_surfaces_unimplemented_opcode() {
        let config = RunConfig::builder().program(vec![0x00, 0xD3]).build();
        let err = run(config).unwrap_err();
        let cause = err.downcast_ref::<dotboy_cpu::CpuError>().unwrap();
        assert_eq!(
            *cause,
            dotboy_cpu::CpuError::UnimplementedOpcode {
                opcode: 0xD3,
                addr: 0x0101
            }
        );
    }
}
