use anyhow::Context;
use dotboy::{parse_number, RunConfig, DEFAULT_BASE_ADDRESS};

const USAGE: &str = "usage: dotboy <program.bin> [base_address] [cycle_budget]\n\
                     numbers may be decimal or 0x-prefixed hex; a budget of 0 runs until halt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(program_path) = args.next() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let base_address = match args.next() {
        Some(text) => parse_number::<u16>(&text).unwrap_or_else(|err| usage_error(err)),
        None => DEFAULT_BASE_ADDRESS,
    };
    let cycle_budget = match args.next() {
        Some(text) => parse_number::<u64>(&text).unwrap_or_else(|err| usage_error(err)),
        None => 0,
    };

    log::info!("Loading program: '{}'", program_path);
    let program = std::fs::read(&program_path)
        .with_context(|| format!("failed to read program file '{program_path}'"))?;

    let config = RunConfig::builder()
        .program(program)
        .base_address(base_address)
        .cycle_budget(cycle_budget)
        .build();

    let report = dotboy::run(config)?;
    println!("{report}");
    Ok(())
}

fn usage_error(err: anyhow::Error) -> ! {
    eprintln!("{err:#}\n{USAGE}");
    std::process::exit(1);
}
