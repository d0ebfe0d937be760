use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use xsh::error::ShellError;
use xsh::flags::Flags;
use xsh::input::{EditorReader, PipedReader};
use xsh::shell::Shell;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("xsh: {}", e);
        flags.print_help();
        return ExitCode::from(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("xsh {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let default_level = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xsh: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(flags: Flags) -> Result<(), ShellError> {
    let mut shell = Shell::new(flags);

    if io::stdin().is_terminal() {
        let mut reader = EditorReader::new()?;
        shell.run(&mut reader)
    } else {
        let mut reader = PipedReader::new(io::stdin().lock(), io::stdout());
        shell.run(&mut reader)
    }
}
