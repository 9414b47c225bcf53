use std::env;
use std::process::ExitCode;

use semantic_ui_showcase::{Invocation, ShowcaseError};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err @ ShowcaseError::Usage(_)) => {
            eprintln!("error: {err}");
            eprintln!("run with --help for usage");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<String, ShowcaseError> {
    let invocation = Invocation::parse(env::args().skip(1))?;
    let working_dir = env::current_dir().map_err(|source| ShowcaseError::Io {
        path: ".".into(),
        source,
    })?;
    invocation.run(&working_dir)
}
