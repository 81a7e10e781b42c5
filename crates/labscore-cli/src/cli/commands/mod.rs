use super::args::*;

pub(crate) mod run;
pub(crate) mod validate;

use crate::exit_codes::PASS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args),
        Command::Validate(args) => validate::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(PASS)
        }
    }
}
