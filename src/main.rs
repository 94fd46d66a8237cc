//! ckb-txcodec executable.
mod helper;
mod subcommand;

use ckb_logger::debug;
use ckb_txcodec_config::{cli, ExitCode, Setup};

fn main() {
    if let Err(exit_code) = run_app() {
        ::std::process::exit(exit_code.into());
    }
}

/// Runs the subcommand picked on the command line.
///
/// The `ExitCode` is converted to the process exit status code.
fn run_app() -> Result<(), ExitCode> {
    let app_matches = cli::get_matches();
    let (cmd, matches) = app_matches.subcommand().ok_or_else(|| {
        eprintln!("expect a subcommand");
        ExitCode::Cli
    })?;

    let setup = Setup::from_matches(cmd, matches)?;
    helper::init_logger(&setup.config.logger);
    debug!(
        "ckb-txcodec {} running {}",
        env!("CARGO_PKG_VERSION"),
        setup.subcommand_name
    );

    match cmd {
        cli::CMD_ENCODE => subcommand::encode(setup.encode(matches)?),
        _ => {
            eprintln!("unknown subcommand {}", cmd);
            Err(ExitCode::Cli)
        }
    }
}
