use ckb_txcodec_error::{Error, ErrorKind};

/// Exit codes
///
/// The process exit status is the discriminant.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitCode {
    /// Command line arguments error.
    Cli = 64,
    /// Config options error.
    Config = 65,
    /// Input or output errors.
    IO = 66,
    /// General failure, including rejected entities.
    Failure = 113,
}

impl ExitCode {
    /// Converts into the process exit status.
    pub fn into(self) -> i32 {
        self as i32
    }
}

impl From<std::io::Error> for ExitCode {
    fn from(err: std::io::Error) -> ExitCode {
        eprintln!("IO Error: {err:?}");
        ExitCode::IO
    }
}

impl From<toml::de::Error> for ExitCode {
    fn from(err: toml::de::Error) -> ExitCode {
        eprintln!("Config Error: {err}");
        ExitCode::Config
    }
}

impl From<serde_json::Error> for ExitCode {
    fn from(err: serde_json::Error) -> ExitCode {
        eprintln!("Input Error: {err}");
        if err.is_io() {
            ExitCode::IO
        } else {
            ExitCode::Failure
        }
    }
}

impl From<clap::Error> for ExitCode {
    fn from(err: clap::Error) -> ExitCode {
        eprintln!("Args Error: {err}");
        ExitCode::Cli
    }
}

impl From<Error> for ExitCode {
    fn from(err: Error) -> ExitCode {
        eprintln!("Encode Error: {err:#}");
        match err.kind() {
            ErrorKind::Config => ExitCode::Config,
            ErrorKind::Io => ExitCode::IO,
            ErrorKind::Format
            | ErrorKind::Domain
            | ErrorKind::Range
            | ErrorKind::Composition => ExitCode::Failure,
        }
    }
}
