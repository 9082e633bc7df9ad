use std::path::PathBuf;

use clap::Parser;

/// Command-line flags.
#[derive(Parser, Debug)]
#[command(
    name = "tls-log-client",
    about = "HTTPS test client that trusts a single self-signed server certificate"
)]
pub struct Args {
    /// Address of web server (example: 'localhost:8443').
    #[arg(long, default_value = "localhost:8443")]
    pub url: String,

    /// Path to server certificate (for self-signed certificates).
    #[arg(long, default_value = "certs/server.crt")]
    pub cert: PathBuf,

    /// Print the API information.
    #[arg(long)]
    pub info: bool,

    /// Query the server health endpoint.
    #[arg(long)]
    pub health: bool,

    /// POST a test log entry to the server.
    #[arg(long)]
    pub test: bool,
}

/// The single request shape one invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// GET `/`, print the usage text.
    Info,
    /// GET `/health`, print the status text.
    Health,
    /// POST `/logs` with a test entry.
    Test,
}

impl Args {
    /// Resolve the mode flags into a single [`Mode`].
    ///
    /// `--info` wins over `--health`, which wins over `--test`: passing
    /// `--info --test` prints the usage text and issues no POST.
    pub fn mode(&self) -> Option<Mode> {
        if self.info {
            Some(Mode::Info)
        } else if self.health {
            Some(Mode::Health)
        } else if self.test {
            Some(Mode::Test)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_flag_table() {
        let args = Args::parse_from(["tls-log-client"]);
        assert_eq!(args.url, "localhost:8443");
        assert_eq!(args.cert, PathBuf::from("certs/server.crt"));
        assert_eq!(args.mode(), None);
    }

    #[test]
    fn info_takes_precedence_over_test() {
        let args = Args::parse_from(["tls-log-client", "--info", "--test"]);
        assert_eq!(args.mode(), Some(Mode::Info));
    }

    #[test]
    fn each_flag_selects_its_mode() {
        let info = Args::parse_from(["tls-log-client", "--info"]);
        let health = Args::parse_from(["tls-log-client", "--health"]);
        let test = Args::parse_from(["tls-log-client", "--test"]);
        assert_eq!(info.mode(), Some(Mode::Info));
        assert_eq!(health.mode(), Some(Mode::Health));
        assert_eq!(test.mode(), Some(Mode::Test));
    }
}
