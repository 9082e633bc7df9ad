use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use tls_log_client::{client, trust, Args, ClientError};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    match run(&args, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, out: &mut dyn Write) -> Result<(), ClientError> {
    let mode = args.mode().ok_or(ClientError::NoMode)?;
    let certs = trust::load_certificates(&args.cert)?;
    let http = trust::pinned_client(certs)?;
    client::run(&http, &args.url, mode, out).await?;
    out.flush()?;
    Ok(())
}
