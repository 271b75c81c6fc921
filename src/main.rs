mod api_client;
mod client;
mod cmd;
mod error;
mod members;
mod report;
mod types;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;

use crate::cmd::Cmd;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let result = Cmd::parse().run().await;
    ExitCode::from(exit_status(result, &mut io::stderr()))
}

// the failure message bypasses the logger so RUST_LOG can't silence it
fn exit_status(result: anyhow::Result<()>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(stderr, "error: {e:#}");
            1
        }
    }
}
