#![allow(non_snake_case)]
use std::process::exit;

use icu_login::cmd;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cmd = cmd::Cmd::parse();
    exit(match cmd.main().await {
        Ok(..) => 0,
        Err(e) => {
            e.print_error();
            e.exit_code()
        }
    })
}
