mod commands;
mod config;
mod console;
mod menu;

use bank::Result;
use console::Console;

use std::io;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Starting console session...");

    let mut bank = bank::build_bank();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    commands::run(&mut bank, &mut console)?;

    log::debug!("Session finished with {} clients registered", bank.clients().len());

    Ok(())
}
