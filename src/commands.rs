use crate::console::{Console, ConsoleError};
use crate::menu::{MenuOption, MENU};

use bank::ids::TaxId;
use bank::services::{Bank, BankError, NewClient};
use bank::{Money, Result};

use std::io::{BufRead, Write};

use chrono::Local;

/// Runs the menu loop until the user quits or the input is closed.
///
/// Domain errors are reported to the user and the loop carries on.
pub fn run<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    loop {
        let selection = match console.prompt(MENU) {
            Ok(selection) => selection,
            Err(e) if e.is::<ConsoleError>() => break,
            Err(e) => return Err(e),
        };

        let option = match selection.parse::<MenuOption>() {
            Ok(option) => option,
            Err(e) => {
                console.failure(&e.to_string())?;
                continue;
            }
        };

        if option == MenuOption::Quit {
            console.success("Leaving the system...")?;
            break;
        }

        if let Err(e) = logged(option, || execute(option, bank, console)) {
            if e.is::<ConsoleError>() {
                break;
            }

            log::warn!("{e}");
            console.failure(&e.to_string())?;
        }
    }

    Ok(())
}

/// Runs an operation, then records in the log which operation ran and when
fn logged<T>(option: MenuOption, operation: impl FnOnce() -> T) -> T {
    let result = operation();

    log::info!(
        "{}: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        option.name().to_uppercase()
    );

    result
}

fn execute<R: BufRead, W: Write>(
    option: MenuOption,
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> Result {
    match option {
        MenuOption::Deposit => deposit(bank, console),
        MenuOption::Withdraw => withdraw(bank, console),
        MenuOption::Statement => statement(bank, console),
        MenuOption::NewAccount => new_account(bank, console),
        MenuOption::ListAccounts => list_accounts(bank, console),
        MenuOption::NewClient => new_client(bank, console),
        MenuOption::Quit => Ok(()),
    }
}

/// Asks for a tax id and makes sure a client is registered under it
fn prompt_existing_client<R: BufRead, W: Write>(
    bank: &Bank,
    console: &mut Console<R, W>,
) -> Result<TaxId> {
    let tax_id = TaxId::new(console.prompt("Client tax id (CPF): ")?);

    if bank.find_client(&tax_id).is_none() {
        Err(BankError::ClientNotFound(tax_id.clone()))?
    }

    return Ok(tax_id);
}

fn deposit<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    let tax_id = prompt_existing_client(bank, console)?;
    let amount = Money::parse(&console.prompt("Amount to deposit: ")?)?;

    bank.deposit(&tax_id, amount)?;

    console.success("Deposit completed successfully!")
}

fn withdraw<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    let tax_id = prompt_existing_client(bank, console)?;
    let amount = Money::parse(&console.prompt("Amount to withdraw: ")?)?;

    bank.withdraw(&tax_id, amount)?;

    console.success("Withdrawal completed successfully!")
}

fn statement<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    let tax_id = prompt_existing_client(bank, console)?;
    let statement = bank.statement(&tax_id)?;

    console.print("\n========== STATEMENT ==========")?;
    console.print(&statement.to_string())?;
    console.print("===============================")
}

fn new_client<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    let tax_id = TaxId::new(console.prompt("Tax id (CPF, numbers only): ")?);

    if bank.find_client(&tax_id).is_some() {
        Err(BankError::DuplicateClient(tax_id.clone()))?
    }

    let name = console.prompt("Full name: ")?;
    let birth_date = console.prompt("Birth date (dd-mm-yyyy): ")?;
    let address = console.prompt("Address (street, number - district - city/state): ")?;

    bank.create_client(NewClient {
        tax_id,
        name,
        birth_date,
        address,
    })?;

    console.success("Client created successfully!")
}

fn new_account<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    let tax_id = TaxId::new(console.prompt("Client tax id (CPF): ")?);

    let number = bank.open_account(&tax_id)?;

    console.success(&format!("Account {number} created successfully!"))
}

fn list_accounts<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> Result {
    let mut accounts = bank.accounts();

    if accounts.is_empty() {
        return console.failure("There are no registered accounts!");
    }

    console.print("\n========== ACCOUNTS ==========")?;
    while accounts.has_next() {
        if let Some(account) = accounts.next() {
            console.print(&format!("\n{account}"))?;
        }
    }
    console.print("==============================")
}
