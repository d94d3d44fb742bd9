//! Console menu
//!
//! Single-operator front end. Reads one option at a time, prompts for the
//! fields of that operation, runs the matching handler, and prints the
//! outcome. Operator mistakes are reported and the menu comes back; only
//! I/O failures end the session.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::directory::Directory;
use crate::error::{AppError, AppResult};
use crate::ops::{
    CreateCustomerCommand, CreateCustomerHandler, DepositCommand, DepositHandler,
    ListAccountsHandler, OpenAccountCommand, OpenAccountHandler, StatementCommand,
    StatementHandler, WithdrawCommand, WithdrawHandler,
};

use super::format::{format_brl, render_account_list, render_statement};

const MENU: &str = "
========= BANK TELLER =========
[d] Deposit
[s] Withdraw
[e] Statement
[u] New customer
[c] New account
[l] List accounts
[q] Quit
===============================";

/// Interactive teller console over any buffered input and any output.
///
/// Generic over the streams so sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run the menu loop until the operator quits or input ends.
    pub fn run(&mut self, directory: &mut Directory) -> AppResult<()> {
        loop {
            let option = match self.read_option()? {
                Some(option) => option,
                None => {
                    // Input closed at the menu prompt counts as a quit
                    writeln!(self.output)?;
                    break;
                }
            };

            let outcome = match option.as_str() {
                "d" => self.deposit(directory),
                "s" => self.withdraw(directory),
                "e" => self.statement(directory),
                "u" => self.new_customer(directory),
                "c" => self.new_account(directory),
                "l" => self.list_accounts(directory),
                "q" => {
                    writeln!(self.output, "\nThank you for banking with us.")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "\nInvalid option.")?;
                    continue;
                }
            };

            if let Err(err) = outcome {
                if err.is_fatal() {
                    return Err(err);
                }
                writeln!(self.output, "\nError: {err}")?;
            }
        }

        Ok(())
    }

    // =========================================================================
    // Menu operations
    // =========================================================================

    /// [d] Deposit
    fn deposit(&mut self, directory: &mut Directory) -> AppResult<()> {
        let account_number = self.prompt_account_number("\nAccount number: ")?;
        let amount = self.prompt_decimal("Deposit amount: ")?;

        let result = DepositHandler::new(directory)
            .execute(DepositCommand::new(account_number, amount))?;

        writeln!(
            self.output,
            "\nDeposit applied. New balance: {}",
            format_brl(result.balance)
        )?;
        Ok(())
    }

    /// [s] Withdraw
    fn withdraw(&mut self, directory: &mut Directory) -> AppResult<()> {
        let account_number = self.prompt_account_number("\nAccount number: ")?;
        let amount = self.prompt_decimal("Withdrawal amount: ")?;

        let result = WithdrawHandler::new(directory)
            .execute(WithdrawCommand::new(account_number, amount))?;

        writeln!(
            self.output,
            "\nWithdrawal applied. New balance: {}",
            format_brl(result.balance)
        )?;
        Ok(())
    }

    /// [e] Statement
    fn statement(&mut self, directory: &Directory) -> AppResult<()> {
        let account_number = self.prompt_account_number("\nAccount number: ")?;

        let statement =
            StatementHandler::new(directory).execute(StatementCommand::new(account_number))?;

        write!(self.output, "{}", render_statement(&statement))?;
        Ok(())
    }

    /// [u] New customer
    fn new_customer(&mut self, directory: &mut Directory) -> AppResult<()> {
        let tax_id = self.prompt("\nTax id (digits only): ")?;
        let name = self.prompt("Full name: ")?;
        let birth_date = self.prompt_date("Birth date (dd/mm/yyyy): ")?;
        let address = self.prompt("Address (street, number - district): ")?;

        CreateCustomerHandler::new(directory).execute(CreateCustomerCommand::new(
            tax_id, name, birth_date, address,
        ))?;

        writeln!(self.output, "\nCustomer registered successfully.")?;
        Ok(())
    }

    /// [c] New account
    fn new_account(&mut self, directory: &mut Directory) -> AppResult<()> {
        let tax_id = self.prompt("\nHolder tax id: ")?;

        let command = OpenAccountCommand::new(tax_id, self.config.branch.clone())
            .with_limits(self.config.limits());
        let result = OpenAccountHandler::new(directory).execute(command)?;

        writeln!(
            self.output,
            "\nAccount {} created successfully.",
            result.account_number
        )?;
        Ok(())
    }

    /// [l] List accounts
    fn list_accounts(&mut self, directory: &Directory) -> AppResult<()> {
        let summaries = ListAccountsHandler::new(directory).execute()?;

        write!(self.output, "{}", render_account_list(&summaries))?;
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Show the menu and read the chosen option.
    /// Returns `None` when input is exhausted.
    fn read_option(&mut self) -> AppResult<Option<String>> {
        writeln!(self.output, "{MENU}")?;
        write!(self.output, "=> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Print a label and read one line. Input ending mid-operation is an
    /// I/O error, unlike at the menu prompt.
    fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed mid-operation",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn prompt_account_number(&mut self, label: &str) -> AppResult<u32> {
        let raw = self.prompt(label)?;
        raw.parse()
            .map_err(|_| AppError::InvalidNumericInput(raw))
    }

    fn prompt_decimal(&mut self, label: &str) -> AppResult<Decimal> {
        let raw = self.prompt(label)?;
        raw.parse()
            .map_err(|_| AppError::InvalidNumericInput(raw))
    }

    fn prompt_date(&mut self, label: &str) -> AppResult<NaiveDate> {
        let raw = self.prompt(label)?;
        NaiveDate::parse_from_str(&raw, "%d/%m/%Y")
            .map_err(|_| AppError::InvalidDateFormat(raw))
    }
}
