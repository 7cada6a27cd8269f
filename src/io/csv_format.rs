//! CSV format handling for command records and reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to typed commands
//! - Account and transaction history report serialization
//!
//! Input columns: `command,customer,account,value,target_customer,target_account,name`.
//! The meaning of `value` depends on the command: an amount for money
//! movements, the interest rate for `open_savings`, the overdraft limit for
//! `open_current`.

use crate::core::Customer;
use crate::types::{
    AccountKey, AccountKind, AccountNumber, Command, CustomerId, LedgerError,
};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Every column except `command` and `customer` is optional; which ones
/// are required depends on the command.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    pub command: String,
    pub customer: CustomerId,
    pub account: Option<AccountNumber>,
    pub value: Option<String>,
    pub target_customer: Option<CustomerId>,
    pub target_account: Option<AccountNumber>,
    pub name: Option<String>,
}

/// Convert a CsvRecord to a Command
///
/// Command names are case-insensitive. `line` is only used to locate
/// errors in the input.
///
/// # Errors
///
/// Returns an error if:
/// - The command name is unknown
/// - A column the command needs is empty
/// - The value column is not a decimal number
pub fn convert_csv_record(record: CsvRecord, line: Option<u64>) -> Result<Command, LedgerError> {
    let command = record.command.trim().to_lowercase();
    let customer = record.customer;

    let converted = match command.as_str() {
        "add_customer" => Command::AddCustomer {
            customer,
            name: required(record.name, &command, "name", line)?,
        },
        "remove_customer" => Command::RemoveCustomer { customer },
        "open_standard" => Command::OpenAccount {
            key: account_key(&record, &command, line)?,
            kind: AccountKind::Standard,
        },
        "open_savings" => Command::OpenAccount {
            key: account_key(&record, &command, line)?,
            kind: AccountKind::Savings {
                interest_rate: decimal_value(record.value, &command, line)?,
            },
        },
        "open_current" => Command::OpenAccount {
            key: account_key(&record, &command, line)?,
            kind: AccountKind::Current {
                overdraft_limit: decimal_value(record.value, &command, line)?,
            },
        },
        "delete_account" => Command::DeleteAccount {
            key: account_key(&record, &command, line)?,
        },
        "deposit" => Command::Deposit {
            key: account_key(&record, &command, line)?,
            amount: decimal_value(record.value, &command, line)?,
        },
        "withdraw" => Command::Withdraw {
            key: account_key(&record, &command, line)?,
            amount: decimal_value(record.value, &command, line)?,
        },
        "transfer" => Command::Transfer {
            source: account_key(&record, &command, line)?,
            target: AccountKey::new(
                required(record.target_customer, &command, "target_customer", line)?,
                required(record.target_account, &command, "target_account", line)?,
            ),
            amount: decimal_value(record.value, &command, line)?,
        },
        "apply_interest" => Command::ApplyInterest {
            key: account_key(&record, &command, line)?,
        },
        _ => return Err(LedgerError::invalid_command(record.command.trim(), line)),
    };

    Ok(converted)
}

fn required<T>(
    value: Option<T>,
    command: &str,
    field: &str,
    line: Option<u64>,
) -> Result<T, LedgerError> {
    value.ok_or_else(|| LedgerError::missing_field(command, field, line))
}

fn account_key(
    record: &CsvRecord,
    command: &str,
    line: Option<u64>,
) -> Result<AccountKey, LedgerError> {
    let account = required(record.account, command, "account", line)?;
    Ok(AccountKey::new(record.customer, account))
}

fn decimal_value(
    value: Option<String>,
    command: &str,
    line: Option<u64>,
) -> Result<Decimal, LedgerError> {
    let value = required(value, command, "value", line)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::missing_field(command, "value", line));
    }
    Decimal::from_str(trimmed).map_err(|_| LedgerError::invalid_amount(trimmed, line))
}

// Anything the csv writer reports is an output failure, never a parse error.
fn write_error(error: csv::Error) -> LedgerError {
    LedgerError::IoError {
        message: error.to_string(),
    }
}

/// Write every account of the given customers as CSV
///
/// Columns: customer, name, account, kind, balance, transactions.
/// Customers and accounts appear in the order given. A customer without
/// accounts gets a single row with the account columns left empty.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_accounts_csv(
    customers: &[Customer],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "customer",
            "name",
            "account",
            "kind",
            "balance",
            "transactions",
        ])
        .map_err(write_error)?;

    for customer in customers {
        let id = customer.id().to_string();

        if customer.accounts().is_empty() {
            writer
                .write_record([id.as_str(), customer.name(), "", "", "", ""])
                .map_err(write_error)?;
            continue;
        }

        for account in customer.accounts() {
            writer
                .write_record(&[
                    id.clone(),
                    customer.name().to_string(),
                    account.number().to_string(),
                    account.kind().to_string(),
                    format!("{:.4}", account.balance()),
                    account.transactions().len().to_string(),
                ])
                .map_err(write_error)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write every transaction of the given customers' accounts as CSV
///
/// Columns: customer, account, timestamp (RFC 3339), description, amount.
/// Transactions of an account appear in chronological order.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_history_csv(
    customers: &[Customer],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["customer", "account", "timestamp", "description", "amount"])
        .map_err(write_error)?;

    for customer in customers {
        for account in customer.accounts() {
            for transaction in account.transactions() {
                writer
                    .write_record(&[
                        customer.id().to_string(),
                        account.number().to_string(),
                        transaction.timestamp().to_rfc3339(),
                        transaction.description().to_string(),
                        format!("{:.4}", transaction.amount()),
                    ])
                    .map_err(write_error)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
