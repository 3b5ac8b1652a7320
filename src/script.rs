use tbs::input::InputCommand;
use tbs::{AccountReport, Bank, Result};

use std::path::PathBuf;

use csv::{ReaderBuilder, Trim, Writer};

/// Replays every row of the CSV script at `filepath` against `bank`. Rows that cannot be
/// parsed or that the bank rejects are logged and skipped.
pub fn replay(bank: &mut Bank, filepath: PathBuf) -> Result<usize> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_path(filepath)?;
    let mut executed = 0;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputCommand>() {
        log::debug!("Parsing record into InputCommand: {record:?}");
        let input_command = match record {
            Ok(input_command) => input_command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let command = match input_command.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        match bank.execute(command) {
            Ok(outcome) => {
                log::debug!("{}", outcome.to_string().trim_end());
                executed += 1;
            }
            Err(e) => log::warn!("Rejected: {e}"),
        }
    }

    Ok(executed)
}

/// Serializes one report row per account, in the order the accounts were opened
pub fn build_report(bank: &Bank) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for account in bank.client().accounts() {
        let report = AccountReport::from(account);
        log::debug!("Serializing report: {report:?}");
        wtr.serialize(report)?;
    }

    let utf8 = wtr.into_inner()?;
    Ok(String::from_utf8(utf8)?)
}
