mod args;
mod config;
mod script;
mod shell;

use tbs::{ClientProfile, Result};

use std::io;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let policy = config::checking_policy()?;

    match args::parse_script_arg()? {
        Some(script_path) => {
            log::debug!("Found filepath as input arg: {script_path:?}");

            let mut bank = tbs::build_bank(ClientProfile::default(), policy);

            let executed = script::replay(&mut bank, script_path)?;
            log::debug!("Replayed {executed} commands. Beginning report...");

            let output = script::build_report(&bank)?;

            log::debug!("Writing to stdout: {output:?}");
            print!("{output}");
        }
        None => {
            let stdin = io::stdin();
            let mut shell = shell::Shell::new(stdin.lock(), io::stdout());

            let profile = match shell.read_profile()? {
                Some(profile) => profile,
                None => return Ok(()),
            };

            let mut bank = tbs::build_bank(profile, policy);
            shell.run(&mut bank)?;
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}
