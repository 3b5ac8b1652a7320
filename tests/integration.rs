use tbs::AccountReport;

use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use csv::{ReaderBuilder, Trim};

const BIN: &str = env!("CARGO_BIN_EXE_toy-banking-system");

fn read_reports(mut rdr: csv::Reader<impl std::io::Read>) -> Vec<AccountReport> {
    let mut reports = vec![];

    for record in rdr.deserialize() {
        reports.push(record.unwrap());
    }

    reports
}

#[test]
fn example_scripts() {
    let input_dir = PathBuf::from("./resources/test-examples/inputs");
    let expected_dir = PathBuf::from("./resources/test-examples/expected");

    // Running test for each file in input_dir
    let files_to_test = fs::read_dir(input_dir.clone()).unwrap().count();
    assert!(files_to_test > 0);

    for idx in 1..=files_to_test {
        let input_file = input_dir.join(format!("script_{idx}.csv"));
        let expected_file = expected_dir.join(format!("accounts_{idx}.csv"));

        println!("Testing input: {input_file:?}");
        println!("Expected: {expected_file:?}");

        let output = Command::new(BIN)
            .arg(&input_file)
            .env_remove("BANK_OVERDRAFT_LIMIT")
            .env_remove("BANK_MAX_WITHDRAWALS")
            .output()
            .unwrap();

        println!("{}", String::from_utf8(output.stderr).unwrap());
        assert!(output.status.success());

        let output = String::from_utf8(output.stdout).unwrap();

        let actual = read_reports(
            ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(output.as_bytes()),
        );

        let expected = read_reports(
            ReaderBuilder::new()
                .trim(Trim::All)
                .from_path(expected_file)
                .unwrap(),
        );

        // account order is creation order, so no sorting
        assert_eq!(actual, expected);
    }
}

#[test]
fn policy_from_environment() {
    let output = Command::new(BIN)
        .arg("./resources/test-examples/inputs/script_3.csv")
        .env("BANK_MAX_WITHDRAWALS", "10")
        .env("BANK_OVERDRAFT_LIMIT", "0")
        .output()
        .unwrap();

    assert!(output.status.success());

    let output = String::from_utf8(output.stdout).unwrap();
    let actual = read_reports(ReaderBuilder::new().from_reader(output.as_bytes()));

    // no overdraft: the three early withdrawals bounce, the last one goes through
    assert_eq!(
        actual,
        vec![AccountReport {
            account: "7".to_string(),
            branch: "0001".to_string(),
            balance: "999.00".to_string(),
            withdrawals: 1,
            entries: 2,
        }]
    );
}

#[test]
fn missing_script_fails() {
    let output = Command::new(BIN)
        .arg("./resources/test-examples/inputs/does_not_exist.csv")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn interactive_session() {
    let mut child = Command::new(BIN)
        .env_remove("BANK_OVERDRAFT_LIMIT")
        .env_remove("BANK_MAX_WITHDRAWALS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(
            b"Ana Souza\n123.456.789-00\n01/02/1990\nRua A, 10\n\
              2\n1001\n\
              3\n1001\n100\n\
              4\n1001\n50\n\
              1\n6\n7\n",
        )
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Account 1001 created successfully."));
    assert!(stdout.contains("Name: Ana Souza"));
    assert!(stdout.contains("Balance: R$ 50.00"));
    assert!(stdout.contains("Kind: Deposit, Amount: R$ 100.00"));
    assert!(stdout.contains("Kind: Withdrawal, Amount: R$ 50.00"));
    assert!(stdout.contains("Exiting... Goodbye!"));
}
