//! # `zka records`
//!
//! Run the record fetch/merge pipeline over a wallet dump: a JSON file
//! with `plaintext` and/or `spendable` record arrays, fed through a mock
//! adapter exactly as a live wallet's two record sets would be.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use zka_core::ProgramId;
use zka_proof::PROGRAM_ID;
use zka_record::{to_record_input, DecodedCredential};
use zka_wallet::{fetch_credential_records, MockWalletAdapter};

use crate::read_json;

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Path to a JSON wallet dump: an object with optional `plaintext`
    /// and `spendable` arrays of raw records.
    pub dump: PathBuf,

    /// Program to attribute the records to.
    #[arg(long, default_value = PROGRAM_ID)]
    pub program: String,
}

pub fn run_records(args: &RecordsArgs) -> anyhow::Result<u8> {
    let dump = read_json(&args.dump)?;
    let program = ProgramId::new(&args.program).context("invalid --program")?;

    let take = |key: &str| -> Vec<Value> {
        dump.get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    };

    let wallet = MockWalletAdapter::connected()
        .with_plaintext_records(take("plaintext"))
        .with_spendable_records(take("spendable"));

    let records = fetch_credential_records(&wallet, &program);
    if records.is_empty() {
        println!("no credential records");
        return Ok(0);
    }

    for (index, record) in records.iter().enumerate() {
        let summary = match DecodedCredential::from_record(record) {
            Some(cred) => format!(
                "age {} · {} · kyc {}",
                cred.age,
                cred.country_label(),
                if cred.kyc_passed { "passed" } else { "failed" }
            ),
            None => "opaque".to_string(),
        };
        let input = match to_record_input(record) {
            Some(_) => "resolvable",
            None => "NOT resolvable",
        };
        println!("#{index}  {summary}  [{input}]");
    }
    Ok(0)
}
