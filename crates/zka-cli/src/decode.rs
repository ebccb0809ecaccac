//! # `zka decode` / `zka classify`
//!
//! Decode a raw wallet record from a JSON file: classify it, show the
//! typed field view, and resolve the execution-call input string.

use std::path::PathBuf;

use clap::Args;

use zka_record::{is_credential_record, to_record_input, DecodedCredential};

use crate::read_json;

/// Message shown when no supported shape resolves. The decode layer
/// aborts here instead of letting a malformed input fail on-chain later.
pub const UNSUPPORTED_FORMAT_MSG: &str = "Selected credential format is not supported by wallet";

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to a JSON file holding one raw wallet record.
    pub record: PathBuf,

    /// Print only the resolved input string.
    #[arg(long)]
    pub input_only: bool,
}

pub fn run_decode(args: &DecodeArgs) -> anyhow::Result<u8> {
    let record = read_json(&args.record)?;

    let Some(input) = to_record_input(&record) else {
        eprintln!("{UNSUPPORTED_FORMAT_MSG}");
        return Ok(1);
    };

    if args.input_only {
        println!("{input}");
        return Ok(0);
    }

    println!(
        "classification: {}",
        if is_credential_record(&record) {
            "credential"
        } else {
            "not a credential"
        }
    );
    match DecodedCredential::from_record(&record) {
        Some(cred) => {
            println!("owner:      {}", cred.owner);
            println!("issuer:     {}", cred.issuer);
            println!("age:        {}", cred.age);
            println!("country:    {} ({})", cred.country_label(), cred.country_code);
            println!("kyc:        {}", if cred.kyc_passed { "passed" } else { "failed" });
            println!("accredited: {}", if cred.accredited_investor { "yes" } else { "no" });
            if let Some(nonce) = &cred.nonce {
                println!("nonce:      {nonce}");
            }
        }
        None => println!("fields: not decodable for display (opaque handle)"),
    }
    println!("input: {input}");
    Ok(0)
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to a JSON file holding one raw wallet record.
    pub record: PathBuf,
}

pub fn run_classify(args: &ClassifyArgs) -> anyhow::Result<u8> {
    let record = read_json(&args.record)?;
    if is_credential_record(&record) {
        println!("credential");
        Ok(0)
    } else {
        println!("not a credential");
        Ok(1)
    }
}
