//! # `zka prove`
//!
//! Build (and optionally submit) a proof call from a wallet record, or
//! generate a fully-offline proof from a session credential. The two
//! modes never share state: `--record` is the production-shaped path,
//! `--credential` the client-simulated demo.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;
use uuid::Uuid;

use zka_core::ProgramId;
use zka_proof::{explorer_url, proof_request, ProofKind, ProofParams, UnknownProofKind, PROGRAM_ID};
use zka_record::to_record_input;
use zka_session::{JsonFileStore, Session, TxRecord};
use zka_wallet::{MockWalletAdapter, WalletAdapter};

use crate::decode::UNSUPPORTED_FORMAT_MSG;
use crate::read_json;

fn parse_kind(s: &str) -> Result<ProofKind, UnknownProofKind> {
    s.parse()
}

#[derive(Args, Debug)]
pub struct ProveArgs {
    /// The proof to generate: age, kyc, country, accredited, or composite.
    #[arg(long, value_parser = parse_kind)]
    pub kind: ProofKind,

    /// Path to a JSON file holding the raw wallet record to consume.
    #[arg(long, conflicts_with = "credential")]
    pub record: Option<PathBuf>,

    /// Offline mode: id of a session credential to prove from.
    #[arg(long)]
    pub credential: Option<String>,

    /// Minimum age for age/composite proofs (default 18).
    #[arg(long)]
    pub minimum_age: Option<u8>,

    /// Submit the call through the demo wallet instead of printing it.
    #[arg(long)]
    pub submit: bool,

    /// Program to execute against.
    #[arg(long, default_value = PROGRAM_ID)]
    pub program: String,
}

pub fn run_prove(args: &ProveArgs, session_path: &Path) -> anyhow::Result<u8> {
    let params = match args.minimum_age {
        Some(age) => ProofParams::with_minimum_age(age),
        None => ProofParams::default(),
    };

    match (&args.record, &args.credential) {
        (Some(record_path), None) => {
            run_onchain(args, record_path, &params, session_path)
        }
        (None, Some(credential)) => run_offline(args, credential, params, session_path),
        _ => bail!("exactly one of --record or --credential is required"),
    }
}

fn run_onchain(
    args: &ProveArgs,
    record_path: &Path,
    params: &ProofParams,
    session_path: &Path,
) -> anyhow::Result<u8> {
    let record = read_json(record_path)?;

    // Decode failures abort here, before anything reaches the wallet.
    let Some(input) = to_record_input(&record) else {
        eprintln!("{UNSUPPORTED_FORMAT_MSG}");
        return Ok(1);
    };

    let program = ProgramId::new(&args.program).context("invalid --program")?;
    let request = proof_request(program, args.kind, input, params);

    if !args.submit {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(0);
    }

    let wallet = MockWalletAdapter::connected();
    let receipt = wallet.execute(&request)?;

    let mut session = Session::load(Box::new(JsonFileStore::new(session_path)));
    session.record_transaction(TxRecord::submitted(
        receipt.transaction_id.clone(),
        request.function.clone(),
        chrono::Utc::now(),
    ))?;

    println!("submitted: {}", receipt.transaction_id);
    println!("explorer:  {}", explorer_url(&receipt.transaction_id));
    Ok(0)
}

fn run_offline(
    args: &ProveArgs,
    credential: &str,
    params: ProofParams,
    session_path: &Path,
) -> anyhow::Result<u8> {
    let credential_id: Uuid = credential.parse().context("invalid --credential id")?;

    let mut session = Session::load(Box::new(JsonFileStore::new(session_path)));
    let proof_id = session.generate_proof(credential_id, args.kind, params)?;
    let proof = session
        .find_proof(proof_id)
        .context("generated proof vanished from session")?;

    println!("proof:  {}", proof.id);
    println!("claim:  {}", args.kind.label());
    println!("result: {}", if proof.result { "TRUE" } else { "FALSE" });
    Ok(0)
}
