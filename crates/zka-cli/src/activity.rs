//! # `zka verify` / `zka history`
//!
//! Third-party verification of an offline proof by id, and the session's
//! submitted-transaction history.

use std::path::Path;

use anyhow::Context;
use clap::Args;
use uuid::Uuid;

use zka_proof::explorer_url;
use zka_session::{JsonFileStore, Session};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// The proof id to check.
    pub proof_id: String,
}

pub fn run_verify(args: &VerifyArgs, session_path: &Path) -> anyhow::Result<u8> {
    let proof_id: Uuid = args.proof_id.trim().parse().context("invalid proof id")?;

    let session = Session::load(Box::new(JsonFileStore::new(session_path)));
    let Some(proof) = session.find_proof(proof_id) else {
        eprintln!("Proof not found");
        return Ok(1);
    };

    // A verifier learns the claim and its boolean result — nothing else.
    println!("claim:     {}", proof.kind.label());
    println!("result:    {}", if proof.result { "TRUE" } else { "FALSE" });
    if let Some(minimum_age) = proof.params.minimum_age {
        println!("threshold: {minimum_age}");
    }
    println!("generated: {}", proof.generated_at.to_rfc3339());
    Ok(if proof.result { 0 } else { 1 })
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Show at most this many entries.
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}

pub fn run_history(args: &HistoryArgs, session_path: &Path) -> anyhow::Result<u8> {
    let session = Session::load(Box::new(JsonFileStore::new(session_path)));
    let transactions = session.transactions();
    if transactions.is_empty() {
        println!("no transactions");
        return Ok(0);
    }

    for tx in transactions.iter().take(args.limit) {
        println!(
            "{}  {}  {}",
            tx.submitted_at.to_rfc3339(),
            tx.function_name,
            explorer_url(&tx.id)
        );
    }
    Ok(0)
}
