//! # `zka issue`
//!
//! Issue a credential: offline into the session store (the demo mode),
//! or print the on-chain issuance call for a wallet to execute.

use std::path::Path;

use anyhow::Context;
use clap::Args;

use zka_core::{AleoAddress, ProgramId};
use zka_proof::{issue_request, PROGRAM_ID};
use zka_session::{IssueParams, JsonFileStore, Session};

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Recipient address.
    #[arg(long)]
    pub owner: String,

    /// Issuer address. Defaults to the recipient (self-issued demo).
    #[arg(long)]
    pub issuer: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: u8,

    /// ISO-3166 numeric country code.
    #[arg(long)]
    pub country: u16,

    /// Mark KYC as passed.
    #[arg(long)]
    pub kyc: bool,

    /// Mark the holder as an accredited investor.
    #[arg(long)]
    pub accredited: bool,

    /// Issuer-assigned risk score, 0-100.
    #[arg(long, default_value_t = 15)]
    pub risk_score: u8,

    /// Print the on-chain issuance call instead of issuing offline.
    #[arg(long)]
    pub on_chain: bool,

    /// Program to execute against (with --on-chain).
    #[arg(long, default_value = PROGRAM_ID)]
    pub program: String,
}

pub fn run_issue(args: &IssueArgs, session_path: &Path) -> anyhow::Result<u8> {
    if args.on_chain {
        // The on-chain path demands a real address; the offline demo
        // accepts any string.
        let owner = AleoAddress::new(&*args.owner).context("invalid --owner address")?;
        let program = ProgramId::new(&args.program).context("invalid --program")?;
        let request = issue_request(
            program,
            &owner,
            args.age,
            args.country,
            args.kyc,
            args.accredited,
        );
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(0);
    }

    let issuer = args.issuer.clone().unwrap_or_else(|| args.owner.clone());
    let mut session = Session::load(Box::new(JsonFileStore::new(session_path)));
    let id = session.issue_credential(
        IssueParams {
            owner: args.owner.clone(),
            age: args.age,
            country_code: args.country,
            kyc_passed: args.kyc,
            accredited_investor: args.accredited,
            risk_score: args.risk_score,
        },
        issuer,
    )?;

    println!("issued: {id}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zka_session::SessionStore;

    fn args(on_chain: bool, owner: &str) -> IssueArgs {
        IssueArgs {
            owner: owner.into(),
            issuer: None,
            age: 25,
            country: 840,
            kyc: true,
            accredited: false,
            risk_score: 15,
            on_chain,
            program: PROGRAM_ID.into(),
        }
    }

    #[test]
    fn offline_issue_lands_in_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");

        assert_eq!(run_issue(&args(false, "aleo1demo"), &session_path).unwrap(), 0);

        let state = JsonFileStore::new(&session_path).load().unwrap();
        assert_eq!(state.credentials.len(), 1);
        assert_eq!(state.credentials[0].owner, "aleo1demo");
        // Self-issued by default.
        assert_eq!(state.credentials[0].issuer, "aleo1demo");
    }

    #[test]
    fn on_chain_issue_validates_the_address() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");

        // Demo strings are fine offline but rejected on-chain.
        assert!(run_issue(&args(true, "aleo1demo"), &session_path).is_err());

        let valid = format!("aleo1{}", "q".repeat(58));
        assert_eq!(run_issue(&args(true, &valid), &session_path).unwrap(), 0);
        // Printing a call issues nothing.
        assert!(!session_path.exists());
    }
}
