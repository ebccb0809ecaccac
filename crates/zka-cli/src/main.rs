//! # zka CLI entry point
//!
//! Argument parsing and dispatch only. The handlers live in the library
//! crate, one module per subcommand.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zka_cli::activity::{run_history, run_verify, HistoryArgs, VerifyArgs};
use zka_cli::decode::{run_classify, run_decode, ClassifyArgs, DecodeArgs};
use zka_cli::issue::{run_issue, IssueArgs};
use zka_cli::prove::{run_prove, ProveArgs};
use zka_cli::records::{run_records, RecordsArgs};

/// zkaccess CLI
///
/// Decode heterogeneous wallet credential records, build byte-exact
/// proof calls, and drive the offline demo flow.
#[derive(Parser, Debug)]
#[command(name = "zka", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the session state file.
    #[arg(long, global = true, default_value = "zka-session.json")]
    session: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a raw wallet record: classify, show fields, resolve input.
    Decode(DecodeArgs),

    /// Classify a raw wallet record as credential or not.
    Classify(ClassifyArgs),

    /// Run the record fetch/merge pipeline over a wallet dump file.
    Records(RecordsArgs),

    /// Build or submit a proof call, on-chain shaped or offline.
    Prove(ProveArgs),

    /// Issue a credential, offline or as an on-chain call.
    Issue(IssueArgs),

    /// Check an offline proof by id.
    Verify(VerifyArgs),

    /// Show the submitted-transaction history.
    History(HistoryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Decode(args) => run_decode(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Records(args) => run_records(args),
        Commands::Prove(args) => run_prove(args, &cli.session),
        Commands::Issue(args) => run_issue(args, &cli.session),
        Commands::Verify(args) => run_verify(args, &cli.session),
        Commands::History(args) => run_history(args, &cli.session),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_decode() {
        let cli = Cli::try_parse_from(["zka", "decode", "record.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Decode(_)));
        if let Commands::Decode(args) = cli.command {
            assert_eq!(args.record, PathBuf::from("record.json"));
            assert!(!args.input_only);
        }
    }

    #[test]
    fn cli_parse_decode_input_only() {
        let cli = Cli::try_parse_from(["zka", "decode", "record.json", "--input-only"]).unwrap();
        if let Commands::Decode(args) = cli.command {
            assert!(args.input_only);
        }
    }

    #[test]
    fn cli_parse_classify() {
        let cli = Cli::try_parse_from(["zka", "classify", "record.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Classify(_)));
    }

    #[test]
    fn cli_parse_records_with_program() {
        let cli = Cli::try_parse_from([
            "zka",
            "records",
            "dump.json",
            "--program",
            "other_program.aleo",
        ])
        .unwrap();
        if let Commands::Records(args) = cli.command {
            assert_eq!(args.program, "other_program.aleo");
        }
    }

    #[test]
    fn cli_parse_prove_onchain() {
        let cli = Cli::try_parse_from([
            "zka",
            "prove",
            "--kind",
            "age",
            "--record",
            "record.json",
            "--minimum-age",
            "21",
            "--submit",
        ])
        .unwrap();
        if let Commands::Prove(args) = cli.command {
            assert_eq!(args.kind, zka_proof::ProofKind::Age);
            assert_eq!(args.minimum_age, Some(21));
            assert!(args.submit);
        }
    }

    #[test]
    fn cli_parse_prove_offline() {
        let cli = Cli::try_parse_from([
            "zka",
            "prove",
            "--kind",
            "composite",
            "--credential",
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        ])
        .unwrap();
        if let Commands::Prove(args) = cli.command {
            assert_eq!(args.kind, zka_proof::ProofKind::Composite);
            assert!(args.credential.is_some());
        }
    }

    #[test]
    fn cli_rejects_unknown_proof_kind() {
        let result = Cli::try_parse_from([
            "zka",
            "prove",
            "--kind",
            "residency",
            "--record",
            "record.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_record_and_credential_together() {
        let result = Cli::try_parse_from([
            "zka",
            "prove",
            "--kind",
            "kyc",
            "--record",
            "r.json",
            "--credential",
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_issue() {
        let cli = Cli::try_parse_from([
            "zka", "issue", "--owner", "aleo1demo", "--age", "25", "--country", "840", "--kyc",
        ])
        .unwrap();
        if let Commands::Issue(args) = cli.command {
            assert_eq!(args.owner, "aleo1demo");
            assert_eq!(args.age, 25);
            assert_eq!(args.country, 840);
            assert!(args.kyc);
            assert!(!args.accredited);
            assert_eq!(args.risk_score, 15);
            assert!(!args.on_chain);
        }
    }

    #[test]
    fn cli_parse_verify() {
        let cli =
            Cli::try_parse_from(["zka", "verify", "3fa85f64-5717-4562-b3fc-2c963f66afa6"]).unwrap();
        assert!(matches!(cli.command, Commands::Verify(_)));
    }

    #[test]
    fn cli_parse_history_defaults() {
        let cli = Cli::try_parse_from(["zka", "history"]).unwrap();
        if let Commands::History(args) = cli.command {
            assert_eq!(args.limit, 50);
        }
    }

    #[test]
    fn cli_parse_global_session_path() {
        let cli = Cli::try_parse_from(["zka", "--session", "/tmp/s.json", "history"]).unwrap();
        assert_eq!(cli.session, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["zka", "history"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["zka", "-vv", "history"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["zka"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["zka", "nonexistent"]).is_err());
    }
}
