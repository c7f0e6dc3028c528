//! TRQP CLI — `trqp` command.
//!
//! Runs trust-registry queries against a snapshot file: check entity
//! authorizations, check ecosystem recognitions, validate snapshot
//! integrity, and inspect registry contents.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use trqp_engine::storage::{load_snapshot, save_snapshot};
use trqp_engine::{
    evaluate_authorization, evaluate_recognition, AuthorizationQuery, EntityId, EvalConfig,
    RecognitionQuery, RegistryIndex, RegistrySnapshot,
};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// TRQP CLI — query entity authorizations and ecosystem recognitions
/// against a trust-registry snapshot.
#[derive(Parser, Debug)]
#[command(
    name = "trqp",
    about = "Trust Registry Query Protocol CLI",
    version,
    long_about = "trqp — Trust Registry Query Protocol CLI\n\nEvaluate authorization and recognition queries against a registry\nsnapshot file, validate snapshot integrity, and inspect records."
)]
struct Cli {
    /// Registry snapshot file
    #[arg(long, global = true, default_value = "registry.json")]
    registry: PathBuf,

    /// Maximum authority chain length
    #[arg(long, global = true, default_value_t = trqp_engine::eval::DEFAULT_MAX_CHAIN_LEN)]
    max_chain: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a seeded demo registry snapshot
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Evaluate an authorization query
    Authorize {
        /// Entity identifier (the subject of the query)
        entity: String,
        /// Authority identifier (an ecosystem in the entity's chain)
        authority: String,
        /// Action to check
        action: String,
        /// Resource to check
        resource: String,
        /// Point-in-time context (RFC 3339, e.g. 2025-06-01T00:00:00Z)
        #[arg(long)]
        time: Option<String>,
    },

    /// Evaluate a recognition query
    Recognize {
        /// Candidate recognized registry identifier (may be foreign)
        entity: String,
        /// Recognizing ecosystem identifier
        authority: String,
        /// Recognition class action
        action: String,
        /// Recognition class resource
        resource: String,
        /// Point-in-time context (RFC 3339)
        #[arg(long)]
        time: Option<String>,
    },

    /// Check snapshot data integrity
    Validate,

    /// Show registry metadata and record counts
    Show,

    /// List an entity's authorizations
    Entity {
        /// Entity identifier
        id: String,
    },

    /// List an ecosystem's recognitions
    Ecosystem {
        /// Ecosystem identifier
        id: String,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_registry(path: &PathBuf) -> Result<RegistrySnapshot> {
    load_snapshot(path).with_context(|| format!("failed to load registry from {}", path.display()))
}

fn parse_time_arg(time: Option<&str>) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    match time {
        None => Ok(None),
        Some(s) => trqp_engine::time::parse_timestamp(s)
            .map(Some)
            .context("invalid --time value"),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            if cli.registry.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    cli.registry.display()
                );
            }
            let snapshot = RegistrySnapshot::seeded();
            save_snapshot(&cli.registry, &snapshot)
                .with_context(|| format!("failed to write {}", cli.registry.display()))?;
            println!("wrote seeded registry to {}", cli.registry.display());
        }

        Commands::Authorize {
            entity,
            authority,
            action,
            resource,
            time,
        } => {
            let snapshot = load_registry(&cli.registry)?;
            let index = RegistryIndex::build(&snapshot);
            let config = EvalConfig {
                max_chain_len: cli.max_chain,
            };

            let mut query = AuthorizationQuery::new(entity, authority, action, resource);
            if let Some(at) = parse_time_arg(time.as_deref())? {
                query = query.at(at);
            }

            let verdict = evaluate_authorization(&index, &query, &config);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if !verdict.verified {
                std::process::exit(1);
            }
        }

        Commands::Recognize {
            entity,
            authority,
            action,
            resource,
            time,
        } => {
            let snapshot = load_registry(&cli.registry)?;
            let index = RegistryIndex::build(&snapshot);

            let mut query = RecognitionQuery::new(entity, authority, action, resource);
            if let Some(at) = parse_time_arg(time.as_deref())? {
                query = query.at(at);
            }

            let verdict = evaluate_recognition(&index, &query);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if !verdict.recognized {
                std::process::exit(1);
            }
        }

        Commands::Validate => {
            let snapshot = load_registry(&cli.registry)?;
            let findings = snapshot.validate();
            if findings.is_empty() {
                println!("ok: no integrity findings");
            } else {
                for finding in &findings {
                    eprintln!("finding: {finding}");
                }
                bail!("{} integrity finding(s)", findings.len());
            }
        }

        Commands::Show => {
            let snapshot = load_registry(&cli.registry)?;
            if let Some(metadata) = &snapshot.metadata {
                println!("{}", serde_json::to_string_pretty(metadata)?);
            } else {
                println!("(no registry metadata)");
            }
            println!("entities:             {}", snapshot.entities.len());
            println!("authorization types:  {}", snapshot.authorization_types.len());
            println!("recognition types:    {}", snapshot.recognition_types.len());
            println!("authorization grants: {}", snapshot.authorization_grants.len());
            println!("recognition grants:   {}", snapshot.recognition_grants.len());
        }

        Commands::Entity { id } => {
            let snapshot = load_registry(&cli.registry)?;
            let index = RegistryIndex::build(&snapshot);
            let id = EntityId::from(id.as_str());

            let Some(entity) = index.entity(&id) else {
                bail!("entity {id} not found");
            };
            println!("{}", serde_json::to_string_pretty(entity)?);
            for grant in index.authorizations_of(&id) {
                println!("  holds: {} / {}", grant.action, grant.resource);
            }
        }

        Commands::Ecosystem { id } => {
            let snapshot = load_registry(&cli.registry)?;
            let index = RegistryIndex::build(&snapshot);
            let id = EntityId::from(id.as_str());

            let Some(entity) = index.entity(&id) else {
                bail!("ecosystem {id} not found");
            };
            if !entity.is_ecosystem() {
                bail!("{id} is not an ecosystem");
            }
            for grant in index.recognitions_of(&id) {
                println!("{}", serde_json::to_string_pretty(grant)?);
            }
        }
    }

    Ok(())
}
