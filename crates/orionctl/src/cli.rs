//! Clap derive structures for the `orionctl` CLI.
//!
//! Defines the verb-first command tree (`get` / `describe` / `create` /
//! `delete` x resource kind), global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// orionctl -- kubectl-style CLI for the FIWARE Orion context broker
#[derive(Debug, Parser)]
#[command(
    name = "orionctl",
    version,
    about = "Manage Orion context broker resources from the command line",
    long_about = "A command line interface for controlling FIWARE Orion.\n\n\
        Manages subscriptions and context provider registrations over the\n\
        NGSIv2 API, with tenant scoping via FIWARE service headers.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (default is $HOME/.orionctl.yaml)
    #[arg(long, value_name = "PATH", env = "ORION_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Broker hostname or IP address
    #[arg(long, short = 'H', env = "ORION_HOST", global = true)]
    pub host: Option<String>,

    /// Broker port number
    #[arg(long, short = 'p', env = "ORION_PORT", global = true)]
    pub port: Option<u16>,

    /// Enable TLS/SSL
    #[arg(
        long,
        short = 'k',
        env = "ORION_TLS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        global = true
    )]
    pub tls: Option<bool>,

    /// Access token
    #[arg(long, short = 'T', env = "ORION_TOKEN", hide_env = true, global = true)]
    pub token: Option<String>,

    /// FIWARE service (tenant)
    #[arg(long, short = 's', env = "ORION_SERVICE", global = true)]
    pub fiware_service: Option<String>,

    /// FIWARE service path
    #[arg(long, short = 'P', env = "ORION_SERVICEPATH", global = true)]
    pub fiware_servicepath: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ORION_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Formatted table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch resources and print a summary table
    Get(GetArgs),

    /// Fetch resources and print full detail
    #[command(alias = "desc")]
    Describe(DescribeArgs),

    /// Create a resource from a definition file
    Create(CreateArgs),

    /// Delete resources by identifier
    #[command(alias = "del")]
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GET
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GetArgs {
    #[command(subcommand)]
    pub resource: GetResource,
}

#[derive(Debug, Subcommand)]
pub enum GetResource {
    /// List subscriptions, or fetch specific ones by id
    #[command(alias = "subscription", alias = "subs")]
    Subscriptions {
        /// Subscription identifiers (all when omitted)
        ids: Vec<String>,
    },

    /// List registrations, or fetch specific ones by id
    #[command(alias = "registration", alias = "regs")]
    Registrations {
        /// Registration identifiers (all when omitted)
        ids: Vec<String>,
    },

    /// Broker version and build metadata
    Version,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DESCRIBE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DescribeArgs {
    #[command(subcommand)]
    pub resource: DescribeResource,
}

#[derive(Debug, Subcommand)]
pub enum DescribeResource {
    /// Describe subscriptions in full nested detail
    #[command(alias = "subscription", alias = "subs")]
    Subscriptions {
        /// Subscription identifiers (all when omitted)
        ids: Vec<String>,
    },

    /// Describe registrations in full nested detail
    #[command(alias = "registration", alias = "regs")]
    Registrations {
        /// Registration identifiers (all when omitted)
        ids: Vec<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CREATE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(subcommand)]
    pub resource: CreateResource,
}

#[derive(Debug, Subcommand)]
pub enum CreateResource {
    /// Create a subscription from a YAML definition file
    #[command(alias = "subscription", alias = "subs")]
    Subscriptions {
        /// Subscription resource filename
        #[arg(long, short = 'f', value_name = "FILE")]
        file: PathBuf,
    },

    /// Create a registration from a YAML definition file
    #[command(alias = "registration", alias = "regs")]
    Registrations {
        /// Registration resource filename
        #[arg(long, short = 'f', value_name = "FILE")]
        file: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DELETE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(subcommand)]
    pub resource: DeleteResource,
}

#[derive(Debug, Subcommand)]
pub enum DeleteResource {
    /// Delete one or more subscriptions by id
    #[command(alias = "subscription", alias = "subs")]
    Subscriptions {
        /// Subscription identifiers (at least one)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete one or more registrations by id
    #[command(alias = "registration", alias = "regs")]
    Registrations {
        /// Registration identifiers (at least one)
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
