//! yavl CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "yavl")]
#[command(version, about = "YAML grammar validation and binding generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document against a grammar
    Validate {
        /// Grammar file (`map:` / `list:` / leaf dialect)
        #[arg(short, long)]
        grammar: PathBuf,

        /// Document to validate
        #[arg(short, long)]
        input: PathBuf,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate bindings from a type spec
    Compile {
        /// Type spec file (`Types:` dialect)
        spec: PathBuf,

        /// Generated Rust file (use '-' for stdout)
        output: PathBuf,

        /// Skip struct and enum declarations
        #[arg(long)]
        no_emit_declarations: bool,

        /// Skip FromYaml implementations
        #[arg(long)]
        no_emit_readers: bool,

        /// Skip ToYaml implementations
        #[arg(long)]
        no_emit_writers: bool,

        /// Skip get_types, symbol_table and validate_simple
        #[arg(long)]
        no_emit_validator: bool,
    },

    /// Generate bindings for the nested types of a grammar
    Bind {
        /// Grammar file
        #[arg(short, long)]
        grammar: PathBuf,

        /// Name of the top-level type
        #[arg(long)]
        top_name: String,

        /// Generated Rust file (use '-' for stdout)
        output: PathBuf,
    },

    /// Check a type spec's top-level keys
    CheckSpec {
        /// Type spec file
        spec: PathBuf,
    },

    /// Print the types a spec declares, in order
    ListTypes {
        /// Type spec file
        spec: PathBuf,
    },

    /// Parse a YAML file and print it back in canonical form
    Normalize {
        /// YAML file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yavl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            grammar,
            input,
            json,
        } => commands::validate::execute(&grammar, &input, json),
        Commands::Compile {
            spec,
            output,
            no_emit_declarations,
            no_emit_readers,
            no_emit_writers,
            no_emit_validator,
        } => commands::compile::execute(commands::compile::CompileArgs {
            spec,
            output,
            options: yavl_codegen::GeneratorOptions {
                emit_declarations: !no_emit_declarations,
                emit_readers: !no_emit_readers,
                emit_writers: !no_emit_writers,
                emit_validator: !no_emit_validator,
            },
        }),
        Commands::Bind {
            grammar,
            top_name,
            output,
        } => commands::bind::execute(&grammar, &top_name, &output),
        Commands::CheckSpec { spec } => commands::spec::check(&spec),
        Commands::ListTypes { spec } => commands::spec::list_types(&spec),
        Commands::Normalize { input } => commands::normalize::execute(&input),
    }
}
