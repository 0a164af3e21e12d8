use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "graphql-csharp-gen")]
#[command(author, version, about = "GraphQL to C# typed-client code generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from GraphQL documents
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate C# client code from a schema and operation documents
  Generate(GenerateCommand),
}

#[derive(Parser, Debug)]
pub struct GenerateCommand {
  /// Path to the GraphQL schema (SDL) file
  #[arg(short, long, value_name = "FILE")]
  pub schema: PathBuf,

  /// Paths to executable GraphQL documents (operations and fragments)
  #[arg(short, long, value_name = "FILES", num_args = 1.., required = true)]
  pub documents: Vec<PathBuf>,

  /// Path where the generated C# source will be written (must end in .cs)
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Optional JSON configuration file
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Documents whose fragments are supplied externally (compiled, not inlined from local documents)
  #[arg(long, value_name = "FILES", num_args = 0..)]
  pub external_fragments: Vec<PathBuf>,

  /// Namespace for the generated source (overrides the config file)
  #[arg(long, value_name = "NAME")]
  pub namespace: Option<String>,

  /// Client class name (overrides the config file)
  #[arg(long, value_name = "NAME")]
  pub client_name: Option<String>,

  /// Enable verbose output with a generation summary
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the supplied documents
  Operations {
    /// Paths to executable GraphQL documents
    #[arg(short, long, value_name = "FILES", num_args = 1.., required = true)]
    documents: Vec<PathBuf>,
  },
}
