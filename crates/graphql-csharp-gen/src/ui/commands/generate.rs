use std::path::PathBuf;

use anyhow::Context;
use graphql_parser::{parse_query, parse_schema, query};

use crate::{
  generator::{
    config::CodegenConfig,
    orchestrator::{NAMED_CLIENT_DIRECTIVE, Orchestrator, ensure_csharp_extension},
  },
  ui::GenerateCommand,
};

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub schema: PathBuf,
  pub documents: Vec<PathBuf>,
  pub output: PathBuf,
  pub config: Option<PathBuf>,
  pub external_fragments: Vec<PathBuf>,
  pub namespace: Option<String>,
  pub client_name: Option<String>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      schema,
      documents,
      output,
      config,
      external_fragments,
      namespace,
      client_name,
      verbose,
      quiet,
    } = command;

    Ok(Self {
      schema,
      documents,
      output,
      config,
      external_fragments,
      namespace,
      client_name,
      verbose,
      quiet,
    })
  }

  async fn load_codegen_config(&self) -> anyhow::Result<CodegenConfig> {
    let mut config = match self.config {
      Some(ref path) => {
        let text = tokio::fs::read_to_string(path)
          .await
          .with_context(|| format!("failed to read config {}", path.display()))?;
        CodegenConfig::from_json(&text).with_context(|| format!("invalid config {}", path.display()))?
      }
      None => CodegenConfig::default(),
    };

    // CLI flags win over the config file.
    if let Some(ref namespace) = self.namespace {
      config.namespace_name = namespace.clone();
    }
    if let Some(ref client_name) = self.client_name {
      config.class_name = client_name.clone();
    }

    Ok(config)
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, code).await?;
    Ok(())
  }
}

async fn read_documents(paths: &[PathBuf]) -> anyhow::Result<Vec<(PathBuf, String)>> {
  let mut texts = Vec::new();
  for path in paths {
    let text = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read document {}", path.display()))?;
    texts.push((path.clone(), text));
  }
  Ok(texts)
}

fn parse_documents(texts: &[(PathBuf, String)]) -> anyhow::Result<Vec<query::Document<'_, String>>> {
  texts
    .iter()
    .map(|(path, text)| {
      parse_query::<String>(text).with_context(|| format!("failed to parse document {}", path.display()))
    })
    .collect()
}

pub async fn generate_code(config: GenerateConfig) -> anyhow::Result<()> {
  // Surface output-path problems before doing any generation work.
  ensure_csharp_extension(&config.output)?;

  let codegen_config = config.load_codegen_config().await?;

  let schema_text = tokio::fs::read_to_string(&config.schema)
    .await
    .with_context(|| format!("failed to read schema {}", config.schema.display()))?;
  // Register the companion directive so documents using it validate.
  let schema_text = format!("{schema_text}\n{NAMED_CLIENT_DIRECTIVE}\n");
  let schema_document = parse_schema::<String>(&schema_text)
    .with_context(|| format!("failed to parse schema {}", config.schema.display()))?;

  let document_texts = read_documents(&config.documents).await?;
  let documents = parse_documents(&document_texts)?;
  let external_texts = read_documents(&config.external_fragments).await?;
  let external_documents = parse_documents(&external_texts)?;

  let orchestrator = Orchestrator::new(&schema_document, &documents, &external_documents, &codegen_config)?;
  let (code, stats) = orchestrator.generate()?;
  config.write_output(code).await?;

  if config.quiet {
    return Ok(());
  }
  if config.verbose {
    println!(
      "generated {} ({} operations, {} fragments ({} external), {} inputs, {} enums)",
      config.output.display(),
      stats.operations,
      stats.fragments + stats.external_fragments,
      stats.external_fragments,
      stats.inputs,
      stats.enums
    );
  } else {
    println!("generated {}", config.output.display());
  }

  Ok(())
}
