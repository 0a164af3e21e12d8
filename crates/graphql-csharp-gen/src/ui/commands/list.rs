use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Row, Table};
use graphql_parser::{parse_query, query};

pub async fn list_operations(documents: &[PathBuf]) -> anyhow::Result<()> {
  let mut operations = Vec::new();

  for path in documents {
    let text = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read document {}", path.display()))?;
    let document =
      parse_query::<String>(&text).with_context(|| format!("failed to parse document {}", path.display()))?;

    for definition in &document.definitions {
      if let query::Definition::Operation(operation) = definition {
        let (kind, name, variables) = match operation {
          query::OperationDefinition::Query(op) => ("query", op.name.clone(), op.variable_definitions.len()),
          query::OperationDefinition::Mutation(op) => ("mutation", op.name.clone(), op.variable_definitions.len()),
          query::OperationDefinition::Subscription(op) => {
            ("subscription", op.name.clone(), op.variable_definitions.len())
          }
          query::OperationDefinition::SelectionSet(_) => ("query", None, 0),
        };
        operations.push((kind, name.unwrap_or_else(|| "(anonymous)".to_string()), variables));
      }
    }
  }

  operations.sort_by(|a, b| a.1.cmp(&b.1));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic);

  let mut header = Row::new();
  header.add_cell(Cell::new("OPERATION"));
  header.add_cell(Cell::new("KIND"));
  header.add_cell(Cell::new("VARIABLES"));
  table.set_header(header);

  for (kind, name, variables) in operations {
    let mut row = Row::new();
    row.add_cell(Cell::new(name));
    row.add_cell(Cell::new(kind));
    row.add_cell(Cell::new(variables).set_alignment(CellAlignment::Right));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
