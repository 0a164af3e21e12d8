use graphql_parser::{parse_query, parse_schema};

use crate::generator::{
  config::CodegenConfig,
  orchestrator::{GenerationStats, NAMED_CLIENT_DIRECTIVE, Orchestrator},
};

pub(crate) const SCHEMA: &str = r#"
type Query {
  hero: Character
  search(text: String): [Character]
}

type Mutation {
  createReview(review: ReviewInput!): Review
}

type Subscription {
  reviewAdded: Review
}

type Character {
  id: ID!
  name: String!
  friends: [Character]
}

type Review {
  stars: Int!
  commentary: String
}

enum Episode { NEWHOPE EMPIRE JEDI }

input ReviewInput {
  stars: Int!
  commentary: String
}
"#;

/// Runs the whole pipeline against the shared schema, the way the generate
/// command wires it up, and returns the assembled source plus run statistics.
pub(crate) fn generate(
  config: &CodegenConfig,
  documents: &[&'static str],
  external: &[&'static str],
) -> anyhow::Result<(String, GenerationStats)> {
  let schema_text = format!("{SCHEMA}\n{NAMED_CLIENT_DIRECTIVE}\n");
  let schema = parse_schema::<String>(&schema_text)?;

  let documents = documents
    .iter()
    .map(|text| parse_query::<String>(text))
    .collect::<Result<Vec<_>, _>>()?;
  let external = external
    .iter()
    .map(|text| parse_query::<String>(text))
    .collect::<Result<Vec<_>, _>>()?;

  let orchestrator = Orchestrator::new(&schema, &documents, &external, config)?;
  orchestrator.generate()
}
