use graphql_parser::{
  parse_query, parse_schema,
  query::{self, Field, OperationDefinition, Selection},
  schema,
};

use crate::generator::converter::{FragmentInfo, FragmentMap};

pub(crate) const STAR_WARS_SCHEMA: &str = r#"
schema { query: Query mutation: Mutation subscription: Subscription }

type Query {
  hero: Character
  heroes: [Character!]!
  search(text: String): [Character]
  review(id: ID!): Review
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

type Subscription {
  reviewAdded(episode: Episode): Review
}

type Character {
  id: ID!
  name: String!
  appearsIn: [Episode]!
  friends: [Character]
}

type Review {
  stars: Int!
  commentary: String
  episode: Episode
}

enum Episode { NEWHOPE EMPIRE JEDI }

input ReviewInput {
  stars: Int!
  commentary: String
  favoriteColor: String = "blue"
}

scalar Date
"#;

pub(crate) fn schema_doc(text: &str) -> schema::Document<'_, String> {
  parse_schema::<String>(text).expect("test schema should parse")
}

pub(crate) fn query_doc(text: &str) -> query::Document<'_, String> {
  parse_query::<String>(text).expect("test document should parse")
}

pub(crate) fn fragment_map<'a>(documents: &'a [query::Document<'a, String>]) -> FragmentMap<'a> {
  let mut fragments = FragmentMap::new();
  for document in documents {
    for definition in &document.definitions {
      if let query::Definition::Fragment(fragment) = definition {
        fragments.insert(
          fragment.name.clone(),
          FragmentInfo {
            definition: fragment,
            external: false,
          },
        );
      }
    }
  }
  fragments
}

pub(crate) fn first_operation<'a>(document: &'a query::Document<'a, String>) -> &'a OperationDefinition<'a, String> {
  document
    .definitions
    .iter()
    .find_map(|definition| match definition {
      query::Definition::Operation(operation) => Some(operation),
      query::Definition::Fragment(_) => None,
    })
    .expect("document should contain an operation")
}

pub(crate) fn first_field<'a>(operation: &'a OperationDefinition<'a, String>) -> &'a Field<'a, String> {
  let selection_set = match operation {
    OperationDefinition::Query(op) => &op.selection_set,
    OperationDefinition::Mutation(op) => &op.selection_set,
    OperationDefinition::Subscription(op) => &op.selection_set,
    OperationDefinition::SelectionSet(set) => set,
  };
  match selection_set.items.first() {
    Some(Selection::Field(field)) => field,
    _ => panic!("operation should start with a field selection"),
  }
}
