use super::support::{STAR_WARS_SCHEMA, fragment_map, first_operation, query_doc, schema_doc};
use crate::generator::{
  config::CodegenConfig,
  converter::{OperationKind, operations::{CompiledOperation, OperationConverter}},
  schema_index::SchemaIndex,
};

fn compile(document_text: &'static str) -> anyhow::Result<CompiledOperation> {
  let schema = schema_doc(STAR_WARS_SCHEMA);
  let index = SchemaIndex::new(&schema);
  let config = CodegenConfig::default();
  let documents = vec![query_doc(document_text)];
  let fragments = fragment_map(&documents);
  let converter = OperationConverter::new(&index, &config, &fragments);
  converter.convert(first_operation(&documents[0]))
}

#[test]
fn operation_without_variables_has_no_request_class() {
  let compiled = compile("query GetHero { hero { name } }").unwrap();

  assert_eq!(compiled.name, "GetHero");
  assert_eq!(compiled.wire_name, "GetHero");
  assert_eq!(compiled.kind, OperationKind::Query);
  assert!(!compiled.has_variables);
  assert!(compiled.request_class.is_none());
}

#[test]
fn payload_class_drops_the_get_verb() {
  let compiled = compile("query GetHero { hero { name } }").unwrap();
  assert_eq!(compiled.response_class.name, "HeroPayload");

  let plain = compile("query HeroLookup { hero { name } }").unwrap();
  assert_eq!(plain.response_class.name, "HeroLookupPayload");
}

#[test]
fn request_class_parameters_follow_declaration_order() {
  let compiled = compile(
    "mutation CreateReview($episode: Episode, $review: ReviewInput!) { createReview(episode: $episode, review: $review) { stars } }",
  )
  .unwrap();

  assert_eq!(compiled.kind, OperationKind::Mutation);
  assert!(compiled.has_variables);

  let request = compiled.request_class.unwrap();
  assert_eq!(request.name, "CreateReviewRequest");

  let ctor = request.ctor.unwrap();
  assert_eq!(ctor.params.len(), 2);
  assert_eq!(ctor.params[0].render(), "Episode? episode");
  assert_eq!(ctor.params[1].render(), "ReviewInput review");
  assert_eq!(ctor.assignments[0], ("Episode".to_string(), "episode".to_string()));
  assert_eq!(ctor.assignments[1], ("Review".to_string(), "review".to_string()));

  assert_eq!(request.properties[0].wire_name, "episode");
  assert_eq!(request.properties[1].wire_name, "review");
}

#[test]
fn variable_default_value_makes_it_optional() {
  let compiled = compile(
    "query Search($text: String! = \"hero\") { search(text: $text) { name } }",
  )
  .unwrap();

  let request = compiled.request_class.unwrap();
  assert_eq!(request.properties[0].ty.render(), "string");
  assert!(!request.properties[0].ty.base_required);
}

#[test]
fn document_embeds_spread_fragments_once() {
  let compiled = compile(
    "query GetHero { hero { ...parts friends { ...parts } } } fragment parts on Character { id ...names } fragment names on Character { name }",
  )
  .unwrap();

  assert!(compiled.document.contains("query GetHero"));
  // Transitively reachable fragments ride along, each exactly once.
  assert_eq!(compiled.document.matches("fragment parts on Character").count(), 1);
  assert_eq!(compiled.document.matches("fragment names on Character").count(), 1);
}

#[test]
fn unreferenced_fragments_stay_out_of_the_document() {
  let compiled = compile(
    "query GetHero { hero { name } } fragment unused on Character { id }",
  )
  .unwrap();
  assert!(!compiled.document.contains("fragment unused"));
}

#[test]
fn document_is_escaped_for_a_string_literal() {
  let compiled = compile("query Search { search(text: \"r2\") { name } }").unwrap();

  assert!(compiled.document.contains("\\\"r2\\\""));
  assert!(!compiled.document.contains('\n'));
  assert!(!compiled.document.contains('\r'));
}

#[test]
fn anonymous_operations_are_rejected() {
  let error = compile("query { hero { name } }").unwrap_err();
  assert!(error.to_string().contains("anonymous query operations are not supported"));

  let shorthand = compile("{ hero { name } }").unwrap_err();
  assert!(shorthand.to_string().contains("shorthand selection-set operations"));
}

#[test]
fn root_fragment_spreads_are_rejected() {
  let error = compile(
    "query GetHero { ...rootParts } fragment rootParts on Query { hero { name } }",
  )
  .unwrap_err();
  assert!(error.to_string().contains("unsupported selection at the query root of GetHero"));
}

#[test]
fn missing_spread_fragment_fails_serialization() {
  let error = compile("query GetHero { hero { name ...lost } }").unwrap_err();
  assert!(error.to_string().contains("no fragment schema found for lost"));
}

#[test]
fn subscription_operations_compile() {
  let compiled = compile(
    "subscription OnReview($episode: Episode) { reviewAdded(episode: $episode) { stars } }",
  )
  .unwrap();

  assert_eq!(compiled.kind, OperationKind::Subscription);
  assert_eq!(compiled.response_class.name, "OnReviewPayload");
  assert!(compiled.has_variables);
}
