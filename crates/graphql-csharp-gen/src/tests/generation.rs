use crate::{
  generator::config::{CodegenConfig, EndpointConfig},
  tests::common::generate,
};

const HERO_QUERY: &str = "query GetHero { hero { id name } }";
const SEARCH_QUERY: &str = "query Search($text: String) { search(text: $text) { ...characterParts } }";
const CHARACTER_FRAGMENT: &str = "fragment characterParts on Character { id name }";
const REVIEW_MUTATION: &str =
  "mutation CreateReview($review: ReviewInput!) { createReview(review: $review) { stars } }";

fn position(text: &str, needle: &str) -> usize {
  text
    .find(needle)
    .unwrap_or_else(|| panic!("expected output to contain {needle:?}"))
}

#[test]
fn document_sections_come_out_in_order() {
  let config = CodegenConfig::default();
  let documents = [HERO_QUERY, SEARCH_QUERY, CHARACTER_FRAGMENT, REVIEW_MUTATION];
  let (code, stats) = generate(&config, &documents, &[]).unwrap();

  assert!(code.starts_with("using System;\n"));
  assert!(code.contains("using Newtonsoft.Json;\n"));
  assert!(code.contains("namespace GraphQLCodeGen\n"));

  let interface = position(&code, "public interface IGraphQLClient");
  let class = position(&code, "public class GraphQLClient : IGraphQLClient");
  let request = position(&code, "public class SearchRequest");
  let response = position(&code, "public class HeroPayload");
  let fragment = position(&code, "public class CharacterParts");
  let input = position(&code, "public class ReviewInput");
  let enumeration = position(&code, "public enum Episode");
  let extensions = position(&code, "public static class GraphQLResponseExtensions");

  assert!(interface < class);
  assert!(class < request);
  assert!(request < response);
  assert!(response < fragment);
  assert!(fragment < input);
  assert!(input < enumeration);
  assert!(enumeration < extensions);

  assert_eq!(stats.operations, 3);
  assert_eq!(stats.fragments, 1);
  assert_eq!(stats.external_fragments, 0);
  assert_eq!(stats.inputs, 1);
  assert_eq!(stats.enums, 1);
}

#[test]
fn generated_methods_carry_their_documents() {
  let config = CodegenConfig::default();
  let (code, _) = generate(&config, &[SEARCH_QUERY, CHARACTER_FRAGMENT], &[]).unwrap();

  assert!(code.contains("Task<GraphQLResponse<SearchPayload>> SearchQueryAsync(SearchRequest request, IGraphQLClient client);"));
  assert!(code.contains("OperationName = \"Search\""));
  // The embedded document carries the spread fragment along.
  assert!(code.contains("fragment characterParts on Character"));
}

#[test]
fn operations_without_variables_get_no_request_class() {
  let config = CodegenConfig::default();
  let (code, _) = generate(&config, &[HERO_QUERY], &[]).unwrap();

  assert!(code.contains("Task<GraphQLResponse<HeroPayload>> GetHeroQueryAsync(IGraphQLClient client);"));
  assert!(!code.contains("GetHeroRequest"));
}

#[test]
fn subscriptions_emit_both_overloads() {
  let config = CodegenConfig::default();
  let (code, _) = generate(&config, &["subscription OnReview { reviewAdded { stars } }"], &[]).unwrap();

  assert!(code.contains("IObservable<GraphQLResponse<OnReviewPayload>> OnReviewSubscription(IGraphQLClient client);"));
  assert!(code.contains(
    "IObservable<GraphQLResponse<OnReviewPayload>> OnReviewSubscription(Action<Exception> exceptionHandler, IGraphQLClient client);"
  ));
}

#[test]
fn endpoint_config_switches_the_transport() {
  let config = CodegenConfig {
    endpoint: Some(EndpointConfig {
      url: "https://api.example.com/graphql".to_string(),
      url_secondary: None,
      predicate: None,
    }),
    ..CodegenConfig::default()
  };
  let (code, _) = generate(&config, &[HERO_QUERY], &[]).unwrap();

  assert!(code.contains("using GraphQL.Client.Http;\n"));
  assert!(code.contains("using GraphQL.Client.Serializer.Newtonsoft;\n"));
  assert!(code.contains("new GraphQLHttpClient(\"https://api.example.com/graphql\", new NewtonsoftJsonSerializer())"));
  assert!(code.contains("public class GraphQLHttpRequestWithAuthSupport : GraphQLHttpRequest"));
  // Methods no longer take a client argument.
  assert!(!code.contains("IGraphQLClient client"));
}

#[test]
fn untyped_mode_emits_the_client_skeleton_only() {
  let config = CodegenConfig {
    typesafe_operation: false,
    ..CodegenConfig::default()
  };
  let documents = [SEARCH_QUERY, CHARACTER_FRAGMENT, REVIEW_MUTATION];
  let (code, stats) = generate(&config, &documents, &[]).unwrap();

  assert!(code.contains("Task<GraphQLResponse<object>> SearchQueryAsync(object variables, IGraphQLClient client);"));
  assert!(!code.contains("public class SearchRequest"));
  assert!(!code.contains("Payload"));
  assert!(!code.contains("public class ReviewInput"));
  assert!(!code.contains("public enum Episode"));
  assert_eq!(stats.inputs, 0);
  assert_eq!(stats.enums, 0);
}

#[test]
fn external_documents_contribute_fragments_only() {
  let config = CodegenConfig::default();
  let external = ["query Ignored { hero { id } } fragment externalParts on Character { name }"];
  let (code, stats) = generate(
    &config,
    &["query GetHero { hero { ...externalParts } }"],
    &external,
  )
  .unwrap();

  assert_eq!(stats.operations, 1);
  assert_eq!(stats.external_fragments, 1);
  assert!(code.contains("public class ExternalParts"));
  assert!(!code.contains("IgnoredPayload"));
}

#[test]
fn custom_namespace_and_client_name() {
  let config = CodegenConfig {
    namespace_name: "StarWars.Api".to_string(),
    class_name: "StarWarsClient".to_string(),
    named_client: Some("starwars".to_string()),
    ..CodegenConfig::default()
  };
  let (code, _) = generate(&config, &[HERO_QUERY], &[]).unwrap();

  assert!(code.contains("namespace StarWars.Api\n"));
  assert!(code.contains("public interface IStarWarsClient\n"));
  assert!(code.contains("public class StarWarsClient : IStarWarsClient\n"));
  assert!(code.contains("public const string NamedClient = \"starwars\";"));
}

#[test]
fn identical_inputs_produce_identical_output() {
  let config = CodegenConfig::default();
  let documents = [HERO_QUERY, SEARCH_QUERY, CHARACTER_FRAGMENT, REVIEW_MUTATION];

  let (first, _) = generate(&config, &documents, &[]).unwrap();
  let (second, _) = generate(&config, &documents, &[]).unwrap();
  assert_eq!(first, second);
}

#[test]
fn duplicate_fragment_across_documents_fails() {
  let config = CodegenConfig::default();
  let result = generate(&config, &[CHARACTER_FRAGMENT], &[CHARACTER_FRAGMENT]);
  assert!(result.unwrap_err().to_string().contains("duplicate fragment definition"));
}
