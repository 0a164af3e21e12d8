use anyhow::bail;
use indexmap::IndexMap;
use serde::Deserialize;

/// Mapping from a schema scalar name to the native C# type used for it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScalarMapping {
  pub csharp_type: String,
  /// Value-type semantics (`int`, `bool`, enums); optional value types render
  /// with a `?` suffix, reference types do not.
  #[serde(default)]
  pub value_type: bool,
}

impl ScalarMapping {
  pub fn reference(csharp_type: &str) -> Self {
    Self {
      csharp_type: csharp_type.to_string(),
      value_type: false,
    }
  }

  pub fn value(csharp_type: &str) -> Self {
    Self {
      csharp_type: csharp_type.to_string(),
      value_type: true,
    }
  }
}

/// Transport endpoint configuration for the generated client.
///
/// A lone `url` makes the generated client target it unconditionally. A
/// secondary url requires a selection predicate, evaluated exactly once at
/// first use of the generated client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
  pub url: String,
  #[serde(default)]
  pub url_secondary: Option<String>,
  /// C# boolean expression choosing between `url` (true) and `urlSecondary`.
  #[serde(default)]
  pub predicate: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodegenConfig {
  #[serde(default = "default_namespace")]
  pub namespace_name: String,
  #[serde(default = "default_class_name")]
  pub class_name: String,
  #[serde(default)]
  pub named_client: Option<String>,
  #[serde(default = "default_query_suffix")]
  pub query_suffix: String,
  #[serde(default = "default_mutation_suffix")]
  pub mutation_suffix: String,
  #[serde(default = "default_subscription_suffix")]
  pub subscription_suffix: String,
  /// When off, only method signatures and the client skeleton are emitted;
  /// request/response/enum/input declarations are skipped.
  #[serde(default = "default_true")]
  pub typesafe_operation: bool,
  #[serde(default)]
  pub endpoint: Option<EndpointConfig>,
  /// Custom scalar mappings, merged over the built-in ones.
  #[serde(default)]
  pub scalars: IndexMap<String, ScalarMapping>,
}

fn default_namespace() -> String {
  "GraphQLCodeGen".to_string()
}

fn default_class_name() -> String {
  "GraphQLClient".to_string()
}

fn default_query_suffix() -> String {
  "Query".to_string()
}

fn default_mutation_suffix() -> String {
  "Mutation".to_string()
}

fn default_subscription_suffix() -> String {
  "Subscription".to_string()
}

fn default_true() -> bool {
  true
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self {
      namespace_name: default_namespace(),
      class_name: default_class_name(),
      named_client: None,
      query_suffix: default_query_suffix(),
      mutation_suffix: default_mutation_suffix(),
      subscription_suffix: default_subscription_suffix(),
      typesafe_operation: true,
      endpoint: None,
      scalars: IndexMap::new(),
    }
  }
}

impl CodegenConfig {
  pub fn from_json(text: &str) -> anyhow::Result<Self> {
    let config: Self = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> anyhow::Result<()> {
    if let Some(ref endpoint) = self.endpoint {
      if endpoint.url_secondary.is_some() && endpoint.predicate.is_none() {
        bail!("endpoint config declares a secondary url without a selection predicate");
      }
    }
    Ok(())
  }

  /// Resolves the scalar mapping for a schema scalar name, config entries
  /// taking precedence over the built-in mappings.
  pub fn scalar_mapping(&self, name: &str) -> Option<ScalarMapping> {
    if let Some(mapping) = self.scalars.get(name) {
      return Some(mapping.clone());
    }
    match name {
      "Int" => Some(ScalarMapping::value("int")),
      "Float" => Some(ScalarMapping::value("double")),
      "Boolean" => Some(ScalarMapping::value("bool")),
      "String" | "ID" => Some(ScalarMapping::reference("string")),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_scalar_mappings() {
    let config = CodegenConfig::default();
    assert_eq!(config.scalar_mapping("Int"), Some(ScalarMapping::value("int")));
    assert_eq!(config.scalar_mapping("ID"), Some(ScalarMapping::reference("string")));
    assert_eq!(config.scalar_mapping("DateTime"), None);
  }

  #[test]
  fn config_scalars_override_builtins() {
    let config = CodegenConfig::from_json(
      r#"{ "scalars": { "ID": { "csharpType": "Guid", "valueType": true }, "DateTime": { "csharpType": "DateTimeOffset", "valueType": true } } }"#,
    )
    .unwrap();
    assert_eq!(config.scalar_mapping("ID"), Some(ScalarMapping::value("Guid")));
    assert_eq!(
      config.scalar_mapping("DateTime"),
      Some(ScalarMapping::value("DateTimeOffset"))
    );
  }

  #[test]
  fn secondary_endpoint_requires_predicate() {
    let result = CodegenConfig::from_json(
      r#"{ "endpoint": { "url": "https://api.example.com/graphql", "urlSecondary": "https://fallback.example.com/graphql" } }"#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn defaults() {
    let config = CodegenConfig::from_json("{}").unwrap();
    assert_eq!(config.namespace_name, "GraphQLCodeGen");
    assert_eq!(config.class_name, "GraphQLClient");
    assert!(config.typesafe_operation);
    assert_eq!(config.query_suffix, "Query");
  }
}
