//! Per-operation compilation: request/response classes and the embedded,
//! re-serialized operation document.

use anyhow::bail;
use graphql_parser::query::{OperationDefinition, Selection, SelectionSet, VariableDefinition};
use indexmap::IndexSet;

use super::{FragmentMap, OperationKind, selections::SelectionConverter, type_resolver::TypeResolver};
use crate::generator::{
  ast::{ClassDef, CtorDef, ParamDef, PropertyDef},
  config::CodegenConfig,
  naming::identifiers::{payload_class_name, request_class_name, to_csharp_name, to_csharp_parameter},
  schema_index::SchemaIndex,
};

/// Everything compiled out of one operation definition.
#[derive(Debug)]
pub(crate) struct CompiledOperation {
  /// Pascal-cased operation name.
  pub(crate) name: String,
  /// Original operation name as written in the document.
  pub(crate) wire_name: String,
  pub(crate) kind: OperationKind,
  /// Present only when the operation declares variables.
  pub(crate) request_class: Option<ClassDef>,
  pub(crate) response_class: ClassDef,
  /// Operation text plus transitive fragment texts, escaped for embedding
  /// as a C# string literal.
  pub(crate) document: String,
  pub(crate) has_variables: bool,
}

pub(crate) struct OperationConverter<'a> {
  index: &'a SchemaIndex<'a>,
  resolver: TypeResolver<'a>,
  selections: SelectionConverter<'a>,
  fragments: &'a FragmentMap<'a>,
}

impl<'a> OperationConverter<'a> {
  pub(crate) fn new(index: &'a SchemaIndex<'a>, config: &'a CodegenConfig, fragments: &'a FragmentMap<'a>) -> Self {
    Self {
      index,
      resolver: TypeResolver::new(index, config),
      selections: SelectionConverter::new(index, config, fragments),
      fragments,
    }
  }

  pub(crate) fn convert(&self, operation: &OperationDefinition<'a, String>) -> anyhow::Result<CompiledOperation> {
    let (kind, name, variables, selection_set) = operation_parts(operation)?;
    let Some(wire_name) = name else {
      bail!("anonymous {kind} operations are not supported; every operation must be named");
    };

    let root = self.index.root_object(kind)?;
    let mut properties = Vec::new();
    let mut nested = Vec::new();
    for selection in &selection_set.items {
      match selection {
        Selection::Field(field) => {
          let compiled = self.selections.compile_field(field, root)?;
          properties.push(compiled.property);
          nested.extend(compiled.nested);
        }
        Selection::FragmentSpread(_) | Selection::InlineFragment(_) => {
          bail!("unsupported selection at the {kind} root of {wire_name}: only field selections are allowed");
        }
      }
    }

    let response_class = ClassDef {
      name: payload_class_name(wire_name),
      properties,
      ctor: None,
      nested,
    };

    let request_class = if variables.is_empty() {
      None
    } else {
      Some(self.build_request_class(wire_name, variables))
    };

    let document = self.serialize_document(operation, selection_set)?;

    Ok(CompiledOperation {
      name: to_csharp_name(wire_name),
      wire_name: wire_name.clone(),
      kind,
      has_variables: request_class.is_some(),
      request_class,
      response_class,
      document,
    })
  }

  /// One property per variable plus a single positional constructor in
  /// declaration order.
  fn build_request_class(&self, operation_name: &str, variables: &[VariableDefinition<'a, String>]) -> ClassDef {
    let mut properties = Vec::new();
    let mut params = Vec::new();
    let mut assignments = Vec::new();

    for variable in variables {
      let resolved = self.resolver.resolve(&variable.var_type, variable.default_value.is_some());
      let property_name = to_csharp_name(&variable.name);
      let param_name = to_csharp_parameter(&variable.name);

      params.push(ParamDef::new(resolved.render(), param_name.clone()));
      assignments.push((property_name.clone(), param_name));
      properties.push(PropertyDef {
        wire_name: variable.name.clone(),
        name: property_name,
        ty: resolved,
      });
    }

    ClassDef {
      name: request_class_name(operation_name),
      properties,
      ctor: Some(CtorDef { params, assignments }),
      nested: Vec::new(),
    }
  }

  /// Re-serializes the operation plus every fragment it transitively spreads,
  /// deduplicated in first-encounter order, escaped for a C# string literal.
  fn serialize_document(
    &self,
    operation: &OperationDefinition<'a, String>,
    selection_set: &SelectionSet<'a, String>,
  ) -> anyhow::Result<String> {
    let mut order = IndexSet::new();
    collect_fragment_spreads(selection_set, &mut order);

    // Fragments can spread further fragments; walk until the set is closed.
    let mut cursor = 0;
    while cursor < order.len() {
      let name = order[cursor].clone();
      let Some(fragment) = self.fragments.get(name.as_str()) else {
        bail!("no fragment schema found for {name}");
      };
      collect_fragment_spreads(&fragment.definition.selection_set, &mut order);
      cursor += 1;
    }

    let mut text = operation.to_string();
    for name in &order {
      text.push_str(&self.fragments[name.as_str()].definition.to_string());
    }

    Ok(escape_for_literal(&text))
  }
}

fn operation_parts<'a, 'b>(
  operation: &'b OperationDefinition<'a, String>,
) -> anyhow::Result<(
  OperationKind,
  Option<&'b String>,
  &'b [VariableDefinition<'a, String>],
  &'b SelectionSet<'a, String>,
)> {
  match operation {
    OperationDefinition::Query(query) => Ok((
      OperationKind::Query,
      query.name.as_ref(),
      &query.variable_definitions,
      &query.selection_set,
    )),
    OperationDefinition::Mutation(mutation) => Ok((
      OperationKind::Mutation,
      mutation.name.as_ref(),
      &mutation.variable_definitions,
      &mutation.selection_set,
    )),
    OperationDefinition::Subscription(subscription) => Ok((
      OperationKind::Subscription,
      subscription.name.as_ref(),
      &subscription.variable_definitions,
      &subscription.selection_set,
    )),
    OperationDefinition::SelectionSet(_) => {
      bail!("unrecognized operation kind: shorthand selection-set operations are not supported")
    }
  }
}

fn collect_fragment_spreads(set: &SelectionSet<'_, String>, out: &mut IndexSet<String>) {
  for selection in &set.items {
    match selection {
      Selection::Field(field) => collect_fragment_spreads(&field.selection_set, out),
      Selection::FragmentSpread(spread) => {
        out.insert(spread.fragment_name.clone());
      }
      Selection::InlineFragment(inline) => collect_fragment_spreads(&inline.selection_set, out),
    }
  }
}

/// Escapes the document so it embeds in a single-line C# string literal. The
/// wire contract only requires double-quote escaping; backslashes and line
/// breaks are escaped as well to keep the literal well-formed.
fn escape_for_literal(text: &str) -> String {
  text
    .replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace('\r', "")
    .replace('\n', "\\n")
}
