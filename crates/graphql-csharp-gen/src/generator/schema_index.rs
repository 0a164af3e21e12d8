//! Read-only name index over a parsed GraphQL schema document.

use std::collections::BTreeMap;

use anyhow::{Context, bail};
use graphql_parser::schema::{Definition, Document, EnumType, Field, InputObjectType, ObjectType, TypeDefinition};

use crate::generator::converter::OperationKind;

const DEFAULT_QUERY_TYPE: &str = "Query";
const DEFAULT_MUTATION_TYPE: &str = "Mutation";
const DEFAULT_SUBSCRIPTION_TYPE: &str = "Subscription";

/// Immutable name -> type definition lookup, built once per generation run.
pub(crate) struct SchemaIndex<'a> {
  types: BTreeMap<&'a str, &'a TypeDefinition<'a, String>>,
  document: &'a Document<'a, String>,
  query_type: String,
  mutation_type: String,
  subscription_type: String,
}

impl<'a> SchemaIndex<'a> {
  pub(crate) fn new(document: &'a Document<'a, String>) -> Self {
    let mut types = BTreeMap::new();
    let mut query_type = DEFAULT_QUERY_TYPE.to_string();
    let mut mutation_type = DEFAULT_MUTATION_TYPE.to_string();
    let mut subscription_type = DEFAULT_SUBSCRIPTION_TYPE.to_string();

    for definition in &document.definitions {
      match definition {
        Definition::TypeDefinition(ty) => {
          types.insert(type_name(ty), ty);
        }
        Definition::SchemaDefinition(schema) => {
          if let Some(ref query) = schema.query {
            query_type = query.clone();
          }
          if let Some(ref mutation) = schema.mutation {
            mutation_type = mutation.clone();
          }
          if let Some(ref subscription) = schema.subscription {
            subscription_type = subscription.clone();
          }
        }
        _ => {}
      }
    }

    Self {
      types,
      document,
      query_type,
      mutation_type,
      subscription_type,
    }
  }

  pub(crate) fn get(&self, name: &str) -> Option<&'a TypeDefinition<'a, String>> {
    self.types.get(name).copied()
  }

  /// Resolves a name to an object type, failing on anything else. Selected
  /// fields are only meaningful against object types.
  pub(crate) fn object(&self, name: &str) -> anyhow::Result<&'a ObjectType<'a, String>> {
    match self.get(name) {
      Some(TypeDefinition::Object(object)) => Ok(object),
      Some(_) => bail!("schema type {name} is not an object type"),
      None => bail!("no schema type found for {name}"),
    }
  }

  /// The object type serving a given operation kind's root selection.
  pub(crate) fn root_object(&self, kind: OperationKind) -> anyhow::Result<&'a ObjectType<'a, String>> {
    let name = match kind {
      OperationKind::Query => &self.query_type,
      OperationKind::Mutation => &self.mutation_type,
      OperationKind::Subscription => &self.subscription_type,
    };
    self
      .object(name)
      .with_context(|| format!("schema defines no {kind} root type"))
  }

  /// Looks up a field's declared schema on its parent object type.
  pub(crate) fn field_of(
    &self,
    object: &'a ObjectType<'a, String>,
    field_name: &str,
  ) -> Option<&'a Field<'a, String>> {
    object.fields.iter().find(|field| field.name == field_name)
  }

  /// Enum definitions in schema document order.
  pub(crate) fn enums(&self) -> impl Iterator<Item = &'a EnumType<'a, String>> {
    self.document.definitions.iter().filter_map(|definition| match definition {
      Definition::TypeDefinition(TypeDefinition::Enum(e)) => Some(e),
      _ => None,
    })
  }

  /// Input object definitions in schema document order.
  pub(crate) fn input_objects(&self) -> impl Iterator<Item = &'a InputObjectType<'a, String>> {
    self.document.definitions.iter().filter_map(|definition| match definition {
      Definition::TypeDefinition(TypeDefinition::InputObject(input)) => Some(input),
      _ => None,
    })
  }
}

fn type_name<'a>(ty: &'a TypeDefinition<'a, String>) -> &'a str {
  match ty {
    TypeDefinition::Scalar(scalar) => &scalar.name,
    TypeDefinition::Object(object) => &object.name,
    TypeDefinition::Interface(interface) => &interface.name,
    TypeDefinition::Union(union) => &union.name,
    TypeDefinition::Enum(e) => &e.name,
    TypeDefinition::InputObject(input) => &input.name,
  }
}
