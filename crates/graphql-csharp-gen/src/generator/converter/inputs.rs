//! Input-object to class conversion.

use graphql_parser::schema::InputObjectType;

use super::type_resolver::TypeResolver;
use crate::generator::{
  ast::{ClassDef, PropertyDef},
  config::CodegenConfig,
  naming::identifiers::to_csharp_name,
  schema_index::SchemaIndex,
};

pub(crate) struct InputConverter<'a> {
  resolver: TypeResolver<'a>,
}

impl<'a> InputConverter<'a> {
  pub(crate) fn new(index: &'a SchemaIndex<'a>, config: &'a CodegenConfig) -> Self {
    Self {
      resolver: TypeResolver::new(index, config),
    }
  }

  pub(crate) fn convert(&self, input: &InputObjectType<'a, String>) -> ClassDef {
    let properties = input
      .fields
      .iter()
      .map(|field| PropertyDef {
        wire_name: field.name.clone(),
        name: to_csharp_name(&field.name),
        ty: self.resolver.resolve(&field.value_type, field.default_value.is_some()),
      })
      .collect();

    ClassDef {
      name: to_csharp_name(&input.name),
      properties,
      ctor: None,
      nested: Vec::new(),
    }
  }
}
