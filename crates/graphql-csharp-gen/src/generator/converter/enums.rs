//! Schema enum to C# enum conversion.

use graphql_parser::schema::EnumType;

use crate::generator::{
  ast::{EnumDef, EnumValueDef},
  naming::identifiers::to_csharp_name,
};

pub(crate) fn convert_enum(definition: &EnumType<'_, String>) -> EnumDef {
  EnumDef {
    name: to_csharp_name(&definition.name),
    values: definition
      .values
      .iter()
      .map(|value| EnumValueDef {
        wire_name: value.name.clone(),
        name: to_csharp_name(&value.name),
      })
      .collect(),
  }
}
