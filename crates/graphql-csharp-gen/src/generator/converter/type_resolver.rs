//! Resolves GraphQL type references into C# value-type descriptors.

use graphql_parser::{query::Type as GraphQLType, schema::TypeDefinition};

use super::UNTYPED_FALLBACK;
use crate::generator::{
  ast::CsTypeRef,
  config::CodegenConfig,
  naming::identifiers::to_csharp_name,
  schema_index::SchemaIndex,
};

/// A type reference unwrapped into its base name, base requiredness, and
/// per-list-level requiredness (outermost first).
pub(crate) struct FlattenedType {
  pub(crate) base: String,
  pub(crate) base_required: bool,
  pub(crate) lists: Vec<bool>,
}

/// Unwraps non-null and list layers. Requiredness is read independently per
/// layer: a `NonNullType` marks the layer it directly wraps, nothing else.
pub(crate) fn flatten(ty: &GraphQLType<'_, String>) -> FlattenedType {
  fn walk(ty: &GraphQLType<'_, String>, required: bool, lists: &mut Vec<bool>) -> (String, bool) {
    match ty {
      GraphQLType::NamedType(name) => (name.clone(), required),
      GraphQLType::ListType(inner) => {
        lists.push(required);
        walk(inner, false, lists)
      }
      GraphQLType::NonNullType(inner) => walk(inner, true, lists),
    }
  }

  let mut lists = Vec::new();
  let (base, base_required) = walk(ty, false, &mut lists);
  FlattenedType {
    base,
    base_required,
    lists,
  }
}

/// Pure resolver from (type reference, schema index, scalar table,
/// default-value flag) to a `CsTypeRef`. No side effects.
#[derive(Clone, Copy)]
pub(crate) struct TypeResolver<'a> {
  index: &'a SchemaIndex<'a>,
  config: &'a CodegenConfig,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(index: &'a SchemaIndex<'a>, config: &'a CodegenConfig) -> Self {
    Self { index, config }
  }

  /// Resolution rules, in priority order:
  /// 1. scalar with a configured mapping -> the mapped native type and flag;
  /// 2. scalar without a mapping -> the untyped `object` fallback;
  /// 3. input object -> its converted class name, reference type;
  /// 4. enum -> its converted enum name, value type;
  /// 5. anything else -> the literal schema type name, reference type.
  ///
  /// A declared default value means the call site may omit the argument, so
  /// it forces every requiredness flag off.
  pub(crate) fn resolve(&self, ty: &GraphQLType<'_, String>, has_default: bool) -> CsTypeRef {
    let flat = flatten(ty);

    let (base, value_type) = match self.index.get(&flat.base) {
      Some(TypeDefinition::Scalar(_)) | None => match self.config.scalar_mapping(&flat.base) {
        Some(mapping) => (mapping.csharp_type, mapping.value_type),
        None => (UNTYPED_FALLBACK.to_string(), false),
      },
      Some(TypeDefinition::InputObject(input)) => (to_csharp_name(&input.name), false),
      Some(TypeDefinition::Enum(e)) => (to_csharp_name(&e.name), true),
      Some(_) => (flat.base.clone(), false),
    };

    let resolved = CsTypeRef {
      base,
      value_type,
      base_required: flat.base_required,
      lists: flat.lists,
    };

    if has_default { resolved.into_optional() } else { resolved }
  }
}
