//! Recursive selection-set to nested-class compilation.

use anyhow::bail;
use graphql_parser::{
  query::{Field, FragmentDefinition, Selection, SelectionSet, TypeCondition},
  schema::ObjectType,
};

use super::{
  FragmentMap, RESULT_PROPERTY_NAME,
  type_resolver::{self, TypeResolver},
};
use crate::generator::{
  ast::{ClassDef, CsTypeRef, PropertyDef},
  config::CodegenConfig,
  naming::identifiers::{fragment_class_name, pluralize, result_class_name, to_csharp_name},
  schema_index::SchemaIndex,
};

/// A compiled field selection: the property it contributes to its parent
/// class, plus any nested class synthesized for a composite selection.
#[derive(Debug)]
pub(crate) struct CompiledField {
  pub(crate) property: PropertyDef,
  pub(crate) nested: Vec<ClassDef>,
}

pub(crate) struct SelectionConverter<'a> {
  index: &'a SchemaIndex<'a>,
  resolver: TypeResolver<'a>,
  fragments: &'a FragmentMap<'a>,
}

impl<'a> SelectionConverter<'a> {
  pub(crate) fn new(index: &'a SchemaIndex<'a>, config: &'a CodegenConfig, fragments: &'a FragmentMap<'a>) -> Self {
    Self {
      index,
      resolver: TypeResolver::new(index, config),
      fragments,
    }
  }

  /// Compiles every selection in a set against its parent object type.
  /// Fragment spreads are inlined against the same parent type; inline
  /// type-conditioned fragments are unsupported and fail fast.
  pub(crate) fn compile_selection_set(
    &self,
    set: &SelectionSet<'a, String>,
    parent: &'a ObjectType<'a, String>,
  ) -> anyhow::Result<(Vec<PropertyDef>, Vec<ClassDef>)> {
    let mut properties = Vec::new();
    let mut nested = Vec::new();

    for selection in &set.items {
      match selection {
        Selection::Field(field) => {
          let compiled = self.compile_field(field, parent)?;
          properties.push(compiled.property);
          nested.extend(compiled.nested);
        }
        Selection::FragmentSpread(spread) => {
          let Some(fragment) = self.fragments.get(spread.fragment_name.as_str()) else {
            bail!("no fragment schema found for {}", spread.fragment_name);
          };
          let (mut spread_properties, mut spread_nested) =
            self.compile_selection_set(&fragment.definition.selection_set, parent)?;
          properties.append(&mut spread_properties);
          nested.append(&mut spread_nested);
        }
        Selection::InlineFragment(_) => {
          bail!(
            "unsupported selection kind on type {}: inline type-conditioned fragments are not supported",
            parent.name
          );
        }
      }
    }

    Ok((properties, nested))
  }

  /// Compiles a single field selection against its parent object type.
  pub(crate) fn compile_field(
    &self,
    field: &Field<'a, String>,
    parent: &'a ObjectType<'a, String>,
  ) -> anyhow::Result<CompiledField> {
    let Some(field_schema) = self.index.field_of(parent, &field.name) else {
      bail!("no schema field found for {}.{}", parent.name, field.name);
    };

    let wire_name = field.alias.as_ref().unwrap_or(&field.name).clone();
    let resolved = self.resolver.resolve(&field_schema.field_type, false);

    // Leaf field: one serializable property.
    if field.selection_set.items.is_empty() {
      return Ok(CompiledField {
        property: PropertyDef {
          name: to_csharp_name(&wire_name),
          wire_name,
          ty: resolved,
        },
        nested: Vec::new(),
      });
    }

    // Sole fragment spread: the fragment's class is the field's shape, no
    // wrapper class is synthesized.
    if let [Selection::FragmentSpread(spread)] = field.selection_set.items.as_slice() {
      if !self.fragments.contains_key(spread.fragment_name.as_str()) {
        bail!("no fragment schema found for {}", spread.fragment_name);
      }
      let class_name = fragment_class_name(&spread.fragment_name);
      let property_name = if resolved.is_list() {
        pluralize(&class_name)
      } else {
        class_name.clone()
      };
      return Ok(CompiledField {
        property: PropertyDef {
          wire_name,
          name: property_name,
          ty: CsTypeRef {
            base: class_name,
            value_type: false,
            base_required: resolved.base_required,
            lists: resolved.lists,
          },
        },
        nested: Vec::new(),
      });
    }

    // Composite field: synthesize a nested result class and recurse.
    let flat = type_resolver::flatten(&field_schema.field_type);
    let object = self.index.object(&flat.base)?;
    let (properties, inner_nested) = self.compile_selection_set(&field.selection_set, object)?;

    let class_name = result_class_name(&wire_name, resolved.is_list());
    let class = ClassDef {
      name: class_name.clone(),
      properties,
      ctor: None,
      nested: inner_nested,
    };

    Ok(CompiledField {
      property: PropertyDef {
        wire_name,
        name: RESULT_PROPERTY_NAME.to_string(),
        ty: CsTypeRef {
          base: class_name,
          value_type: false,
          base_required: resolved.base_required,
          lists: resolved.lists,
        },
      },
      nested: vec![class],
    })
  }

  /// Compiles a fragment definition into its reusable class.
  pub(crate) fn compile_fragment(&self, fragment: &FragmentDefinition<'a, String>) -> anyhow::Result<ClassDef> {
    let TypeCondition::On(ref type_name) = fragment.type_condition;
    let object = self.index.object(type_name)?;
    let (properties, nested) = self.compile_selection_set(&fragment.selection_set, object)?;

    Ok(ClassDef {
      name: fragment_class_name(&fragment.name),
      properties,
      ctor: None,
      nested,
    })
  }
}
