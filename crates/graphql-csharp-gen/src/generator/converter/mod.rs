pub(crate) mod enums;
pub(crate) mod inputs;
pub(crate) mod operations;
pub(crate) mod selections;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

use graphql_parser::query::FragmentDefinition;
use indexmap::IndexMap;
use strum::Display;

/// The C# property name given to a synthesized composite-field result.
pub(crate) const RESULT_PROPERTY_NAME: &str = "Result";
/// Native fallback for scalars without a configured mapping.
pub(crate) const UNTYPED_FALLBACK: &str = "object";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum OperationKind {
  Query,
  Mutation,
  Subscription,
}

/// A fragment available for spreading. External fragments are supplied
/// outside the local document set; the flag records provenance only, both
/// kinds compile identically.
pub(crate) struct FragmentInfo<'a> {
  pub(crate) definition: &'a FragmentDefinition<'a, String>,
  pub(crate) external: bool,
}

/// Fragment name -> definition, insertion-ordered for deterministic output.
pub(crate) type FragmentMap<'a> = IndexMap<String, FragmentInfo<'a>>;
