pub(crate) mod identifiers;
