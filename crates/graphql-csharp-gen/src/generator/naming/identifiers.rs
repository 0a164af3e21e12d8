//! Deterministic C# identifier derivation.

use std::{
  collections::HashSet,
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

pub(crate) const PAYLOAD_SUFFIX: &str = "Payload";
pub(crate) const REQUEST_SUFFIX: &str = "Request";
pub(crate) const RESULT_SUFFIX: &str = "Result";
const STRIPPED_VERB_PREFIX: &str = "Get";

static CSHARP_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class", "const",
    "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event", "explicit", "extern",
    "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int", "interface",
    "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc",
    "static", "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong", "unchecked",
    "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Base sanitization: transliterates to ASCII, replaces invalid characters
/// with underscores, collapses runs, trims leading/trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Escapes C# keywords with the verbatim-identifier prefix and digit-leading
/// identifiers with an underscore.
pub(crate) fn escape_identifier(ident: &str) -> String {
  if CSHARP_KEYWORDS.contains(ident) {
    return format!("@{ident}");
  }
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    return format!("_{ident}");
  }
  ident.to_string()
}

/// Converts a name into a valid PascalCase C# type or property identifier.
pub(crate) fn to_csharp_name(name: &str) -> String {
  let ident = sanitize(name).to_pascal_case();
  if ident.is_empty() {
    return "Unnamed".to_string();
  }
  escape_identifier(&ident)
}

/// Converts a name into a valid camelCase C# parameter identifier.
pub(crate) fn to_csharp_parameter(name: &str) -> String {
  let ident = sanitize(name).to_camel_case();
  if ident.is_empty() {
    return "_".to_string();
  }
  escape_identifier(&ident)
}

/// Response root class name: pascal-cased operation name plus `Payload`, with
/// a leading `Get` verb stripped from the result.
pub(crate) fn payload_class_name(operation_name: &str) -> String {
  let mut name = format!("{}{PAYLOAD_SUFFIX}", sanitize(operation_name).to_pascal_case());
  if let Some(stripped) = name.strip_prefix(STRIPPED_VERB_PREFIX) {
    name = stripped.to_string();
  }
  escape_identifier(&name)
}

/// Request (variables) class name.
pub(crate) fn request_class_name(operation_name: &str) -> String {
  escape_identifier(&format!(
    "{}{REQUEST_SUFFIX}",
    sanitize(operation_name).to_pascal_case()
  ))
}

/// Synthesized nested class name for a composite field: pascal-cased field
/// name, trailing pluralization stripped when the field is list-valued, plus
/// the `Result` suffix.
pub(crate) fn result_class_name(field_name: &str, is_list: bool) -> String {
  let mut base = sanitize(field_name).to_pascal_case();
  if is_list && base.len() > 1 && base.ends_with('s') {
    base.pop();
  }
  escape_identifier(&format!("{base}{RESULT_SUFFIX}"))
}

/// Fragment class name: the fragment's own declared name, converted.
pub(crate) fn fragment_class_name(fragment_name: &str) -> String {
  to_csharp_name(fragment_name)
}

/// Property/type name for the sole-fragment-spread shortcut, pluralized when
/// the field resolves to a list.
pub(crate) fn pluralize(name: &str) -> String {
  format!("{name}s")
}
