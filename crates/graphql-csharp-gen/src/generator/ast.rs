//! Structured C# declaration model produced by the converters and rendered by
//! the codegen writer.

/// Resolved value type for a field or variable.
///
/// List and base-element nullability are tracked independently: `lists` holds
/// one required-flag per list wrapping (outermost first), `base_required`
/// covers the innermost element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsTypeRef {
  pub(crate) base: String,
  /// Value-type semantics (enums, mapped primitive scalars).
  pub(crate) value_type: bool,
  pub(crate) base_required: bool,
  pub(crate) lists: Vec<bool>,
}

impl CsTypeRef {
  pub(crate) fn new(base: impl Into<String>) -> Self {
    Self {
      base: base.into(),
      value_type: false,
      base_required: false,
      lists: Vec::new(),
    }
  }

  pub(crate) fn with_value_type(mut self, value_type: bool) -> Self {
    self.value_type = value_type;
    self
  }

  pub(crate) fn with_base_required(mut self, required: bool) -> Self {
    self.base_required = required;
    self
  }

  pub(crate) fn with_list(mut self, required: bool) -> Self {
    self.lists.insert(0, required);
    self
  }

  pub(crate) fn is_list(&self) -> bool {
    !self.lists.is_empty()
  }

  /// Forces every requiredness flag off. Applied when a declared default
  /// value lets the call site omit the argument.
  pub(crate) fn into_optional(mut self) -> Self {
    self.base_required = false;
    for level in &mut self.lists {
      *level = false;
    }
    self
  }

  /// Full C# type text. Optional value types carry a `?` suffix; reference
  /// types are nullable in C# without annotation, so only the list wrapping
  /// shows up for them.
  pub(crate) fn render(&self) -> String {
    let mut result = self.base.clone();
    if self.value_type && !self.base_required {
      result.push('?');
    }
    for _ in &self.lists {
      result = format!("List<{result}>");
    }
    result
  }
}

/// One generated property: the wire name is the literal operation field name
/// used for (de)serialization tagging, the in-class name is the C# property
/// identifier. The pair is kept explicit; neither is derived from the other
/// at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PropertyDef {
  pub(crate) wire_name: String,
  pub(crate) name: String,
  pub(crate) ty: CsTypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParamDef {
  pub(crate) ty: String,
  pub(crate) name: String,
  pub(crate) default: Option<String>,
}

impl ParamDef {
  pub(crate) fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      ty: ty.into(),
      name: name.into(),
      default: None,
    }
  }

  pub(crate) fn with_default(mut self, default: &str) -> Self {
    self.default = Some(default.to_string());
    self
  }

  pub(crate) fn render(&self) -> String {
    match self.default {
      Some(ref default) => format!("{} {} = {}", self.ty, self.name, default),
      None => format!("{} {}", self.ty, self.name),
    }
  }
}

/// Positional constructor assigning every parameter to its matching property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CtorDef {
  pub(crate) params: Vec<ParamDef>,
  /// `(property name, parameter name)` pairs in declaration order.
  pub(crate) assignments: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MethodDef {
  pub(crate) returns: String,
  pub(crate) name: String,
  pub(crate) params: Vec<ParamDef>,
  pub(crate) body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ClassDef {
  pub(crate) name: String,
  pub(crate) properties: Vec<PropertyDef>,
  pub(crate) ctor: Option<CtorDef>,
  pub(crate) nested: Vec<ClassDef>,
}

impl ClassDef {
  pub(crate) fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumValueDef {
  pub(crate) wire_name: String,
  pub(crate) name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumDef {
  pub(crate) name: String,
  pub(crate) values: Vec<EnumValueDef>,
}
