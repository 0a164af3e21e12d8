//! Declaration-block text emitter for C# source.

pub(crate) mod client;


use itertools::Itertools;

use crate::generator::ast::{ClassDef, EnumDef, MethodDef, PropertyDef};

const INDENT: &str = "    ";

/// Indentation-aware line writer. Blocks use Allman braces, the dominant
/// style in generated C# codebases.
pub(crate) struct CsharpWriter {
  buffer: String,
  indent: usize,
}

impl CsharpWriter {
  pub(crate) fn new() -> Self {
    Self {
      buffer: String::new(),
      indent: 0,
    }
  }

  pub(crate) fn line(&mut self, text: &str) {
    if text.is_empty() {
      self.buffer.push('\n');
      return;
    }
    for _ in 0..self.indent {
      self.buffer.push_str(INDENT);
    }
    self.buffer.push_str(text);
    self.buffer.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buffer.push('\n');
  }

  pub(crate) fn open(&mut self) {
    self.line("{");
    self.indent += 1;
  }

  pub(crate) fn close(&mut self) {
    self.indent -= 1;
    self.line("}");
  }

  /// Closes a block with a trailing token, e.g. `});`.
  pub(crate) fn close_with(&mut self, suffix: &str) {
    self.indent -= 1;
    self.line(&format!("}}{suffix}"));
  }

  pub(crate) fn into_string(self) -> String {
    self.buffer
  }
}

fn emit_property(writer: &mut CsharpWriter, property: &PropertyDef) {
  writer.line(&format!("[JsonProperty(\"{}\")]", property.wire_name));
  writer.line(&format!(
    "public {} {} {{ get; set; }}",
    property.ty.render(),
    property.name
  ));
}

pub(crate) fn emit_class(writer: &mut CsharpWriter, class: &ClassDef) {
  writer.line(&format!("public class {}", class.name));
  writer.open();

  let mut first = true;
  for property in &class.properties {
    if !first {
      writer.blank();
    }
    emit_property(writer, property);
    first = false;
  }

  if let Some(ref ctor) = class.ctor {
    if !first {
      writer.blank();
    }
    let params = ctor.params.iter().map(|param| param.render()).join(", ");
    writer.line(&format!("public {}({params})", class.name));
    writer.open();
    for (property, param) in &ctor.assignments {
      writer.line(&format!("{property} = {param};"));
    }
    writer.close();
    first = false;
  }

  for nested in &class.nested {
    if !first {
      writer.blank();
    }
    emit_class(writer, nested);
    first = false;
  }

  writer.close();
}

pub(crate) fn emit_enum(writer: &mut CsharpWriter, definition: &EnumDef) {
  writer.line("[JsonConverter(typeof(StringEnumConverter))]");
  writer.line(&format!("public enum {}", definition.name));
  writer.open();
  for (position, value) in definition.values.iter().enumerate() {
    if position > 0 {
      writer.blank();
    }
    writer.line(&format!("[EnumMember(Value = \"{}\")]", value.wire_name));
    writer.line(&format!("{},", value.name));
  }
  writer.close();
}

pub(crate) fn emit_method_signature(writer: &mut CsharpWriter, method: &MethodDef) {
  let params = method.params.iter().map(|param| param.render()).join(", ");
  writer.line(&format!("{} {}({params});", method.returns, method.name));
}

pub(crate) fn emit_method(writer: &mut CsharpWriter, method: &MethodDef) {
  let params = method.params.iter().map(|param| param.render()).join(", ");
  writer.line(&format!("public {} {}({params})", method.returns, method.name));
  writer.open();
  for line in &method.body {
    writer.line(line);
  }
  writer.close();
}
