//! Orchestration for the GraphQL to C# generation pipeline.
//!
//! The orchestrator is handed the parsed schema and document set, compiles
//! every definition into ordered declaration buffers, and assembles one C#
//! source document. Output is deterministic: identical inputs produce
//! byte-identical text.

use std::{ffi::OsStr, path::Path};

use anyhow::bail;
use graphql_parser::{query, schema};

use crate::generator::{
  ast::{ClassDef, EnumDef, MethodDef},
  codegen::{self, CsharpWriter, client},
  config::CodegenConfig,
  converter::{
    FragmentInfo, FragmentMap,
    enums::convert_enum,
    inputs::InputConverter,
    operations::OperationConverter,
    selections::SelectionConverter,
  },
  schema_index::SchemaIndex,
};

/// Companion directive registered with the schema so operations can declare a
/// named-client binding.
pub const NAMED_CLIENT_DIRECTIVE: &str = "directive @namedClient(name: String!) on OBJECT | FIELD";

const BASE_USINGS: &[&str] = &[
  "System",
  "System.Collections.Generic",
  "System.Runtime.Serialization",
  "System.Threading.Tasks",
  "GraphQL",
  "GraphQL.Client.Abstractions",
  "Newtonsoft.Json",
  "Newtonsoft.Json.Converters",
];

/// Transport-serialization usings, needed only by the lazy-client wiring and
/// the auth request subclass.
const ENDPOINT_USINGS: &[&str] = &[
  "System.Net.Http",
  "System.Net.Http.Headers",
  "GraphQL.Client.Abstractions.Serializer",
  "GraphQL.Client.Http",
  "GraphQL.Client.Serializer.Newtonsoft",
];

/// Statistics about one generation run.
#[derive(Debug)]
pub struct GenerationStats {
  pub operations: usize,
  pub fragments: usize,
  pub external_fragments: usize,
  pub inputs: usize,
  pub enums: usize,
}

/// Rejects output paths that do not carry the conventional C# source
/// extension. Checked before any generation work.
pub fn ensure_csharp_extension(path: &Path) -> anyhow::Result<()> {
  match path.extension().and_then(OsStr::to_str) {
    Some("cs") => Ok(()),
    _ => bail!("output file {} must use the .cs extension", path.display()),
  }
}

pub struct Orchestrator<'a> {
  index: SchemaIndex<'a>,
  operations: Vec<&'a query::OperationDefinition<'a, String>>,
  fragments: FragmentMap<'a>,
  config: &'a CodegenConfig,
}

impl<'a> Orchestrator<'a> {
  /// Collects operations and fragments from the parsed document set.
  /// External documents contribute fragments only; their provenance flag is
  /// recorded but both kinds compile identically.
  pub fn new(
    schema: &'a schema::Document<'a, String>,
    documents: &'a [query::Document<'a, String>],
    external: &'a [query::Document<'a, String>],
    config: &'a CodegenConfig,
  ) -> anyhow::Result<Self> {
    config.validate()?;

    let index = SchemaIndex::new(schema);
    let mut operations = Vec::new();
    let mut fragments = FragmentMap::new();

    for document in documents {
      for definition in &document.definitions {
        match definition {
          query::Definition::Operation(operation) => operations.push(operation),
          query::Definition::Fragment(fragment) => insert_fragment(&mut fragments, fragment, false)?,
        }
      }
    }
    for document in external {
      for definition in &document.definitions {
        if let query::Definition::Fragment(fragment) = definition {
          insert_fragment(&mut fragments, fragment, true)?;
        }
      }
    }

    Ok(Self {
      index,
      operations,
      fragments,
      config,
    })
  }

  /// Runs the full pipeline and assembles the output document: usings, then
  /// one namespace block holding (in order) the client interface, the client
  /// class, request classes, response classes, fragment classes, input
  /// classes, enums, the transport-request subclass (endpoint config only),
  /// and the error-presence helper.
  pub fn generate(&'a self) -> anyhow::Result<(String, GenerationStats)> {
    let selections = SelectionConverter::new(&self.index, self.config, &self.fragments);
    let operation_converter = OperationConverter::new(&self.index, self.config, &self.fragments);
    let input_converter = InputConverter::new(&self.index, self.config);
    let typesafe = self.config.typesafe_operation;

    let mut enum_defs: Vec<EnumDef> = Vec::new();
    let mut input_classes: Vec<ClassDef> = Vec::new();
    let mut fragment_classes: Vec<ClassDef> = Vec::new();
    if typesafe {
      enum_defs = self.index.enums().map(convert_enum).collect();
      input_classes = self.index.input_objects().map(|input| input_converter.convert(input)).collect();
      for info in self.fragments.values() {
        fragment_classes.push(selections.compile_fragment(info.definition)?);
      }
    }

    let mut interface_methods: Vec<MethodDef> = Vec::new();
    let mut class_methods: Vec<MethodDef> = Vec::new();
    let mut request_classes: Vec<ClassDef> = Vec::new();
    let mut response_classes: Vec<ClassDef> = Vec::new();
    for operation in &self.operations {
      let compiled = operation_converter.convert(operation)?;
      let (iface, class) = client::build_operation_methods(&compiled, self.config);
      interface_methods.extend(iface);
      class_methods.extend(class);
      if typesafe {
        if let Some(request) = compiled.request_class {
          request_classes.push(request);
        }
        response_classes.push(compiled.response_class);
      }
    }

    let mut writer = CsharpWriter::new();
    for using in BASE_USINGS {
      writer.line(&format!("using {using};"));
    }
    if self.config.endpoint.is_some() {
      for using in ENDPOINT_USINGS {
        writer.line(&format!("using {using};"));
      }
    }
    writer.blank();
    writer.line(&format!("namespace {}", self.config.namespace_name));
    writer.open();

    client::emit_client_interface(&mut writer, self.config, &interface_methods);
    writer.blank();
    client::emit_client_class(&mut writer, self.config, &class_methods);
    for class in request_classes
      .iter()
      .chain(response_classes.iter())
      .chain(fragment_classes.iter())
      .chain(input_classes.iter())
    {
      writer.blank();
      codegen::emit_class(&mut writer, class);
    }
    for definition in &enum_defs {
      writer.blank();
      codegen::emit_enum(&mut writer, definition);
    }
    if self.config.endpoint.is_some() {
      writer.blank();
      client::emit_auth_request_class(&mut writer);
    }
    writer.blank();
    client::emit_response_extensions(&mut writer);
    writer.close();

    let stats = GenerationStats {
      operations: self.operations.len(),
      fragments: self.fragments.values().filter(|info| !info.external).count(),
      external_fragments: self.fragments.values().filter(|info| info.external).count(),
      inputs: input_classes.len(),
      enums: enum_defs.len(),
    };

    Ok((writer.into_string(), stats))
  }
}

fn insert_fragment<'a>(
  fragments: &mut FragmentMap<'a>,
  fragment: &'a query::FragmentDefinition<'a, String>,
  external: bool,
) -> anyhow::Result<()> {
  if fragments.contains_key(fragment.name.as_str()) {
    bail!("duplicate fragment definition {}", fragment.name);
  }
  fragments.insert(
    fragment.name.clone(),
    FragmentInfo {
      definition: fragment,
      external,
    },
  );
  Ok(())
}
