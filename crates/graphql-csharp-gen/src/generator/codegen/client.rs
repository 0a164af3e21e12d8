//! Client interface/class assembly: per-operation methods, lazy transport
//! wiring, auth plumbing, and the fixed helper declarations.

use super::CsharpWriter;
use crate::generator::{
  ast::{MethodDef, ParamDef},
  config::{CodegenConfig, EndpointConfig},
  converter::{OperationKind, operations::CompiledOperation},
};

const REQUEST_VAR: &str = "graphQLRequest";
const AUTH_REQUEST_CLASS: &str = "GraphQLHttpRequestWithAuthSupport";

pub(crate) fn interface_name(config: &CodegenConfig) -> String {
  format!("I{}", config.class_name)
}

/// Builds the interface signatures and concrete methods for one operation:
/// one method for queries/mutations, two for subscriptions (the overload
/// accepts an error-handler callback).
pub(crate) fn build_operation_methods(
  operation: &CompiledOperation,
  config: &CodegenConfig,
) -> (Vec<MethodDef>, Vec<MethodDef>) {
  let mut interface_methods = Vec::new();
  let mut class_methods = Vec::new();

  match operation.kind {
    OperationKind::Query | OperationKind::Mutation => {
      let method = build_method(operation, config, false);
      interface_methods.push(signature_of(&method));
      class_methods.push(method);
    }
    OperationKind::Subscription => {
      let stream = build_method(operation, config, false);
      let with_handler = build_method(operation, config, true);
      interface_methods.push(signature_of(&stream));
      interface_methods.push(signature_of(&with_handler));
      class_methods.push(stream);
      class_methods.push(with_handler);
    }
  }

  (interface_methods, class_methods)
}

fn signature_of(method: &MethodDef) -> MethodDef {
  MethodDef {
    returns: method.returns.clone(),
    name: method.name.clone(),
    params: method.params.clone(),
    body: Vec::new(),
  }
}

fn payload_type(operation: &CompiledOperation, config: &CodegenConfig) -> String {
  if config.typesafe_operation {
    operation.response_class.name.clone()
  } else {
    "object".to_string()
  }
}

fn method_name(operation: &CompiledOperation, config: &CodegenConfig) -> String {
  let suffix = match operation.kind {
    OperationKind::Query => &config.query_suffix,
    OperationKind::Mutation => &config.mutation_suffix,
    OperationKind::Subscription => &config.subscription_suffix,
  };
  match operation.kind {
    OperationKind::Subscription => format!("{}{suffix}", operation.name),
    _ => format!("{}{suffix}Async", operation.name),
  }
}

fn build_method(operation: &CompiledOperation, config: &CodegenConfig, with_handler: bool) -> MethodDef {
  let payload = payload_type(operation, config);
  let returns = match operation.kind {
    OperationKind::Subscription => format!("IObservable<GraphQLResponse<{payload}>>"),
    _ => format!("Task<GraphQLResponse<{payload}>>"),
  };

  let mut params = Vec::new();
  if operation.has_variables {
    if config.typesafe_operation {
      let request_class = operation
        .request_class
        .as_ref()
        .map(|class| class.name.clone())
        .unwrap_or_default();
      params.push(ParamDef::new(request_class, "request"));
    } else {
      // C# forbids a defaulted parameter ahead of required ones, so the null
      // default only appears when every later parameter is optional too.
      let variables = ParamDef::new("object", "variables");
      if config.endpoint.is_some() && !with_handler {
        params.push(variables.with_default("null"));
      } else {
        params.push(variables);
      }
    }
  }
  if with_handler {
    params.push(ParamDef::new("Action<Exception>", "exceptionHandler"));
  }
  if config.endpoint.is_some() {
    params.push(ParamDef::new("string", "authToken").with_default("null"));
    params.push(ParamDef::new("IDictionary<string, string>", "headers").with_default("null"));
  } else {
    params.push(ParamDef::new("IGraphQLClient", "client"));
  }

  MethodDef {
    returns,
    name: method_name(operation, config),
    params,
    body: build_body(operation, config, with_handler),
  }
}

fn build_body(operation: &CompiledOperation, config: &CodegenConfig, with_handler: bool) -> Vec<String> {
  let request_type = if config.endpoint.is_some() {
    AUTH_REQUEST_CLASS
  } else {
    "GraphQLRequest"
  };

  let mut initializers = vec![
    format!("Query = \"{}\"", operation.document),
    format!("OperationName = \"{}\"", operation.wire_name),
  ];
  if operation.has_variables {
    let variables = if config.typesafe_operation { "request" } else { "variables" };
    initializers.push(format!("Variables = {variables}"));
  }
  if config.endpoint.is_some() {
    initializers.push("AuthToken = authToken".to_string());
    initializers.push("Headers = headers".to_string());
  }

  let mut body = Vec::new();
  body.push(format!("var {REQUEST_VAR} = new {request_type}"));
  body.push("{".to_string());
  let last = initializers.len() - 1;
  for (position, initializer) in initializers.into_iter().enumerate() {
    let comma = if position == last { "" } else { "," };
    body.push(format!("    {initializer}{comma}"));
  }
  body.push("};".to_string());

  let target = if config.endpoint.is_some() { "Client" } else { "client" };
  let payload = payload_type(operation, config);
  let send = match operation.kind {
    OperationKind::Query => format!("return {target}.SendQueryAsync<{payload}>({REQUEST_VAR});"),
    OperationKind::Mutation => format!("return {target}.SendMutationAsync<{payload}>({REQUEST_VAR});"),
    OperationKind::Subscription => {
      if with_handler {
        format!("return {target}.CreateSubscriptionStream<{payload}>({REQUEST_VAR}, exceptionHandler);")
      } else {
        format!("return {target}.CreateSubscriptionStream<{payload}>({REQUEST_VAR});")
      }
    }
  };
  body.push(send);
  body
}

pub(crate) fn emit_client_interface(writer: &mut CsharpWriter, config: &CodegenConfig, methods: &[MethodDef]) {
  writer.line(&format!("public interface {}", interface_name(config)));
  writer.open();
  for (position, method) in methods.iter().enumerate() {
    if position > 0 {
      writer.blank();
    }
    super::emit_method_signature(writer, method);
  }
  writer.close();
}

pub(crate) fn emit_client_class(writer: &mut CsharpWriter, config: &CodegenConfig, methods: &[MethodDef]) {
  writer.line(&format!("public class {} : {}", config.class_name, interface_name(config)));
  writer.open();

  let mut first = true;
  if let Some(ref name) = config.named_client {
    writer.line(&format!("public const string NamedClient = \"{name}\";"));
    first = false;
  }

  if let Some(ref endpoint) = config.endpoint {
    if !first {
      writer.blank();
    }
    emit_lazy_client(writer, endpoint);
    first = false;
  }

  for method in methods {
    if !first {
      writer.blank();
    }
    super::emit_method(writer, method);
    first = false;
  }

  writer.close();
}

/// The endpoint choice is memoized in a `Lazy<T>` initializer: the selection
/// predicate runs once at first use and the chosen client is reused for the
/// lifetime of the generated type.
fn emit_lazy_client(writer: &mut CsharpWriter, endpoint: &EndpointConfig) {
  match (&endpoint.url_secondary, &endpoint.predicate) {
    (Some(secondary), Some(predicate)) => {
      writer.line("private static readonly Lazy<GraphQLHttpClient> _lazyClient = new Lazy<GraphQLHttpClient>(() =>");
      writer.open();
      writer.line(&format!("if ({predicate})"));
      writer.open();
      writer.line(&format!(
        "return new GraphQLHttpClient(\"{}\", new NewtonsoftJsonSerializer());",
        endpoint.url
      ));
      writer.close();
      writer.line(&format!(
        "return new GraphQLHttpClient(\"{secondary}\", new NewtonsoftJsonSerializer());"
      ));
      writer.close_with(");");
    }
    _ => {
      writer.line(&format!(
        "private static readonly Lazy<GraphQLHttpClient> _lazyClient = new Lazy<GraphQLHttpClient>(() => new GraphQLHttpClient(\"{}\", new NewtonsoftJsonSerializer()));",
        endpoint.url
      ));
    }
  }
  writer.blank();
  writer.line("private static GraphQLHttpClient Client => _lazyClient.Value;");
}

/// Transport-request subclass attaching the bearer token and extra headers.
/// Emitted only when endpoint configuration is present.
pub(crate) fn emit_auth_request_class(writer: &mut CsharpWriter) {
  writer.line(&format!("public class {AUTH_REQUEST_CLASS} : GraphQLHttpRequest"));
  writer.open();
  writer.line("public string AuthToken { get; set; }");
  writer.blank();
  writer.line("public IDictionary<string, string> Headers { get; set; }");
  writer.blank();
  writer.line(
    "public override HttpRequestMessage ToHttpRequestMessage(GraphQLHttpClientOptions options, IGraphQLJsonSerializer serializer)",
  );
  writer.open();
  writer.line("var message = base.ToHttpRequestMessage(options, serializer);");
  writer.line("if (!string.IsNullOrEmpty(AuthToken))");
  writer.open();
  writer.line("message.Headers.Authorization = new AuthenticationHeaderValue(\"Bearer\", AuthToken);");
  writer.close();
  writer.line("if (Headers != null)");
  writer.open();
  writer.line("foreach (var header in Headers)");
  writer.open();
  writer.line("message.Headers.Add(header.Key, header.Value);");
  writer.close();
  writer.close();
  writer.line("return message;");
  writer.close();
  writer.close();
}

/// Fixed error-presence helper, always emitted last.
pub(crate) fn emit_response_extensions(writer: &mut CsharpWriter) {
  writer.line("public static class GraphQLResponseExtensions");
  writer.open();
  writer.line("public static bool HasErrors<T>(this GraphQLResponse<T> response)");
  writer.open();
  writer.line("return response.Errors != null && response.Errors.Length > 0;");
  writer.close();
  writer.close();
}
