//! Document assembly and header configuration.

use bon::Builder;
use gqlproto_schema::{SchemaGraph, TypeId, TypeNode};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::emit::{render_enum, render_message};
use crate::error::{Result, TranslateError};
use crate::walker;

pub const DEFAULT_PACKAGE: &str = "google.api.graphql.rejoiner.proto";
pub const DEFAULT_JAVA_PACKAGE: &str = "com.google.api.graphql.rejoiner.proto";
pub const DEFAULT_JS_NAMESPACE: &str = "com.google.api.graphql.rejoiner.proto";
pub const DEFAULT_JSPB_IMPORT: &str = "java/com/google/apps/jspb/jspb.proto";
pub const DEFAULT_MESSAGE_ID_PREFIX: &str = "corp.graphql";

/// Constants written into the document header and message-id annotations.
///
/// The defaults reproduce the header expected by the downstream proto
/// toolchain byte for byte. Missing keys in a deserialized config fall back to
/// those defaults.
///
/// ```
/// use gqlproto::ProtoOptions;
///
/// let options = ProtoOptions::builder().package("acme.api").build();
/// assert_eq!(options.package, "acme.api");
/// assert_eq!(options.message_id_prefix, "corp.graphql");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(default)]
pub struct ProtoOptions {
    #[builder(default = DEFAULT_PACKAGE.to_string())]
    pub package: String,
    #[builder(default = DEFAULT_JAVA_PACKAGE.to_string())]
    pub java_package: String,
    #[builder(default = DEFAULT_JS_NAMESPACE.to_string())]
    pub js_namespace: String,
    #[builder(default = DEFAULT_JSPB_IMPORT.to_string())]
    pub jspb_import: String,
    #[builder(default = DEFAULT_MESSAGE_ID_PREFIX.to_string())]
    pub message_id_prefix: String,
}

impl Default for ProtoOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            java_package: DEFAULT_JAVA_PACKAGE.to_string(),
            js_namespace: DEFAULT_JS_NAMESPACE.to_string(),
            jspb_import: DEFAULT_JSPB_IMPORT.to_string(),
            message_id_prefix: DEFAULT_MESSAGE_ID_PREFIX.to_string(),
        }
    }
}

impl ProtoOptions {
    /// Fixed preamble, ending with the blank line that precedes the first block.
    pub fn header(&self) -> String {
        let mut output = String::new();
        output.push_str("// LINT: LEGACY_NAMES\n");
        output.push_str("// Autogenerated. Do not edit.\n");
        output.push_str("syntax = \"proto3\";\n");
        output.push('\n');
        output.push_str(&format!("package {};\n", self.package));
        output.push('\n');
        output.push_str(&format!("option java_package = \"{}\";\n", self.java_package));
        output.push_str(&format!("option (jspb.js_namespace) = \"{}\";\n", self.js_namespace));
        output.push_str(&format!("import \"{}\";\n", self.jspb_import));
        output.push('\n');
        output
    }
}

/// Translates schema graphs into protobuf documents using a fixed set of options.
///
/// A translator holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: ProtoOptions,
}

impl Translator {
    pub fn new(options: ProtoOptions) -> Self {
        Self { options }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &ProtoOptions {
        &self.options
    }

    /// Types that [`translate`](Self::translate) emits, in output order.
    pub fn emission_list(&self, graph: &SchemaGraph) -> Result<Vec<TypeId>> {
        walker::emission_list(graph)
    }

    /// Produce the complete document for `graph`.
    ///
    /// Either the whole document is returned or an error; there is no partial
    /// output.
    pub fn translate(&self, graph: &SchemaGraph) -> Result<String> {
        let types = walker::emission_list(graph)?;
        let body = types
            .iter()
            .map(|id| self.render_block(graph, *id))
            .process_results(|mut blocks| blocks.join("\n\n"))?;

        let mut output = self.options.header();
        output.push_str(&body);

        tracing::debug!(
            "Translated schema '{}' into {} blocks ({} bytes)",
            graph.root_name(),
            types.len(),
            output.len()
        );
        Ok(output)
    }

    fn render_block(&self, graph: &SchemaGraph, id: TypeId) -> Result<String> {
        let prefix = &self.options.message_id_prefix;
        match graph.get(id) {
            Some(TypeNode::Object(object)) => render_message(graph, object, prefix),
            Some(TypeNode::Enum(enumeration)) => render_enum(enumeration, prefix),
            Some(other) => Err(TranslateError::InvalidSchemaGraph(format!(
                "{} '{}' cannot be emitted as a message",
                other.variant(),
                other.name()
            ))),
            None => Err(TranslateError::InvalidSchemaGraph(format!(
                "type {id} is missing from the schema"
            ))),
        }
    }
}

/// Translate `graph` with the default header options.
pub fn translate(graph: &SchemaGraph) -> Result<String> {
    Translator::with_defaults().translate(graph)
}
