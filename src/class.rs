//! Emission of the Java source that holds the embedded text.

use tracing::debug;

use crate::chunk::{embed_literal, ChunkRegistry};
use crate::error::InjectError;

/// Member name used when the caller supplies a blank prefix.
pub const DEFAULT_PREFIX: &str = "F";

pub const JAVA_SUFFIX: &str = ".java";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Build the Java text for `content`.
///
/// When both `package_name` and `class_name` are non-blank the declarations
/// are wrapped in a `package` statement and a `public class` body; otherwise
/// only the member declarations are returned.
pub fn create_class_for_static_text(
    package_name: Option<&str>,
    class_name: Option<&str>,
    prefix: Option<&str>,
    content: &str,
) -> String {
    let mut out = String::new();

    let frame = non_blank(package_name).zip(non_blank(class_name));
    if let Some((package_name, class_name)) = frame {
        out.push_str(&format!("package {package_name};\n\n"));
        out.push_str(&format!("public class {class_name} {{\n\n"));
    }

    let prefix = non_blank(prefix).map_or(DEFAULT_PREFIX, str::trim);

    let mut registry = ChunkRegistry::new(prefix);
    let expression = embed_literal(0, content, &mut registry);
    debug!(
        prefix = registry.prefix(),
        chunks = registry.len(),
        "emitting static text members"
    );

    for chunk in registry.chunks() {
        out.push_str(&format!(
            "   private static final java.lang.String {} = {};\n",
            chunk.name, chunk.literal
        ));
    }
    out.push_str(&format!("public static final String {prefix} = {expression};\n"));

    if frame.is_some() {
        out.push_str("\n}\n");
    }

    out
}

/// A validated destination class for generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetClass {
    package_name: Option<String>,
    class_name: String,
}

impl TargetClass {
    /// Trims the class name and drops a trailing `.java` before checking that
    /// something is left.
    pub fn new(package_name: Option<&str>, class_name: &str) -> Result<Self, InjectError> {
        let trimmed = class_name.trim();
        let stripped = trimmed.strip_suffix(JAVA_SUFFIX).unwrap_or(trimmed);

        if stripped.trim().is_empty() {
            return Err(InjectError::InvalidTargetIdentifier(class_name.to_string()));
        }

        Ok(Self {
            package_name: non_blank(package_name).map(|p| p.trim().to_string()),
            class_name: stripped.to_string(),
        })
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// File name of the generated source, e.g. `Texts.java`
    pub fn file_name(&self) -> String {
        format!("{}{}", self.class_name, JAVA_SUFFIX)
    }

    pub fn render(&self, prefix: Option<&str>, content: &str) -> String {
        create_class_for_static_text(
            self.package_name.as_deref(),
            Some(&self.class_name),
            prefix,
            content,
        )
    }
}
