//! Template classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of code a template scaffolds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateType {
    #[serde(rename = "function-style template")]
    Function,
    #[serde(rename = "struct-style template")]
    Struct,
    #[serde(rename = "implementation-block template")]
    Implementation,
    #[serde(rename = "module template")]
    Module,
    #[serde(rename = "async function template")]
    AsyncFunction,
    #[serde(rename = "derived struct template")]
    DerivedStruct,
    #[serde(rename = "module-with-imports template")]
    ModuleWithImports,
    #[serde(rename = "generic template")]
    Generic,
}

impl TemplateType {
    pub fn label(self) -> &'static str {
        match self {
            TemplateType::Function => "function-style template",
            TemplateType::Struct => "struct-style template",
            TemplateType::Implementation => "implementation-block template",
            TemplateType::Module => "module template",
            TemplateType::AsyncFunction => "async function template",
            TemplateType::DerivedStruct => "derived struct template",
            TemplateType::ModuleWithImports => "module-with-imports template",
            TemplateType::Generic => "generic template",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Rule = (fn(&str) -> bool, TemplateType);

// Order matters: the first matching rule wins. A `pub async fn` with `->`
// is therefore a function-style template.
const RULES: &[Rule] = &[
    (|t: &str| t.contains("fn ") && t.contains("->"), TemplateType::Function),
    (|t: &str| t.contains("struct ") && t.contains('{'), TemplateType::Struct),
    (|t: &str| t.contains("impl "), TemplateType::Implementation),
    (|t: &str| t.contains("mod "), TemplateType::Module),
    (|t: &str| t.contains("pub async fn"), TemplateType::AsyncFunction),
    (|t: &str| t.contains("#[derive("), TemplateType::DerivedStruct),
    (|t: &str| t.contains("use ") && t.contains("::"), TemplateType::ModuleWithImports),
];

/// Classify `text` by plain substring tests over the whole document
pub fn classify(text: &str) -> TemplateType {
    RULES
        .iter()
        .find(|(matches, _)| matches(text))
        .map(|(_, kind)| *kind)
        .unwrap_or(TemplateType::Generic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_template() {
        let text = "fn @[name]@() -> @[return_type]@ { @[body]@ }";
        assert_eq!(classify(text), TemplateType::Function);
        assert_eq!(classify(text).label(), "function-style template");
    }

    #[test]
    fn test_struct_template() {
        assert_eq!(
            classify("pub struct @[struct_name]@ {\n    @[fields]@\n}"),
            TemplateType::Struct
        );
    }

    #[test]
    fn test_struct_without_brace_falls_through() {
        assert_eq!(classify("struct Unit;"), TemplateType::Generic);
    }

    #[test]
    fn test_impl_and_module() {
        assert_eq!(
            classify("impl @[type_name]@ {}"),
            TemplateType::Implementation
        );
        assert_eq!(classify("mod @[module_name]@;"), TemplateType::Module);
    }

    #[test]
    fn test_pub_async_fn_without_arrow() {
        assert_eq!(
            classify("pub async fn @[function_name]@() {}"),
            TemplateType::AsyncFunction
        );
    }

    #[test]
    fn test_private_async_fn_is_generic() {
        assert_eq!(classify("async fn run() {}"), TemplateType::Generic);
    }

    #[test]
    fn test_async_fn_with_arrow_is_function() {
        assert_eq!(
            classify("async fn run() -> @[return_type]@ {}"),
            TemplateType::Function
        );
    }

    #[test]
    fn test_derive_and_imports() {
        assert_eq!(
            classify("#[derive(Debug)]\nenum @[type_name]@ { A }"),
            TemplateType::DerivedStruct
        );
        assert_eq!(
            classify("use std::fmt;\n@[content]@"),
            TemplateType::ModuleWithImports
        );
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(classify(""), TemplateType::Generic);
        assert_eq!(classify("Hello @[name]@"), TemplateType::Generic);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&TemplateType::ModuleWithImports).unwrap();
        assert_eq!(json, "\"module-with-imports template\"");
    }
}
