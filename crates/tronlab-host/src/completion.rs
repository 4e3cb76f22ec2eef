//! Placeholder catalog, template snippets and completion

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A commonly used placeholder name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownPlaceholder {
    pub name: &'static str,
    pub description: &'static str,
}

const fn known(name: &'static str, description: &'static str) -> KnownPlaceholder {
    KnownPlaceholder { name, description }
}

pub const KNOWN_PLACEHOLDERS: &[KnownPlaceholder] = &[
    known("function_name", "Name of a function"),
    known("struct_name", "Name of a struct"),
    known("module_name", "Name of a module"),
    known("variable_name", "Name of a variable"),
    known("type_name", "Name of a type"),
    known("parameters", "Function parameters"),
    known("return_type", "Function return type"),
    known("body", "Function or block body"),
    known("fields", "Struct fields"),
    known("methods", "Impl block methods"),
    known("imports", "Import statements"),
    known("content", "Generic content"),
    known("description", "Documentation description"),
    known("error_type", "Error type"),
    known("success_type", "Success type"),
];

/// Built-in template skeletons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Snippet {
    Fn,
    Struct,
    Impl,
    Mod,
}

impl Snippet {
    pub const ALL: [Snippet; 4] = [Snippet::Fn, Snippet::Struct, Snippet::Impl, Snippet::Mod];

    pub fn keyword(self) -> &'static str {
        match self {
            Snippet::Fn => "fn",
            Snippet::Struct => "struct",
            Snippet::Impl => "impl",
            Snippet::Mod => "mod",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.keyword() == keyword)
    }

    pub fn description(self) -> &'static str {
        match self {
            Snippet::Fn => "Function template with placeholders",
            Snippet::Struct => "Struct template with placeholders",
            Snippet::Impl => "Impl block template with placeholders",
            Snippet::Mod => "Module template with placeholders",
        }
    }

    /// Body in editor snippet syntax, with `${n:default}` tab stops
    pub fn body(self) -> &'static str {
        match self {
            Snippet::Fn => {
                "fn @[${1:function_name}]@(${2:@[parameters]@}) -> ${3:@[return_type]@} {\n    ${4:@[body]@}\n}"
            }
            Snippet::Struct => {
                "#[derive(${1:Debug})]\npub struct @[${2:struct_name}]@ {\n    ${3:@[fields]@}\n}"
            }
            Snippet::Impl => "impl @[${1:struct_name}]@ {\n    ${2:@[methods]@}\n}",
            Snippet::Mod => {
                "pub mod @[${1:module_name}]@ {\n    ${2:@[imports]@}\n\n    ${3:@[content]@}\n}"
            }
        }
    }

    /// Body with every tab stop replaced by its default text
    pub fn expand(self) -> String {
        static TAB_STOP: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\$\{\d+:([^}]*)\}").expect("tab stop pattern must compile")
        });

        TAB_STOP.replace_all(self.body(), "$1").into_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    /// A known placeholder name
    Variable,
    /// Snippet-syntax insertion
    Snippet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
    pub documentation: String,
    pub insert_text: String,
}

/// Completions for the text left of the cursor on the current line
///
/// - inside an open `@[` → known placeholder names, inserting `<name>]@`
/// - right after `@` → a placeholder skeleton
/// - anywhere else → the template snippets
pub fn complete(line_prefix: &str) -> Vec<CompletionItem> {
    let in_placeholder = line_prefix.ends_with("@[")
        || (line_prefix.contains("@[") && !line_prefix.contains("]@"));

    if in_placeholder {
        placeholder_completions()
    } else if line_prefix.ends_with('@') {
        vec![placeholder_start()]
    } else {
        snippet_completions()
    }
}

fn placeholder_completions() -> Vec<CompletionItem> {
    KNOWN_PLACEHOLDERS
        .iter()
        .map(|known| CompletionItem {
            label: known.name.to_string(),
            kind: CompletionKind::Variable,
            detail: format!("Tron placeholder: {}", known.name),
            documentation: known.description.to_string(),
            insert_text: format!("{}]@", known.name),
        })
        .collect()
}

fn placeholder_start() -> CompletionItem {
    CompletionItem {
        label: "[placeholder]@".to_string(),
        kind: CompletionKind::Snippet,
        detail: "Tron placeholder".to_string(),
        documentation: "Create a new Tron template placeholder".to_string(),
        insert_text: "[${1:placeholder_name}]@".to_string(),
    }
}

fn snippet_completions() -> Vec<CompletionItem> {
    Snippet::ALL
        .into_iter()
        .map(|snippet| CompletionItem {
            label: format!("{} template", snippet.keyword()),
            kind: CompletionKind::Snippet,
            detail: "Tron template".to_string(),
            documentation: snippet.description().to_string(),
            insert_text: snippet.body().to_string(),
        })
        .collect()
}
