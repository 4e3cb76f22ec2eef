//! Heuristic sample values for placeholder names

/// Sample value for `name`, chosen by keyword tests on its lowercase form
///
/// Total and deterministic: every name gets a value.
pub fn sample_value(name: &str) -> String {
    let lower = name.to_lowercase();
    let has = |word: &str| lower.contains(word);

    let value = if has("name") {
        if has("function") {
            "example_function"
        } else if has("struct") {
            "ExampleStruct"
        } else if has("module") {
            "example_module"
        } else {
            "example_name"
        }
    } else if has("type") {
        if has("return") {
            "Result<String, Error>"
        } else {
            "String"
        }
    } else if has("param") {
        "param: &str"
    } else if has("body") {
        "todo!(\"Implement this\")"
    } else if has("field") {
        "pub field: String,"
    } else if has("import") {
        "use std::collections::HashMap;"
    } else if has("content") {
        "// Generated content here"
    } else if has("description") {
        "Generated by Tron template engine"
    } else {
        return format!("sample_{}", lower);
    };

    value.to_string()
}
