//! Template fixtures shared by the workspace's tests

/// Clean function template: no diagnostics with the default config
pub const FUNCTION_TEMPLATE: &str = "\
/// @[description]@
pub fn @[function_name]@(@[parameters]@) -> @[return_type]@ {
    @[body]@
}
";

/// Clean struct template
pub const STRUCT_TEMPLATE: &str = "\
#[derive(Debug, Clone)]
pub struct @[struct_name]@ {
    @[fields]@
}
";

/// One Error (empty placeholder), one Warning (double @), one Information
/// (snake case) on separate lines
pub const MALFORMED_TEMPLATE: &str = "\
fn @[FunctionName]@() {}
let x = @[]@;
// @@ stray
";

/// Unmatched brackets on the first line
pub const UNBALANCED_TEMPLATE: &str = "fn @[function_name]@(@[parameters) {}\n";

/// No placeholders at all
pub const PLAIN_TEXT: &str = "Just some text.\nNothing to fill in.\n";
