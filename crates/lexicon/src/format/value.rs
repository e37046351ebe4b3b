/// Format a string argument. Pass-through; exists so generated code routes
/// every argument kind through this module.
pub fn text(value: &str) -> String {
    value.to_string()
}

/// Format a boolean argument as a fixed token pair.
pub fn boolean(value: bool) -> &'static str {
    // TODO: i18n
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_mapping_is_fixed() {
        assert_eq!(boolean(true), "yes");
        assert_eq!(boolean(false), "no");
    }

    #[test]
    fn text_is_identity() {
        assert_eq!(text("héllo\nworld"), "héllo\nworld");
        assert_eq!(text(""), "");
    }
}
