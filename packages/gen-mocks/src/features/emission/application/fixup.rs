//! Cosmetic pass over printed source

/// Put a blank line between every pair of adjacent functions
pub fn separate_funcs(src: &str) -> String {
    src.replace("}\nfunc", "}\n\nfunc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_funcs_are_separated() {
        let src = "func a() { return }\nfunc b() {\n\treturn\n}\nfunc c() {}\n";
        assert_eq!(
            separate_funcs(src),
            "func a() { return }\n\nfunc b() {\n\treturn\n}\n\nfunc c() {}\n"
        );
    }

    #[test]
    fn test_already_separated_is_unchanged() {
        let src = "type T struct {\n}\n\nfunc a() {}\n";
        assert_eq!(separate_funcs(src), src);
    }
}
