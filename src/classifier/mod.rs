//! Heuristic line classification.
//!
//! [`classify`] trims the line and walks the rule table in [`rules`] order,
//! returning the tag of the first rule that matches, or
//! [`ClassificationTag::Generic`] when none does. It is pure and total: no
//! I/O, no errors, exactly one tag per line.
//!
//! The rules are tuned for Java sources and Gradle build files. They are
//! deliberately shallow pattern checks, not a parser.
//!
//! # Examples
//!
//! ```
//! use linesweep::classifier::classify;
//! use linesweep::models::ClassificationTag;
//!
//! assert_eq!(classify("  @Override\n"), ClassificationTag::Annotation);
//! assert_eq!(classify("public Foo() {"), ClassificationTag::Constructor);
//! assert_eq!(classify("implementation(\"com.example:lib:1.0\")"), ClassificationTag::Gradle);
//! ```

pub mod rules;

pub use rules::{Rule, rule_for, rules};

use crate::models::ClassificationTag;

pub fn classify(line: &str) -> ClassificationTag {
    let trimmed = line.trim();
    rules()
        .iter()
        .find(|rule| rule.matches(trimmed))
        .map(|rule| rule.tag)
        .unwrap_or(ClassificationTag::Generic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_beats_function() {
        assert_eq!(classify("public Foo() {"), ClassificationTag::Constructor);
        assert_eq!(classify("public void foo() {"), ClassificationTag::Function);
    }

    #[test]
    fn test_declarations_with_trailing_content() {
        assert_eq!(classify("String getName();"), ClassificationTag::Function);
        assert_eq!(classify("    void run(); // hook"), ClassificationTag::Function);
        assert_eq!(classify("public Foo(int x);"), ClassificationTag::Constructor);
        assert_eq!(classify("new Foo(bar);"), ClassificationTag::Generic);
    }

    #[test]
    fn test_annotation_beats_property() {
        assert_eq!(classify("@Override"), ClassificationTag::Annotation);
        assert_eq!(classify("@Value(key = \"x\")"), ClassificationTag::Annotation);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(classify("    import java.util.List;\r\n"), ClassificationTag::Import);
        assert_eq!(classify("\tversion = 1.0  "), ClassificationTag::Property);
    }

    #[test]
    fn test_gradle_lines() {
        assert_eq!(classify("implementation(\"com.example:lib:1.0\")"), ClassificationTag::Gradle);
        assert_eq!(
            classify("implementation platform(\"com.example:bom:1.0\")"),
            ClassificationTag::Gradle
        );
        assert_eq!(classify("testRuntimeOnly 'org.junit:junit:4.13'"), ClassificationTag::Gradle);
    }

    #[test]
    fn test_class_line() {
        assert_eq!(classify("public abstract class Shape {"), ClassificationTag::Class);
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(classify(""), ClassificationTag::Generic);
        assert_eq!(classify("   "), ClassificationTag::Generic);
        assert_eq!(classify("// com.example:lib:1.0"), ClassificationTag::Generic);
        assert_eq!(classify("return foo(bar);"), ClassificationTag::Generic);
    }
}
