//! Ordered classification rules.
//!
//! Each rule pairs a [`ClassificationTag`] with an anchored regex that is run
//! against the trimmed line. The table order is the priority order: the
//! constructor rule sits before the function rule because a line such as
//! `public Foo() {` satisfies both, and it must come out as a constructor.

use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

use crate::models::ClassificationTag;

/// One entry in the rule table
#[derive(Debug)]
pub struct Rule {
    pub tag: ClassificationTag,
    pub pattern: &'static str,
    regex: Regex,
    /// Lines matching this are rejected even when `regex` matches
    exclude: Option<Regex>,
}

impl Rule {
    fn new(tag: ClassificationTag, pattern: &'static str) -> Self {
        Self { tag, pattern, regex: compile_regex(pattern), exclude: None }
    }

    fn excluding(self, pattern: &'static str) -> Self {
        Self { exclude: Some(compile_regex(pattern)), ..self }
    }

    /// Tests `trimmed` against this rule alone, ignoring priority
    pub fn matches(&self, trimmed: &str) -> bool {
        self.regex.is_match(trimmed)
            && !self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(trimmed))
    }
}

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => {
            error!("Classification rule failed to compile, disabling it: {}", err);
            match Regex::new(r"$^") {
                Ok(never) => never,
                Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
            }
        }
    }
}

const ANNOTATION: &str = r"^@\w+";

const IMPORT: &str = r"^import\s+[\w.]+\s*;";

const CLASS: &str = r"^(?:public\s+)?(?:final\s+)?(?:abstract\s+)?class\s+\w+";

// Parameter lists never open with a string literal; that keeps call sites like
// `implementation platform("...")` out of the two declaration rules.
//
// With an access modifier anything may follow the parameter list (`;`, a
// comment, a brace). Without one, only `throws`, a brace or a comment may, so
// a bare call statement such as `Foo(bar);` stays out.
const CONSTRUCTOR: &str = r#"^(?:(?:public|protected|private)\s+[A-Z]\w*\s*\(\s*(?:[^'"\s)].*)?\)|[A-Z]\w*\s*\(\s*(?:[^'"\s)].*)?\)\s*(?:throws\s+[\w.,\s]+?)?\s*(?:\{.*|//.*)?$)"#;

const FUNCTION: &str = r#"^(?:(?:public|private|protected)\s+)?(?:static\s+)?[\w.]+(?:<[^()]*>)?(?:\[\])*\s+\w+\s*\(\s*(?:[^'"\s)].*)?\)"#;

// Statements that read like `<type> <name>(...)`
const FUNCTION_EXCLUDE: &str = r"^(?:return|new|throw|else|case|assert|yield|await)\b";

const GRADLE: &str = r#"^(?:implementation|api|compile|runtimeOnly|testImplementation|testRuntimeOnly|compileOnly|annotationProcessor|kapt|ksp|provided|detektPlugins|androidTestImplementation|debugImplementation|releaseImplementation|\w+Implementation)\s*(?:(?:platform|enforcedPlatform)\s*)?[('"]"#;

const PROPERTY: &str = r"^[\w.\-]+\s*=\s*.+";

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(ClassificationTag::Annotation, ANNOTATION),
        Rule::new(ClassificationTag::Import, IMPORT),
        Rule::new(ClassificationTag::Class, CLASS),
        Rule::new(ClassificationTag::Constructor, CONSTRUCTOR),
        Rule::new(ClassificationTag::Function, FUNCTION).excluding(FUNCTION_EXCLUDE),
        Rule::new(ClassificationTag::Gradle, GRADLE),
        Rule::new(ClassificationTag::Property, PROPERTY),
    ]
});

/// The rule table in evaluation order
///
/// [`ClassificationTag::Generic`] has no rule; it is the fallback.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Looks up the rule for a tag, for testing a single rule in isolation
pub fn rule_for(tag: ClassificationTag) -> Option<&'static Rule> {
    rules().iter().find(|rule| rule.tag == tag)
}
