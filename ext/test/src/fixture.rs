//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them through the config loading path:
//! YAML → [`MatchConfig<String>`] → [`ClassRegistry::load_match`] → evaluate.
//!
//! ```yaml
//! name: literal-number
//! description: A number target never matches a string input
//! matcher:
//!   cases:
//!     - when: 1
//!       then: number
//!   default: miss
//! cases:
//!   - name: number input
//!     input: 1
//!     expect: number
//!   - name: string input
//!     input: "1"
//!     expect: miss
//! ```
//!
//! Every fixture starts from the test-domain classes (see [`crate::register`]);
//! `classes` declares extra ones.

use kase::{ClassRegistry, ClassRegistryBuilder, MatchConfig, MatchError, ValueConfig};
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    pub matcher: MatchConfig<String>,
    pub cases: Vec<TestCase>,
}

/// Extra class declaration, parents before children.
#[derive(Debug, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub input: ValueConfig,
    pub expect: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Build the registry: test-domain classes plus this fixture's `classes`.
    pub fn registry(&self) -> Result<ClassRegistry, MatchError> {
        self.classes
            .iter()
            .fold(
                crate::register(ClassRegistryBuilder::new()),
                |builder, decl| match &decl.extends {
                    Some(parent) => builder.subclass(&decl.name, parent),
                    None => builder.class(&decl.name),
                },
            )
            .build()
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Result<Vec<CaseResult>, MatchError> {
        let registry = self.registry()?;
        let table = registry.load_match(self.matcher.clone())?;
        self.cases
            .iter()
            .map(|case| {
                let input = registry.load_value(&case.input)?;
                let actual = table.evaluate(&input);
                Ok(CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == case.expect,
                    expected: case.expect.clone(),
                    actual,
                })
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to load: {e}", self.name));
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: strict-literals
description: number and string targets stay apart
matcher:
  cases:
    - when: 1
      then: number
    - when: "1"
      then: string
cases:
  - name: number
    input: 1
    expect: number
  - name: string
    input: "1"
    expect: string
  - name: bool
    input: true
    expect: null
"#;

    #[test]
    fn test_run_fixture() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        let results = fixture.run().unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn test_declared_classes_extend_domain() {
        let yaml = r#"
name: declared
classes:
  - name: Hexagon
    extends: Polygon
matcher:
  cases:
    - when: { type: Polygon }
      then: polygon
cases:
  - name: hexagon
    input: { class: Hexagon }
    expect: polygon
"#;
        Fixture::from_yaml(yaml).unwrap().run_and_assert();
    }

    #[test]
    fn test_unknown_class_is_load_error() {
        let yaml = r#"
name: unknown
matcher:
  cases:
    - when: { type: Nope }
      then: x
cases: []
"#;
        let err = Fixture::from_yaml(yaml).unwrap().run().unwrap_err();
        assert!(matches!(err, MatchError::UnknownClass { .. }));
    }

    #[test]
    fn test_multi_document() {
        let yaml = format!("{FIXTURE}\n---\n{FIXTURE}");
        assert_eq!(Fixture::from_yaml_multi(&yaml).unwrap().len(), 2);
    }
}
