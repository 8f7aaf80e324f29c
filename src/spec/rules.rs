//! Rules spec (rules.json): level name -> pattern rules.
//!
//! JSON shape:
//! {
//!   "Type":   { "bam$": "Alignment", "vcf$": null },   // pattern -> override
//!   "Sample": ["sample[0-9]+"]                          // patterns, no overrides
//! }
//!
//! Key order is significant: levels nest outermost-first in the order they
//! appear, and patterns are tried in the order they appear within a level.

use crate::classify::{ClassificationTable, LevelClassifier, NO_MATCH, PatternRule};
use anyhow::{Context, bail};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RulesSpec {
    pub levels: IndexMap<String, LevelRulesSpec>,
}

/// Pattern rules for one level as they appear in rules.json.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LevelRulesSpec {
    // { "pattern": "override" | null }
    Mapped(IndexMap<String, Option<String>>),
    // [ "pattern", ... ]
    Patterns(Vec<String>),
}

impl LevelRulesSpec {
    fn entries(&self) -> Vec<(&str, Option<&str>)> {
        match self {
            LevelRulesSpec::Mapped(map) => map
                .iter()
                .map(|(p, n)| (p.as_str(), n.as_deref()))
                .collect(),
            LevelRulesSpec::Patterns(patterns) => {
                patterns.iter().map(|p| (p.as_str(), None)).collect()
            }
        }
    }
}

impl RulesSpec {
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("read rules file {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("parse rules file {}", path))
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compile every pattern and build the classification table:
    /// - at least one level
    /// - every pattern is a valid regex
    /// - overrides, when given, are non-empty
    pub fn validate_and_build(&self) -> anyhow::Result<ClassificationTable> {
        if self.levels.is_empty() {
            bail!("rules define no levels");
        }

        let mut levels = Vec::with_capacity(self.levels.len());
        for (level_name, spec) in &self.levels {
            let mut rules = Vec::new();
            for (pattern, node_name) in spec.entries() {
                let regex = Regex::new(pattern)
                    .with_context(|| format!("level '{}': bad pattern {:?}", level_name, pattern))?;
                if node_name == Some("") {
                    bail!("level '{}': empty node name for pattern {:?}", level_name, pattern);
                }
                rules.push(PatternRule::new(regex, node_name.map(str::to_string)));
            }
            let level = LevelClassifier::new(level_name.clone(), rules);
            if level.rules().is_empty() {
                log::warn!("level '{}' has no patterns; every filename is {}", level_name, NO_MATCH);
            } else {
                log::debug!("level '{}': {} patterns", level_name, level.rules().len());
            }
            levels.push(level);
        }

        Ok(ClassificationTable::new(levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preserves_level_and_pattern_order() {
        let spec = RulesSpec::from_json_str(
            r#"{ "Type": { "vcf$": null, "bam$": "Alignment" }, "Sample": ["s[0-9]"] }"#,
        )
        .unwrap();
        let table = spec.validate_and_build().unwrap();

        let names: Vec<&str> = table.levels().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Type", "Sample"]);

        let type_rules: Vec<(&str, Option<&str>)> = table.levels()[0]
            .rules()
            .iter()
            .map(|r| (r.pattern(), r.node_name()))
            .collect();
        assert_eq!(type_rules, vec![("vcf$", None), ("bam$", Some("Alignment"))]);
        assert_eq!(table.levels()[1].rules()[0].pattern(), "s[0-9]");
    }

    #[test]
    fn empty_level_is_allowed() {
        let table = RulesSpec::from_json_str(r#"{ "Type": {} }"#)
            .unwrap()
            .validate_and_build()
            .unwrap();
        assert!(table.levels()[0].rules().is_empty());
    }

    #[test]
    fn rejects_no_levels() {
        let err = RulesSpec::from_json_str("{}")
            .unwrap()
            .validate_and_build()
            .unwrap_err();
        assert!(err.to_string().contains("no levels"));
    }

    #[test]
    fn rejects_malformed_pattern_naming_level() {
        let err = RulesSpec::from_json_str(r#"{ "Type": { "(bam": null } }"#)
            .unwrap()
            .validate_and_build()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Type"), "{}", msg);
        assert!(msg.contains("(bam"), "{}", msg);
    }

    #[test]
    fn rejects_empty_override() {
        let err = RulesSpec::from_json_str(r#"{ "Type": { "bam$": "" } }"#)
            .unwrap()
            .validate_and_build()
            .unwrap_err();
        assert!(err.to_string().contains("empty node name"));
    }

    #[test]
    fn rejects_wrong_json_shape() {
        assert!(RulesSpec::from_json_str(r#"{ "Type": 3 }"#).is_err());
        assert!(RulesSpec::from_json_str(r#"[1, 2]"#).is_err());
    }
}
