use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Bucket for filenames no pattern at a level matches.
pub const NO_MATCH: &str = "NoMatch";

/// A search pattern plus the node name it files matches under, if fixed.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    node_name: Option<String>,
}

impl PatternRule {
    pub fn new(regex: Regex, node_name: Option<String>) -> Self {
        Self { regex, node_name }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn node_name(&self) -> Option<&str> {
        self.node_name.as_deref()
    }
}

/// One level of the hierarchy ("Category", "Subcategory", ...).
#[derive(Debug, Clone)]
pub struct LevelClassifier {
    name: String,
    rules: Vec<PatternRule>,
}

impl LevelClassifier {
    pub fn new(name: impl Into<String>, rules: Vec<PatternRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Resolve the node name for `filename` at this level.
    ///
    /// Patterns are searched anywhere in the filename, case-sensitively. The
    /// first pattern in declared order that matches decides the node:
    /// - its override name, when one is given;
    /// - otherwise the matched text, when the level has a single pattern;
    /// - otherwise the pattern string itself.
    ///
    /// Filenames nothing matches go to [`NO_MATCH`].
    pub fn resolve(&self, filename: &str) -> String {
        let mut matches = self
            .rules
            .iter()
            .filter_map(|rule| rule.regex.find(filename).map(|m| (rule, m)));

        let Some((rule, m)) = matches.next() else {
            return NO_MATCH.to_string();
        };

        let shadowed: Vec<&str> = matches.map(|(r, _)| r.pattern()).collect();
        if !shadowed.is_empty() {
            log::warn!(
                "level '{}': {} matches {:?}, ignoring later matches {:?}",
                self.name,
                filename,
                rule.pattern(),
                shadowed
            );
        }

        match rule.node_name() {
            Some(name) => name.to_string(),
            None if self.rules.len() == 1 => m.as_str().to_string(),
            None => rule.pattern().to_string(),
        }
    }

    /// Resolve `filename` and record the result in `into`.
    pub fn assign(&self, filename: &str, into: &mut LevelAssignment) {
        let node = self.resolve(filename);
        log::trace!("level '{}': {} -> {}", self.name, filename, node);
        into.record(filename, node);
    }

    /// Run [`assign`](Self::assign) over every filename.
    pub fn classify<'a, I>(&self, filenames: I) -> LevelAssignment
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = LevelAssignment::new(&self.name);
        for filename in filenames {
            self.assign(filename, &mut out);
        }
        out
    }
}

/// Result of classifying a filename list at one level, indexed both ways.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelAssignment {
    level: String,
    node_by_filename: HashMap<String, String>,
    filenames_by_node: BTreeMap<String, BTreeSet<String>>,
}

impl LevelAssignment {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Record `filename -> node`. A filename keeps the node it was first
    /// recorded under; resolution is pure, so a repeat carries the same node.
    fn record(&mut self, filename: &str, node: String) {
        if let Some(prev) = self.node_by_filename.get(filename) {
            debug_assert_eq!(prev, &node, "filename {} re-resolved differently", filename);
            return;
        }
        self.filenames_by_node
            .entry(node.clone())
            .or_default()
            .insert(filename.to_string());
        self.node_by_filename.insert(filename.to_string(), node);
    }

    pub fn node_for(&self, filename: &str) -> Option<&str> {
        self.node_by_filename.get(filename).map(String::as_str)
    }

    pub fn filenames_for(&self, node: &str) -> Option<&BTreeSet<String>> {
        self.filenames_by_node.get(node)
    }

    /// Node names in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.filenames_by_node.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.node_by_filename.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level(rules: &[(&str, Option<&str>)]) -> LevelClassifier {
        LevelClassifier::new(
            "Type",
            rules
                .iter()
                .map(|(p, n)| PatternRule::new(Regex::new(p).unwrap(), n.map(str::to_string)))
                .collect(),
        )
    }

    #[test]
    fn no_match_goes_to_reserved_bucket() {
        let l = level(&[("bam$", None)]);
        assert_eq!(l.resolve("/data/readme.txt"), NO_MATCH);
    }

    #[test]
    fn empty_rule_set_sends_everything_to_no_match() {
        let l = level(&[]);
        assert_eq!(l.resolve("/data/a.bam"), NO_MATCH);
        assert_eq!(l.resolve(""), NO_MATCH);
    }

    #[test]
    fn single_rule_uses_matched_text_not_whole_filename() {
        let l = level(&[("sample[0-9]+", None)]);
        assert_eq!(l.resolve("/data/sample12.bam"), "sample12");
        assert_eq!(l.resolve("/data/sample3.vcf"), "sample3");
    }

    #[test]
    fn several_rules_use_pattern_string() {
        let l = level(&[("bam$", None), ("v.f$", None)]);
        assert_eq!(l.resolve("/data/x.bam"), "bam$");
        assert_eq!(l.resolve("/data/x.vcf"), "v.f$");
    }

    #[test]
    fn override_wins_for_single_and_several_rules() {
        let single = level(&[("bam$", Some("Alignment"))]);
        assert_eq!(single.resolve("/data/x.bam"), "Alignment");

        let several = level(&[("bam$", Some("Alignment")), ("vcf$", None)]);
        assert_eq!(several.resolve("/data/x.bam"), "Alignment");
        assert_eq!(several.resolve("/data/x.vcf"), "vcf$");
    }

    #[test]
    fn matching_is_case_sensitive_and_unanchored() {
        let l = level(&[("tumor", None)]);
        assert_eq!(l.resolve("/runs/p1_tumor_rep2.bam"), "tumor");
        assert_eq!(l.resolve("/runs/p1_TUMOR_rep2.bam"), NO_MATCH);
    }

    #[test]
    fn first_declared_pattern_wins_on_multiple_matches() {
        let l = level(&[("sample", Some("Samples")), ("bam$", Some("Alignment"))]);
        assert_eq!(l.resolve("/data/sample1.bam"), "Samples");

        let reversed = level(&[("bam$", Some("Alignment")), ("sample", Some("Samples"))]);
        assert_eq!(reversed.resolve("/data/sample1.bam"), "Alignment");
    }

    #[test]
    fn assign_is_idempotent() {
        let l = level(&[("bam$", None)]);
        let mut a = LevelAssignment::new("Type");
        l.assign("/data/x.bam", &mut a);
        let once = a.clone();
        l.assign("/data/x.bam", &mut a);
        assert_eq!(a, once);
        assert_eq!(a.node_for("/data/x.bam"), Some("bam"));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn classify_indexes_both_directions() {
        let l = level(&[("bam$", None), ("vcf$", None)]);
        let a = l.classify(["/d/1.bam", "/d/2.bam", "/d/3.vcf", "/d/4.txt"]);

        assert_eq!(a.level(), "Type");
        assert_eq!(a.nodes().collect::<Vec<_>>(), vec!["NoMatch", "bam$", "vcf$"]);
        assert_eq!(
            a.filenames_for("bam$").unwrap().iter().collect::<Vec<_>>(),
            vec!["/d/1.bam", "/d/2.bam"]
        );
        assert_eq!(a.node_for("/d/4.txt"), Some(NO_MATCH));
        assert_eq!(a.node_for("/d/5.bam"), None);
    }
}
