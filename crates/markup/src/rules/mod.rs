//! The ordered rule families of one normalization pass.
//!
//! Each family only removes or canonicalizes the patterns it targets, and no
//! family produces a pattern that an earlier family in the same pass removes.
//! That keeps the pipeline converging.

mod artifacts;
mod breaks;
mod layout;
mod legacy;
mod paragraphs;
mod prune;
mod self_closing;
mod structure;

use crate::config::CleanupConfig;
use crate::rewrite::replace_all;
use crate::tag::canonicalize_tag;
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub(crate) struct RuleSet {
    artifacts: artifacts::Artifacts,
    paragraphs: paragraphs::Paragraphs,
    self_closing: self_closing::SelfClosing,
    structure: structure::Structure,
    layout: layout::Layout,
    breaks: breaks::Breaks,
    legacy: legacy::Legacy,
    any_tag: Regex,
    prune: prune::Prune,
}

impl RuleSet {
    pub(crate) fn get() -> &'static RuleSet {
        static RULES: OnceLock<RuleSet> = OnceLock::new();
        RULES.get_or_init(RuleSet::new)
    }

    fn new() -> Self {
        Self {
            artifacts: artifacts::Artifacts::new(),
            paragraphs: paragraphs::Paragraphs::new(),
            self_closing: self_closing::SelfClosing::new(),
            structure: structure::Structure::new(),
            layout: layout::Layout::new(),
            breaks: breaks::Breaks::new(),
            legacy: legacy::Legacy::new(),
            any_tag: compile(r"<[^>]*>"),
            prune: prune::Prune::new(),
        }
    }

    /// One full pass over `source`.
    pub(crate) fn apply(&self, source: &str, config: &CleanupConfig) -> String {
        let mut s = source.to_string();
        s = self.artifacts.apply(s);
        s = self.paragraphs.apply(s, config.semantics);
        if config.xhtml {
            s = self.self_closing.apply(s);
        }
        if config.semantics {
            s = self.structure.apply(s);
            s = self.layout.apply(s);
        }
        s = self.breaks.apply(s);
        s = self.legacy.apply(s);
        s = replace_all(&self.any_tag, s, |caps: &Captures<'_>| {
            canonicalize_tag(&caps[0]).into_owned()
        });
        s = self.prune.apply(s);
        s.trim().to_string()
    }
}

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid cleanup pattern {pattern:?}: {err}"))
}
