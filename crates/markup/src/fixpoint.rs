//! Iterate-to-fixpoint driver.

/// Hard ceiling on full pipeline passes.
///
/// Realistic editor output settles in two or three passes; the ceiling only
/// exists so that a rule interaction that oscillates cannot hang the editor.
pub const MAX_PASSES: usize = 50;

/// Result of a normalization run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub markup: String,
    /// Number of passes executed, including the final unchanged one.
    pub passes: usize,
    /// False when the ceiling was hit before a pass produced no change.
    pub converged: bool,
}

pub(crate) fn run<F>(input: &str, max_passes: usize, mut pass: F) -> Normalized
where
    F: FnMut(&str) -> String,
{
    let mut current = input.to_string();
    for n in 1..=max_passes {
        let next = pass(&current);
        log::trace!(
            target: "markup.cleanup",
            "pass {n}: {} -> {} bytes",
            current.len(),
            next.len()
        );
        if next == current {
            return Normalized {
                markup: next,
                passes: n,
                converged: true,
            };
        }
        current = next;
    }
    log::warn!(
        target: "markup.cleanup",
        "markup did not settle after {max_passes} passes, keeping last result"
    );
    Normalized {
        markup: current,
        passes: max_passes,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_on_first_unchanged_pass() {
        let out = run("aaaa", MAX_PASSES, |s| s.replacen("aa", "a", 1));
        assert_eq!(out.markup, "a");
        assert!(out.converged);
        // aaaa -> aaa -> aa -> a -> a
        assert_eq!(out.passes, 4);
    }

    #[test]
    fn oscillating_pass_hits_ceiling() {
        let out = run("ping", MAX_PASSES, |s| {
            if s == "ping" { "pong".into() } else { "ping".into() }
        });
        assert!(!out.converged);
        assert_eq!(out.passes, MAX_PASSES);
        // 50 flips starting from "ping" end on "ping".
        assert_eq!(out.markup, "ping");
    }

    #[test]
    fn growing_pass_is_cut_off() {
        let out = run("", 5, |s| format!("{s}x"));
        assert!(!out.converged);
        assert_eq!(out.markup, "xxxxx");
    }
}
