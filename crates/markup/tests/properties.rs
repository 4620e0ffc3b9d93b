use markup::{CleanupConfig, MAX_PASSES, normalize, normalize_with_report};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "<p>",
    "</p>",
    "<P>",
    "<br>",
    "<BR/>",
    "<b>",
    "</b>",
    "<i class=x>",
    "</i>",
    "<u>",
    "</u>",
    "<div>",
    "</div>",
    "<ul>",
    "</ul>",
    "<li>",
    "</li>",
    "<img src=a.png>",
    "<SPAN CLASS=a>",
    "</span>",
    "<span class=\"Apple-style-span\">",
    "<span style=\"font-weight: bold;\">",
    "text",
    "word ",
    " ",
    "\n",
    "&nbsp;",
    "!",
];

fn markup_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..10).prop_map(|parts| parts.concat())
}

fn any_config() -> impl Strategy<Value = CleanupConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(cleanup, xhtml, semantics)| {
        CleanupConfig {
            cleanup,
            xhtml,
            semantics,
        }
    })
}

proptest! {
    #[test]
    fn editor_markup_converges_and_is_idempotent(input in markup_soup(), config in any_config()) {
        let report = normalize_with_report(&input, &config);
        prop_assert!(report.converged, "no fixpoint for {:?}", input);
        prop_assert!(report.passes <= MAX_PASSES);
        prop_assert_eq!(normalize(&report.markup, &config), report.markup);
    }

    #[test]
    fn arbitrary_text_terminates(input in "\\PC{0,80}", config in any_config()) {
        let report = normalize_with_report(&input, &config);
        prop_assert!(report.passes <= MAX_PASSES);
        if report.converged {
            prop_assert_eq!(normalize(&report.markup, &config), report.markup);
        }
    }
}

#[test]
fn deep_nesting_still_terminates() {
    let input = format!("{}x{}", "<b>".repeat(200), "</b>".repeat(200));
    let report = normalize_with_report(&input, &CleanupConfig::default());
    assert!(report.passes <= MAX_PASSES);
    assert!(!report.markup.is_empty());
}
