use anyhow::Result;
use pretty_assertions::assert_eq;
use restyle::rules::RuleSet;
use restyle::{engine, Restyle};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_pages_dir_is_a_clean_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::create_dir_all(temp_dir.path().join("src/pages"))?;

    let report = Restyle::new(temp_dir.path())?.run(false, false)?;

    assert_eq!(report.summary.files_discovered, 0);
    assert_eq!(report.summary.files_changed, 0);
    assert_eq!(report.summary.errors, 0);

    Ok(())
}

#[test]
fn test_earlier_catalogue_rule_shadows_later_one() {
    // The heading rule precedes the modal-title rule and matches a strict
    // prefix of the same attribute, so it wins and the modal-title rule
    // never sees its target. Documented ordering behavior.
    let input = r#"<h3 className="text-xl font-bold text-gray-900 mb-4">Confirm</h3>"#;

    let out = engine::apply(input, RuleSet::builtin());

    assert!(out.text.contains("heading-3-responsive text-gray-900 mb-4"));
    assert!(!out.text.contains("modal-title-responsive"));
}

#[test]
fn test_modal_title_rule_fires_without_color_suffix() {
    let input = r#"<h3 className="text-xl font-bold mb-4">Confirm</h3>"#;

    let out = engine::apply(input, RuleSet::builtin());

    // `text-xl font-bold` (heading) precedes the `mb-4` variant, so the
    // heading rewrite wins here too and mb-4 survives as a plain class.
    assert!(out.text.contains("heading-3-responsive mb-4"));
    assert_eq!(out.rules_fired, 1);
}

#[test]
fn test_custom_ruleset_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pages = temp_dir.path().join("src/pages");
    fs::create_dir_all(&pages)?;
    fs::write(pages.join("Legacy.tsx"), "<div className=\"old-card\"/>\n")?;

    let rules = RuleSet::from_pairs(vec![(r#"className="old-card""#, r#"className="card""#)])?;
    let report = Restyle::new(temp_dir.path())?.with_rules(rules).run(false, false)?;

    assert_eq!(report.summary.files_changed, 1);
    assert_eq!(report.summary.total_rules_fired, 1);

    let content = fs::read_to_string(pages.join("Legacy.tsx"))?;
    assert_eq!(content, "<div className=\"card\"/>\n");

    Ok(())
}

#[test]
fn test_trailing_newline_and_unmatched_text_preserved() {
    let input = "prefix\n<div className=\"mb-6\">x</div>\nsuffix\n";
    let out = engine::apply(input, RuleSet::builtin());

    assert_eq!(out.text, "prefix\n<div className=\"mb-responsive\">x</div>\nsuffix\n");
    assert_eq!(out.rules_fired, 1);
}

#[test]
fn test_back_reference_replacement() -> Result<()> {
    // Replacements may carry capture back-references.
    let rules = RuleSet::from_pairs(vec![(
        r#"className="legacy-(\w+)""#,
        r#"className="modern-$1""#,
    )])?;

    let out = engine::apply(
        r#"<a className="legacy-link"/><b className="legacy-badge"/>"#,
        &rules,
    );

    assert_eq!(
        out.text,
        r#"<a className="modern-link"/><b className="modern-badge"/>"#
    );
    assert_eq!(out.rules_fired, 1);

    Ok(())
}
