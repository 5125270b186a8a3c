use birkenbihl::config;
use birkenbihl::language::{ColorMode, RuleTable};
use birkenbihl::parsing;
use birkenbihl::visibility::{apply_visibility, VisibilityOptions, VisibleBlock};

fn apply(source: &str, configuration: &str) -> Vec<VisibleBlock> {
    let document = parsing::parse(source);
    let rules = config::parse_rules(configuration).unwrap();
    apply_visibility(&document.blocks, &rules, &VisibilityOptions::default())
}

fn words(blocks: &[VisibleBlock]) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|block| block.tokens.iter())
        .map(|token| token.display())
        .collect()
}

#[test]
fn hiding_group_keeps_specific() {
    let blocks = apply("Sorōrem(Adj)(A)\ndie_Schwester", r#"{ "adj": { "hide": true } }"#);
    assert_eq!(words(&blocks), vec!["Sorōrem(A)"]);
}

#[test]
fn hiding_group_and_specific() {
    let blocks = apply(
        "Sorōrem(Adj)(A)\ndie_Schwester",
        r#"{ "adj": { "hide": true }, "adj_A": { "hide": true } }"#,
    );
    assert_eq!(words(&blocks), vec!["Sorōrem"]);
}

#[test]
fn hiding_specific_keeps_group() {
    let blocks = apply("falsō(Adj)(N)\nfälschlich", r#"{ "adj_N": { "hide": true } }"#);
    assert_eq!(words(&blocks), vec!["falsō(Adj)"]);
}

#[test]
fn one_tag_hiding_translation_is_not_enough() {
    let blocks = apply(
        "Sorōrem(Adj)(A)\ndie_Schwester",
        r#"{ "adj": { "hideTranslation": true } }"#,
    );
    assert_eq!(blocks[0].translations, vec![vec!["die_Schwester"]]);
}

#[test]
fn every_tag_hiding_translation_clears_it() {
    let blocks = apply(
        "Sorōrem(Adj)(A) falsō(Adj)(N)\ndie_Schwester fälschlich\nthe_sister falsely",
        r#"{ "adj": { "hideTranslation": true }, "adj_A": { "hideTranslation": true } }"#,
    );
    assert_eq!(
        blocks[0].translations,
        vec![vec!["", "fälschlich"], vec!["", "falsely"]]
    );
    // the tags themselves stay visible
    assert_eq!(words(&blocks), vec!["Sorōrem(Adj)(A)", "falsō(Adj)(N)"]);
}

#[test]
fn single_case_tag_clears_translation() {
    let blocks = apply(
        "Pamphilus(N) venit\nPamphilus kommt",
        r#"{ "nomen_N": { "hideTranslation": true } }"#,
    );
    assert_eq!(blocks[0].translations, vec![vec!["", "kommt"]]);
}

#[test]
fn untagged_token_keeps_translation() {
    let blocks = apply(
        "venit\nkommt",
        r#"{ "venit": { "hideTranslation": true }, "nomen": { "hideTranslation": true } }"#,
    );
    assert_eq!(blocks[0].translations, vec![vec!["kommt"]]);
}

#[test]
fn unknown_tags_are_visible() {
    let blocks = apply("amat(3.Sg)(Xyz)\nliebt", r#"{ "verb": { "hide": true, "hideTranslation": true } }"#);
    assert_eq!(words(&blocks), vec!["amat(3.Sg)(Xyz)"]);
    assert_eq!(blocks[0].translations, vec![vec!["liebt"]]);
}

#[test]
fn tag_order_is_preserved() {
    let blocks = apply("x(A)(Adj)(Xyz)(N)", r#"{ "adj_A": { "hide": true } }"#);
    assert_eq!(words(&blocks), vec!["x(Adj)(Xyz)(N)"]);
}

#[test]
fn rules_and_blocks_are_left_untouched() {
    let document = parsing::parse("#Pamphilus(N)\nPamphilus");
    let rules = config::parse_rules(r#"{ "nomen_N": { "hideTranslation": true } }"#).unwrap();
    let before = (document.clone(), rules.clone());

    let options = VisibilityOptions {
        color_mode: ColorMode::BlackWhite,
        permitted_groups: None,
    };
    let blocks = apply_visibility(&document.blocks, &rules, &options);

    assert_eq!(blocks[0].tokens[0].display(), "Pamphilus(N)");
    assert_eq!((document, rules), before);
}

#[test]
fn no_configuration_shows_everything() {
    let document = parsing::parse("#Sorōrem(Adj)(A)\ndie_Schwester");
    let rules: RuleTable = config::load_rules(None).unwrap();
    let blocks = apply_visibility(&document.blocks, &rules, &VisibilityOptions::default());

    assert_eq!(blocks[0].tokens[0].display(), "#Sorōrem(Adj)(A)");
    assert_eq!(blocks[0].translations, vec![vec!["die_Schwester"]]);
}
