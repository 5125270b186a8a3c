use std::path::Path;

use birkenbihl::meter::{self, MeterThresholds};
use birkenbihl::parsing;

fn sample(name: &str) -> birkenbihl::language::Document {
    let path = Path::new("tests/samples/").join(name);
    let content = parsing::load(&path).expect("Failed to load sample");
    parsing::parse(&content)
}

#[test]
fn marked_verse_is_metered() {
    let document = sample("aeneis.txt");
    let thresholds = MeterThresholds::default();

    assert!(meter::is_metered(&document.blocks, &thresholds));

    let report = meter::detect_meter(&document, &thresholds).expect("meter expected");
    let tokens: usize = document
        .blocks
        .iter()
        .map(|block| block.tokens.len())
        .sum();
    assert_eq!(report.tokens.len(), tokens);

    let total = report.counts.short + report.counts.long + report.counts.foot;
    let expected: usize = document
        .blocks
        .iter()
        .map(|block| meter::count_markers(&block.tokens))
        .sum();
    assert_eq!(total, expected);
}

#[test]
fn prose_is_not_metered() {
    let document = sample("andria.txt");
    assert!(meter::detect_meter(&document, &MeterThresholds::default()).is_none());
}

#[test]
fn two_lines_are_not_enough() {
    let document = sample("aeneis.txt");
    assert!(!meter::document_has_meter(&document.blocks[..2], 3, 3));
    assert!(meter::document_has_meter(&document.blocks, 3, 3));
}

#[test]
fn single_dense_line_settles_it() {
    let document = parsing::parse("Ar|ma|vi|rum|que|ca|nō|Troi|ae|qui|prī|mus");
    assert!(meter::line_has_meter(&document.blocks[0].tokens, 3, 10));
    assert!(meter::is_metered(&document.blocks, &MeterThresholds::default()));
}
