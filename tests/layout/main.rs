use birkenbihl::language::ColorMarker;
use birkenbihl::layout::{lay_out, line_records, CumulativeWidths, LineRecord, Monospace};
use birkenbihl::parsing;
use birkenbihl::visibility::{apply_visibility, VisibilityOptions};

fn records(lines: &[(&str, f64)]) -> Vec<LineRecord> {
    lines
        .iter()
        .map(|(label, width)| LineRecord {
            label: label.to_string(),
            speaker: None,
            token_width: *width,
            speaker_width: 0.0,
        })
        .collect()
}

#[test]
fn staggered_lines_indent_past_siblings() {
    let placements = lay_out(&records(&[
        ("(17)", 120.0),
        ("(18)", 145.0),
        ("(18a)", 80.0),
        ("(18b)", 90.0),
        ("(19)", 130.0),
    ]));

    let indents: Vec<f64> = placements
        .iter()
        .map(|placement| placement.indent)
        .collect();
    assert_eq!(indents, vec![0.0, 0.0, 145.0, 225.0, 0.0]);

    let staggered: Vec<bool> = placements
        .iter()
        .map(|placement| placement.is_staggered)
        .collect();
    assert_eq!(staggered, vec![false, false, true, true, false]);

    let bases: Vec<&str> = placements
        .iter()
        .map(|placement| placement.base.as_str())
        .collect();
    assert_eq!(bases, vec!["17", "18", "18", "18", "19"]);
}

#[test]
fn speaker_and_token_widths_are_summed() {
    let placements = lay_out(&[
        LineRecord {
            label: "18".to_string(),
            speaker: Some("Sosia".to_string()),
            token_width: 100.0,
            speaker_width: 45.0,
        },
        LineRecord {
            label: "18a".to_string(),
            speaker: None,
            token_width: 80.0,
            speaker_width: 0.0,
        },
    ]);
    assert_eq!(placements[1].indent, 145.0);
}

#[test]
fn letter_i_is_not_staggered() {
    let placements = lay_out(&records(&[("(9)", 50.0), ("(9i)", 40.0)]));
    assert!(!placements[1].is_staggered);
    assert_eq!(placements[1].indent, 0.0);
}

#[test]
fn one_output_per_input() {
    assert!(lay_out(&[]).is_empty());

    let placements = lay_out(&records(&[("", 1.0), ("x", 2.0), ("(3b)", 3.0)]));
    assert_eq!(placements.len(), 3);
    // nothing was laid out under 3 yet
    assert!(placements[2].is_staggered);
    assert_eq!(placements[2].indent, 0.0);
}

#[test]
fn separate_passes_do_not_interfere() {
    let lines = records(&[("(18)", 145.0), ("(18a)", 80.0)]);

    let mut one = CumulativeWidths::new();
    let mut two = CumulativeWidths::new();

    let first = one.place(&lines[0]);
    let other = two.place(&lines[1]);
    let second = one.place(&lines[1]);

    assert_eq!(first.indent, 0.0);
    assert_eq!(other.indent, 0.0);
    assert_eq!(second.indent, 145.0);
}

#[test]
fn document_measured_and_laid_out() {
    let document = parsing::parse(
        r#"
(18) [Sosia] quid(Pr) ais
was sagst_du

(18a) #nōn(Pt) sic
nicht so
        "#,
    );
    let blocks = apply_visibility(&document.blocks, &Default::default(), &VisibilityOptions::default());
    assert_eq!(blocks[1].tokens[0].color, Some(ColorMarker::Hash));

    let measure = Monospace { advance: 2.0 };
    let records = line_records(&blocks, &measure);

    // "quid(Pr)" 8 and "sagst_du" 8 columns, each with a gap: (9 + 9) * 2
    assert_eq!(records[0].token_width, 36.0);
    // "Sosia" plus a gap
    assert_eq!(records[0].speaker_width, 12.0);

    let placements = lay_out(&records);
    assert_eq!(placements[1].indent, 48.0);
}
