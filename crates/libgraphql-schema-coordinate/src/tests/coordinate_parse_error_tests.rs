use crate::CoordinateErrorNoteKind;
use crate::CoordinateParseErrorKind;
use crate::CoordinateSourceSpan;
use crate::SourcePosition;
use crate::tests::utils::parse_err;

#[test]
fn format_oneline() {
    let err = parse_err("Query.user.name");
    assert_eq!(err.format_oneline(), "<input>:1:11: error: Expected <EOF>, found `.`");
    assert_eq!(err.to_string(), err.format_oneline());
}

#[test]
fn format_detailed_with_source() {
    let source = "Query.user.name";
    let err = parse_err(source);
    let expected = concat!(
        "error: Expected <EOF>, found `.`\n",
        "  --> <input>:1:11\n",
        "   |\n",
        " 1 | Query.user.name\n",
        "   |           ^\n",
        "   = help: schema coordinates address at most one member of a type; ",
        "nested paths like `Type.field.subfield` are not supported\n",
    );
    assert_eq!(err.format_detailed(Some(source)), expected);
}

#[test]
fn format_detailed_without_source() {
    let err = parse_err("1Type");
    let expected = concat!(
        "error: Invalid character: \"1\".\n",
        "  --> <input>:1:1\n",
        "   = note: names must start with a letter or `_`\n",
    );
    assert_eq!(err.format_detailed(None), expected);
}

/// An error at end of input still gets a one-column marker.
#[test]
fn format_detailed_marks_eof() {
    let source = "Type.";
    let err = parse_err(source);
    let detailed = err.format_detailed(Some(source));
    assert!(detailed.contains(" 1 | Type.\n"), "{detailed}");
    assert!(detailed.contains("   |      ^\n"), "{detailed}");
}

#[test]
fn format_detailed_renders_note_spans() {
    let source = "Type.field(arg:value)";
    let mut err = parse_err(source);
    let note_span = CoordinateSourceSpan::new(
        SourcePosition::new(0, 10, 10),
        SourcePosition::new(0, 11, 11),
    );
    err.add_note_with_span("argument clause opened here", note_span);

    let detailed = err.format_detailed(Some(source));
    assert!(detailed.contains("   = note: argument clause opened here\n"), "{detailed}");
    assert!(detailed.contains("   |           -\n"), "{detailed}");
}

#[test]
fn add_note_and_help() {
    let mut err = parse_err("Type)");
    err.add_note("first");
    err.add_help("second");
    let kinds: Vec<_> = err.notes().iter().map(|note| note.kind).collect();
    assert_eq!(kinds, vec![CoordinateErrorNoteKind::General, CoordinateErrorNoteKind::Help]);
    assert!(err.format_oneline().ends_with("Expected <EOF>, found `)`"));
}

#[test]
fn kind_distinguishes_lexical_errors() {
    assert!(parse_err("Type field").kind().is_lexical());
    assert!(!parse_err("Type.").kind().is_lexical());
    assert!(!parse_err("Type.a.b").kind().is_lexical());
}

#[test]
fn kind_display() {
    let kind = CoordinateParseErrorKind::InvalidCharacter { character: ',' };
    assert_eq!(kind.to_string(), "invalid character: ','");
    assert_eq!(
        parse_err("").kind().to_string(),
        "unexpected end of input",
    );
}
