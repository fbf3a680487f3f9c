use super::*;

#[test]
fn range_round_trips() {
    let span = Span::from_range(10..20);
    assert_eq!(span.start, 10);
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn from_range_saturates() {
    let large = u32::MAX as usize + 5;
    let span = Span::from_range(0..large);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn span_display() {
    assert_eq!(format!("{}", Span::from_range(3..9)), "3..9");
    assert_eq!(format!("{:?}", Span::DUMMY), "0..0");
}

#[test]
fn source_location_first_line() {
    let loc = SourceLocation::of("$a = 1", 5);
    assert_eq!(loc, SourceLocation { line: 1, column: 6 });
}

#[test]
fn source_location_after_newline() {
    let source = "$a = 1\n$b = 'x";
    let offset = u32::try_from(source.find('\'').unwrap_or(0)).unwrap_or(0);
    let loc = SourceLocation::of(source, offset);
    assert_eq!(loc, SourceLocation { line: 2, column: 6 });
    assert_eq!(loc.to_string(), "2:6");
}

#[test]
fn source_location_counts_every_line_break_style() {
    assert_eq!(
        SourceLocation::of("$a\r$b\n$c = 'x", 11),
        SourceLocation { line: 3, column: 6 }
    );
    assert_eq!(
        SourceLocation::of("$a\r\n$b\r\n$c = 'x", 13),
        SourceLocation { line: 3, column: 6 }
    );
}

#[test]
fn source_location_clamps_past_end() {
    let loc = SourceLocation::of("ab", 100);
    assert_eq!(loc, SourceLocation { line: 1, column: 3 });
}
