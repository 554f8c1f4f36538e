use super::*;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn try_from_range_rejects_oversized_offsets() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
    assert_eq!(Span::try_from_range(3..7), Ok(Span::new(3, 7)));
}

#[test]
fn debug_and_display_match() {
    let span = Span::new(1, 4);
    assert_eq!(format!("{span:?}"), "1..4");
    assert_eq!(format!("{span}"), "1..4");
}
