use super::*;

#[test]
fn merge_covers_both() {
    let a = Span::new(4, 9);
    let b = Span::new(1, 6);
    assert_eq!(a.merge(b), Span::new(1, 9));
    assert_eq!(b.merge(a), Span::new(1, 9));
}

#[test]
fn len_and_empty() {
    assert_eq!(Span::new(3, 10).len(), 7);
    assert!(Span::DUMMY.is_empty());
    assert!(!Span::new(0, 1).is_empty());
}

#[test]
fn try_from_range_rejects_oversized() {
    assert_eq!(Span::try_from_range(2..5), Ok(Span::new(2, 5)));
    assert!(Span::try_from_range(usize::MAX..usize::MAX).is_err());
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError { offset: too_big })
    );
}

#[test]
fn debug_is_range() {
    assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
    assert_eq!(Span::new(1, 4).to_range(), 1..4);
}
