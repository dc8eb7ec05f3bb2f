use super::*;
use crate::test_helpers::Fixture;
use pretty_assertions::assert_eq;

#[test]
fn valid_suffixes_enter_the_table() {
    let fixture = Fixture::new(
        "function km(uint x) pure suffix returns (uint);
         function km(uint m, uint8 e) internal pure suffix returns (uint);
         function km(string memory s) pure returns (uint);",
    );
    assert!(fixture.table_diagnostics.is_empty());

    let km = fixture.name("km");
    let suffixes = fixture.table.suffix_candidates(km);
    assert_eq!(suffixes.len(), 2);
    assert!(!suffixes[0].is_decomposing());
    assert!(suffixes[1].is_decomposing());
    assert!(suffixes.iter().all(|s| s.is_pure && s.is_suffix));

    assert_eq!(fixture.table.overloads(km).len(), 3);
    assert!(fixture.table.has_non_suffix(km));
}

#[test]
fn signature_display() {
    let fixture =
        Fixture::new("function gwei(int128 m, uint8 e) pure suffix returns (uint256);");
    let sig = &fixture.table.suffix_candidates(fixture.name("gwei"))[0];
    assert_eq!(
        sig.display(&fixture.interner).to_string(),
        "gwei(int128, uint8) returns (uint256)"
    );
}

fn rejection(source: &str) -> Restriction {
    let fixture = Fixture::new(source);
    assert_eq!(fixture.table_codes(), [ErrorCode::E2005]);
    validate(&fixture.parsed.module.functions[0]).unwrap_err()
}

#[test]
fn impure_suffix_is_rejected() {
    assert_eq!(
        rejection("function s(uint x) view suffix returns (uint);"),
        Restriction::NotPure(StateMutability::View)
    );
    assert_eq!(
        rejection("function s(uint x) suffix returns (uint);"),
        Restriction::NotPure(StateMutability::NonPayable)
    );
}

#[test]
fn member_function_is_rejected() {
    assert_eq!(
        rejection("function s(uint x) public pure suffix returns (uint);"),
        Restriction::NotFree
    );
}

#[test]
fn parameter_count() {
    assert_eq!(
        rejection("function s() pure suffix returns (uint);"),
        Restriction::ParamCount(0)
    );
    assert_eq!(
        rejection("function s(uint a, uint b, uint c) pure suffix returns (uint);"),
        Restriction::ParamCount(3)
    );
}

#[test]
fn two_parameter_typing() {
    assert_eq!(
        rejection("function s(bool m, uint e) pure suffix returns (uint);"),
        Restriction::MantissaNotInteger(Type::Bool)
    );
    assert_eq!(
        rejection("function s(uint m, int8 e) pure suffix returns (uint);"),
        Restriction::ExponentNotUnsigned(Type::Int(8))
    );
}

#[test]
fn signed_mantissa_is_allowed() {
    let fixture = Fixture::new("function s(int m, uint e) pure suffix returns (int);");
    assert!(fixture.table_diagnostics.is_empty());
}

#[test]
fn return_count() {
    assert_eq!(
        rejection("function s(uint x) pure suffix;"),
        Restriction::ReturnCount(0)
    );
    assert_eq!(
        rejection("function s(uint x) pure suffix returns (uint, uint);"),
        Restriction::ReturnCount(2)
    );
}

#[test]
fn locations_and_payable() {
    assert_eq!(
        rejection("function s(string storage x) pure suffix returns (uint);"),
        Restriction::Location(Type::String(quill_ir::DataLocation::Storage))
    );
    assert_eq!(
        rejection("function s(string memory x) pure suffix returns (bytes calldata);"),
        Restriction::Location(Type::Bytes(quill_ir::DataLocation::Calldata))
    );
    assert_eq!(
        rejection("function s(address payable a) pure suffix returns (uint);"),
        Restriction::PayableAddressParam
    );
}

#[test]
fn rejected_suffix_stays_an_ordinary_function() {
    let fixture = Fixture::new("function s(uint x) view suffix returns (uint);");
    let s = fixture.name("s");
    assert!(fixture.table.suffix_candidates(s).is_empty());
    assert_eq!(fixture.table.overloads(s).len(), 1);
}

#[test]
fn diagnostic_points_at_the_name() {
    let fixture = Fixture::new("function s(uint x) view suffix returns (uint);");
    let diag = &fixture.table_diagnostics[0];
    assert_eq!(diag.primary_span(), Some(Span::new(9, 10)));
    assert!(diag.labels[0].message.contains("must be `pure`"));
}

#[test]
fn table_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SuffixTable>();
}
