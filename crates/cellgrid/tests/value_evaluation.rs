//! Tests for derived values as read through the facade

use cellgrid::prelude::*;
use cellgrid::INVALID_MARKER;

fn addr(s: &str) -> Address {
    Address::parse(s).unwrap()
}

/// SUM over literal arguments
#[test]
fn test_sum_of_literals() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("A1"), "=SUM(1,2,3)").unwrap();
    assert_eq!(sheet.read_value(addr("A1")), CellValue::Number(6.0));
    assert_eq!(sheet.read_value(addr("A1")).to_string(), "6");
}

/// PRODUCT with an empty referenced cell: the reference contributes 1
#[test]
fn test_product_with_empty_reference() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("B1"), "=PRODUCT(A1,2)").unwrap();
    assert_eq!(sheet.read_value(addr("B1")), CellValue::Number(2.0));
}

/// A plain reference to an unset cell displays as empty text
#[test]
fn test_reference_to_unset_cell() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("B1"), "=A1").unwrap();
    assert_eq!(sheet.read_value(addr("B1")), CellValue::empty());
}

/// An unknown function name displays the sentinel
#[test]
fn test_invalid_function_name() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("A1"), "=AVG(1,2)").unwrap();
    assert_eq!(
        sheet.read_value(addr("A1")),
        CellValue::Text(INVALID_MARKER.into())
    );
}

/// Malformed argument syntax invalidates the call; a reference that merely
/// resolves to non-numeric text contributes the identity instead
#[test]
fn test_malformed_argument_vs_non_numeric_value() {
    let mut sheet = Sheet::new();

    sheet.propose_edit(addr("C1"), "=SUM(A1,xyz)").unwrap();
    assert_eq!(
        sheet.read_value(addr("C1")),
        CellValue::Text(INVALID_MARKER.into())
    );

    sheet.propose_edit(addr("A1"), "xyz").unwrap();
    sheet.propose_edit(addr("D1"), "=SUM(A1,5)").unwrap();
    assert_eq!(sheet.read_value(addr("D1")), CellValue::Number(5.0));
}

/// Zero flows through references as a computed value, never as blank
#[test]
fn test_zero_is_displayed_not_blanked() {
    let mut sheet = Sheet::new();

    sheet.propose_edit(addr("A1"), "0").unwrap();
    sheet.propose_edit(addr("B1"), "=A1").unwrap();
    assert_eq!(sheet.read_value(addr("B1")), CellValue::Text("0".into()));

    sheet.propose_edit(addr("A2"), "=SUM(0,0)").unwrap();
    sheet.propose_edit(addr("B2"), "=A2").unwrap();
    assert_eq!(sheet.read_value(addr("B2")), CellValue::Number(0.0));
    assert_eq!(sheet.read_value(addr("B2")).to_string(), "0");
}

/// Values are recomputed from raw text on every read
#[test]
fn test_values_recompute_on_every_read() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("A1"), "10").unwrap();
    sheet.propose_edit(addr("B1"), "=SUM(A1,A1)").unwrap();
    sheet.propose_edit(addr("C1"), "=PRODUCT(B1,2)").unwrap();

    assert_eq!(sheet.read_value(addr("C1")).to_string(), "40");

    sheet.propose_edit(addr("A1"), "7").unwrap();
    assert_eq!(sheet.read_value(addr("B1")).to_string(), "14");
    assert_eq!(sheet.read_value(addr("C1")).to_string(), "28");
}

/// Whole results display without a decimal point, fractional ones with it
#[test]
fn test_number_display_formatting() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("A1"), "=SUM(1.5,1.5)").unwrap();
    assert_eq!(sheet.read_value(addr("A1")).to_string(), "3");

    sheet.propose_edit(addr("A2"), "=SUM(1.25,1)").unwrap();
    assert_eq!(sheet.read_value(addr("A2")).to_string(), "2.25");
}

/// Evaluation follows reference chains of arbitrary depth
#[test]
fn test_deep_reference_chain() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("A0"), "5").unwrap();
    for row in 1..60 {
        let here = Address::new(row, 0);
        let above = Address::new(row - 1, 0);
        sheet
            .propose_edit(here, &format!("=SUM({},1)", above))
            .unwrap();
    }
    assert_eq!(sheet.read_value(Address::new(59, 0)).to_string(), "64");
}

/// Mixed text and numbers: text contributes the identity, numbers add up
#[test]
fn test_mixed_text_and_number_sum() {
    let mut sheet = Sheet::new();
    sheet.propose_edit(addr("A1"), "100").unwrap();
    sheet.propose_edit(addr("A2"), "notes").unwrap();
    sheet.propose_edit(addr("A3"), "2.5").unwrap();
    sheet
        .propose_edit(addr("B1"), "=SUM(A1,A2,A3,10)")
        .unwrap();
    assert_eq!(sheet.read_value(addr("B1")), CellValue::Number(112.5));
}
