use super::*;

#[test]
fn visible_rows_at_top_include_overscan_below() {
    assert_eq!(visible_rows(0.0, 280.0, 1000), 0..20);
}

#[test]
fn visible_rows_follow_scroll_position() {
    let range = visible_rows(ROW_HEIGHT_PX * 100.0, 280.0, 1000);
    assert_eq!(range, 90..120);
}

#[test]
fn visible_rows_are_capped_at_total() {
    assert_eq!(visible_rows(ROW_HEIGHT_PX * 995.0, 280.0, 1000), 985..1000);
    assert_eq!(visible_rows(0.0, 280.0, 5), 0..5);
    assert_eq!(visible_rows(500.0, 280.0, 0), 0..0);
}

#[test]
fn visible_rows_ignore_negative_scroll() {
    assert_eq!(visible_rows(-50.0, 280.0, 1000), 0..20);
}

#[test]
fn format_cell_renders_nulls_empty() {
    assert_eq!(format_cell(None), "");
    assert_eq!(format_cell(Some(&Value::Null)), "");
}

#[test]
fn format_cell_renders_strings_without_quotes() {
    assert_eq!(format_cell(Some(&Value::from("abc"))), "abc");
    assert_eq!(format_cell(Some(&Value::from(4.5))), "4.5");
    assert_eq!(format_cell(Some(&Value::Bool(true))), "true");
}
