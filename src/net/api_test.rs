use super::*;

#[test]
fn render_url_carries_row_range() {
    assert_eq!(render_url(7, 120, 220), "/api/wfmodules/7/render?startrow=120&endrow=220");
}

#[test]
fn resource_urls_are_under_api_base() {
    assert_eq!(input_columns_url(3), "/api/wfmodules/3/input/columns");
    assert_eq!(param_url(42), "/api/parameters/42");
    assert_eq!(module_url(3), "/api/wfmodules/3");
    assert_eq!(workflow_url(12), "/api/workflows/12");
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status 404");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(
        ApiError::Decode("missing field `total_rows`".to_owned()).to_string(),
        "malformed response: missing field `total_rows`"
    );
}
