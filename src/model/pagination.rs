use crate::constants::{PAGE_NUMBER_LABEL, PAGE_SIZE_LABEL};

/// Builds the pagination query fragment for list endpoints
///
/// # Arguments
/// * `page_number` - Requested page; empty means "all records"
/// * `page_size` - Requested page size; empty means `default_page_size`
/// * `default_page_size` - Size applied when only a page number is given
///
/// # Returns
/// The fragment without leading `?`, or an empty string when no pagination applies
///
/// # Examples
/// ```
/// use fake_api_client::model::pagination::build_pagination;
///
/// assert_eq!(build_pagination("", "5", "2"), "");
/// assert_eq!(build_pagination("1", "", "2"), "page[number]=1&page[size]=2");
/// assert_eq!(build_pagination("1", "5", "2"), "page[number]=1&page[size]=5");
/// ```
pub fn build_pagination(page_number: &str, page_size: &str, default_page_size: &str) -> String {
    if page_number.is_empty() {
        return String::new();
    }
    let size = if page_size.is_empty() {
        default_page_size
    } else {
        page_size
    };
    format!("{PAGE_NUMBER_LABEL}{page_number}&{PAGE_SIZE_LABEL}{size}")
}
