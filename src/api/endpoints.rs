//! URLs for the two upstream endpoints.

/// Fields requested by the list view; `/all` rejects requests without a field filter.
const LIST_FIELDS: &str = "cca3,name,flags,flag";

/// `{base}/all?fields=...`: every country, reduced to what the list shows.
pub fn all_countries(base_url: &str) -> String {
    format!("{}/all?fields={}", base_url.trim_end_matches('/'), LIST_FIELDS)
}

/// `{base}/alpha/{code}`: a single country looked up by code.
pub fn country_by_code(base_url: &str, code: &str) -> String {
    format!("{}/alpha/{}", base_url.trim_end_matches('/'), code)
}
