use nyt_core::Error;

/// Render a fetch failure as the string the UI shows. This is the only
/// place errors become user-facing text; nothing propagates past the feed
/// as a raw error.
pub fn user_message(error: &Error) -> String {
    match error {
        Error::InvalidUrl => "Invalid URL. Please try again later.".to_string(),
        Error::NoData => "No data available. Please try again later.".to_string(),
        Error::DecodingFailed => "Error processing the data. Please try again.".to_string(),
        Error::ServerError(code) => format!("Server error (Code: {}). Please try again.", code),
        other => format!("An unexpected error occurred: {}", other),
    }
}
