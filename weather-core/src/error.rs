use thiserror::Error;

/// Errors produced while answering a weather request.
///
/// `Fetch` and `UpstreamDataShape` both mean the provider let us down and are
/// reported the same way to the user; `MissingParameter` is the caller's
/// fault and names the offending field.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A required query parameter was absent or empty.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// The provider call failed: network error, timeout, or a non-success
    /// status such as an unknown city.
    #[error("weather provider request failed: {0}")]
    Fetch(String),

    /// The provider answered successfully but the payload lacked fields the
    /// report needs.
    #[error("weather provider returned an incomplete payload: {0}")]
    UpstreamDataShape(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // Transport errors embed the full request URL, whose query string
        // carries the appid credential; this message reaches error pages.
        WeatherError::Fetch(err.without_url().to_string())
    }
}
