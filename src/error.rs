use reqwest::StatusCode;
use thiserror::Error;

/// Failures from the geocoding and forecast clients.
///
/// The `Display` text is what callers of the tools see, so it is written for
/// the end user (in Spanish, like the rest of the reports).
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Upstream answered with a non-success HTTP status
    #[error("{context}: {status}")]
    UpstreamUnavailable {
        context: &'static str,
        status: StatusCode,
    },

    #[error("No se encontró la ciudad: \"{0}\". Intenta con un nombre más específico.")]
    CityNotFound(String),

    #[error("Respuesta inválida del servicio meteorológico: {0}")]
    MalformedUpstreamResponse(String),

    /// Connection or timeout failure
    #[error("No se pudo contactar el servicio meteorológico: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Parámetro inválido: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for WeatherError {
    /// Undecodable bodies become `MalformedUpstreamResponse`, everything else
    /// is `Request`. The request URL is stripped from both.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            let detail = match std::error::Error::source(&err) {
                Some(source) => source.to_string(),
                None => err.to_string(),
            };
            return Self::MalformedUpstreamResponse(detail);
        }
        Self::Request(err)
    }
}

impl WeatherError {
    /// Stable code for logs and programmatic handling (e.g., "CITY_NOT_FOUND")
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            Self::CityNotFound(_) => "CITY_NOT_FOUND",
            Self::MalformedUpstreamResponse(_) => "MALFORMED_UPSTREAM_RESPONSE",
            Self::Request(_) => "REQUEST_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}
