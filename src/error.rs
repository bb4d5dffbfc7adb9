use thiserror::Error;

/// Typed failures surfaced by the collaborator clients and configuration.
/// Most call sites wrap these in `anyhow::Error`; the variants exist so
/// callers can downcast and tell a missing credential apart from a broken
/// upstream API.
#[derive(Debug, Error)]
pub enum GleanError {
    /// A credential was neither passed explicitly nor present in the
    /// environment. Raised at construction, before any network call.
    #[error("missing credential: set {0} or pass the key explicitly")]
    MissingCredential(&'static str),

    #[error("search API error ({status}): {body}")]
    SearchApi {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion API error ({status}): {body}")]
    CompletionApi {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion response has no choices")]
    EmptyCompletion,
}
