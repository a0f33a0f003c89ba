use thiserror::Error;

/// Advisory conditions surfaced to the user through the host's
/// notification surface. Neither is fatal and neither changes state.
///
/// Transport-level failures (spawn errors, server crashes) are not part
/// of this taxonomy; they belong to the connection layer and propagate
/// untranslated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShimError {
    #[error("No tontuna language server configured")]
    NoServerConfigured,

    #[error("Tontuna language server is not running")]
    NoActiveConnection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_relevant_condition() {
        assert_eq!(
            ShimError::NoServerConfigured.to_string(),
            "No tontuna language server configured"
        );
        assert_eq!(
            ShimError::NoActiveConnection.to_string(),
            "Tontuna language server is not running"
        );
    }
}
