//! Maps AWS SDK failures onto the unified error type.

use aws_sdk_route53::error::{ProvideErrorMetadata, SdkError};

use crate::error::ProviderError;

use super::PROVIDER;

/// Converts any Route 53 SDK error into a [`ProviderError`].
///
/// Dispatch-level failures become `NetworkError`/`Timeout`; service errors
/// are classified by their API error code.
pub(crate) fn map_sdk_error<E, R>(err: &SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + std::fmt::Debug,
    R: std::fmt::Debug,
{
    match err {
        SdkError::TimeoutError(_) => ProviderError::Timeout {
            provider: PROVIDER.to_string(),
            detail: "request timed out".to_string(),
        },
        SdkError::DispatchFailure(failure) => {
            if failure.is_timeout() {
                ProviderError::Timeout {
                    provider: PROVIDER.to_string(),
                    detail: "connection timed out".to_string(),
                }
            } else {
                let detail = failure
                    .as_connector_error()
                    .map_or_else(|| "request dispatch failed".to_string(), ToString::to_string);
                ProviderError::NetworkError {
                    provider: PROVIDER.to_string(),
                    detail,
                }
            }
        }
        SdkError::ServiceError(ctx) => {
            classify_service_error(ctx.err().code(), ctx.err().message())
        }
        // SdkError is non_exhaustive; response/construction failures land here.
        other => ProviderError::Unknown {
            provider: PROVIDER.to_string(),
            raw_code: None,
            raw_message: format!("{other:?}"),
        },
    }
}

/// Classifies a service error by its API error code.
pub(crate) fn classify_service_error(
    code: Option<&str>,
    message: Option<&str>,
) -> ProviderError {
    let raw_message = message.map(String::from);
    match code {
        Some(
            "InvalidClientTokenId" | "SignatureDoesNotMatch" | "UnrecognizedClientException"
            | "InvalidAccessKeyId" | "AuthFailure" | "ExpiredToken",
        ) => ProviderError::InvalidCredentials {
            provider: PROVIDER.to_string(),
            raw_message,
        },
        Some("AccessDenied" | "AccessDeniedException" | "UnauthorizedOperation") => {
            ProviderError::PermissionDenied {
                provider: PROVIDER.to_string(),
                raw_message,
            }
        }
        Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
            ProviderError::RateLimited {
                provider: PROVIDER.to_string(),
                raw_message,
            }
        }
        _ => ProviderError::Unknown {
            provider: PROVIDER.to_string(),
            raw_code: code.map(String::from),
            raw_message: message.unwrap_or("request failed").to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_invalid_credentials_codes() {
        for code in [
            "InvalidClientTokenId",
            "SignatureDoesNotMatch",
            "UnrecognizedClientException",
            "InvalidAccessKeyId",
            "AuthFailure",
            "ExpiredToken",
        ] {
            let e = classify_service_error(Some(code), Some("denied"));
            assert!(
                matches!(e, ProviderError::InvalidCredentials { .. }),
                "code {code} should map to InvalidCredentials, got {e:?}"
            );
        }
    }

    #[test]
    fn classify_permission_codes() {
        for code in ["AccessDenied", "AccessDeniedException", "UnauthorizedOperation"] {
            let e = classify_service_error(Some(code), None);
            assert!(
                matches!(e, ProviderError::PermissionDenied { .. }),
                "code {code} should map to PermissionDenied, got {e:?}"
            );
        }
    }

    #[test]
    fn classify_throttling_codes() {
        for code in ["Throttling", "ThrottlingException", "PriorRequestNotComplete"] {
            let e = classify_service_error(Some(code), None);
            assert!(
                matches!(e, ProviderError::RateLimited { .. }),
                "code {code} should map to RateLimited, got {e:?}"
            );
        }
    }

    #[test]
    fn classify_unknown_code_keeps_raw_fields() {
        let e = classify_service_error(Some("NoSuchHostedZone"), Some("zone gone"));
        match e {
            ProviderError::Unknown {
                raw_code,
                raw_message,
                ..
            } => {
                assert_eq!(raw_code.as_deref(), Some("NoSuchHostedZone"));
                assert_eq!(raw_message, "zone gone");
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn classify_missing_code_and_message() {
        let e = classify_service_error(None, None);
        match e {
            ProviderError::Unknown {
                raw_code,
                raw_message,
                ..
            } => {
                assert_eq!(raw_code, None);
                assert_eq!(raw_message, "request failed");
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn classified_message_flows_into_display() {
        let e = classify_service_error(Some("AccessDenied"), Some("User is not authorized"));
        assert_eq!(
            e.to_string(),
            "[route53] Permission denied: User is not authorized"
        );
    }
}
