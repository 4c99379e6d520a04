//! Failure classification over the opaque upstream error surface.
//!
//! The service exposes no stable error schema, so classification is a
//! substring match over the failure text. The pattern table lives here and
//! nowhere else; swapping it for structured error codes would touch only
//! this module.

use crate::error::Error;

const QUOTA_SIGNALS: &[&str] = &["RESOURCE_EXHAUSTED", "429", "quota"];
const AUTH_SIGNALS: &[&str] = &["API_KEY_INVALID", "401", "403"];
const SAFETY_SIGNALS: &[&str] = &["SAFETY", "blocked"];
const NOT_FOUND_SIGNALS: &[&str] = &["Requested entity was not found", "404"];

/// 将最终失败折叠进错误分类。已分类的变体原样通过。
pub fn classify(error: Error) -> Error {
    match error {
        Error::ApiError { status, message } => classify_message(&format!("{status} {message}")),
        Error::HttpClient { source } => classify_message(&source.to_string()),
        Error::Serialization { source } => Error::Unknown {
            message: source.to_string(),
        },
        Error::Io { source } => Error::Unknown {
            message: source.to_string(),
        },
        other => other,
    }
}

fn classify_message(message: &str) -> Error {
    let rules: [(&[&str], fn(String) -> Error); 4] = [
        (QUOTA_SIGNALS, |message| Error::QuotaExceeded { message }),
        (AUTH_SIGNALS, |message| Error::AuthFailure { message }),
        (SAFETY_SIGNALS, |message| Error::SafetyBlock { message }),
        (NOT_FOUND_SIGNALS, |message| Error::EndpointNotFound {
            message,
        }),
    ];

    for (signals, build) in rules {
        if has_any(message, signals) {
            return build(message.to_string());
        }
    }
    Error::Unknown {
        message: message.to_string(),
    }
}

/// 仅限速与 5xx 信号视为瞬时失败；响应提取失败不重试。
pub fn is_transient(error: &Error) -> bool {
    match error {
        Error::ApiError { status, message } => {
            matches!(*status, 429 | 500..=599) || has_any(message, QUOTA_SIGNALS)
        }
        Error::HttpClient { source } => has_any(&source.to_string(), QUOTA_SIGNALS),
        _ => false,
    }
}

fn has_any(message: &str, signals: &[&str]) -> bool {
    signals.iter().any(|signal| message.contains(signal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn api_error(status: u16, message: &str) -> Error {
        Error::ApiError {
            status,
            message: message.into(),
        }
    }

    #[test]
    fn quota_signals_classify_as_quota_exceeded() {
        for message in ["RESOURCE_EXHAUSTED", "429 Too Many Requests", "quota hit"] {
            assert_eq!(
                classify_message(message).kind(),
                ErrorKind::QuotaExceeded,
                "{message}"
            );
        }
    }

    #[test]
    fn auth_signals_classify_as_auth_failure() {
        for message in ["API_KEY_INVALID", "401 Unauthorized", "403 Forbidden"] {
            assert_eq!(
                classify_message(message).kind(),
                ErrorKind::AuthFailure,
                "{message}"
            );
        }
    }

    #[test]
    fn safety_signals_classify_as_safety_block() {
        for message in ["SAFETY threshold exceeded", "request was blocked"] {
            assert_eq!(
                classify_message(message).kind(),
                ErrorKind::SafetyBlock,
                "{message}"
            );
        }
    }

    #[test]
    fn not_found_signals_classify_as_endpoint_not_found() {
        for message in ["Requested entity was not found", "404 no such model"] {
            assert_eq!(
                classify_message(message).kind(),
                ErrorKind::EndpointNotFound,
                "{message}"
            );
        }
    }

    #[test]
    fn unmatched_message_passes_through_as_unknown() {
        let classified = classify_message("something odd happened");
        assert_eq!(classified.kind(), ErrorKind::Unknown);
        assert!(classified.to_string().contains("something odd happened"));
    }

    #[test]
    fn classification_is_idempotent() {
        let message = "429 RESOURCE_EXHAUSTED";
        let first = classify_message(message).kind();
        let second = classify_message(message).kind();
        assert_eq!(first, second);

        let reclassified = classify(classify(api_error(429, "RESOURCE_EXHAUSTED")));
        assert_eq!(reclassified.kind(), ErrorKind::QuotaExceeded);
    }

    #[test]
    fn api_error_status_feeds_classification() {
        assert_eq!(classify(api_error(401, "nope")).kind(), ErrorKind::AuthFailure);
        assert_eq!(
            classify(api_error(404, "Requested entity was not found")).kind(),
            ErrorKind::EndpointNotFound
        );
        assert_eq!(
            classify(api_error(429, "slow down")).kind(),
            ErrorKind::QuotaExceeded
        );
        assert_eq!(classify(api_error(500, "oops")).kind(), ErrorKind::Unknown);
    }

    #[test]
    fn already_classified_errors_pass_through() {
        let err = Error::ConfigMissing {
            message: "SNAPBLEND_API_KEY is not set".into(),
        };
        assert_eq!(classify(err).kind(), ErrorKind::ConfigMissing);
    }

    #[test]
    fn transient_covers_rate_limits_and_server_faults() {
        assert!(is_transient(&api_error(429, "Too Many Requests")));
        assert!(is_transient(&api_error(500, "internal")));
        assert!(is_transient(&api_error(503, "unavailable")));
        assert!(is_transient(&api_error(400, "quota exhausted for project")));
        assert!(!is_transient(&api_error(400, "bad request")));
        assert!(!is_transient(&api_error(401, "unauthorized")));
    }

    #[test]
    fn extraction_failures_are_never_transient() {
        assert!(!is_transient(&Error::EmptyResponse));
        assert!(!is_transient(&Error::SafetyBlock {
            message: "your quota story".into(),
        }));
        assert!(!is_transient(&Error::NoImageReturned {
            message: "nothing usable".into(),
        }));
    }
}
