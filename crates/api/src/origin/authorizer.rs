//! Origin authorization for upgrade connections
//!
//! Every connection attempt is evaluated on its own. There is no decision
//! cache, so a policy change applies to the very next attempt.

use tenantgate_shared::{CorsPolicy, OriginError, RequestContext};

use super::inference::infer_origin;

/// What the request layer knows about a connection attempt
#[derive(Debug, Clone, Copy)]
pub struct ConnectionAttempt<'a> {
    /// Value of the `Origin` header, if sent
    pub origin: Option<&'a str>,
    /// The request's own URL (scheme, host and path)
    pub request_url: &'a str,
}

/// Evaluate a connection attempt and return the origin that was authorized
///
/// With no `Origin` header the origin is inferred from the request URL and
/// checked against the same policy. Inference failure and policy rejection
/// are reported as distinct errors.
pub fn evaluate(
    attempt: ConnectionAttempt<'_>,
    policy: &CorsPolicy,
    ctx: &RequestContext,
) -> Result<String, OriginError> {
    let origin = match attempt.origin {
        Some(origin) => origin.to_string(),
        None => infer_origin(attempt.request_url)?,
    };

    if policy.allows(&origin, ctx) {
        Ok(origin)
    } else {
        Err(OriginError::PolicyRejected(origin))
    }
}

/// Decide whether a connection attempt may proceed
///
/// Denials are logged as warnings with the attempted origin.
pub fn authorize(attempt: ConnectionAttempt<'_>, policy: &CorsPolicy, ctx: &RequestContext) -> bool {
    match evaluate(attempt, policy, ctx) {
        Ok(origin) => {
            tracing::debug!(
                origin = %origin,
                inferred = attempt.origin.is_none(),
                policy = policy.kind(),
                "Upgrade origin authorized"
            );
            true
        }
        Err(OriginError::MalformedRequestUrl(reason)) => {
            tracing::warn!(
                origin = "none",
                reason = %reason,
                "WebSocket connection attempt without Origin header"
            );
            false
        }
        Err(OriginError::PolicyRejected(origin)) => {
            tracing::warn!(
                origin = %origin,
                inferred = attempt.origin.is_none(),
                policy = policy.kind(),
                "WebSocket connection rejected from unauthorized origin"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Log sink shared between the subscriber and the assertions
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` under a plain-text subscriber and return what it logged
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn ctx() -> RequestContext {
        RequestContext {
            host: Some("app.example.com".to_string()),
            path: "/ws/dep-123".to_string(),
        }
    }

    fn explicit(origin: &str) -> ConnectionAttempt<'_> {
        ConnectionAttempt {
            origin: Some(origin),
            request_url: "https://app.example.com/ws/dep-123",
        }
    }

    fn headerless(request_url: &str) -> ConnectionAttempt<'_> {
        ConnectionAttempt {
            origin: None,
            request_url,
        }
    }

    #[test]
    fn test_exact_policy() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        assert!(authorize(explicit("https://app.example.com"), &policy, &ctx()));
        assert!(!authorize(explicit("https://evil.example.com"), &policy, &ctx()));
        assert!(!authorize(explicit("https://app.example.com/"), &policy, &ctx()));
    }

    #[test]
    fn test_allow_list_policy() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "https://app.example.com".to_string(),
        ];
        let mut reversed = origins.clone();
        reversed.reverse();

        for list in [origins, reversed] {
            let policy = CorsPolicy::AllowList(list);
            assert!(authorize(explicit("http://localhost:5173"), &policy, &ctx()));
            assert!(authorize(explicit("https://app.example.com"), &policy, &ctx()));
            assert!(!authorize(explicit("https://other.example.com"), &policy, &ctx()));
        }
    }

    #[test]
    fn test_predicate_cannot_authorize_different_origin() {
        let policy = CorsPolicy::predicate(|_, _| Some("https://app.example.com".to_string()));
        assert!(!authorize(explicit("https://evil.example.com"), &policy, &ctx()));
        assert_eq!(
            evaluate(explicit("https://evil.example.com"), &policy, &ctx()),
            Err(OriginError::PolicyRejected("https://evil.example.com".to_string()))
        );
        assert!(authorize(explicit("https://app.example.com"), &policy, &ctx()));
    }

    #[test]
    fn test_inferred_origin_for_local_websocket() {
        let policy = CorsPolicy::Exact("http://localhost:5173".to_string());
        assert!(authorize(headerless("ws://localhost:5173/socket"), &policy, &ctx()));
    }

    #[test]
    fn test_inferred_origin_for_secure_websocket() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        assert!(authorize(headerless("wss://app.example.com/socket"), &policy, &ctx()));
        assert_eq!(
            evaluate(headerless("wss://app.example.com/socket"), &policy, &ctx()),
            Ok("https://app.example.com".to_string())
        );
    }

    #[test]
    fn test_inferred_origin_gets_no_special_treatment() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        assert!(!authorize(headerless("wss://other.example.com/socket"), &policy, &ctx()));
        assert!(!authorize(headerless("ws://app.example.com/socket"), &policy, &ctx()));
    }

    #[test]
    fn test_inferred_origin_runs_predicates() {
        let policy = CorsPolicy::predicate(|origin, _| {
            origin.ends_with(".example.com").then(|| origin.to_string())
        });
        assert!(authorize(headerless("wss://dep-1.example.com/socket"), &policy, &ctx()));
        assert!(!authorize(headerless("wss://dep-1.example.org/socket"), &policy, &ctx()));
    }

    #[test]
    fn test_malformed_request_url_is_distinct_denial() {
        let policy = CorsPolicy::AllowList(vec!["https://app.example.com".to_string()]);
        assert!(!authorize(headerless("/ws/dep-123"), &policy, &ctx()));
        assert!(matches!(
            evaluate(headerless("/ws/dep-123"), &policy, &ctx()),
            Err(OriginError::MalformedRequestUrl(_))
        ));
    }

    #[test]
    fn test_explicit_origin_skips_inference() {
        // A broken request URL does not matter when the header is present
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        let attempt = ConnectionAttempt {
            origin: Some("https://app.example.com"),
            request_url: "::not a url::",
        };
        assert!(authorize(attempt, &policy, &ctx()));
    }

    #[test]
    fn test_decisions_are_repeatable() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        let first = evaluate(headerless("wss://app.example.com/socket"), &policy, &ctx());
        let second = evaluate(headerless("wss://app.example.com/socket"), &policy, &ctx());
        assert_eq!(first, second);
    }

    #[test]
    fn test_policy_rejection_logs_origin() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        let logs = capture_logs(|| {
            assert!(!authorize(explicit("https://evil.example.com"), &policy, &ctx()));
        });

        assert!(logs.contains("WARN"));
        assert!(logs.contains("rejected from unauthorized origin"));
        assert!(logs.contains("origin=https://evil.example.com"));
        assert!(logs.contains("policy=\"exact\""));
    }

    #[test]
    fn test_inference_failure_logs_missing_origin() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        let logs = capture_logs(|| {
            assert!(!authorize(headerless("/ws/dep-123"), &policy, &ctx()));
        });

        assert!(logs.contains("WARN"));
        assert!(logs.contains("without Origin header"));
        assert!(logs.contains("origin=\"none\""));
        assert!(!logs.contains("unauthorized origin"));
    }

    #[test]
    fn test_authorized_attempt_logs_no_warning() {
        let policy = CorsPolicy::Exact("https://app.example.com".to_string());
        let logs = capture_logs(|| {
            assert!(authorize(explicit("https://app.example.com"), &policy, &ctx()));
        });

        assert!(!logs.contains("WARN"));
        assert!(logs.contains("Upgrade origin authorized"));
    }
}
