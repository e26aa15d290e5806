//! Display address selection
//!
//! A tunnel endpoint usually terminates TLS more reliably than the direct
//! preview endpoint, so it is preferred whenever both exist.

use tenantgate_shared::AddressCandidates;

/// Pick the tunnel URL, then the preview URL, else an empty string
///
/// An empty result means no address is available; callers check for it.
pub fn select_address(preview: Option<&str>, tunnel: Option<&str>) -> String {
    tunnel
        .filter(|t| !t.is_empty())
        .or_else(|| preview.filter(|p| !p.is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// Selection over a candidate pair
pub trait SelectAddress {
    fn select(&self) -> String;
}

impl SelectAddress for AddressCandidates {
    fn select(&self) -> String {
        select_address(self.preview_url.as_deref(), self.tunnel_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tunnel_preferred() {
        assert_eq!(select_address(None, Some("https://tunnel.x")), "https://tunnel.x");
        assert_eq!(
            select_address(Some("https://preview.x"), Some("https://tunnel.x")),
            "https://tunnel.x"
        );
    }

    #[test]
    fn test_preview_fallback() {
        assert_eq!(select_address(Some("https://preview.x"), None), "https://preview.x");
        assert_eq!(select_address(Some("https://preview.x"), Some("")), "https://preview.x");
    }

    #[test]
    fn test_no_address() {
        assert_eq!(select_address(None, None), "");
        assert_eq!(select_address(Some(""), Some("")), "");
    }

    #[test]
    fn test_candidates_select() {
        let candidates = AddressCandidates {
            preview_url: Some("https://preview.x".to_string()),
            tunnel_url: None,
        };
        assert_eq!(candidates.select(), "https://preview.x");
        assert_eq!(AddressCandidates::default().select(), "");
    }
}
