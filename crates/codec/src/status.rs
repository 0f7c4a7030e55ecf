//! Status normalization.

use journal_core::CanonicalStatus;

/// Map a loosely written status onto the canonical vocabulary.
///
/// `on-track`, `On Track` and `ON TRACK` all resolve to the same value.
/// Anything unrecognised, including no status at all, is `On Track`.
pub fn normalize(raw: Option<&str>) -> CanonicalStatus {
    let Some(raw) = raw else {
        return CanonicalStatus::default();
    };
    let key = raw.trim().to_lowercase().replace('-', " ");

    CanonicalStatus::ALL
        .into_iter()
        .find(|status| status.label().to_lowercase() == key)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize(Some("on-track")), CanonicalStatus::OnTrack);
        assert_eq!(normalize(Some("NEEDS ATTENTION")), CanonicalStatus::NeedsAttention);
        assert_eq!(normalize(Some("needs-attention")), CanonicalStatus::NeedsAttention);
        assert_eq!(normalize(Some("  Behind ")), CanonicalStatus::Behind);
    }

    #[test]
    fn test_normalize_falls_back_to_on_track() {
        assert_eq!(normalize(Some("bogus")), CanonicalStatus::OnTrack);
        assert_eq!(normalize(Some("")), CanonicalStatus::OnTrack);
        assert_eq!(normalize(Some("invalid-status-value")), CanonicalStatus::OnTrack);
        assert_eq!(normalize(None), CanonicalStatus::OnTrack);
    }
}
