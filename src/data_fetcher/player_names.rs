//! Player name formatting for attribution lines.

use crate::data_fetcher::models::{PickMetadata, PlayerCatalog};

/// Builds a full name from optional first and last name components.
///
/// Each part is trimmed and blank parts are skipped, so a lone first or last
/// name comes back on its own. Returns `None` when nothing is left.
///
/// # Example
/// ```
/// use sleeper_trade_tracker::data_fetcher::player_names::build_full_name;
///
/// assert_eq!(build_full_name(Some("Jane"), Some("Doe")).as_deref(), Some("Jane Doe"));
/// assert_eq!(build_full_name(Some(" Jane "), None).as_deref(), Some("Jane"));
/// assert_eq!(build_full_name(None, Some("")), None);
/// ```
pub fn build_full_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [first_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Name of a drafted player.
///
/// The catalog entry wins; the name Sleeper stored on the pick itself is
/// used when the catalog has no usable name for the id.
pub fn drafted_player_name(
    player_id: &str,
    players: &PlayerCatalog,
    pick_metadata: Option<&PickMetadata>,
) -> Option<String> {
    players
        .get(player_id)
        .and_then(|p| build_full_name(p.first_name.as_deref(), p.last_name.as_deref()))
        .or_else(|| {
            pick_metadata
                .and_then(|m| build_full_name(m.first_name.as_deref(), m.last_name.as_deref()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Player;

    fn catalog() -> PlayerCatalog {
        let mut players = PlayerCatalog::new();
        players.insert(
            "P1".to_string(),
            Player {
                first_name: Some("Jane".to_string()),
                last_name: Some("Doe".to_string()),
                ..Player::default()
            },
        );
        players.insert(
            "P2".to_string(),
            Player {
                first_name: Some("   ".to_string()),
                last_name: None,
                ..Player::default()
            },
        );
        players
    }

    #[test]
    fn test_build_full_name_joins_with_single_space() {
        assert_eq!(
            build_full_name(Some("Jane "), Some(" Doe")).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_build_full_name_single_part() {
        assert_eq!(build_full_name(None, Some("Doe")).as_deref(), Some("Doe"));
        assert_eq!(build_full_name(Some("Jane"), Some("  ")).as_deref(), Some("Jane"));
    }

    #[test]
    fn test_drafted_player_name_from_catalog() {
        assert_eq!(
            drafted_player_name("P1", &catalog(), None).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_drafted_player_name_falls_back_to_pick_metadata() {
        let metadata = PickMetadata {
            first_name: Some("Bijan".to_string()),
            last_name: Some("Robinson".to_string()),
        };
        assert_eq!(
            drafted_player_name("missing", &catalog(), Some(&metadata)).as_deref(),
            Some("Bijan Robinson")
        );
        // Catalog entry without a usable name also falls through
        assert_eq!(
            drafted_player_name("P2", &catalog(), Some(&metadata)).as_deref(),
            Some("Bijan Robinson")
        );
    }

    #[test]
    fn test_drafted_player_name_unresolved() {
        assert_eq!(drafted_player_name("missing", &catalog(), None), None);
    }
}
