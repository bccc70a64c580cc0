//! Player name → person id resolution.

use tracing::{debug, info};

use crate::{
    cli::types::Season,
    core::{PlayerIdentity, PlayerLookupCache},
    error::TrackerError,
    nba::{http::NbaClient, types::PlayerIndexRow},
    Result,
};

/// Case-insensitive exact match on the full display name. Active players
/// win over retired namesakes.
pub fn find_by_full_name<'a>(rows: &'a [PlayerIndexRow], name: &str) -> Option<&'a PlayerIndexRow> {
    let wanted = normalize(name);
    let mut matches = rows
        .iter()
        .filter(|r| normalize(&r.display_first_last) == wanted);
    let first = matches.next()?;
    if first.is_active {
        return Some(first);
    }
    Some(matches.find(|r| r.is_active).unwrap_or(first))
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve `name` through the cache, hitting the player index on a miss.
///
/// An index fetch failure is reported as "player not found": without an id
/// nothing else can be fetched.
pub async fn resolve_player(
    client: &NbaClient,
    cache: &PlayerLookupCache,
    name: &str,
    season: Season,
) -> Result<PlayerIdentity> {
    if let Some(hit) = cache.get(name) {
        debug!(name, id = %hit.id, "player lookup cache hit");
        return Ok(hit);
    }

    let not_found = || TrackerError::PlayerNotFound {
        name: name.to_string(),
    };

    let rows = client.all_players(season).await.map_err(|e| {
        info!(error = %e, "player index unavailable");
        not_found()
    })?;

    let row = find_by_full_name(&rows, name).ok_or_else(not_found)?;
    let identity = PlayerIdentity {
        id: row.person_id,
        full_name: row.display_first_last.clone(),
    };
    cache.insert(name, identity.clone());
    Ok(identity)
}
