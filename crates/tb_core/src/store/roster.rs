use super::{KeyValueStore, StoreError, ROSTER_KEY};
use crate::models::{Player, PlayerId};
use crate::share::merge_by_id;

/// Roster CRUD over any [`KeyValueStore`] backend.
///
/// The roster is stored as a JSON array under [`ROSTER_KEY`]. Uniqueness
/// of player names (case-insensitive, trimmed) is enforced here; the
/// balancer itself never validates the roster it is handed.
pub struct RosterStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RosterStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the persisted roster. An absent or corrupt payload loads as
    /// an empty roster rather than failing.
    pub fn load(&self) -> Vec<Player> {
        match self.store.get(ROSTER_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("discarding corrupt roster payload: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    pub fn save(&mut self, players: &[Player]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(players)?;
        self.store.set(ROSTER_KEY, &raw)?;
        log::debug!("saved {} roster entries", players.len());
        Ok(())
    }

    /// Insert a new player or update one in place by id.
    pub fn upsert(&mut self, player: Player) -> Result<(), StoreError> {
        let mut players = self.load();
        let name_key = normalized(&player.name);
        if players
            .iter()
            .any(|p| p.id != player.id && normalized(&p.name) == name_key)
        {
            return Err(StoreError::DuplicateName { name: player.name });
        }

        match players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => *slot = player,
            None => players.push(player),
        }
        self.save(&players)
    }

    pub fn remove(&mut self, id: PlayerId) -> Result<(), StoreError> {
        let mut players = self.load();
        let before = players.len();
        players.retain(|p| p.id != id);
        if players.len() == before {
            return Err(StoreError::NotFound { id });
        }
        self.save(&players)
    }
}

fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Bootstrap roster from the two pluggable sources: the persisted store
/// and an optional share payload, merged by id with the payload winning.
pub fn initial_roster(persisted: Vec<Player>, shared: Option<Vec<Player>>) -> Vec<Player> {
    match shared {
        Some(incoming) => merge_by_id(persisted, incoming),
        None => persisted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn load_of_empty_store_is_empty() {
        let store = RosterStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_payload_loads_as_empty_roster() {
        let mut kv = MemoryStore::new();
        kv.set(ROSTER_KEY, "not json {").unwrap();
        let store = RosterStore::new(kv);
        assert!(store.load().is_empty());
    }

    #[test]
    fn upsert_inserts_then_updates_in_place() {
        let mut store = RosterStore::new(MemoryStore::new());
        store.upsert(Player::new(1, "Ada").with_rating(5.0)).unwrap();
        store.upsert(Player::new(2, "Ben")).unwrap();
        store.upsert(Player::new(1, "Ada").with_rating(8.0)).unwrap();

        let players = store.load();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].rating, Some(8.0.into()));
    }

    #[test]
    fn upsert_rejects_duplicate_names_case_insensitively() {
        let mut store = RosterStore::new(MemoryStore::new());
        store.upsert(Player::new(1, "Ada")).unwrap();
        let err = store.upsert(Player::new(2, "  ada ")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateName { .. }));
    }

    #[test]
    fn remove_drops_by_id_and_reports_missing() {
        let mut store = RosterStore::new(MemoryStore::new());
        store.upsert(Player::new(1, "Ada")).unwrap();
        store.remove(1).unwrap();
        assert!(store.load().is_empty());
        assert!(matches!(store.remove(1), Err(StoreError::NotFound { id: 1 })));
    }

    #[test]
    fn initial_roster_prefers_the_share_payload() {
        let persisted = vec![Player::new(1, "Ada").with_rating(4.0), Player::new(2, "Ben")];
        let shared = vec![Player::new(1, "Ada").with_rating(9.0), Player::new(3, "Cyd")];

        let merged = initial_roster(persisted.clone(), Some(shared));
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].rating, Some(9.0.into()));

        assert_eq!(initial_roster(persisted.clone(), None), persisted);
    }
}
