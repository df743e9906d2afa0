//! In-memory session store keyed by chat id.

use dashmap::DashMap;

use super::session::Session;

/// Sessions by chat id. Owned by the dialog manager; nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<i64, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the chat's session.
    pub fn get(&self, chat_id: i64) -> Option<Session> {
        self.sessions.get(&chat_id).map(|s| s.clone())
    }

    /// Creates or replaces the chat's session.
    pub fn insert(&self, chat_id: i64, session: Session) {
        self.sessions.insert(chat_id, session);
    }

    pub fn remove(&self, chat_id: i64) -> Option<Session> {
        self.sessions.remove(&chat_id).map(|(_, s)| s)
    }

    pub fn contains(&self, chat_id: i64) -> bool {
        self.sessions.contains_key(&chat_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        store.insert(1, Session::new("a"));
        store.insert(2, Session::new("b"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(|s| s.name), Some("a".to_string()));

        store.insert(1, Session::new("c"));
        assert_eq!(store.get(1).map(|s| s.name), Some("c".to_string()));

        assert!(store.remove(1).is_some());
        assert!(!store.contains(1));
        assert!(store.remove(1).is_none());
        assert!(store.contains(2));
    }
}
