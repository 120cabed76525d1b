// src/persona/store.rs
// Single-slot in-memory persona store

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::Persona;

/// Holds zero or one persona for the lifetime of the process.
///
/// Every write replaces the whole record, so concurrent writers resolve to
/// whichever landed last and readers never observe a partial value. Nothing
/// is persisted; dropping the store discards the persona.
#[derive(Debug, Default)]
pub struct PersonaStore {
    current: RwLock<Option<Persona>>,
}

impl PersonaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `persona` as the current value, replacing any previous one
    pub async fn put(&self, persona: Persona) -> Persona {
        info!(name = %persona.name, "Storing persona");
        let mut guard = self.current.write().await;
        *guard = Some(persona.clone());
        persona
    }

    /// Get the current persona, or the default one if nothing is stored
    pub async fn get(&self) -> Persona {
        match self.current.read().await.as_ref() {
            Some(persona) => persona.clone(),
            None => {
                debug!("No persona stored, serving default");
                Persona::default_persona()
            }
        }
    }

    /// Whether a persona has been written since startup
    pub async fn is_set(&self) -> bool {
        self.current.read().await.is_some()
    }
}
