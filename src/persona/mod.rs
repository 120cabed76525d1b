// src/persona/mod.rs
// Persona record and the single-slot store that holds it.

pub mod default;
pub mod score;
pub mod store;

use serde::{Deserialize, Serialize};

pub use default::{DEFAULT_PERSONA_DESCRIPTION, DEFAULT_PERSONA_NAME, default_traits};
pub use score::TraitScore;
pub use store::PersonaStore;

/// Trait scores attached to a persona.
///
/// Values are taken as-is; the companion UI draws them on a 0-100 scale but
/// nothing here clamps or rejects values outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    pub empathy: TraitScore,
    pub creativity: TraitScore,
    pub energy: TraitScore,
    pub logic: TraitScore,
}

impl Traits {
    pub fn new(empathy: i64, creativity: i64, energy: i64, logic: i64) -> Self {
        Self {
            empathy: empathy.into(),
            creativity: creativity.into(),
            energy: energy.into(),
            logic: logic.into(),
        }
    }
}

/// The user-facing companion profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub description: String,
    pub traits: Traits,
}

impl Persona {
    pub fn new(name: impl Into<String>, description: impl Into<String>, traits: Traits) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            traits,
        }
    }

    /// The fallback persona served before anything has been stored
    pub fn default_persona() -> Self {
        Self::new(DEFAULT_PERSONA_NAME, DEFAULT_PERSONA_DESCRIPTION, default_traits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_persona_values() {
        let persona = Persona::default_persona();
        assert_eq!(persona.name, "Aura");
        assert!(persona.description.starts_with("Aura is a compassionate"));
        assert_eq!(persona.traits, Traits::new(75, 85, 60, 70));
    }

    #[test]
    fn test_persona_wire_shape() {
        let value = serde_json::to_value(Persona::default_persona()).unwrap();
        assert_eq!(value["name"], "Aura");
        assert_eq!(value["traits"]["empathy"], 75);
        assert_eq!(value["traits"]["creativity"], 85);
        assert_eq!(value["traits"]["energy"], 60);
        assert_eq!(value["traits"]["logic"], 70);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let persona: Persona = serde_json::from_value(json!({
            "name": "Nova",
            "description": "night owl",
            "mood": "calm",
            "traits": { "empathy": 1, "creativity": 2, "energy": 3, "logic": 4, "humor": 9 }
        }))
        .unwrap();
        assert_eq!(persona.name, "Nova");
        assert_eq!(persona.traits.logic, 4i64);
    }

    #[test]
    fn test_missing_trait_rejected() {
        let result: Result<Persona, _> = serde_json::from_value(json!({
            "name": "Nova",
            "description": "night owl",
            "traits": { "empathy": 1, "creativity": 2, "energy": 3 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_traits_accepted() {
        let persona: Persona = serde_json::from_value(json!({
            "name": "Edge",
            "description": "",
            "traits": { "empathy": -5, "creativity": 250, "energy": 0, "logic": 100 }
        }))
        .unwrap();
        assert_eq!(persona.traits.empathy, -5i64);
        assert_eq!(persona.traits.creativity, 250i64);
    }

    #[test]
    fn test_fractional_trait_rejected() {
        let result: Result<Persona, _> = serde_json::from_value(json!({
            "name": "Float",
            "description": "",
            "traits": { "empathy": 75.0, "creativity": 85, "energy": 60, "logic": 70 }
        }));
        assert!(result.is_err());
    }
}
