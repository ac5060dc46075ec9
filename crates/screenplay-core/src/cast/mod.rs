//! Resolución de actores a partir de nombres en el texto de los steps.
//!
//! El conjunto de personas es cerrado (`Persona`) y el `Cast` configurado
//! decide cuáles pueden actuar. Un nombre desconocido es un error, nunca un
//! actor nuevo improvisado.

mod stage;

pub use stage::Stage;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ScreenplayConfig;
use crate::errors::{Result, ScreenplayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Persona {
    Sue,
    Tanya,
    Bob,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Sue, Persona::Tanya, Persona::Bob];

    pub fn name(self) -> &'static str {
        match self {
            Persona::Sue => "Sue",
            Persona::Tanya => "Tanya",
            Persona::Bob => "Bob",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = ScreenplayError;

    fn from_str(s: &str) -> Result<Self> {
        Persona::ALL.into_iter()
                    .find(|p| p.name() == s)
                    .ok_or_else(|| ScreenplayError::UnknownActor(s.to_string()))
    }
}

/// Personas habilitadas para un escenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    members: Vec<Persona>,
    strict: bool,
}

impl Cast {
    pub fn new(members: impl IntoIterator<Item = Persona>) -> Self {
        let mut list: Vec<Persona> = Vec::new();
        for p in members {
            if !list.contains(&p) {
                list.push(p);
            }
        }
        Self { members: list,
               strict: true }
    }

    /// Todas las personas conocidas.
    pub fn everyone() -> Self {
        Self::new(Persona::ALL)
    }

    pub fn from_config(config: &ScreenplayConfig) -> Self {
        let mut cast = Self::new(config.cast.iter().copied());
        cast.strict = config.strict_cast;
        cast
    }

    pub fn members(&self) -> &[Persona] {
        &self.members
    }

    pub fn admits(&self, persona: Persona) -> bool {
        !self.strict || self.members.contains(&persona)
    }

    /// Traduce un nombre a una persona admitida por el cast.
    pub fn resolve(&self, name: &str) -> Result<Persona> {
        let persona: Persona = name.trim().parse()?;
        if self.admits(persona) {
            Ok(persona)
        } else {
            Err(ScreenplayError::NotInCast(persona))
        }
    }
}

impl Default for Cast {
    fn default() -> Self {
        Self::everyone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Persona::Tanya).unwrap(), "\"Tanya\"");
        let cast: Vec<Persona> = serde_json::from_str(r#"["Bob","Sue"]"#).unwrap();
        assert_eq!(cast, vec![Persona::Bob, Persona::Sue]);
        assert!(serde_json::from_str::<Persona>("\"Mallory\"").is_err());
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("Tanya".parse::<Persona>().unwrap(), Persona::Tanya);
        assert_eq!("Alice".parse::<Persona>().unwrap_err(), ScreenplayError::UnknownActor("Alice".into()));
        // sensible a mayúsculas, igual que el patrón de los steps
        assert!("sue".parse::<Persona>().is_err());
    }

    #[test]
    fn strict_cast_rejects_unlisted_personas() {
        let cast = Cast::new([Persona::Sue]);
        assert_eq!(cast.resolve("Sue").unwrap(), Persona::Sue);
        assert_eq!(cast.resolve("Bob").unwrap_err(), ScreenplayError::NotInCast(Persona::Bob));
    }

    #[test]
    fn lenient_cast_admits_any_known_persona() {
        let config = ScreenplayConfig { cast: vec![Persona::Sue],
                                        strict_cast: false };
        let cast = Cast::from_config(&config);
        assert_eq!(cast.resolve("Bob").unwrap(), Persona::Bob);
        assert!(cast.resolve("Mallory").is_err());
    }

    #[test]
    fn duplicates_are_collapsed() {
        let cast = Cast::new([Persona::Bob, Persona::Sue, Persona::Bob]);
        assert_eq!(cast.members(), &[Persona::Bob, Persona::Sue]);
    }
}
