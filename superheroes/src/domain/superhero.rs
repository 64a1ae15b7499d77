//! Superhero data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`SuperHeroName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuperHeroNameError {
    /// The name is the empty string.
    #[error("super hero name must not be empty")]
    Empty,
    /// The name carries leading or trailing whitespace.
    #[error("super hero name must not start or end with whitespace")]
    Untrimmed,
}

/// Unique hero identifier within a repository.
///
/// ## Invariants
/// - Non-empty.
/// - No leading or trailing whitespace.
///
/// Serialises as a plain string and re-validates on deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SuperHeroName(String);

impl SuperHeroName {
    /// Validate and construct a name.
    pub fn new(name: impl Into<String>) -> Result<Self, SuperHeroNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SuperHeroNameError::Empty);
        }
        if name.trim() != name {
            return Err(SuperHeroNameError::Untrimmed);
        }
        Ok(Self(name))
    }

    /// Borrow the raw name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SuperHeroName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SuperHeroName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SuperHeroName> for String {
    fn from(value: SuperHeroName) -> Self {
        value.0
    }
}

impl TryFrom<String> for SuperHeroName {
    type Error = SuperHeroNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A catalogue entry: immutable after construction, owned by whichever
/// component retrieved it. The use cases never mutate or cache heroes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperHero {
    name: SuperHeroName,
    photo_url: String,
    is_avenger: bool,
    description: String,
}

impl SuperHero {
    /// Assemble a hero record.
    pub fn new(
        name: SuperHeroName,
        photo_url: impl Into<String>,
        is_avenger: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name,
            photo_url: photo_url.into(),
            is_avenger,
            description: description.into(),
        }
    }

    /// Unique identifier within the repository that produced this hero.
    pub fn name(&self) -> &SuperHeroName {
        &self.name
    }

    /// Location of the hero's portrait. Opaque to the domain.
    pub fn photo_url(&self) -> &str {
        self.photo_url.as_str()
    }

    /// Whether the list screen shows the Avengers badge for this hero.
    pub fn is_avenger(&self) -> bool {
        self.is_avenger
    }

    /// Free-form text shown on the detail screen.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_interior_whitespace() {
        let name = SuperHeroName::new("Iron Man").expect("valid name");
        assert_eq!(name.as_str(), "Iron Man");
        assert_eq!(name.to_string(), "Iron Man");
    }

    #[rstest]
    #[case("", SuperHeroNameError::Empty)]
    #[case(" Thor", SuperHeroNameError::Untrimmed)]
    #[case("Thor ", SuperHeroNameError::Untrimmed)]
    #[case("\tThor", SuperHeroNameError::Untrimmed)]
    fn rejects_malformed_names(#[case] raw: &str, #[case] expected: SuperHeroNameError) {
        assert_eq!(SuperHeroName::new(raw), Err(expected));
    }

    #[test]
    fn serialises_as_camel_case_payload() {
        let hero = SuperHero::new(
            SuperHeroName::new("Scarlet Witch").expect("valid name"),
            "https://img.example/scarlet-witch.jpg",
            true,
            "Reality manipulation and hex bolts.",
        );

        let value = serde_json::to_value(&hero).expect("serialises");
        assert_eq!(
            value,
            json!({
                "name": "Scarlet Witch",
                "photoUrl": "https://img.example/scarlet-witch.jpg",
                "isAvenger": true,
                "description": "Reality manipulation and hex bolts.",
            })
        );
    }

    #[test]
    fn deserialisation_revalidates_the_name() {
        let payload = json!({
            "name": "",
            "photoUrl": "https://img.example/nobody.jpg",
            "isAvenger": false,
            "description": "",
        });

        assert!(serde_json::from_value::<SuperHero>(payload).is_err());
    }
}
