use serde::{Deserialize, Serialize};

pub const DEFAULT_FIRST_NAME: &str = "Prénom";
pub const DEFAULT_LAST_NAME: &str = "Nom";
pub const DEFAULT_SPECIALTY: &str = "Informatique";

/// Student details as stored by the progression collaborator.
///
/// Every field is optional; blanks are resolved through [`StudentInfo::identity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StudentInfo {
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub specialite: Option<String>,
}

impl StudentInfo {
    #[must_use]
    pub fn new(prenom: &str, nom: &str, specialite: &str) -> Self {
        Self {
            prenom: Some(prenom.to_string()),
            nom: Some(nom.to_string()),
            specialite: Some(specialite.to_string()),
        }
    }

    /// Resolve the name/specialty triple, substituting the literal defaults for
    /// missing or blank fields.
    #[must_use]
    pub fn identity(&self) -> StudentIdentity {
        StudentIdentity {
            first_name: or_default(self.prenom.as_deref(), DEFAULT_FIRST_NAME),
            last_name: or_default(self.nom.as_deref(), DEFAULT_LAST_NAME),
            specialty: or_default(self.specialite.as_deref(), DEFAULT_SPECIALTY),
        }
    }
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Fully resolved student triple; the memoization key for pitch content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentIdentity {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl Default for StudentIdentity {
    fn default() -> Self {
        StudentInfo::default().identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_literal_defaults() {
        let identity = StudentInfo::default().identity();
        assert_eq!(identity.first_name, "Prénom");
        assert_eq!(identity.last_name, "Nom");
        assert_eq!(identity.specialty, "Informatique");
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let info = StudentInfo {
            prenom: Some("  ".into()),
            nom: Some("Ben Salah".into()),
            specialite: Some(String::new()),
        };
        let identity = info.identity();
        assert_eq!(identity.first_name, "Prénom");
        assert_eq!(identity.last_name, "Ben Salah");
        assert_eq!(identity.specialty, "Informatique");
    }

    #[test]
    fn deserializes_partial_records() {
        let info: StudentInfo = serde_json::from_str(r#"{"prenom":"Amira"}"#).unwrap();
        assert_eq!(info.prenom.as_deref(), Some("Amira"));
        assert!(info.nom.is_none());
    }
}
