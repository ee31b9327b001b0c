use serde::{Serialize, Deserialize};

/// A football team as stored in the `equipos` table and exchanged over HTTP.
///
/// `id` is assigned by the database on first insert and is `null` in request
/// bodies; once assigned it is immutable and never reused after deletion.
/// The string fields default to empty when absent from a request body, so a
/// missing field is reported through the same blank-field validation as an
/// empty one instead of failing at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub country: String,
}

impl Team {
    /// Checks the required fields on creation. Returns one violation message
    /// per blank (empty or whitespace-only) field, in field order.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push("El nombre del equipo es obligatorio".to_string());
        }
        if self.league.trim().is_empty() {
            violations.push("La liga del equipo es obligatoria".to_string());
        }
        if self.country.trim().is_empty() {
            violations.push("El país del equipo es obligatorio".to_string());
        }
        violations
    }
}
