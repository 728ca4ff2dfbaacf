use crate::model::TreatmentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour FeedbackEntry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Retour patient après une séance (échelles 1..=10).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: FeedbackId,
    pub date: NaiveDate,
    pub session_type: TreatmentId,
    pub wellness_level: u8,
    pub energy_level: u8,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub notes: String,
}

impl FeedbackEntry {
    /// Crée un retour en validant les deux échelles.
    pub fn new<S: Into<String>, N: Into<String>>(
        date: NaiveDate,
        session_type: TreatmentId,
        wellness_level: u8,
        energy_level: u8,
        symptoms: S,
        notes: N,
    ) -> Result<Self, String> {
        if !(1..=10).contains(&wellness_level) {
            return Err("wellness level must be within 1..=10".to_string());
        }
        if !(1..=10).contains(&energy_level) {
            return Err("energy level must be within 1..=10".to_string());
        }
        Ok(Self {
            id: FeedbackId::random(),
            date,
            session_type,
            wellness_level,
            energy_level,
            symptoms: symptoms.into(),
            notes: notes.into(),
        })
    }
}

/// Journal en mémoire des retours patients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackLog {
    pub entries: Vec<FeedbackEntry>,
}

impl FeedbackLog {
    pub fn submit(&mut self, entry: FeedbackEntry) -> FeedbackId {
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Retours les plus récents d'abord, au plus `limit`.
    pub fn recent(&self, limit: usize) -> Vec<&FeedbackEntry> {
        let mut out: Vec<&FeedbackEntry> = self.entries.iter().collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out.truncate(limit);
        out
    }
}
