use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Treatment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreatmentId(String);

impl TreatmentId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Practitioner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PractitionerId(String);

impl PractitionerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
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

/// Soin du catalogue (immuable, chargé au démarrage)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: TreatmentId,
    pub name: String,
    pub duration_minutes: u16,
    pub description: String,
}

impl Treatment {
    /// Crée un soin en validant que la durée est non nulle.
    pub fn new<I: AsRef<str>, N: Into<String>, D: Into<String>>(
        id: I,
        name: N,
        duration_minutes: u16,
        description: D,
    ) -> Result<Self, String> {
        if duration_minutes == 0 {
            return Err("treatment duration must be > 0".to_string());
        }
        Ok(Self {
            id: TreatmentId::new(id),
            name: name.into(),
            duration_minutes,
            description: description.into(),
        })
    }

    /// Durée affichable, ex. "60 min".
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

/// Praticien du catalogue (immuable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: PractitionerId,
    pub name: String,
    pub specialization: String,
}

impl Practitioner {
    pub fn new<I: AsRef<str>, N: Into<String>, S: Into<String>>(
        id: I,
        name: N,
        specialization: S,
    ) -> Self {
        Self {
            id: PractitionerId::new(id),
            name: name.into(),
            specialization: specialization.into(),
        }
    }
}

/// Créneau de 30 minutes proposé pour une date.
///
/// Valeur dérivée : régénérée à chaque (re)sélection de date, jamais
/// persistée, sans garantie de stabilité d'une génération à l'autre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: NaiveTime,
    pub available: bool,
    pub practitioner: PractitionerId,
}

/// Brouillon de réservation tenu pendant la session de l'assistant.
///
/// Créé vide à l'ouverture, muté par les transitions d'étape, puis soit
/// engagé (et remis à vide), soit abandonné. Jamais persisté partiellement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub treatment: Option<TreatmentId>,
    pub practitioner: Option<PractitionerId>,
    #[serde(default)]
    pub notes: String,
}

impl BookingDraft {
    /// Les quatre champs obligatoires sont-ils renseignés ?
    pub fn is_complete(&self) -> bool {
        self.date.is_some()
            && self.time.is_some()
            && self.treatment.is_some()
            && self.practitioner.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
