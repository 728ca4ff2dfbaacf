use crate::model::{PractitionerId, TreatmentId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Étape courante de l'assistant (linéaire, sans saut).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Date,
    Time,
    Treatment,
    Confirm,
}

impl Step {
    /// Numéro 1..=4 affiché par la couche de présentation.
    pub fn number(self) -> u8 {
        match self {
            Step::Date => 1,
            Step::Time => 2,
            Step::Treatment => 3,
            Step::Confirm => 4,
        }
    }

    pub(super) fn next(self) -> Option<Step> {
        match self {
            Step::Date => Some(Step::Time),
            Step::Time => Some(Step::Treatment),
            Step::Treatment => Some(Step::Confirm),
            Step::Confirm => None,
        }
    }

    pub(super) fn prev(self) -> Option<Step> {
        match self {
            Step::Date => None,
            Step::Time => Some(Step::Date),
            Step::Treatment => Some(Step::Time),
            Step::Confirm => Some(Step::Treatment),
        }
    }
}

/// Erreurs de validation de l'assistant.
///
/// Toutes récupérables par l'utilisateur : elles bloquent une transition
/// mais ne corrompent jamais le brouillon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please select a date to continue")]
    MissingDate,
    #[error("please select an available time slot to continue")]
    MissingTime,
    #[error("please select a treatment to continue")]
    MissingTreatment,
    #[error("missing information: date, time, treatment and practitioner are required")]
    MissingInformation,
    #[error("time {0} is not among the available slots")]
    UnavailableTime(String),
    #[error("unknown treatment: {0}")]
    UnknownTreatment(String),
    #[error("unknown practitioner: {0}")]
    UnknownPractitioner(String),
}

impl ValidationError {
    /// Étape à laquelle l'erreur se rapporte.
    pub fn step(&self) -> Step {
        match self {
            ValidationError::MissingDate => Step::Date,
            ValidationError::MissingTime | ValidationError::UnavailableTime(_) => Step::Time,
            ValidationError::MissingTreatment | ValidationError::UnknownTreatment(_) => {
                Step::Treatment
            }
            ValidationError::MissingInformation | ValidationError::UnknownPractitioner(_) => {
                Step::Confirm
            }
        }
    }
}

/// Événement émis une fois le brouillon complet engagé.
///
/// Les noms et la durée sont résolus contre le catalogue au moment de
/// l'engagement ; le collaborateur externe n'a pas à refaire la jointure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmed {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub treatment: TreatmentId,
    pub treatment_name: String,
    pub treatment_duration: String,
    pub practitioner: PractitionerId,
    pub practitioner_name: String,
    pub notes: String,
}
