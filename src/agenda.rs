use crate::catalog::Catalog;
use crate::model::{PractitionerId, SessionId, TreatmentId};
use crate::wizard::BookingConfirmed;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Salle par défaut d'une séance enregistrée depuis l'assistant.
pub const DEFAULT_LOCATION: &str = "Therapy Room 1";

/// Statut d'une séance planifiée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::InProgress => "in-progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "scheduled" => Ok(SessionStatus::Scheduled),
            "in-progress" => Ok(SessionStatus::InProgress),
            "completed" => Ok(SessionStatus::Completed),
            "cancelled" => Ok(SessionStatus::Cancelled),
            other => Err(format!("unknown session status: {other}")),
        }
    }
}

/// Séance de thérapie au planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub treatment: TreatmentId,
    pub practitioner: PractitionerId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u16,
    pub location: String,
    pub status: SessionStatus,
}

/// Planning en mémoire des séances (aucune persistance).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agenda {
    pub sessions: Vec<Session>,
}

impl Agenda {
    /// Enregistre une réservation confirmée comme séance planifiée.
    pub fn record(&mut self, booking: &BookingConfirmed, catalog: &Catalog) -> SessionId {
        let duration_minutes = catalog
            .find_treatment(&booking.treatment)
            .map_or(0, |t| t.duration_minutes);
        let session = Session {
            id: SessionId::random(),
            treatment: booking.treatment.clone(),
            practitioner: booking.practitioner.clone(),
            date: booking.date,
            time: booking.time,
            duration_minutes,
            location: DEFAULT_LOCATION.to_string(),
            status: SessionStatus::Scheduled,
        };
        let id = session.id.clone();
        self.sessions.push(session);
        id
    }

    pub fn find_session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| &s.id == id)
    }

    pub fn find_session_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| &s.id == id)
    }

    /// Change le statut d'une séance ; renvoie l'ancien statut.
    pub fn set_status(&mut self, id: &SessionId, status: SessionStatus) -> Option<SessionStatus> {
        let session = self.find_session_mut(id)?;
        let prev = session.status;
        session.status = status;
        Some(prev)
    }

    /// Séances du jour, dans l'ordre de la journée.
    pub fn today(&self, date: NaiveDate) -> Vec<&Session> {
        let mut out: Vec<&Session> = self.sessions.iter().filter(|s| s.date == date).collect();
        out.sort_by_key(|s| s.time);
        out
    }

    /// Prochaines séances planifiées, au plus `limit` (le tableau de bord
    /// en affiche trois).
    pub fn upcoming(&self, limit: usize) -> Vec<&Session> {
        let mut out: Vec<&Session> = self
            .sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Scheduled)
            .collect();
        out.sort_by_key(|s| (s.date, s.time));
        out.truncate(limit);
        out
    }

    pub fn completed_count(&self) -> usize {
        self.sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Completed)
            .count()
    }
}
