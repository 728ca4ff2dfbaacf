#![forbid(unsafe_code)]
//! Panchakarma — bibliothèque de réservation de séances pour une clinique
//! ayurvédique (sans BD).
//!
//! - Catalogue immuable (soins, praticiens) construit au démarrage.
//! - Assistant de réservation en quatre étapes, validations locales à l'étape.
//! - Disponibilité derrière une couture injectable (tirage aléatoire par défaut).
//! - Dates et heures naïves ; le fuseau horaire est l'affaire de l'appelant.

pub mod agenda;
pub mod availability;
pub mod calendar;
pub mod catalog;
pub mod feedback;
pub mod hours;
pub mod io;
pub mod model;
pub mod notification;
pub mod progress;
pub mod view;
pub mod wizard;

pub use agenda::{Agenda, Session, SessionStatus};
pub use availability::{AvailabilitySource, FullAvailability, RandomAvailability};
pub use catalog::{load_catalog_from_file, Catalog};
pub use feedback::{FeedbackEntry, FeedbackId, FeedbackLog};
pub use hours::{load_hours_from_file, ClinicHours};
pub use model::{
    BookingDraft, Practitioner, PractitionerId, SessionId, TimeSlot, Treatment, TreatmentId,
};
pub use notification::{
    prepare_confirmation, prepare_session_reminder, ConfirmationRenderer, Notification,
    TextConfirmation,
};
pub use progress::ProgressSummary;
pub use view::{Role, RoleView};
pub use wizard::{BookingConfirmed, BookingWizard, Step, ValidationError};
