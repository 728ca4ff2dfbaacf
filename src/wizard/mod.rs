mod commit;
mod guards;
mod selection;
mod types;

pub use types::{BookingConfirmed, Step, ValidationError};

use crate::availability::AvailabilitySource;
use crate::catalog::Catalog;
use crate::hours::ClinicHours;
use crate::model::{BookingDraft, PractitionerId, TimeSlot, TreatmentId};
use chrono::{NaiveDate, NaiveTime};

/// Assistant de réservation : enchaîne date → heure → soin →
/// praticien/confirmation sur un unique brouillon.
///
/// Le catalogue, la fenêtre d'ouverture et la source de disponibilité sont
/// passés par référence à la construction et jamais mutés.
pub struct BookingWizard<'a> {
    catalog: &'a Catalog,
    hours: &'a ClinicHours,
    source: &'a dyn AvailabilitySource,
    draft: BookingDraft,
    step: Step,
    slots: Vec<TimeSlot>,
}

impl<'a> BookingWizard<'a> {
    pub fn new(
        catalog: &'a Catalog,
        hours: &'a ClinicHours,
        source: &'a dyn AvailabilitySource,
    ) -> Self {
        Self {
            catalog,
            hours,
            source,
            draft: BookingDraft::default(),
            step: Step::Date,
            slots: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Grille complète de la date sélectionnée (vide tant qu'aucune date
    /// n'est choisie — ce n'est pas une erreur).
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Seulement les créneaux disponibles, dans l'ordre de la grille.
    pub fn available_slots(&self) -> Vec<&TimeSlot> {
        self.slots.iter().filter(|s| s.available).collect()
    }

    /// Sélectionne une date et régénère les créneaux. Une heure déjà
    /// choisie qui n'est plus disponible est effacée.
    pub fn select_date(&mut self, date: NaiveDate) -> &[TimeSlot] {
        selection::select_date(self, date)
    }

    pub fn select_time(&mut self, time: NaiveTime) -> Result<(), ValidationError> {
        selection::select_time(self, time)
    }

    pub fn select_treatment(&mut self, id: &TreatmentId) -> Result<(), ValidationError> {
        selection::select_treatment(self, id)
    }

    pub fn select_practitioner(&mut self, id: &PractitionerId) -> Result<(), ValidationError> {
        selection::select_practitioner(self, id)
    }

    pub fn set_notes<S: Into<String>>(&mut self, notes: S) {
        self.draft.notes = notes.into();
    }

    /// Avance d'une étape si la garde de l'étape courante est satisfaite.
    pub fn advance(&mut self) -> Result<Step, ValidationError> {
        guards::advance(self)
    }

    /// Recule d'une étape sans garde ni effacement de champ.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Engage le brouillon complet : émet l'événement de confirmation puis
    /// remet l'assistant à zéro. En cas d'échec, rien n'est émis et le
    /// brouillon reste intact.
    pub fn confirm(&mut self) -> Result<BookingConfirmed, ValidationError> {
        commit::confirm(self)
    }

    /// Abandonne le brouillon en cours (fermeture du dialogue).
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.slots.clear();
        self.step = Step::Date;
    }
}
