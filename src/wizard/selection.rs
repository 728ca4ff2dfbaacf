use super::{BookingWizard, ValidationError};
use crate::model::{PractitionerId, TimeSlot, TreatmentId};
use chrono::{NaiveDate, NaiveTime};

pub(super) fn select_date<'w>(w: &'w mut BookingWizard<'_>, date: NaiveDate) -> &'w [TimeSlot] {
    w.draft.date = Some(date);
    w.slots = w.source.slots_for(date, w.hours, w.catalog);

    // une heure choisie pour une autre date peut ne plus être disponible
    // dans la nouvelle grille : on l'efface
    if let Some(time) = w.draft.time {
        if !is_available(&w.slots, time) {
            w.draft.time = None;
        }
    }

    &w.slots
}

pub(super) fn select_time(w: &mut BookingWizard<'_>, time: NaiveTime) -> Result<(), ValidationError> {
    if !is_available(&w.slots, time) {
        return Err(ValidationError::UnavailableTime(
            time.format("%H:%M").to_string(),
        ));
    }
    w.draft.time = Some(time);
    Ok(())
}

pub(super) fn select_treatment(
    w: &mut BookingWizard<'_>,
    id: &TreatmentId,
) -> Result<(), ValidationError> {
    if w.catalog.find_treatment(id).is_none() {
        return Err(ValidationError::UnknownTreatment(id.as_str().to_string()));
    }
    w.draft.treatment = Some(id.clone());
    Ok(())
}

pub(super) fn select_practitioner(
    w: &mut BookingWizard<'_>,
    id: &PractitionerId,
) -> Result<(), ValidationError> {
    if w.catalog.find_practitioner(id).is_none() {
        return Err(ValidationError::UnknownPractitioner(id.as_str().to_string()));
    }
    w.draft.practitioner = Some(id.clone());
    Ok(())
}

fn is_available(slots: &[TimeSlot], time: NaiveTime) -> bool {
    slots.iter().any(|s| s.available && s.time == time)
}
