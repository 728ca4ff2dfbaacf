use super::{guards, BookingConfirmed, BookingWizard, Step, ValidationError};

/// Engagement du brouillon : validation terminale, résolution des noms
/// contre le catalogue, émission de l'événement puis remise à zéro.
pub(super) fn confirm(w: &mut BookingWizard<'_>) -> Result<BookingConfirmed, ValidationError> {
    guards::require_complete(&w.draft)?;

    let (date, time, treatment_id, practitioner_id) = match (
        w.draft.date,
        w.draft.time,
        w.draft.treatment.clone(),
        w.draft.practitioner.clone(),
    ) {
        (Some(d), Some(t), Some(tr), Some(p)) => (d, t, tr, p),
        _ => return Err(ValidationError::MissingInformation),
    };

    let treatment = w
        .catalog
        .find_treatment(&treatment_id)
        .ok_or_else(|| ValidationError::UnknownTreatment(treatment_id.as_str().to_string()))?;
    let practitioner = w
        .catalog
        .find_practitioner(&practitioner_id)
        .ok_or_else(|| ValidationError::UnknownPractitioner(practitioner_id.as_str().to_string()))?;

    let confirmed = BookingConfirmed {
        date,
        time,
        treatment: treatment_id.clone(),
        treatment_name: treatment.name.clone(),
        treatment_duration: treatment.duration_label(),
        practitioner: practitioner_id.clone(),
        practitioner_name: practitioner.name.clone(),
        notes: w.draft.notes.clone(),
    };

    // seul le succès remet l'assistant à zéro
    w.draft.clear();
    w.slots.clear();
    w.step = Step::Date;

    Ok(confirmed)
}
