use super::{BookingWizard, Step, ValidationError};
use crate::model::BookingDraft;

/// Garde de transition `Next` : chaque étape exige son champ avant de
/// laisser passer. L'échec laisse l'étape courante inchangée.
pub(super) fn advance(w: &mut BookingWizard<'_>) -> Result<Step, ValidationError> {
    match w.step {
        Step::Date => {
            if w.draft.date.is_none() {
                return Err(ValidationError::MissingDate);
            }
        }
        Step::Time => {
            if w.draft.time.is_none() {
                return Err(ValidationError::MissingTime);
            }
        }
        Step::Treatment => {
            if w.draft.treatment.is_none() {
                return Err(ValidationError::MissingTreatment);
            }
        }
        // pas de cinquième étape : avancer depuis la confirmation ne fait rien
        Step::Confirm => return Ok(Step::Confirm),
    }

    if let Some(next) = w.step.next() {
        w.step = next;
    }
    Ok(w.step)
}

pub(super) fn require_complete(draft: &BookingDraft) -> Result<(), ValidationError> {
    if !draft.is_complete() {
        return Err(ValidationError::MissingInformation);
    }
    Ok(())
}
