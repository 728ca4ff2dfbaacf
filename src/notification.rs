use crate::agenda::{Agenda, Session, SessionStatus};
use crate::catalog::Catalog;
use crate::wizard::BookingConfirmed;
use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate};

/// Message prêt à remettre au collaborateur externe (toast, mail, SMS).
///
/// La remise elle-même est hors du périmètre de la lib.
#[derive(Debug, Clone)]
pub struct Notification {
    pub subject: String,
    pub content: String,
}

/// Permet de customiser le rendu du message de confirmation.
pub trait ConfirmationRenderer {
    fn render(&self, booking: &BookingConfirmed) -> String;
}

/// Gabarit texte simple, repris tel quel par le toast de la couche de
/// présentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextConfirmation;

impl ConfirmationRenderer for TextConfirmation {
    fn render(&self, booking: &BookingConfirmed) -> String {
        format!(
            "Bonjour,\n\nVotre séance \"{treatment}\" ({duration}) est confirmée le {date} à {time} avec {practitioner}.\nMerci d'arriver dix minutes en avance.\n",
            treatment = booking.treatment_name,
            duration = booking.treatment_duration,
            date = booking.date.format("%Y-%m-%d"),
            time = booking.time.format("%H:%M"),
            practitioner = booking.practitioner_name,
        )
    }
}

/// Prépare la notification de confirmation d'une réservation engagée.
pub fn prepare_confirmation(
    booking: &BookingConfirmed,
    renderer: &dyn ConfirmationRenderer,
) -> Notification {
    Notification {
        subject: format!("Réservation confirmée : {}", booking.treatment_name),
        content: renderer.render(booking),
    }
}

/// Prépare un rappel texte pour la prochaine séance planifiée.
pub fn prepare_session_reminder(
    agenda: &Agenda,
    catalog: &Catalog,
    days_before: i64,
    today: NaiveDate,
) -> Result<Notification> {
    if days_before < 0 {
        bail!("days_before must be positive");
    }

    let mut upcoming: Vec<&Session> = agenda
        .sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Scheduled && s.date >= today)
        .collect();

    if upcoming.is_empty() {
        bail!("no upcoming session on the agenda");
    }

    upcoming.sort_by_key(|s| (s.date, s.time));
    let session = upcoming[0];

    let treatment = catalog
        .find_treatment(&session.treatment)
        .with_context(|| format!("unknown treatment: {}", session.treatment.as_str()))?;
    let practitioner = catalog
        .find_practitioner(&session.practitioner)
        .with_context(|| format!("unknown practitioner: {}", session.practitioner.as_str()))?;

    let notice_on = session.date - Duration::days(days_before);

    let content = format!(
        "Bonjour,\n\nRappel : séance \"{treatment}\" le {date} à {time} avec {practitioner}, {location}.\nCe message est généré pour le {notice}.\n",
        treatment = treatment.name,
        date = session.date.format("%Y-%m-%d"),
        time = session.time.format("%H:%M"),
        practitioner = practitioner.name,
        location = session.location,
        notice = notice_on.format("%Y-%m-%d"),
    );

    Ok(Notification {
        subject: format!("Rappel de séance : {}", treatment.name),
        content,
    })
}
