use crate::agenda::Agenda;
use crate::feedback::FeedbackLog;
use serde::{Deserialize, Serialize};

/// Synthèse d'avancement du programme de soins (pourcentages 0..=100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub symptom_reduction: u8,
    pub wellness_score: u8,
    pub treatment_completion: u8,
    pub next_milestone: String,
}

impl ProgressSummary {
    /// Calcule la synthèse à partir du planning et du journal de retours.
    pub fn compute(agenda: &Agenda, feedback: &FeedbackLog) -> Self {
        Self {
            symptom_reduction: symptom_reduction(feedback),
            wellness_score: wellness_score(feedback),
            treatment_completion: treatment_completion(agenda),
            next_milestone: next_milestone(agenda),
        }
    }
}

/// Part des séances du programme déjà effectuées.
fn treatment_completion(agenda: &Agenda) -> u8 {
    let total = agenda.sessions.len();
    if total == 0 {
        return 0;
    }
    (agenda.completed_count() * 100 / total) as u8
}

/// Moyenne des cinq derniers niveaux de bien-être, ramenée sur 100.
fn wellness_score(feedback: &FeedbackLog) -> u8 {
    let recent = feedback.recent(5);
    if recent.is_empty() {
        return 0;
    }
    let sum: u32 = recent.iter().map(|e| u32::from(e.wellness_level)).sum();
    (sum * 10 / recent.len() as u32).min(100) as u8
}

/// Amélioration entre le premier retour et le plus récent.
fn symptom_reduction(feedback: &FeedbackLog) -> u8 {
    let mut ordered: Vec<_> = feedback.entries.iter().collect();
    ordered.sort_by_key(|e| e.date);
    match (ordered.first(), ordered.last()) {
        (Some(first), Some(latest)) if latest.wellness_level > first.wellness_level => {
            (u32::from(latest.wellness_level - first.wellness_level) * 10).min(100) as u8
        }
        _ => 0,
    }
}

fn next_milestone(agenda: &Agenda) -> String {
    let upcoming = agenda.upcoming(1);
    match upcoming.first() {
        Some(session) => format!(
            "Prochaine séance le {} à {}",
            session.date.format("%Y-%m-%d"),
            session.time.format("%H:%M")
        ),
        None => "Aucune séance planifiée".to_string(),
    }
}
