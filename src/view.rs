use serde::{Deserialize, Serialize};

/// Rôle de l'utilisateur de la session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Practitioner,
    Admin,
}

/// Variante de vue choisie une fois par session, à la place de conditions
/// de rôle éparpillées dans la couche de présentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleView {
    pub role: Role,
    pub agenda_title: &'static str,
    pub progress_title: &'static str,
    pub feedback_heading: &'static str,
    pub can_edit_sessions: bool,
    pub can_schedule_for_others: bool,
    pub sees_patient_names: bool,
}

impl RoleView {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Patient => Self {
                role,
                agenda_title: "Your Upcoming Sessions",
                progress_title: "Your Healing Journey",
                feedback_heading: "Post-Session Feedback",
                can_edit_sessions: false,
                can_schedule_for_others: false,
                sees_patient_names: false,
            },
            Role::Practitioner | Role::Admin => Self {
                role,
                agenda_title: "Scheduled Appointments",
                progress_title: "Patient Progress",
                feedback_heading: "Patient Feedback",
                can_edit_sessions: true,
                can_schedule_for_others: true,
                sees_patient_names: true,
            },
        }
    }
}
