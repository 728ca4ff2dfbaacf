#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use panchakarma::{
    agenda::{Agenda, Session, SessionStatus, DEFAULT_LOCATION},
    catalog::Catalog,
    feedback::{FeedbackEntry, FeedbackLog},
    io,
    model::{PractitionerId, SessionId, TreatmentId},
    notification::{prepare_confirmation, prepare_session_reminder, TextConfirmation},
    progress::ProgressSummary,
    view::{Role, RoleView},
    wizard::BookingConfirmed,
};
use tempfile::tempdir;

#[test]
fn record_creates_a_scheduled_session() {
    let catalog = Catalog::builtin();
    let mut agenda = Agenda::default();

    let id = agenda.record(&sample_booking(), &catalog);
    let session = agenda.find_session(&id).unwrap();

    assert_eq!(session.status, SessionStatus::Scheduled);
    assert_eq!(session.duration_minutes, 60);
    assert_eq!(session.location, DEFAULT_LOCATION);
    assert_eq!(session.date, date(2025, 6, 10));
    assert_eq!(session.time, time(10, 0));
}

#[test]
fn upcoming_sorts_ascending_and_caps() {
    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(20, 9, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(12, 14, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(11, 9, SessionStatus::Completed));
    agenda.sessions.push(sample_session(15, 9, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(18, 9, SessionStatus::Scheduled));

    let upcoming = agenda.upcoming(3);
    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[0].date, date(2025, 6, 12));
    assert_eq!(upcoming[1].date, date(2025, 6, 15));
    assert_eq!(upcoming[2].date, date(2025, 6, 18));
}

#[test]
fn today_filters_by_date_and_orders_by_time() {
    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(12, 15, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(12, 9, SessionStatus::Completed));
    agenda.sessions.push(sample_session(13, 9, SessionStatus::Scheduled));

    let today = agenda.today(date(2025, 6, 12));
    assert_eq!(today.len(), 2);
    assert_eq!(today[0].time, time(9, 0));
    assert_eq!(today[1].time, time(15, 0));
}

#[test]
fn set_status_returns_the_previous_one() {
    let mut agenda = Agenda::default();
    let session = sample_session(12, 9, SessionStatus::Scheduled);
    let id = session.id.clone();
    agenda.sessions.push(session);

    let prev = agenda.set_status(&id, SessionStatus::Completed);
    assert_eq!(prev, Some(SessionStatus::Scheduled));
    assert_eq!(agenda.completed_count(), 1);

    let missing = agenda.set_status(&SessionId::new("nope"), SessionStatus::Cancelled);
    assert!(missing.is_none());
}

#[test]
fn feedback_levels_are_range_checked() {
    assert!(entry(0, 5).is_err());
    assert!(entry(11, 5).is_err());
    assert!(entry(5, 0).is_err());
    assert!(entry(5, 11).is_err());
    assert!(entry(1, 10).is_ok());
}

#[test]
fn recent_feedback_is_newest_first() {
    let mut log = FeedbackLog::default();
    for (day, wellness) in [(1u32, 4u8), (10, 6), (20, 8)] {
        log.submit(
            FeedbackEntry::new(
                date(2025, 6, day),
                TreatmentId::new("shirodhara"),
                wellness,
                6,
                "",
                "",
            )
            .unwrap(),
        );
    }

    let recent = log.recent(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, date(2025, 6, 20));
    assert_eq!(recent[1].date, date(2025, 6, 10));
}

#[test]
fn progress_summary_percentages() {
    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(1, 9, SessionStatus::Completed));
    agenda.sessions.push(sample_session(5, 9, SessionStatus::Completed));
    agenda.sessions.push(sample_session(20, 9, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(25, 9, SessionStatus::Scheduled));

    let mut log = FeedbackLog::default();
    log.submit(entry_on(1, 4));
    log.submit(entry_on(20, 8));

    let summary = ProgressSummary::compute(&agenda, &log);
    assert_eq!(summary.treatment_completion, 50);
    // moyenne (4 + 8) / 2 = 6 sur 10
    assert_eq!(summary.wellness_score, 60);
    // de 4 à 8 : +4 points
    assert_eq!(summary.symptom_reduction, 40);
    assert_eq!(summary.next_milestone, "Prochaine séance le 2025-06-20 à 09:00");
}

#[test]
fn empty_progress_is_zeroed() {
    let summary = ProgressSummary::compute(&Agenda::default(), &FeedbackLog::default());
    assert_eq!(summary.treatment_completion, 0);
    assert_eq!(summary.wellness_score, 0);
    assert_eq!(summary.symptom_reduction, 0);
    assert_eq!(summary.next_milestone, "Aucune séance planifiée");
}

#[test]
fn confirmation_notification_matches_the_toast() {
    let notification = prepare_confirmation(&sample_booking(), &TextConfirmation);
    assert_eq!(notification.subject, "Réservation confirmée : Shirodhara");
    assert_eq!(
        notification.content,
        "Bonjour,\n\nVotre séance \"Shirodhara\" (60 min) est confirmée le 2025-06-10 à 10:00 avec Dr. Raj Patel.\nMerci d'arriver dix minutes en avance.\n"
    );
}

#[test]
fn reminder_targets_the_next_scheduled_session() {
    let catalog = Catalog::builtin();
    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(20, 9, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(12, 14, SessionStatus::Scheduled));

    let reminder = prepare_session_reminder(&agenda, &catalog, 2, date(2025, 6, 1)).unwrap();
    assert_eq!(
        reminder.subject,
        "Rappel de séance : Abhyanga (Full Body Oil Massage)"
    );
    assert!(reminder.content.contains("le 2025-06-12 à 14:00"));
    assert!(reminder.content.contains("Dr. Priya Sharma"));
    assert!(reminder.content.contains("2025-06-10"));
}

#[test]
fn reminder_fails_without_upcoming_sessions() {
    let catalog = Catalog::builtin();
    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(5, 9, SessionStatus::Completed));

    assert!(prepare_session_reminder(&agenda, &catalog, 2, date(2025, 6, 10)).is_err());
}

#[test]
fn agenda_csv_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("agenda.csv");

    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(12, 14, SessionStatus::Scheduled));
    agenda.sessions.push(sample_session(13, 9, SessionStatus::Completed));

    io::export_agenda_csv(&path, &agenda).unwrap();
    let imported = io::import_sessions_csv(&path).unwrap();

    assert_eq!(imported.len(), 2);
    assert_eq!(imported[0].treatment, TreatmentId::new("abhyanga"));
    assert_eq!(imported[0].date, date(2025, 6, 12));
    assert_eq!(imported[0].time, time(14, 0));
    assert_eq!(imported[0].duration_minutes, 90);
    assert_eq!(imported[0].location, "Therapy Room 2");
    assert_eq!(imported[1].status, SessionStatus::Completed);
}

#[test]
fn agenda_json_export_parses_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("agenda.json");

    let mut agenda = Agenda::default();
    agenda.sessions.push(sample_session(12, 14, SessionStatus::InProgress));

    io::export_agenda_json(&path, &agenda).unwrap();
    let data = std::fs::read(&path).unwrap();
    let parsed: Agenda = serde_json::from_slice(&data).unwrap();
    assert_eq!(parsed.sessions, agenda.sessions);
}

#[test]
fn slot_grid_csv_export() {
    use panchakarma::availability::{AvailabilitySource, FullAvailability};
    use panchakarma::hours::ClinicHours;

    let dir = tempdir().unwrap();
    let path = dir.path().join("slots.csv");
    let catalog = Catalog::builtin();
    let slots = FullAvailability.slots_for(date(2025, 6, 10), &ClinicHours::default(), &catalog);

    io::export_slots_csv(&path, &slots).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("time,available,practitioner"));
    assert!(content.contains("09:00,true,dr-sharma"));
    assert!(content.contains("16:30"));
}

#[test]
fn catalog_and_hours_json_round_trips() {
    use panchakarma::catalog::{export_catalog_json, load_catalog_from_file};
    use panchakarma::hours::{export_hours_json, load_hours_from_file, ClinicHours};

    let dir = tempdir().unwrap();

    let catalog_path = dir.path().join("catalog.json");
    export_catalog_json(&catalog_path, &Catalog::builtin()).unwrap();
    let catalog = load_catalog_from_file(&catalog_path).unwrap();
    assert_eq!(catalog.treatments.len(), 5);

    let hours_path = dir.path().join("hours.json");
    export_hours_json(&hours_path, &ClinicHours::default()).unwrap();
    let hours = load_hours_from_file(&hours_path).unwrap();
    assert_eq!(hours, ClinicHours::default());
    assert_eq!(hours.grid().len(), 16);
}

#[test]
fn parse_helpers_reject_garbage() {
    assert!(io::parse_date("2025-13-01").is_err());
    assert!(io::parse_time("25:00").is_err());
    assert_eq!(io::parse_date(" 2025-06-10 ").unwrap(), date(2025, 6, 10));
    assert_eq!(io::parse_time("09:30").unwrap(), time(9, 30));
}

#[test]
fn role_views_are_selected_once() {
    let patient = RoleView::for_role(Role::Patient);
    assert_eq!(patient.agenda_title, "Your Upcoming Sessions");
    assert!(!patient.can_edit_sessions);
    assert!(!patient.sees_patient_names);

    let practitioner = RoleView::for_role(Role::Practitioner);
    assert_eq!(practitioner.agenda_title, "Scheduled Appointments");
    assert!(practitioner.can_edit_sessions);

    let admin = RoleView::for_role(Role::Admin);
    assert!(admin.can_schedule_for_others);
    assert!(admin.sees_patient_names);
}

fn sample_booking() -> BookingConfirmed {
    BookingConfirmed {
        date: date(2025, 6, 10),
        time: time(10, 0),
        treatment: TreatmentId::new("shirodhara"),
        treatment_name: "Shirodhara".to_string(),
        treatment_duration: "60 min".to_string(),
        practitioner: PractitionerId::new("dr-patel"),
        practitioner_name: "Dr. Raj Patel".to_string(),
        notes: String::new(),
    }
}

fn sample_session(day: u32, hour: u32, status: SessionStatus) -> Session {
    Session {
        id: SessionId::random(),
        treatment: TreatmentId::new("abhyanga"),
        practitioner: PractitionerId::new("dr-sharma"),
        date: date(2025, 6, day),
        time: time(hour, 0),
        duration_minutes: 90,
        location: "Therapy Room 2".to_string(),
        status,
    }
}

fn entry(wellness: u8, energy: u8) -> Result<FeedbackEntry, String> {
    FeedbackEntry::new(
        date(2025, 6, 10),
        TreatmentId::new("shirodhara"),
        wellness,
        energy,
        "",
        "",
    )
}

fn entry_on(day: u32, wellness: u8) -> FeedbackEntry {
    FeedbackEntry::new(
        date(2025, 6, day),
        TreatmentId::new("shirodhara"),
        wellness,
        6,
        "",
        "",
    )
    .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
