#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use panchakarma::{
    availability::{AvailabilitySource, FullAvailability, RandomAvailability},
    catalog::{load_catalog_from_file, Catalog},
    hours::{load_hours_from_file, ClinicHours},
    io,
    model::{PractitionerId, TreatmentId},
    notification::{prepare_confirmation, prepare_session_reminder, TextConfirmation},
    progress::ProgressSummary,
    wizard::{BookingConfirmed, BookingWizard, ValidationError},
    Agenda, FeedbackEntry, FeedbackLog,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de réservation de séances (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Catalogue JSON (soins et praticiens) ; défaut : catalogue intégré
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Fenêtre d'ouverture JSON ; défaut : 09:00–17:00, fermé le dimanche
    #[arg(long, global = true)]
    hours: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le catalogue (soins puis praticiens)
    Catalog,

    /// Afficher la grille de créneaux d'une date
    Slots {
        /// Date `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// Source déterministe (tous les créneaux libres) au lieu du tirage
        #[arg(long)]
        full: bool,
        /// Export CSV de la grille (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Dérouler l'assistant de réservation de bout en bout
    Book {
        /// Date `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// Heure `HH:MM` parmi les créneaux disponibles
        #[arg(long)]
        time: String,
        /// Identifiant de soin du catalogue
        #[arg(long)]
        treatment: String,
        /// Identifiant de praticien du catalogue
        #[arg(long)]
        practitioner: String,
        #[arg(long)]
        notes: Option<String>,
        /// Source déterministe (utile pour les démonstrations scriptées)
        #[arg(long)]
        full: bool,
    },

    /// Lister le planning et optionnellement l'exporter
    Agenda {
        /// Import de séances depuis un CSV
        #[arg(long)]
        csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Enregistrer un retour de séance
    Feedback {
        /// Date `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// Identifiant de soin du catalogue
        #[arg(long)]
        treatment: String,
        /// Niveau de bien-être 1..=10
        #[arg(long)]
        wellness: u8,
        /// Niveau d'énergie 1..=10
        #[arg(long)]
        energy: u8,
        #[arg(long)]
        symptoms: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Synthèse d'avancement à partir d'un planning CSV
    Progress {
        #[arg(long)]
        csv: Option<String>,
    },

    /// Générer le rappel texte de la prochaine séance planifiée
    Remind {
        /// Planning CSV
        #[arg(long)]
        csv: String,
        #[arg(long, default_value_t = 2)]
        days_before: i64,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let catalog = match &cli.catalog {
        Some(path) => load_catalog_from_file(path)?,
        None => Catalog::builtin(),
    };
    catalog.validate()?;
    let hours = match &cli.hours {
        Some(path) => load_hours_from_file(path)?,
        None => ClinicHours::default(),
    };
    hours.validate()?;

    // sources de disponibilité pour `slots` et `book`
    let full_source = FullAvailability;
    let random_source = RandomAvailability::default();

    let code = match cli.cmd {
        Commands::Catalog => {
            for t in &catalog.treatments {
                println!(
                    "{} | {} | {} | {}",
                    t.id.as_str(),
                    t.name,
                    t.duration_label(),
                    t.description
                );
            }
            for p in &catalog.practitioners {
                println!("{} | {} | {}", p.id.as_str(), p.name, p.specialization);
            }
            0
        }
        Commands::Slots {
            date,
            full,
            out_csv,
        } => {
            let date = io::parse_date(&date)?;
            let source: &dyn AvailabilitySource = if full { &full_source } else { &random_source };
            let slots = source.slots_for(date, &hours, &catalog);
            for s in &slots {
                println!(
                    "{} | {} | {}",
                    s.time.format("%H:%M"),
                    if s.available { "libre" } else { "occupé" },
                    s.practitioner.as_str()
                );
            }
            if !slots.iter().any(|s| s.available) {
                println!("No available slots for this date");
            }
            if let Some(path) = out_csv {
                io::export_slots_csv(path, &slots)?;
            }
            0
        }
        Commands::Book {
            date,
            time,
            treatment,
            practitioner,
            notes,
            full,
        } => {
            let date = io::parse_date(&date)?;
            let time = io::parse_time(&time)?;
            let source: &dyn AvailabilitySource = if full { &full_source } else { &random_source };
            let mut wizard = BookingWizard::new(&catalog, &hours, source);
            match run_booking(&mut wizard, date, time, &treatment, &practitioner, notes) {
                Ok(confirmed) => {
                    let notification = prepare_confirmation(&confirmed, &TextConfirmation);
                    println!("{}", notification.subject);
                    print!("{}", notification.content);
                    0
                }
                Err(err) => {
                    eprintln!("step {}: {}", err.step().number(), err);
                    // Code 2 = échec de validation, récupérable par l'utilisateur
                    2
                }
            }
        }
        Commands::Agenda {
            csv,
            out_json,
            out_csv,
        } => {
            let mut agenda = Agenda::default();
            if let Some(path) = csv {
                agenda.sessions.extend(io::import_sessions_csv(path)?);
            }
            // impression compacte
            for s in &agenda.sessions {
                let treatment = catalog
                    .find_treatment(&s.treatment)
                    .map(|t| t.name.as_str())
                    .unwrap_or_else(|| s.treatment.as_str());
                let practitioner = catalog
                    .find_practitioner(&s.practitioner)
                    .map(|p| p.name.as_str())
                    .unwrap_or_else(|| s.practitioner.as_str());
                println!(
                    "{} | {} {} | {} | {} | {}",
                    s.id.as_str(),
                    s.date.format("%Y-%m-%d"),
                    s.time.format("%H:%M"),
                    treatment,
                    practitioner,
                    s.status.as_str()
                );
            }
            if let Some(path) = out_json {
                io::export_agenda_json(path, &agenda)?;
            }
            if let Some(path) = out_csv {
                io::export_agenda_csv(path, &agenda)?;
            }
            0
        }
        Commands::Feedback {
            date,
            treatment,
            wellness,
            energy,
            symptoms,
            notes,
        } => {
            let date = io::parse_date(&date)?;
            let entry = FeedbackEntry::new(
                date,
                TreatmentId::new(&treatment),
                wellness,
                energy,
                symptoms.unwrap_or_default(),
                notes.unwrap_or_default(),
            )
            .map_err(anyhow::Error::msg)?;
            let mut log = FeedbackLog::default();
            let id = log.submit(entry);
            println!(
                "Feedback recorded {} (wellness {}/10, energy {}/10)",
                id.as_str(),
                wellness,
                energy
            );
            0
        }
        Commands::Progress { csv } => {
            let mut agenda = Agenda::default();
            if let Some(path) = csv {
                agenda.sessions.extend(io::import_sessions_csv(path)?);
            }
            let summary = ProgressSummary::compute(&agenda, &FeedbackLog::default());
            println!("Symptom Reduction: {}%", summary.symptom_reduction);
            println!("Wellness Score: {}%", summary.wellness_score);
            println!("Treatment Progress: {}%", summary.treatment_completion);
            println!("Next Milestone: {}", summary.next_milestone);
            0
        }
        Commands::Remind {
            csv,
            days_before,
            out,
        } => {
            let mut agenda = Agenda::default();
            agenda.sessions.extend(io::import_sessions_csv(csv)?);
            let today = Local::now().date_naive();
            let reminder = prepare_session_reminder(&agenda, &catalog, days_before, today)?;
            if let Some(path) = out {
                std::fs::write(&path, &reminder.content)?;
            }
            println!("{}", reminder.subject);
            print!("{}", reminder.content);
            0
        }
    };

    std::process::exit(code);
}

fn run_booking(
    wizard: &mut BookingWizard<'_>,
    date: chrono::NaiveDate,
    time: chrono::NaiveTime,
    treatment: &str,
    practitioner: &str,
    notes: Option<String>,
) -> Result<BookingConfirmed, ValidationError> {
    wizard.select_date(date);
    wizard.advance()?;
    wizard.select_time(time)?;
    wizard.advance()?;
    wizard.select_treatment(&TreatmentId::new(treatment))?;
    wizard.advance()?;
    wizard.select_practitioner(&PractitionerId::new(practitioner))?;
    if let Some(notes) = notes {
        wizard.set_notes(notes);
    }
    wizard.confirm()
}
