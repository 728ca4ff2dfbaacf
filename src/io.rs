use crate::agenda::{Agenda, Session, SessionStatus, DEFAULT_LOCATION};
use crate::model::{PractitionerId, SessionId, TimeSlot, TreatmentId};
use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Parse une date `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date: {raw}"))
}

/// Parse une heure `HH:MM`.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").with_context(|| format!("invalid time: {raw}"))
}

/// Import de séances depuis CSV: header
/// `treatment,practitioner,date,time,duration_minutes[,location][,status]`
pub fn import_sessions_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Session>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let treatment = rec.get(0).context("missing treatment")?.trim();
        let practitioner = rec.get(1).context("missing practitioner")?.trim();
        if treatment.is_empty() || practitioner.is_empty() {
            bail!("invalid session row (empty)");
        }
        let date = parse_date(rec.get(2).context("missing date")?)?;
        let time = parse_time(rec.get(3).context("missing time")?)?;
        let duration_minutes: u16 = rec
            .get(4)
            .context("missing duration_minutes")?
            .trim()
            .parse()
            .with_context(|| format!("invalid duration_minutes for {treatment}"))?;
        let location = rec
            .get(5)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
            .to_string();
        let status = match rec.get(6).map(str::trim) {
            Some(s) if !s.is_empty() => SessionStatus::parse(s).map_err(anyhow::Error::msg)?,
            _ => SessionStatus::Scheduled,
        };
        out.push(Session {
            id: SessionId::random(),
            treatment: TreatmentId::new(treatment),
            practitioner: PractitionerId::new(practitioner),
            date,
            time,
            duration_minutes,
            location,
            status,
        });
    }
    Ok(out)
}

/// Export CSV de la grille d'une date: header `time,available,practitioner`
pub fn export_slots_csv<P: AsRef<Path>>(path: P, slots: &[TimeSlot]) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = open_sibling_tempfile(path)?;
    {
        let mut w = WriterBuilder::new().has_headers(true).from_writer(&mut tmp);
        w.write_record(["time", "available", "practitioner"])?;
        for s in slots {
            let time = s.time.format("%H:%M").to_string();
            w.write_record([
                time.as_str(),
                if s.available { "true" } else { "false" },
                s.practitioner.as_str(),
            ])?;
        }
        w.flush()?;
    }
    persist_atomic(tmp, path)
}

/// Export CSV du planning, relisible par `import_sessions_csv` (l'identifiant
/// généré est en dernière colonne et ignoré à l'import): header
/// `treatment,practitioner,date,time,duration_minutes,location,status,id`
pub fn export_agenda_csv<P: AsRef<Path>>(path: P, agenda: &Agenda) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = open_sibling_tempfile(path)?;
    {
        let mut w = WriterBuilder::new().has_headers(true).from_writer(&mut tmp);
        w.write_record([
            "treatment",
            "practitioner",
            "date",
            "time",
            "duration_minutes",
            "location",
            "status",
            "id",
        ])?;
        let mut minutes = itoa::Buffer::new();
        for s in &agenda.sessions {
            let date = s.date.format("%Y-%m-%d").to_string();
            let time = s.time.format("%H:%M").to_string();
            w.write_record([
                s.treatment.as_str(),
                s.practitioner.as_str(),
                date.as_str(),
                time.as_str(),
                minutes.format(s.duration_minutes),
                s.location.as_str(),
                s.status.as_str(),
                s.id.as_str(),
            ])?;
        }
        w.flush()?;
    }
    persist_atomic(tmp, path)
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_agenda_json<P: AsRef<Path>>(path: P, agenda: &Agenda) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = open_sibling_tempfile(path)?;
    let json = serde_json::to_vec_pretty(agenda)?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    persist_atomic(tmp, path)
}

fn open_sibling_tempfile(path: &Path) -> Result<NamedTempFile> {
    NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")
}

/// Renommage atomique vers la destination finale.
fn persist_atomic(tmp: NamedTempFile, path: &Path) -> Result<()> {
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
