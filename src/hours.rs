use anyhow::{bail, Context, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fenêtre d'ouverture de la clinique.
///
/// Les créneaux proposés couvrent `[open, close)` par pas de
/// `slot_minutes`. Jours fermés en numérotation ISO (1 = lundi … 7 =
/// dimanche), comme les gabarits de rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub slot_minutes: u16,
    #[serde(default)]
    pub closed_days: Vec<u8>,
}

impl Default for ClinicHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            slot_minutes: 30,
            // fermé le dimanche
            closed_days: vec![7],
        }
    }
}

impl ClinicHours {
    pub fn validate(&self) -> Result<()> {
        if self.close <= self.open {
            bail!("clinic close time must be after open time");
        }
        if self.slot_minutes == 0 {
            bail!("slot_minutes must be > 0");
        }
        if let Some(d) = self.closed_days.iter().find(|d| **d < 1 || **d > 7) {
            bail!("invalid closed day {d} (expected 1..=7)");
        }
        Ok(())
    }

    /// Heures de début de créneau, croissantes, de `open` jusqu'à `close`
    /// exclus. Fenêtre par défaut : 16 créneaux de 09:00 à 16:30.
    pub fn grid(&self) -> Vec<NaiveTime> {
        let mut out = Vec::new();
        let mut t = self.open;
        while t < self.close {
            out.push(t);
            let next = t + Duration::minutes(i64::from(self.slot_minutes));
            if next <= t {
                // l'addition NaiveTime boucle à minuit
                break;
            }
            t = next;
        }
        out
    }

    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday().number_from_monday() as u8;
        !self.closed_days.contains(&weekday)
    }

    /// Une date est réservable si elle n'est pas passée et que la clinique
    /// est ouverte ce jour-là.
    pub fn is_bookable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= today && self.is_open_on(date)
    }
}

/// Charge une fenêtre d'ouverture JSON et la valide.
pub fn load_hours_from_file<P: AsRef<Path>>(path: P) -> Result<ClinicHours> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading hours {}", path.display()))?;
    let hours: ClinicHours = serde_json::from_slice(&data)
        .with_context(|| format!("parsing hours {}", path.display()))?;
    hours.validate()?;
    Ok(hours)
}

/// Export JSON de la fenêtre d'ouverture.
pub fn export_hours_json<P: AsRef<Path>>(path: P, hours: &ClinicHours) -> Result<()> {
    let json = serde_json::to_string_pretty(hours)?;
    fs::write(path, json)?;
    Ok(())
}
