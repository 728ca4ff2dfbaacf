use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

/// Grille mensuelle pour l'affichage calendrier : cases vides en tête
/// (semaine commençant le dimanche) puis chaque jour du mois.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<Option<NaiveDate>>> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).with_context(|| format!("invalid month: {year}-{month:02}"))?;

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut days: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut current = first;
    while current.month() == month {
        days.push(Some(current));
        current = current.succ_opt().context("date overflow")?;
    }

    Ok(days)
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
