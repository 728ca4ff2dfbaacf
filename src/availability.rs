use crate::catalog::Catalog;
use crate::hours::ClinicHours;
use crate::model::TimeSlot;
use chrono::NaiveDate;
use rand::Rng;

/// Source de disponibilité des créneaux d'une date.
///
/// C'est la couture où une vraie implémentation brancherait une requête
/// déterministe sur les réservations existantes et l'agenda des praticiens.
pub trait AvailabilitySource {
    fn slots_for(&self, date: NaiveDate, hours: &ClinicHours, catalog: &Catalog) -> Vec<TimeSlot>;
}

/// Politique de substitution : tirage aléatoire.
///
/// Chaque créneau de la grille est disponible avec la probabilité
/// `availability_rate` et reçoit un praticien tiré uniformément dans le
/// catalogue. Aucune stabilité d'un appel à l'autre.
#[derive(Debug, Clone, Copy)]
pub struct RandomAvailability {
    pub availability_rate: f64,
}

impl Default for RandomAvailability {
    fn default() -> Self {
        Self {
            availability_rate: 0.7,
        }
    }
}

impl AvailabilitySource for RandomAvailability {
    fn slots_for(&self, date: NaiveDate, hours: &ClinicHours, catalog: &Catalog) -> Vec<TimeSlot> {
        if !hours.is_open_on(date) || catalog.practitioners.is_empty() {
            return Vec::new();
        }
        let rate = self.availability_rate.clamp(0.0, 1.0);
        let mut rng = rand::thread_rng();
        hours
            .grid()
            .into_iter()
            .map(|time| {
                let pick = rng.gen_range(0..catalog.practitioners.len());
                TimeSlot {
                    time,
                    available: rng.gen_bool(rate),
                    practitioner: catalog.practitioners[pick].id.clone(),
                }
            })
            .collect()
    }
}

/// Source déterministe : tous les créneaux ouverts, praticiens en
/// tourniquet. Utile pour les tests et les démonstrations.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullAvailability;

impl AvailabilitySource for FullAvailability {
    fn slots_for(&self, date: NaiveDate, hours: &ClinicHours, catalog: &Catalog) -> Vec<TimeSlot> {
        if !hours.is_open_on(date) || catalog.practitioners.is_empty() {
            return Vec::new();
        }
        hours
            .grid()
            .into_iter()
            .enumerate()
            .map(|(i, time)| TimeSlot {
                time,
                available: true,
                practitioner: catalog.practitioners[i % catalog.practitioners.len()]
                    .id
                    .clone(),
            })
            .collect()
    }
}
