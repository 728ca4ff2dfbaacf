use crate::model::{Practitioner, PractitionerId, Treatment, TreatmentId};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Catalogue de la clinique : soins et praticiens.
///
/// Construit une fois au démarrage puis passé par référence ; aucune
/// mutation en cours de session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub treatments: Vec<Treatment>,
    pub practitioners: Vec<Practitioner>,
}

impl Catalog {
    pub fn find_treatment(&self, id: &TreatmentId) -> Option<&Treatment> {
        self.treatments.iter().find(|t| &t.id == id)
    }

    pub fn find_practitioner(&self, id: &PractitionerId) -> Option<&Practitioner> {
        self.practitioners.iter().find(|p| &p.id == id)
    }

    pub fn validate(&self) -> Result<()> {
        if self.treatments.is_empty() {
            bail!("catalog must contain at least one treatment");
        }
        if self.practitioners.is_empty() {
            bail!("catalog must contain at least one practitioner");
        }
        for (i, t) in self.treatments.iter().enumerate() {
            if t.name.trim().is_empty() {
                bail!("treatment name cannot be empty: {}", t.id.as_str());
            }
            if t.duration_minutes == 0 {
                bail!("treatment duration must be > 0: {}", t.id.as_str());
            }
            if self.treatments.iter().skip(i + 1).any(|o| o.id == t.id) {
                bail!("duplicate treatment id: {}", t.id.as_str());
            }
        }
        for (i, p) in self.practitioners.iter().enumerate() {
            if p.name.trim().is_empty() {
                bail!("practitioner name cannot be empty: {}", p.id.as_str());
            }
            if self.practitioners.iter().skip(i + 1).any(|o| o.id == p.id) {
                bail!("duplicate practitioner id: {}", p.id.as_str());
            }
        }
        Ok(())
    }

    /// Catalogue par défaut de la clinique (cures Panchakarma).
    pub fn builtin() -> Self {
        let treatments = vec![
            Treatment {
                id: TreatmentId::new("abhyanga"),
                name: "Abhyanga (Full Body Oil Massage)".to_string(),
                duration_minutes: 90,
                description:
                    "Traditional Ayurvedic warm oil massage for deep relaxation and detoxification"
                        .to_string(),
            },
            Treatment {
                id: TreatmentId::new("shirodhara"),
                name: "Shirodhara".to_string(),
                duration_minutes: 60,
                description: "Continuous pouring of medicated oil on forehead for mental clarity"
                    .to_string(),
            },
            Treatment {
                id: TreatmentId::new("udvartana"),
                name: "Udvartana (Herbal Powder Massage)".to_string(),
                duration_minutes: 75,
                description: "Dry powder massage for weight management and skin enhancement"
                    .to_string(),
            },
            Treatment {
                id: TreatmentId::new("nasya"),
                name: "Nasya Therapy".to_string(),
                duration_minutes: 45,
                description: "Nasal administration of medicated oils for respiratory health"
                    .to_string(),
            },
            Treatment {
                id: TreatmentId::new("consultation"),
                name: "Panchakarma Consultation".to_string(),
                duration_minutes: 30,
                description: "Initial assessment and treatment planning session".to_string(),
            },
        ];
        let practitioners = vec![
            Practitioner::new("dr-sharma", "Dr. Priya Sharma", "Panchakarma Specialist"),
            Practitioner::new("dr-patel", "Dr. Raj Patel", "Ayurvedic Physician"),
            Practitioner::new("dr-kumar", "Dr. Anita Kumar", "Wellness Consultant"),
            Practitioner::new("dr-singh", "Dr. Vikram Singh", "Traditional Therapist"),
        ];
        Self {
            treatments,
            practitioners,
        }
    }
}

/// Charge un catalogue JSON et le valide.
pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_slice(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Export JSON du catalogue (jolie mise en forme)
pub fn export_catalog_json<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
