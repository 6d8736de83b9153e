//! Fatwa classification enums
//!
//! | Category | Topic |
//! |----------|-------|
//! | Surgery | Operations, transplants, anaesthesia |
//! | WomenPregnancy | Obstetrics, contraception, pregnancy |
//! | IcuDeath | Intensive care, brain death, end of life |
//! | FastingMedicine | Medication and procedures while fasting |
//! | Ethics | Confidentiality, consent, professional conduct |
//! | GeneticsReproduction | IVF, genetic testing, reproduction |
//! | TattooCortisone | Cosmetic procedures, injections |
//! | PrayerPurity | Prayer and ritual purity for patients and staff |
//! | MedicalExperiments | Research and trials |
//! | PharmacyDrugs | Medicines, alcohol-based drugs, gelatin |
//! | Miscellaneous | Everything else |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a fatwa is filed under
///
/// Serialized in SCREAMING_SNAKE_CASE to match stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryId {
    /// Surgery and transplants
    Surgery,
    /// Women and pregnancy
    WomenPregnancy,
    /// Intensive care and death
    IcuDeath,
    /// Fasting and medicine
    FastingMedicine,
    /// Medical ethics
    Ethics,
    /// Genetics and reproduction
    GeneticsReproduction,
    /// Tattoos, cortisone and cosmetics
    TattooCortisone,
    /// Prayer and purity
    PrayerPurity,
    /// Medical experiments
    MedicalExperiments,
    /// Pharmacy and drugs
    PharmacyDrugs,
    /// Miscellaneous
    Miscellaneous,
}

impl CategoryId {
    /// All categories in display order
    pub const ALL: [CategoryId; 11] = [
        CategoryId::Surgery,
        CategoryId::WomenPregnancy,
        CategoryId::IcuDeath,
        CategoryId::FastingMedicine,
        CategoryId::Ethics,
        CategoryId::GeneticsReproduction,
        CategoryId::TattooCortisone,
        CategoryId::PrayerPurity,
        CategoryId::MedicalExperiments,
        CategoryId::PharmacyDrugs,
        CategoryId::Miscellaneous,
    ];

    /// Stored identifier (`"SURGERY"`, `"ICU_DEATH"`, ...)
    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Surgery => "SURGERY",
            CategoryId::WomenPregnancy => "WOMEN_PREGNANCY",
            CategoryId::IcuDeath => "ICU_DEATH",
            CategoryId::FastingMedicine => "FASTING_MEDICINE",
            CategoryId::Ethics => "ETHICS",
            CategoryId::GeneticsReproduction => "GENETICS_REPRODUCTION",
            CategoryId::TattooCortisone => "TATTOO_CORTISONE",
            CategoryId::PrayerPurity => "PRAYER_PURITY",
            CategoryId::MedicalExperiments => "MEDICAL_EXPERIMENTS",
            CategoryId::PharmacyDrugs => "PHARMACY_DRUGS",
            CategoryId::Miscellaneous => "MISCELLANEOUS",
        }
    }

    /// Prefix of generated fatwa ids (`surg_001_2025`)
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            CategoryId::Surgery => "surg",
            CategoryId::WomenPregnancy => "obgyn",
            CategoryId::IcuDeath => "icu",
            CategoryId::FastingMedicine => "fast",
            CategoryId::Ethics => "ethics",
            CategoryId::GeneticsReproduction => "genetic",
            CategoryId::TattooCortisone => "tattoo",
            CategoryId::PrayerPurity => "prayer",
            CategoryId::MedicalExperiments => "exp",
            CategoryId::PharmacyDrugs => "pharm",
            CategoryId::Miscellaneous => "misc",
        }
    }

    /// Position in [`CategoryId::ALL`]
    pub fn display_index(&self) -> usize {
        CategoryId::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(CategoryId::ALL.len())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a ruling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Permitted under stated conditions
    Conditional,
    /// Permitted
    Permitted,
    /// Forbidden
    Forbidden,
}

impl Verdict {
    /// Stored identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Conditional => "CONDITIONAL",
            Verdict::Permitted => "PERMITTED",
            Verdict::Forbidden => "FORBIDDEN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
