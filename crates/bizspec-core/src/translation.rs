use serde::{Deserialize, Serialize};

use crate::section::Section;

/// The four-section result of translating one business requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub technical_spec: String,
    pub feasibility: String,
    pub estimation: String,
    pub prototype_code: String,
}

impl Translation {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::TechnicalSpec => &self.technical_spec,
            Section::Feasibility => &self.feasibility,
            Section::Estimation => &self.estimation,
            Section::PrototypeCode => &self.prototype_code,
        }
    }

    pub fn set(&mut self, section: Section, value: String) {
        let slot = match section {
            Section::TechnicalSpec => &mut self.technical_spec,
            Section::Feasibility => &mut self.feasibility,
            Section::Estimation => &mut self.estimation,
            Section::PrototypeCode => &mut self.prototype_code,
        };
        *slot = value;
    }

    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_empty())
    }

    /// Sections paired with their text, in enumeration order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}
