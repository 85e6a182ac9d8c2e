use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four sections the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    TechnicalSpec,
    Feasibility,
    Estimation,
    PrototypeCode,
}

impl Section {
    /// Fixed enumeration order. The prompt lists sections in this order and
    /// the segmenter resolves markers in this order.
    pub const ALL: &[Section] = &[
        Section::TechnicalSpec,
        Section::Feasibility,
        Section::Estimation,
        Section::PrototypeCode,
    ];

    /// Result key, as serialized in a `Translation`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::TechnicalSpec => "technical_spec",
            Section::Feasibility => "feasibility",
            Section::Estimation => "estimation",
            Section::PrototypeCode => "prototype_code",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::TechnicalSpec => "Technical Specification",
            Section::Feasibility => "Feasibility",
            Section::Estimation => "Estimation",
            Section::PrototypeCode => "Prototype Code",
        }
    }

    /// Literal heading variants accepted for this section, in match order.
    /// The first entry is the canonical heading written into the prompt.
    pub fn headings(&self) -> &'static [&'static str] {
        match self {
            Section::TechnicalSpec => &["## 1. 技術仕様書", "##1. 技術仕様書", "## 1.技術仕様書"],
            Section::Feasibility => &[
                "## 2. 実装可能性評価",
                "##2. 実装可能性評価",
                "## 2.実装可能性評価",
            ],
            Section::Estimation => &["## 3. 工数見積もり", "##3. 工数見積もり", "## 3.工数見積もり"],
            Section::PrototypeCode => &[
                "## 4. プロトタイプコード",
                "##4. プロトタイプコード",
                "## 4.プロトタイプコード",
            ],
        }
    }

    pub fn canonical_heading(&self) -> &'static str {
        self.headings()[0]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
