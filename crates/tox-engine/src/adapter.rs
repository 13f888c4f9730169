//! Source row shapes and their conversion into [`ChemicalRecord`].
//!
//! Each data source has its own key convention:
//! - the pollutant directory uses camelCase keys (`casNumber`, `riskLevel`)
//! - the LD50 remote table uses spaced PascalCase column names
//!   (`"IUPAC Name"`, `"Toxicity Value"`); its import script writes
//!   snake_case columns, accepted here through serde aliases
//!
//! Component logic only ever sees the canonical record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tox_core::entities::ChemicalRecord;
use tox_core::enums::{Category, RiskTier};

use crate::classify::ThresholdScheme;

/// Unit the LD50 dataset reports values in.
pub const LD50_UNIT: &str = "mg/kg";

/// A pollutant directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollutantRow {
    pub id: String,
    pub name: String,
    pub cas_number: String,
    pub category: Category,
    pub usage: String,
    #[serde(default)]
    pub smiles: String,
    #[serde(default)]
    pub risk_level: Option<RiskTier>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PollutantRow {
    #[must_use]
    pub fn into_record(self) -> ChemicalRecord {
        ChemicalRecord {
            id: self.id,
            name: self.name,
            alternate_name: None,
            code: non_blank(self.cas_number),
            category: self.category,
            description: self.usage,
            structure: non_blank(self.smiles),
            inchikey: None,
            pubchem_cid: None,
            toxicity_value: None,
            unit: None,
            risk: self.risk_level,
            created_at: self.created_at,
        }
    }
}

/// A row of the chicken oral acute toxicity LD50 table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ld50Row {
    #[serde(rename = "TAID", alias = "id")]
    pub taid: String,
    #[serde(rename = "Name", alias = "name", default = "unknown_name")]
    pub name: String,
    #[serde(rename = "IUPAC Name", alias = "iupac_name", default)]
    pub iupac_name: Option<String>,
    #[serde(rename = "PubChem CID", alias = "pubchem_cid", default)]
    pub pubchem_cid: Option<u64>,
    #[serde(rename = "Canonical SMILES", alias = "canonical_smiles", default)]
    pub canonical_smiles: Option<String>,
    #[serde(rename = "InChIKey", alias = "inchikey", default)]
    pub inchikey: Option<String>,
    #[serde(rename = "Toxicity Value", alias = "toxicity_value", default)]
    pub toxicity_value: Option<f64>,
    #[serde(alias = "toxicity_unit", default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn unknown_name() -> String {
    String::from("Unknown")
}

impl Ld50Row {
    /// Convert to the canonical record, deriving the risk tier from the value.
    ///
    /// A stored category is kept when it parses; otherwise the category is
    /// inferred from the chemical name.
    #[must_use]
    pub fn into_record(self, scheme: &ThresholdScheme) -> ChemicalRecord {
        let category = self
            .category
            .as_deref()
            .and_then(Category::from_label)
            .unwrap_or_else(|| infer_category(&self.name));
        ChemicalRecord {
            risk: self.toxicity_value.map(|value| scheme.classify(value)),
            id: self.taid,
            name: self.name,
            alternate_name: self.iupac_name.and_then(non_blank),
            code: None,
            category,
            description: String::new(),
            structure: self.canonical_smiles.and_then(non_blank),
            inchikey: self.inchikey.and_then(non_blank),
            pubchem_cid: self.pubchem_cid,
            toxicity_value: self.toxicity_value,
            unit: Some(
                self.unit
                    .and_then(non_blank)
                    .unwrap_or_else(|| LD50_UNIT.to_string()),
            ),
            created_at: None,
        }
    }
}

/// Keyword groups checked in order; the first group with a hit wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::OrganochlorinePesticide,
        &["lindane", "aldrin", "endrin", "dieldrin", "chlordane", "heptachlor"],
    ),
    (
        Category::OrganophosphatePesticide,
        &["parathion", "malathion", "chlorpyrifos", "diazinon", "phosmet"],
    ),
    (
        Category::Carbamate,
        &["carbaryl", "carbofuran", "aldicarb", "methomyl"],
    ),
    (
        Category::Herbicide,
        &["atrazine", "simazine", "alachlor", "metolachlor", "paraquat"],
    ),
    (
        Category::Pyrethroid,
        &["permethrin", "cypermethrin", "deltamethrin", "allethrin"],
    ),
    (
        Category::HeavyMetal,
        &["mercury", "lead", "arsenic", "cadmium"],
    ),
    (
        Category::Mycotoxin,
        &["aflatoxin", "fumonisin", "deoxynivalenol", "zearalenone", "t-2"],
    ),
    (
        Category::Pharmaceutical,
        &["antibiotic", "sulfonamide", "tetracycline"],
    ),
];

/// Infer a chemical category from its name by keyword.
#[must_use]
pub fn infer_category(name: &str) -> Category {
    let lower = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(Category::Other, |(category, _)| *category)
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn pollutant_row_maps_camel_case_shape() {
        let row: PollutantRow = serde_json::from_str(
            r#"{
                "id": "p4",
                "name": "Atrazine",
                "casNumber": "1912-24-9",
                "category": "Pesticide",
                "usage": "Herbicide used in corn feed production.",
                "smiles": "CCNC1=NC(=NC(=N1)Cl)NC(C)C",
                "riskLevel": "High",
                "createdAt": "2023-04-20T00:00:00.000Z"
            }"#,
        )
        .unwrap();
        let record = row.into_record();

        assert_eq!(record.code.as_deref(), Some("1912-24-9"));
        assert_eq!(record.description, "Herbicide used in corn feed production.");
        assert_eq!(record.category, Category::Pesticide);
        assert_eq!(record.risk, Some(RiskTier::High));
        assert!(record.created_at.is_some());
        assert!(record.toxicity_value.is_none());
    }

    #[test]
    fn pollutant_row_blank_smiles_is_none() {
        let row = PollutantRow {
            id: "p9".into(),
            name: "Copper sulfate".into(),
            cas_number: "7758-98-7".into(),
            category: Category::HeavyMetal,
            usage: "Footbath disinfectant.".into(),
            smiles: String::new(),
            risk_level: None,
            created_at: None,
        };
        assert!(row.into_record().structure.is_none());
    }

    #[test]
    fn ld50_row_reads_remote_column_names() {
        let row: Ld50Row = serde_json::from_str(
            r#"{
                "TAID": "TAID-0007",
                "Name": "Carbofuran",
                "IUPAC Name": "2,2-dimethyl-3H-1-benzofuran-7-yl N-methylcarbamate",
                "PubChem CID": 2566,
                "Canonical SMILES": "CC1(C)CC2=C(O1)C(=CC=C2)OC(=O)NC",
                "InChIKey": "DUEPRVBVGDRKAG-UHFFFAOYSA-N",
                "Toxicity Value": 0.38
            }"#,
        )
        .unwrap();
        let record = row.into_record(&ThresholdScheme::ld50());

        assert_eq!(record.id, "TAID-0007");
        assert_eq!(record.category, Category::Carbamate);
        assert_eq!(record.risk, Some(RiskTier::High));
        assert_eq!(record.unit.as_deref(), Some(LD50_UNIT));
        assert_eq!(record.pubchem_cid, Some(2566));
    }

    #[test]
    fn ld50_row_reads_import_script_columns() {
        let row: Ld50Row = serde_json::from_str(
            r#"{
                "id": "TOX-12",
                "name": "Sodium chloride",
                "iupac_name": null,
                "toxicity_value": 6000.0,
                "toxicity_unit": "mg/kg",
                "category": "Other",
                "risk_level": "Very Low"
            }"#,
        )
        .unwrap();
        let record = row.into_record(&ThresholdScheme::ld50());

        assert_eq!(record.id, "TOX-12");
        assert_eq!(record.risk, Some(RiskTier::VeryLow));
        assert_eq!(record.category, Category::Other);
        assert!(record.alternate_name.is_none());
    }

    #[test]
    fn ld50_row_without_value_has_no_tier() {
        let row: Ld50Row = serde_json::from_str(r#"{"TAID": "T1"}"#).unwrap();
        let record = row.into_record(&ThresholdScheme::ld50());
        assert_eq!(record.name, "Unknown");
        assert!(record.toxicity_value.is_none());
        assert!(record.risk.is_none());
    }

    #[rstest]
    #[case("Lindane", Category::OrganochlorinePesticide)]
    #[case("Methyl parathion", Category::OrganophosphatePesticide)]
    #[case("ALDICARB", Category::Carbamate)]
    #[case("Paraquat dichloride", Category::Herbicide)]
    #[case("Cypermethrin", Category::Pyrethroid)]
    #[case("Mercuric chloride (mercury)", Category::HeavyMetal)]
    #[case("Aflatoxin B1", Category::Mycotoxin)]
    #[case("Oxytetracycline", Category::Pharmaceutical)]
    #[case("Caffeine", Category::Other)]
    fn infers_category_from_name(#[case] name: &str, #[case] expected: Category) {
        assert_eq!(infer_category(name), expected);
    }

    #[rstest]
    #[case("Hormone", Category::Other)]
    #[case("Pesticide", Category::Other)]
    #[case("Antibiotic", Category::Pharmaceutical)]
    #[case("Lead acetate", Category::HeavyMetal)]
    fn inference_never_yields_directory_only_categories(
        #[case] name: &str,
        #[case] expected: Category,
    ) {
        assert_eq!(infer_category(name), expected);
    }

    #[test]
    fn earlier_keyword_group_wins() {
        // "endrin" (organochlorine) is checked before "lead" (heavy metal).
        assert_eq!(infer_category("lead endrin mix"), Category::OrganochlorinePesticide);
    }
}
