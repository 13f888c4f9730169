//! Prompt text for risk-assessment summaries.

use std::fmt::Write;

use tox_core::entities::{ChemicalRecord, ToxicityObservation};

/// One line per observation: `- {type} on {organism}: {endpoint} = {value} {unit}`.
#[must_use]
pub fn observation_lines(observations: &[ToxicityObservation]) -> String {
    observations
        .iter()
        .map(|obs| {
            format!(
                "- {} on {}: {} = {} {}",
                obs.toxicity_type, obs.test_organism, obs.endpoint, obs.value, obs.unit
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ask for a short ecotoxicological risk assessment of one pollutant.
#[must_use]
pub fn build_prompt(record: &ChemicalRecord, observations: &[ToxicityObservation]) -> String {
    let risk = record.risk.map_or("Unknown", |tier| tier.as_str());
    let mut prompt = String::from(
        "Act as an ecotoxicologist. Provide a concise risk assessment summary \
         (max 150 words) for the following pollutant found in livestock farming:\n\n",
    );
    let _ = writeln!(prompt, "Name: {}", record.name);
    let _ = writeln!(prompt, "Category: {}", record.category);
    let _ = writeln!(prompt, "Usage: {}", record.description);
    let _ = writeln!(prompt, "Risk Level: {risk}");
    prompt.push_str("\nKnown Toxicity Data:\n");
    if observations.is_empty() {
        prompt.push_str("- none recorded\n");
    } else {
        prompt.push_str(&observation_lines(observations));
        prompt.push('\n');
    }
    prompt.push_str(
        "\nFocus on environmental impact and potential risks to aquatic life or human health.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tox_core::enums::{Category, RiskTier};

    use super::*;

    fn estradiol() -> ChemicalRecord {
        ChemicalRecord {
            id: "p2".into(),
            name: "Estradiol".into(),
            alternate_name: None,
            code: Some("50-28-2".into()),
            category: Category::Hormone,
            description: "Growth promoter in livestock.".into(),
            structure: None,
            inchikey: None,
            pubchem_cid: None,
            toxicity_value: None,
            unit: None,
            risk: Some(RiskTier::High),
            created_at: None,
        }
    }

    fn observation(endpoint: &str, value: f64) -> ToxicityObservation {
        ToxicityObservation {
            id: "t3".into(),
            pollutant_id: "p2".into(),
            toxicity_type: "Endocrine Disruption".into(),
            test_organism: "Danio rerio".into(),
            endpoint: endpoint.into(),
            value,
            unit: "mg/L".into(),
            reference: "Aquatic Tox 2021".into(),
        }
    }

    #[test]
    fn lists_each_observation_on_its_own_line() {
        let lines = observation_lines(&[observation("EC50", 0.005), observation("LOEC", 0.001)]);
        assert_eq!(
            lines,
            "- Endocrine Disruption on Danio rerio: EC50 = 0.005 mg/L\n\
             - Endocrine Disruption on Danio rerio: LOEC = 0.001 mg/L"
        );
    }

    #[test]
    fn prompt_carries_record_fields() {
        let prompt = build_prompt(&estradiol(), &[observation("EC50", 0.005)]);
        assert!(prompt.starts_with("Act as an ecotoxicologist."));
        assert!(prompt.contains("max 150 words"));
        assert!(prompt.contains("Name: Estradiol\n"));
        assert!(prompt.contains("Category: Hormone\n"));
        assert!(prompt.contains("Usage: Growth promoter in livestock.\n"));
        assert!(prompt.contains("Risk Level: High\n"));
        assert!(prompt.contains("- Endocrine Disruption on Danio rerio: EC50 = 0.005 mg/L"));
    }

    #[test]
    fn prompt_without_tier_or_data() {
        let mut record = estradiol();
        record.risk = None;
        let prompt = build_prompt(&record, &[]);
        assert!(prompt.contains("Risk Level: Unknown"));
        assert!(prompt.contains("- none recorded"));
    }
}
