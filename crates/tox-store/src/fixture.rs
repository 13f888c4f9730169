//! Reference pollutant dataset: four feed-chain pollutants, six
//! observations, and two adverse outcome pathways.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use tox_core::entities::{AopEdge, AopGraph, AopNode, ToxicityObservation};
use tox_core::enums::{AopNodeType, Category, RiskTier};
use tox_engine::adapter::PollutantRow;

use crate::seed::Seed;

fn day(year: i32, month: u32, date: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0).single()
}

#[allow(clippy::too_many_arguments)]
fn pollutant(
    id: &str,
    name: &str,
    cas_number: &str,
    category: Category,
    usage: &str,
    smiles: &str,
    risk: RiskTier,
    created_at: Option<DateTime<Utc>>,
) -> PollutantRow {
    PollutantRow {
        id: id.into(),
        name: name.into(),
        cas_number: cas_number.into(),
        category,
        usage: usage.into(),
        smiles: smiles.into(),
        risk_level: Some(risk),
        created_at,
    }
}

fn observation(
    id: &str,
    pollutant_id: &str,
    toxicity_type: &str,
    test_organism: &str,
    endpoint: &str,
    value: f64,
    reference: &str,
) -> ToxicityObservation {
    ToxicityObservation {
        id: id.into(),
        pollutant_id: pollutant_id.into(),
        toxicity_type: toxicity_type.into(),
        test_organism: test_organism.into(),
        endpoint: endpoint.into(),
        value,
        unit: "mg/L".into(),
        reference: reference.into(),
    }
}

/// Build a linear pathway: MIE, then key events, then the adverse outcome.
fn pathway(pollutant_id: &str, nodes: &[(&str, &str, AopNodeType)]) -> AopGraph {
    AopGraph {
        pollutant_id: pollutant_id.into(),
        nodes: nodes
            .iter()
            .map(|(id, label, node_type)| AopNode {
                id: (*id).into(),
                label: (*label).into(),
                node_type: *node_type,
            })
            .collect(),
        edges: nodes
            .windows(2)
            .map(|pair| AopEdge {
                source: pair[0].0.into(),
                target: pair[1].0.into(),
            })
            .collect(),
    }
}

#[must_use]
pub fn reference_seed() -> Seed {
    let records = vec![
        pollutant(
            "p1",
            "Oxytetracycline",
            "79-57-2",
            Category::Antibiotic,
            "Veterinary antibiotic for cattle and poultry.",
            "C[C@H]1[C@@H](O)[C@](O)(C(=O)C(=C(O)C1=O)C(=O)N)N(C)C",
            RiskTier::Medium,
            day(2023, 1, 15),
        ),
        pollutant(
            "p2",
            "Estradiol",
            "50-28-2",
            Category::Hormone,
            "Growth promoter in livestock.",
            "C[C@]12CC[C@H]3[C@H]([C@@H]1CC[C@@H]2O)CCC4=C3C=CC(=C4)O",
            RiskTier::High,
            day(2023, 2, 10),
        ),
        pollutant(
            "p3",
            "Tylosin",
            "1401-69-0",
            Category::Antibiotic,
            "Feed additive for growth promotion.",
            "CC[C@H]1OC(=O)C[C@@H](O)CC=CC=CC[C@H](C)C[C@@H](C)C(=O)...",
            RiskTier::Low,
            day(2023, 3, 5),
        ),
        pollutant(
            "p4",
            "Atrazine",
            "1912-24-9",
            Category::Pesticide,
            "Herbicide used in corn feed production.",
            "CCNC1=NC(=NC(=N1)Cl)NC(C)C",
            RiskTier::High,
            day(2023, 4, 20),
        ),
    ]
    .into_iter()
    .map(PollutantRow::into_record)
    .collect();

    let observations = vec![
        observation("t1", "p1", "Acute Toxicity", "Daphnia magna", "EC50", 102.0, "EPA 2020"),
        observation(
            "t2",
            "p1",
            "Microbial Inhibition",
            "Activated Sludge",
            "IC50",
            15.0,
            "Journal of HazMat 2019",
        ),
        observation(
            "t3",
            "p2",
            "Endocrine Disruption",
            "Danio rerio",
            "EC50",
            0.005,
            "Aquatic Tox 2021",
        ),
        observation(
            "t4",
            "p2",
            "Reproductive",
            "Oryzias latipes",
            "LOEC",
            0.001,
            "Env Sci Tech 2022",
        ),
        observation("t5", "p3", "Acute Toxicity", "Rainbow Trout", "LC50", 300.0, "Vet Pharma DB"),
        observation(
            "t6",
            "p4",
            "Endocrine Disruption",
            "Xenopus laevis",
            "EC50",
            0.1,
            "Nature 2018",
        ),
    ];

    let aop = BTreeMap::from([
        (
            "p1".to_string(),
            pathway(
                "p1",
                &[
                    ("mie1", "Ribosome Binding", AopNodeType::Mie),
                    ("ke1", "Protein Synthesis Inhibition", AopNodeType::Ke),
                    ("ke2", "Bacterial Growth Inhibition", AopNodeType::Ke),
                    ("ao1", "Microbial Community Shift", AopNodeType::Ao),
                ],
            ),
        ),
        (
            "p2".to_string(),
            pathway(
                "p2",
                &[
                    ("mie1", "Estrogen Receptor Activation", AopNodeType::Mie),
                    ("ke1", "Altered Gene Expression", AopNodeType::Ke),
                    ("ke2", "Increased Vitellogenin", AopNodeType::Ke),
                    ("ke3", "Gonadal Abnormality", AopNodeType::Ke),
                    ("ao1", "Population Decline", AopNodeType::Ao),
                ],
            ),
        ),
    ]);

    Seed {
        records,
        observations,
        aop,
    }
}
