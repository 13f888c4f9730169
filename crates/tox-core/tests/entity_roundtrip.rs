//! Serde roundtrip and JsonSchema validation tests for all entity types.

use std::collections::BTreeMap;

use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use tox_core::entities::*;
use tox_core::enums::*;
use tox_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn estradiol() -> ChemicalRecord {
    ChemicalRecord {
        id: "p2".into(),
        name: "Estradiol".into(),
        alternate_name: None,
        code: Some("50-28-2".into()),
        category: Category::Hormone,
        description: "Growth promoter in livestock.".into(),
        structure: Some("C[C@]12CC[C@H]3[C@H]([C@@H]1CC[C@@H]2O)CCC4=C3C=CC(=C4)O".into()),
        inchikey: None,
        pubchem_cid: None,
        toxicity_value: None,
        unit: None,
        risk: Some(RiskTier::High),
        created_at: Some(Utc::now()),
    }
}

fn estrogen_pathway() -> AopGraph {
    AopGraph {
        pollutant_id: "p2".into(),
        nodes: vec![
            AopNode {
                id: "mie1".into(),
                label: "Estrogen Receptor Activation".into(),
                node_type: AopNodeType::Mie,
            },
            AopNode {
                id: "ao1".into(),
                label: "Population Decline".into(),
                node_type: AopNodeType::Ao,
            },
        ],
        edges: vec![AopEdge {
            source: "mie1".into(),
            target: "ao1".into(),
        }],
    }
}

fn observation() -> ToxicityObservation {
    ToxicityObservation {
        id: "t3".into(),
        pollutant_id: "p2".into(),
        toxicity_type: "Endocrine Disruption".into(),
        test_organism: "Danio rerio".into(),
        endpoint: "EC50".into(),
        value: 0.005,
        unit: "mg/L".into(),
        reference: "Aquatic Tox 2021".into(),
    }
}

roundtrip_and_validate!(chemical_record_roundtrip, ChemicalRecord, estradiol());

roundtrip_and_validate!(
    ld50_record_roundtrip,
    ChemicalRecord,
    ChemicalRecord {
        id: "TAID-0042".into(),
        name: "Carbofuran".into(),
        alternate_name: Some("2,2-dimethyl-3H-1-benzofuran-7-yl N-methylcarbamate".into()),
        code: None,
        category: Category::Carbamate,
        description: String::new(),
        structure: Some("CC1(C)CC2=C(O1)C(=CC=C2)OC(=O)NC".into()),
        inchikey: Some("DUEPRVBVGDRKAG-UHFFFAOYSA-N".into()),
        pubchem_cid: Some(2566),
        toxicity_value: Some(0.38),
        unit: Some("mg/kg".into()),
        risk: Some(RiskTier::High),
        created_at: None,
    }
);

roundtrip_and_validate!(observation_roundtrip, ToxicityObservation, observation());

roundtrip_and_validate!(aop_graph_roundtrip, AopGraph, estrogen_pathway());

roundtrip_and_validate!(
    new_record_roundtrip,
    NewRecord,
    NewRecord {
        name: "Cadmium chloride".into(),
        code: "10108-64-2".into(),
        category: Category::HeavyMetal,
        description: "Trace contaminant in phosphate feed supplements.".into(),
        structure: Some("Cl[Cd]Cl".into()),
    }
);

roundtrip_and_validate!(
    record_detail_roundtrip,
    RecordDetail,
    RecordDetail {
        record: estradiol(),
        observations: vec![observation()],
        aop: Some(estrogen_pathway()),
        summary: None,
    }
);

roundtrip_and_validate!(
    export_snapshot_roundtrip,
    ExportSnapshot,
    ExportSnapshot {
        pollutants: vec![estradiol()],
        toxicity: vec![observation()],
        aop: BTreeMap::from([("p2".to_string(), estrogen_pathway())]),
        generated_at: Utc::now(),
    }
);

#[test]
fn observation_uses_camel_case_keys() {
    let json = serde_json::to_value(observation()).unwrap();
    assert_eq!(json["pollutantId"], "p2");
    assert_eq!(json["testOrganism"], "Danio rerio");
    assert_eq!(json["toxicityType"], "Endocrine Disruption");
}

#[test]
fn aop_node_type_serializes_as_type_key() {
    let json = serde_json::to_value(estrogen_pathway()).unwrap();
    assert_eq!(json["nodes"][0]["type"], "MIE");
    assert_eq!(json["pollutantId"], "p2");
}

#[test]
fn snapshot_carries_generated_at() {
    let snapshot = ExportSnapshot {
        pollutants: Vec::new(),
        toxicity: Vec::new(),
        aop: BTreeMap::new(),
        generated_at: Utc::now(),
    };
    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json.get("generatedAt").is_some());
}
