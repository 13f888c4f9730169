use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AopNodeType;

/// A node in an adverse-outcome-pathway graph.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AopNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: AopNodeType,
}

/// A directed causal link between two AOP nodes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AopEdge {
    pub source: String,
    pub target: String,
}

/// Adverse-outcome pathway for one chemical, consumed only for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AopGraph {
    pub pollutant_id: String,
    pub nodes: Vec<AopNode>,
    pub edges: Vec<AopEdge>,
}

impl AopGraph {
    /// Nodes of the given role, in declaration order.
    pub fn nodes_of(&self, node_type: AopNodeType) -> impl Iterator<Item = &AopNode> {
        self.nodes.iter().filter(move |node| node.node_type == node_type)
    }
}
