//! Node model for remotely-backed DOM trees
//!
//! Nodes are owned recursive values: each node holds its children directly,
//! in document order. The backend node id is the stable identity assigned by
//! the browser backend and is what removal keys on. A node that has been
//! materialized locally carries its own markup in `outer_html`; everything
//! else is fetched on demand during serialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{DomError, Result};

/// Backend-assigned node identifier, stable for the lifetime of a document.
pub type BackendNodeId = u32;

/// Node type matching the DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CdataSection = 4,
    EntityReference = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            2 => Some(NodeType::Attribute),
            3 => Some(NodeType::Text),
            4 => Some(NodeType::CdataSection),
            5 => Some(NodeType::EntityReference),
            6 => Some(NodeType::Entity),
            7 => Some(NodeType::ProcessingInstruction),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            10 => Some(NodeType::DocumentType),
            11 => Some(NodeType::DocumentFragment),
            12 => Some(NodeType::Notation),
            _ => None,
        }
    }
}

/// One element of the hierarchical document
///
/// Child order is significant and reflects document order. The identity
/// (`backend_node_id`) is unique within a single tree snapshot; tree
/// operations may drop child references but never rewrite identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    pub backend_node_id: BackendNodeId,
    pub node_type: NodeType,
    pub node_name: String,
    pub node_value: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<DomNode>,

    /// Markup of this node when it is materialized locally. `None` means
    /// the markup must be fetched from the transport during serialization.
    pub outer_html: Option<String>,
}

impl DomNode {
    pub fn new(
        backend_node_id: BackendNodeId,
        node_type: NodeType,
        node_name: impl Into<String>,
    ) -> Self {
        Self {
            backend_node_id,
            node_type,
            node_name: node_name.into(),
            node_value: String::new(),
            attributes: HashMap::new(),
            children: Vec::new(),
            outer_html: None,
        }
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Parse a `DOM.getDocument` response, unwrapping the `{"root": …}`
    /// envelope.
    pub fn from_cdp_response(cdp_response: &Value) -> Result<Self> {
        let root = cdp_response
            .get("root")
            .ok_or_else(|| DomError::Cdp("Missing 'root' in CDP response".to_string()))?;
        Self::from_cdp(root)
    }

    /// Recursively parse one CDP node object
    ///
    /// Input format matches a node of CDP's DOM.getDocument response:
    /// ```json
    /// {
    ///   "backendNodeId": 1,
    ///   "nodeType": 9,
    ///   "nodeName": "#document",
    ///   "attributes": ["id", "main"],
    ///   "children": [...]
    /// }
    /// ```
    pub fn from_cdp(cdp_node: &Value) -> Result<Self> {
        let backend_node_id = cdp_node["backendNodeId"]
            .as_u64()
            .ok_or_else(|| DomError::Cdp("Missing backendNodeId".to_string()))?
            as BackendNodeId;

        let node_type_val = cdp_node["nodeType"]
            .as_u64()
            .ok_or_else(|| DomError::Cdp("Missing nodeType".to_string()))?
            as u8;

        let node_type =
            NodeType::from_u8(node_type_val).ok_or(DomError::InvalidNodeType(node_type_val))?;

        let node_name = cdp_node["nodeName"].as_str().unwrap_or("").to_string();
        let node_value = cdp_node["nodeValue"].as_str().unwrap_or("").to_string();

        // CDP ships attributes as a flat alternating [key, value, ...] array
        let mut attributes = HashMap::new();
        if let Some(attrs) = cdp_node["attributes"].as_array() {
            let mut i = 0;
            while i + 1 < attrs.len() {
                if let (Some(key), Some(value)) = (attrs[i].as_str(), attrs[i + 1].as_str()) {
                    attributes.insert(key.to_string(), value.to_string());
                }
                i += 2;
            }
        }

        let mut children = Vec::new();
        if let Some(child_values) = cdp_node["children"].as_array() {
            for child in child_values {
                children.push(Self::from_cdp(child)?);
            }
        }

        Ok(Self {
            backend_node_id,
            node_type,
            node_name,
            node_value,
            attributes,
            children,
            outer_html: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_dom() {
        let cdp_json = serde_json::json!({
            "root": {
                "nodeId": 1,
                "backendNodeId": 1,
                "nodeType": 9,
                "nodeName": "#document",
                "nodeValue": "",
                "children": [{
                    "nodeId": 2,
                    "backendNodeId": 2,
                    "nodeType": 1,
                    "nodeName": "HTML",
                    "nodeValue": "",
                    "attributes": ["lang", "en"]
                }]
            }
        });

        let root = DomNode::from_cdp_response(&cdp_json).unwrap();
        assert_eq!(root.backend_node_id, 1);
        assert_eq!(root.node_type, NodeType::Document);
        assert_eq!(root.children.len(), 1);

        let html = &root.children[0];
        assert_eq!(html.node_name, "HTML");
        assert!(html.is_element());
        assert_eq!(html.attr("lang"), Some("en"));
        assert!(html.children.is_empty());
    }

    #[test]
    fn test_parse_missing_backend_id() {
        let cdp_json = serde_json::json!({
            "nodeType": 1,
            "nodeName": "DIV"
        });

        let err = DomNode::from_cdp(&cdp_json).unwrap_err();
        assert!(matches!(err, DomError::Cdp(_)));
    }

    #[test]
    fn test_parse_invalid_node_type() {
        let cdp_json = serde_json::json!({
            "backendNodeId": 1,
            "nodeType": 99,
            "nodeName": "DIV"
        });

        let err = DomNode::from_cdp(&cdp_json).unwrap_err();
        assert!(matches!(err, DomError::InvalidNodeType(99)));
    }
}
