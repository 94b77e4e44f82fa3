use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Line,
    Vector,
    Star,
    RegularPolygon,
    BooleanOperation,
    Slice,
    /// Any tag we don't know about, kept verbatim.
    Other(String),
    #[default]
    Missing,
}
impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Section => "SECTION",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Text => "TEXT",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Line => "LINE",
            NodeType::Vector => "VECTOR",
            NodeType::Star => "STAR",
            NodeType::RegularPolygon => "REGULAR_POLYGON",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Slice => "SLICE",
            NodeType::Other(tag) => tag,
            NodeType::Missing => "",
        }
    }
    /// Frames, groups, components and instances are the containers that end up
    /// in the flat component list.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Frame | NodeType::Component | NodeType::Instance | NodeType::Group
        )
    }
}
impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        match tag {
            "DOCUMENT" => NodeType::Document,
            "CANVAS" => NodeType::Canvas,
            "FRAME" => NodeType::Frame,
            "GROUP" => NodeType::Group,
            "SECTION" => NodeType::Section,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::ComponentSet,
            "INSTANCE" => NodeType::Instance,
            "TEXT" => NodeType::Text,
            "RECTANGLE" => NodeType::Rectangle,
            "ELLIPSE" => NodeType::Ellipse,
            "LINE" => NodeType::Line,
            "VECTOR" => NodeType::Vector,
            "STAR" => NodeType::Star,
            "REGULAR_POLYGON" => NodeType::RegularPolygon,
            "BOOLEAN_OPERATION" => NodeType::BooleanOperation,
            "SLICE" => NodeType::Slice,
            other => NodeType::Other(other.to_string()),
        }
    }
}
impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D>(deserializer: D) -> Result<NodeType, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything but a string (null, a number) reads as an absent tag.
        Ok(match Value::deserialize(deserializer)? {
            Value::String(tag) => NodeType::from(tag.as_str()),
            _ => NodeType::Missing,
        })
    }
}
impl Serialize for NodeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One element of the exported document tree. Only the fields the extractors
/// read are modelled; everything else in the export is ignored. Layout
/// scalars follow the same present-or-missing rule as [`TypeStyle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub type_: NodeType,
    #[serde(default)]
    pub fills: Option<Vec<Paint>>,
    #[serde(default)]
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default, deserialize_with = "present")]
    pub corner_radius: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub padding_left: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub padding_right: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub padding_top: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub padding_bottom: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub layout_mode: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub layout_grow: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub layout_align: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub item_spacing: Option<Value>,
    #[serde(default)]
    pub children: Option<Vec<DocumentNode>>,
}
impl DocumentNode {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
    /// Path handed to this node's children: the node's own path with its name appended.
    pub fn child_path(&self, path: &str) -> String {
        if path.is_empty() {
            self.name().to_string()
        } else {
            format!("{path}/{}", self.name())
        }
    }
    pub fn children(&self) -> &[DocumentNode] {
        self.children.as_deref().unwrap_or(&[])
    }
    pub fn bounding_box(&self) -> BoundingBox {
        self.absolute_bounding_box.clone().unwrap_or_default()
    }
    /// Pre-order walk over this node and everything below it, paired with
    /// each node's path. Runs on an explicit stack, so depth is unbounded.
    pub fn descendants<'a>(&'a self, path: &str) -> Descendants<'a> {
        Descendants {
            stack: vec![(self, path.to_string())],
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<(&'a DocumentNode, String)>,
}
impl<'a> Iterator for Descendants<'a> {
    type Item = (&'a DocumentNode, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, path) = self.stack.pop()?;
        if !node.children().is_empty() {
            let child_path = node.child_path(&path);
            self.stack.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (child, child_path.clone())),
            );
        }
        Some((node, path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PaintType {
    #[serde(rename = "SOLID")]
    Solid,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paint {
    #[serde(rename = "type", default)]
    pub type_: PaintType,
    #[serde(default)]
    pub color: Option<PaintColor>,
}

/// Normalized channels, nominally in `0..=1`. Alpha keeps its JSON spelling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundingBox {
    #[serde(default, deserialize_with = "present")]
    pub x: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub y: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub width: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub height: Option<Value>,
}

/// Typography record. A key that is present (even as `null`) is `Some`, a
/// missing key is `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, deserialize_with = "present")]
    pub font_family: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub font_size: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub font_weight: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub letter_spacing: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub line_height_px: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub text_align: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Value for a layout key, or `0` when the key is missing.
pub(crate) fn or_zero(value: &Option<Value>) -> Value {
    value.clone().unwrap_or_else(|| Value::from(0))
}

/// Value for a typography key, or the empty-string "no data" marker.
pub(crate) fn or_blank(value: &Option<Value>) -> Value {
    value.clone().unwrap_or_else(|| Value::String(String::new()))
}
