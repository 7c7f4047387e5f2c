//! Component kinds, templates and placed components.

use chrono::{DateTime, Utc};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for placed components.
pub type ComponentId = Uuid;

/// Kind of architecture component that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Database,
    Api,
    Service,
    Ui,
    Queue,
    Cache,
    ExternalService,
    LoadBalancer,
    Cdn,
    FileStorage,
    Microservice,
    Gateway,
}

impl ComponentType {
    /// Wire name of the type, as used in drag payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Database => "database",
            ComponentType::Api => "api",
            ComponentType::Service => "service",
            ComponentType::Ui => "ui",
            ComponentType::Queue => "queue",
            ComponentType::Cache => "cache",
            ComponentType::ExternalService => "external_service",
            ComponentType::LoadBalancer => "load_balancer",
            ComponentType::Cdn => "cdn",
            ComponentType::FileStorage => "file_storage",
            ComponentType::Microservice => "microservice",
            ComponentType::Gateway => "gateway",
        }
    }

    /// Corner radius hint for the rendering layer.
    ///
    /// Databases render as a cylinder-like pill, APIs and gateways slightly rounded.
    pub fn corner_radius(self) -> CornerRadius {
        match self {
            ComponentType::Database => CornerRadius::Percent(50.0),
            ComponentType::Api | ComponentType::Gateway => CornerRadius::Pixels(8.0),
            _ => CornerRadius::Pixels(4.0),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corner radius of a rendered component box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    Pixels(f64),
    Percent(f64),
}

/// Catalog grouping for component templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Data,
    Compute,
    Network,
    Storage,
    Security,
    Integration,
    Frontend,
}

impl ComponentCategory {
    /// All categories in menu order.
    pub fn all() -> [ComponentCategory; 7] {
        [
            ComponentCategory::Data,
            ComponentCategory::Compute,
            ComponentCategory::Network,
            ComponentCategory::Storage,
            ComponentCategory::Security,
            ComponentCategory::Integration,
            ComponentCategory::Frontend,
        ]
    }

    /// Human readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentCategory::Data => "Data",
            ComponentCategory::Compute => "Compute",
            ComponentCategory::Network => "Network",
            ComponentCategory::Storage => "Storage",
            ComponentCategory::Security => "Security",
            ComponentCategory::Integration => "Integration",
            ComponentCategory::Frontend => "Frontend",
        }
    }

    /// Icon name shown next to the category in the component menu.
    pub fn icon(self) -> &'static str {
        match self {
            ComponentCategory::Data => "database",
            ComponentCategory::Compute => "cpu",
            ComponentCategory::Network => "globe",
            ComponentCategory::Storage => "hard-drive",
            ComponentCategory::Security => "shield",
            ComponentCategory::Integration => "link",
            ComponentCategory::Frontend => "monitor",
        }
    }
}

/// Free-form descriptive properties of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, serde_json::Value>,
}

impl ComponentProperties {
    /// Properties with a technology and a description.
    pub fn new(technology: &str, description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            technology: Some(technology.to_string()),
            ..Default::default()
        }
    }
}

/// Immutable catalog entry describing a placeable component kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTemplate {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub default_name: String,
    pub icon: String,
    pub color: String,
    pub default_size: Size,
    pub default_properties: ComponentProperties,
    pub description: String,
    pub category: ComponentCategory,
}

/// Bookkeeping attached to every placed component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub color: String,
    pub icon: String,
    pub z_index: usize,
}

/// A component instance on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    /// Top-left corner in canvas space.
    pub position: Point,
    pub size: Size,
    pub properties: ComponentProperties,
    pub metadata: ComponentMetadata,
}

impl PlacedComponent {
    /// Instantiate a template at `position`.
    ///
    /// Size, colour, icon and properties are copied, so later changes to
    /// either side do not affect the other.
    pub fn from_template(template: &ComponentTemplate, position: Point, z_index: usize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            component_type: template.component_type,
            name: template.default_name.clone(),
            position,
            size: template.default_size,
            properties: template.default_properties.clone(),
            metadata: ComponentMetadata {
                created: now,
                last_modified: now,
                color: template.color.clone(),
                icon: template.icon.clone(),
                z_index,
            },
        }
    }

    /// Canvas-space bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Clone under a fresh id with reset timestamps.
    pub fn duplicate(&self, offset: kurbo::Vec2, z_index: usize) -> Self {
        let now = Utc::now();
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy.position = self.position + offset;
        copy.metadata.created = now;
        copy.metadata.last_modified = now;
        copy.metadata.z_index = z_index;
        copy
    }

    /// Mark the component as modified now.
    pub fn touch(&mut self) {
        self.metadata.last_modified = Utc::now();
    }
}
