//! Catalog of placeable component kinds.

use crate::component::{ComponentCategory, ComponentProperties, ComponentTemplate, ComponentType};
use kurbo::Size;

/// Read-only catalog of component templates.
///
/// Built once at start-up and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<ComponentTemplate>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    /// Create a registry from an explicit list of templates.
    pub fn new(templates: Vec<ComponentTemplate>) -> Self {
        Self { templates }
    }

    /// The standard catalog shipped with the editor.
    pub fn builtin() -> Self {
        Self::new(vec![
            // Data
            template(
                ComponentType::Database,
                "Database",
                "database",
                "#3B82F6",
                (120.0, 80.0),
                ("PostgreSQL", "Primary database"),
                "Database storage system",
                ComponentCategory::Data,
            ),
            template(
                ComponentType::Cache,
                "Cache",
                "zap",
                "#F59E0B",
                (100.0, 70.0),
                ("Redis", "Caching layer"),
                "In-memory cache",
                ComponentCategory::Data,
            ),
            // Storage
            template(
                ComponentType::FileStorage,
                "File Storage",
                "folder",
                "#10B981",
                (110.0, 75.0),
                ("AWS S3", "File storage system"),
                "Object/File storage",
                ComponentCategory::Storage,
            ),
            // Compute
            template(
                ComponentType::Api,
                "API",
                "globe",
                "#8B5CF6",
                (100.0, 70.0),
                ("REST API", "API endpoint"),
                "REST/GraphQL API",
                ComponentCategory::Compute,
            ),
            template(
                ComponentType::Service,
                "Service",
                "cpu",
                "#EF4444",
                (110.0, 75.0),
                ("Node.js", "Business logic service"),
                "Backend service",
                ComponentCategory::Compute,
            ),
            template(
                ComponentType::Microservice,
                "Microservice",
                "box",
                "#06B6D4",
                (130.0, 80.0),
                ("Docker", "Microservice container"),
                "Containerized microservice",
                ComponentCategory::Compute,
            ),
            // Network
            template(
                ComponentType::LoadBalancer,
                "Load Balancer",
                "shuffle",
                "#F97316",
                (130.0, 70.0),
                ("NGINX", "Load balancing"),
                "Traffic distribution",
                ComponentCategory::Network,
            ),
            template(
                ComponentType::Gateway,
                "Gateway",
                "shield",
                "#84CC16",
                (120.0, 70.0),
                ("API Gateway", "API gateway"),
                "API gateway/proxy",
                ComponentCategory::Network,
            ),
            template(
                ComponentType::Cdn,
                "CDN",
                "cloud",
                "#EC4899",
                (100.0, 70.0),
                ("CloudFlare", "Content delivery network"),
                "Content delivery network",
                ComponentCategory::Network,
            ),
            // Integration
            template(
                ComponentType::Queue,
                "Message Queue",
                "list",
                "#6366F1",
                (140.0, 70.0),
                ("RabbitMQ", "Message queue system"),
                "Message queue/broker",
                ComponentCategory::Integration,
            ),
            template(
                ComponentType::ExternalService,
                "External Service",
                "external-link",
                "#64748B",
                (140.0, 80.0),
                ("Third-party API", "External service integration"),
                "Third-party service",
                ComponentCategory::Integration,
            ),
            // Frontend
            template(
                ComponentType::Ui,
                "UI Application",
                "monitor",
                "#14B8A6",
                (130.0, 80.0),
                ("Angular", "User interface"),
                "Frontend application",
                ComponentCategory::Frontend,
            ),
        ])
    }

    /// Copy of the full catalog.
    pub fn get_templates(&self) -> Vec<ComponentTemplate> {
        self.templates.clone()
    }

    /// Look up a template by type. `None` is an ordinary outcome.
    pub fn get_template(&self, component_type: ComponentType) -> Option<&ComponentTemplate> {
        self.templates
            .iter()
            .find(|t| t.component_type == component_type)
    }

    /// Templates belonging to `category`, in catalog order.
    pub fn get_templates_by_category(&self, category: ComponentCategory) -> Vec<ComponentTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect()
    }

    /// All categories, including ones with no templates yet.
    pub fn categories(&self) -> [ComponentCategory; 7] {
        ComponentCategory::all()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    component_type: ComponentType,
    default_name: &str,
    icon: &str,
    color: &str,
    (width, height): (f64, f64),
    (technology, property_description): (&str, &str),
    description: &str,
    category: ComponentCategory,
) -> ComponentTemplate {
    ComponentTemplate {
        component_type,
        default_name: default_name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        default_size: Size::new(width, height),
        default_properties: ComponentProperties::new(technology, property_description),
        description: description.to_string(),
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 12);

        let database = registry.get_template(ComponentType::Database).unwrap();
        assert_eq!(database.default_size, Size::new(120.0, 80.0));
        assert_eq!(database.category, ComponentCategory::Data);
    }

    #[test]
    fn test_every_type_has_a_template() {
        let registry = TemplateRegistry::builtin();
        for template in registry.get_templates() {
            assert!(registry.get_template(template.component_type).is_some());
        }
    }

    #[test]
    fn test_get_templates_is_a_copy() {
        let registry = TemplateRegistry::builtin();
        let mut copy = registry.get_templates();
        copy.clear();
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_missing_template() {
        let registry = TemplateRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.get_template(ComponentType::Cdn).is_none());
    }

    #[test]
    fn test_by_category() {
        let registry = TemplateRegistry::builtin();

        let compute = registry.get_templates_by_category(ComponentCategory::Compute);
        let types: Vec<_> = compute.iter().map(|t| t.component_type).collect();
        assert_eq!(
            types,
            vec![ComponentType::Api, ComponentType::Service, ComponentType::Microservice]
        );

        assert!(registry.get_templates_by_category(ComponentCategory::Security).is_empty());
    }
}
