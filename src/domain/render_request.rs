use std::collections::BTreeMap;

use minijinja::Value;
use serde::Serialize;

/// Page parameter name used when a call does not supply one.
pub const DEFAULT_PAGE_PARAMETER_NAME: &str = "page";

/// A single pagination render call.
///
/// Built once through the `with_*` methods and read-only afterwards. Only
/// `pagination` and `route_name` are required; neither is inspected or
/// validated here.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pagination: Value,
    route_name: String,
    page_parameter_name: String,
    query_parameters: Value,
    template: Option<String>,
}

impl RenderRequest {
    /// Create a request from any serializable pagination object.
    pub fn new<P>(pagination: &P, route_name: impl Into<String>) -> Self
    where
        P: Serialize + ?Sized,
    {
        Self::from_value(Value::from_serialize(pagination), route_name)
    }

    /// Create a request from a pagination value that is already a template value.
    pub fn from_value(pagination: Value, route_name: impl Into<String>) -> Self {
        Self {
            pagination,
            route_name: route_name.into(),
            page_parameter_name: DEFAULT_PAGE_PARAMETER_NAME.to_string(),
            query_parameters: Value::from(BTreeMap::<String, Value>::new()),
            template: None,
        }
    }

    pub fn with_page_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.page_parameter_name = name.into();
        self
    }

    /// Extra query parameters the template should carry into every page link.
    pub fn with_query_parameters<I, K, V>(self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map: BTreeMap<String, Value> =
            parameters.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
        self.with_query_parameters_value(Value::from(map))
    }

    /// Set query parameters from a template value, forwarded as given.
    pub fn with_query_parameters_value(mut self, parameters: Value) -> Self {
        self.query_parameters = parameters;
        self
    }

    /// Render this template instead of the configured default.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn pagination(&self) -> &Value {
        &self.pagination
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    pub fn page_parameter_name(&self) -> &str {
        &self.page_parameter_name
    }

    pub fn query_parameters(&self) -> &Value {
        &self.query_parameters
    }

    /// Template named by the caller, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// The template to render: the caller's choice, otherwise `default_template`.
    pub fn resolve_template<'a>(&'a self, default_template: &'a str) -> &'a str {
        self.template.as_deref().unwrap_or(default_template)
    }

    /// The variables handed to the selected template.
    pub fn parameters(&self) -> RenderParameters<'_> {
        RenderParameters {
            pagination: &self.pagination,
            route_name: &self.route_name,
            page_parameter_name: &self.page_parameter_name,
            query_parameters: &self.query_parameters,
        }
    }
}

/// Fixed-shape variable bag for pagination templates.
///
/// Serializes to exactly `pagination`, `routeName`, `pageParameterName` and
/// `queryParameters`. The template name is not part of it.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParameters<'a> {
    pub pagination: &'a Value,
    pub route_name: &'a str,
    pub page_parameter_name: &'a str,
    pub query_parameters: &'a Value,
}
