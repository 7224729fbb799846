//! Persisted chart designs and dashboard layouts.
//!
//! Records are stored by the dashboard front end as camelCase JSON. Query
//! state and layout grids are carried opaquely; only what the plan pipeline
//! needs is interpreted.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::ChartSpec;
use crate::error::{ChartError, ChartResult};

/// One saved chart as written by the chart editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedChartDesign {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub chart_type: String,
    #[serde(default)]
    pub dataset: String,
    /// Editor configuration; the camelCase [`ChartSpec`] fields.
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub palette: Option<String>,
    /// Filters, sorts and limit applied before rows reach the pipeline.
    #[serde(default)]
    pub query_state: Value,
    #[serde(default)]
    pub matrix_config: Option<Value>,
    #[serde(default)]
    pub gauge_config: Option<Value>,
    #[serde(default)]
    pub calendar_config: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl SavedChartDesign {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse saved chart: {e}")))
    }

    /// Saved charts are stored as one JSON array.
    pub fn list_from_json_str(input: &str) -> ChartResult<Vec<Self>> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse saved charts: {e}")))
    }

    /// Validated spec with the record's chart type, palette and side configs
    /// folded into the editor config.
    pub fn to_chart_spec(&self) -> ChartResult<ChartSpec> {
        let mut config = match &self.config {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            _ => {
                return Err(ChartError::InvalidSpec(
                    "saved chart config must be a JSON object".to_owned(),
                ));
            }
        };

        config.insert("chartType".to_owned(), Value::String(self.chart_type.clone()));
        if let Some(palette) = self.palette.as_deref().filter(|p| !p.is_empty()) {
            config.insert("palette".to_owned(), Value::String(palette.to_owned()));
        }
        let has_title = config
            .get("title")
            .and_then(Value::as_str)
            .is_some_and(|title| !title.trim().is_empty());
        if !has_title && !self.title.is_empty() {
            config.insert("title".to_owned(), Value::String(self.title.clone()));
        }

        if let Some(matrix) = &self.matrix_config {
            config.entry("matrix").or_insert_with(|| matrix.clone());
        }
        if let Some(gauge) = &self.gauge_config {
            config.entry("gauge").or_insert_with(|| gauge.clone());
        }
        if let Some(legend) = self
            .calendar_config
            .as_ref()
            .and_then(|calendar| calendar.get("legendPosition"))
            .filter(|_| self.chart_type == "calendar")
        {
            config.insert("legendPosition".to_owned(), legend.clone());
        }
        fold_map_region(&mut config);

        let spec: ChartSpec = serde_json::from_value(Value::Object(config)).map_err(|e| {
            ChartError::InvalidSpec(format!("failed to read saved chart config: {e}"))
        })?;
        spec.validate()?;
        Ok(spec)
    }

    #[must_use]
    pub fn saved_at(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }
}

/// Editors store the map asset as a flat `mapRegion` key.
fn fold_map_region(config: &mut Map<String, Value>) {
    let Some(region) = config.remove("mapRegion") else {
        return;
    };
    let map = config
        .entry("map")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(map) = map {
        map.entry("region").or_insert(region);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishSettings {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub pin: String,
}

/// A dashboard page: rows of placed charts plus sharing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLayout {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub layout: Value,
    #[serde(default)]
    pub publish_settings: Option<PublishSettings>,
}

impl DashboardLayout {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dashboard layout: {e}")))
    }

    #[must_use]
    pub fn last_modified_at(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.publish_settings
            .as_ref()
            .is_some_and(|settings| settings.is_public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_region_folds_into_map_binding() {
        let mut config = Map::new();
        config.insert("mapRegion".to_owned(), Value::String("world".to_owned()));
        fold_map_region(&mut config);
        assert_eq!(config["map"]["region"], Value::String("world".to_owned()));
        assert!(!config.contains_key("mapRegion"));
    }
}
