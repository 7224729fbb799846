use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::RenderPlan;

pub const RENDER_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: RenderPlan,
}

impl RenderPlan {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render plan json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderPlanJsonContractV1 {
            schema_version: RENDER_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render plan contract v1: {e}"))
        })
    }

    /// Accepts a bare plan or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plan) = serde_json::from_str::<RenderPlan>(input) {
            return Ok(plan);
        }
        let payload: RenderPlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render plan json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}
