use crate::core::fleet::{Fleet, VehicleSpec};
use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Roster file: a named fleet and its vehicle entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    pub fleet: FleetSection,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSection {
    pub name: String,
    pub description: Option<String>,
}

impl FleetConfig {
    /// 從 TOML 檔案載入車隊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析車隊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VehicleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLEET_BRAND}); 未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VehicleError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        &self.fleet.name
    }

    /// 建立車隊; 個別無效的車輛會被記錄而非中止
    pub fn build_fleet(&self) -> Fleet {
        Fleet::from_specs(self.fleet.name.clone(), &self.vehicles)
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        if self.fleet.name.trim().is_empty() {
            return Err(VehicleError::ConfigValidationError {
                field: "fleet.name".to_string(),
                message: "Fleet name cannot be empty".to_string(),
            });
        }

        if self.vehicles.is_empty() {
            return Err(VehicleError::ConfigValidationError {
                field: "vehicles".to_string(),
                message: "At least one [[vehicles]] entry is required".to_string(),
            });
        }

        Ok(())
    }
}
