//! Tenant profile configuration.

use serde::Deserialize;

/// Tenant-level settings the calculation engine depends on.
///
/// The profile captures the tenant's home (reporting) currency and its
/// tax configuration. A tenant without a tax configuration never carries
/// tax figures on its documents.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantProfile {
    /// The tenant's home currency code (ISO 4217).
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Tax configuration, absent for tenants outside any tax regime.
    #[serde(default)]
    pub tax: Option<TaxConfig>,
    /// Decimal places carried on every derived monetary field.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_precision() -> u32 {
    3
}

/// Tax regime configuration for a tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// Tax type code (e.g., "GST", "VAT").
    pub type_code: String,
    /// Human-readable tax type name.
    #[serde(default)]
    pub type_name: Option<String>,
}

impl TenantProfile {
    /// Returns true if the tenant has a tax configuration.
    #[must_use]
    pub fn has_tax_config(&self) -> bool {
        self.tax.is_some()
    }

    /// Loads the profile from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERLINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// A profile with the given base currency and no tax configuration.
    #[must_use]
    pub fn without_tax(base_currency: &str) -> Self {
        Self {
            base_currency: base_currency.to_string(),
            tax: None,
            precision: default_precision(),
        }
    }

    /// A profile with the given base currency and tax type code.
    #[must_use]
    pub fn with_tax(base_currency: &str, type_code: &str) -> Self {
        Self {
            base_currency: base_currency.to_string(),
            tax: Some(TaxConfig {
                type_code: type_code.to_string(),
                type_name: None,
            }),
            precision: default_precision(),
        }
    }
}
