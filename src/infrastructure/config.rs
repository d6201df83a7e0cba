use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Company loaded when a request does not name one
    #[serde(default)]
    pub default_company: Option<String>,
    /// Single-company mode: absolute endpoint URLs pinned per chart
    #[serde(default)]
    pub fixed_urls: Vec<FixedUrl>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixedUrl {
    /// Mount id of the chart
    pub chart: String,
    pub url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_company: None,
            fixed_urls: Vec::new(),
        }
    }
}

impl ApiSettings {
    /// `{base}/{company}/{endpoint}`, unless the chart has a fixed URL
    pub fn endpoint_url(&self, mount_id: &str, company_id: &str, endpoint: &str) -> String {
        if let Some(fixed) = self.fixed_urls.iter().find(|f| f.chart == mount_id) {
            return fixed.url.clone();
        }
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(company_id),
            endpoint
        )
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

/// `config/dashboard.toml` (optional) overlaid with `FIN_DASHBOARD__*` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("FIN_DASHBOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse("");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert!(config.api.default_company.is_none());
        assert!(config.api.fixed_urls.is_empty());
    }

    #[test]
    fn test_fixed_urls_table() {
        let config = parse(
            r#"
            [api]
            base_url = "http://backend:8000/api/"
            default_company = "00126380"

            [[api.fixed_urls]]
            chart = "revenueChart"
            url = "http://localhost:8000/api/samsung-quarterly-data"
            "#,
        );

        assert_eq!(config.api.default_company.as_deref(), Some("00126380"));
        assert_eq!(
            config.api.endpoint_url("revenueChart", "00126380", "quarterly-data"),
            "http://localhost:8000/api/samsung-quarterly-data"
        );
        assert_eq!(
            config.api.endpoint_url("icrChart", "00126380", "icr"),
            "http://backend:8000/api/00126380/icr"
        );
    }

    #[test]
    fn test_company_id_is_encoded() {
        let api = ApiSettings::default();
        assert_eq!(
            api.endpoint_url("icrChart", "a b/c", "icr"),
            "http://localhost:8000/api/a%20b%2Fc/icr"
        );
    }
}
