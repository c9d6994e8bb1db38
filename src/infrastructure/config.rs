use serde::Deserialize;

pub const DEFAULT_DATASET_URL: &str = "https://data-source.com/samples.json";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub dataset: DatasetSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("dataset.url", DEFAULT_DATASET_URL)?
        .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?)
}

/// `DASHBOARD__DATASET__URL` maps to `dataset.url`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD").separator("__")
}

fn load_with(env: config::Environment) -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_with(environment())
}

#[cfg(test)]
fn dashboard_config_from_toml(toml: &str) -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
