use crate::domain::value_objects::Precision;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP settings
    pub listen_addr: String,
    pub route: String,

    // Dataset
    pub dataset_path: Option<String>,

    // Output rounding
    pub latency_decimals: u32,
    pub uptime_decimals: u32,

    pub debug: bool,
}

impl Config {
    pub fn precision(&self) -> Precision {
        Precision::new(self.latency_decimals, self.uptime_decimals)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            route: "/api/latency".to_string(),
            dataset_path: None,
            latency_decimals: 2,
            uptime_decimals: 4,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr = std::env::var("LATENCY_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let route = std::env::var("LATENCY_ROUTE")
        .map(|r| {
            if r.starts_with('/') {
                r
            } else {
                format!("/{}", r)
            }
        })
        .unwrap_or_else(|_| "/api/latency".to_string());

    let dataset_path = std::env::var("LATENCY_DATASET_PATH")
        .ok()
        .filter(|p| !p.is_empty());

    let latency_decimals = load_decimals("LATENCY_LATENCY_DECIMALS", 2);
    let uptime_decimals = load_decimals("LATENCY_UPTIME_DECIMALS", 4);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        listen_addr,
        route,
        dataset_path,
        latency_decimals,
        uptime_decimals,
        debug,
    })
}

/// Read a decimal-places setting, capped at [`Precision::MAX_DECIMALS`].
fn load_decimals(var: &str, default: u32) -> u32 {
    let decimals = std::env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or(default);

    if decimals > Precision::MAX_DECIMALS {
        tracing::warn!(
            "{}={} exceeds {} decimals, using {}",
            var,
            decimals,
            Precision::MAX_DECIMALS,
            Precision::MAX_DECIMALS
        );
        return Precision::MAX_DECIMALS;
    }
    decimals
}
