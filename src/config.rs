use anyhow::{anyhow, Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::scheduling::{ClinicHours, DayHours, TimeOfDay};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub clinic_hours: ClinicHours,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Server configuration
        let host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        // App configuration
        let environment = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        let app_name =
            env::var("APP_NAME").unwrap_or_else(|_| "Clinic Agenda Backend".to_string());

        // Clinic operating hours, overridable per deployment
        let clinic_hours = clinic_hours_from_env()?;

        Ok(Config {
            server: ServerConfig { host, port },
            app: AppConfig {
                name: app_name,
                environment,
            },
            clinic_hours,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    #[allow(unused)]
    pub fn is_production(&self) -> bool {
        self.app.environment == Environment::Production
    }

    #[allow(unused)]
    pub fn is_development(&self) -> bool {
        self.app.environment == Environment::Development
    }
}

/// Reads the per-weekday operating hours table, keeping the built-in
/// defaults for any variable that is not set.
fn clinic_hours_from_env() -> Result<ClinicHours> {
    let defaults = ClinicHours::default();

    let weekday = day_hours_from_env("CLINIC_WEEKDAY", &defaults.weekday)?;
    let saturday = day_hours_from_env("CLINIC_SATURDAY", &defaults.saturday)?;

    Ok(ClinicHours { weekday, saturday })
}

fn day_hours_from_env(prefix: &str, defaults: &DayHours) -> Result<DayHours> {
    let opening = time_var(&format!("{}_OPENING", prefix), defaults.opening)?;
    let latest_start = time_var(&format!("{}_LAST_START", prefix), defaults.latest_start)?;
    let closing = time_var(&format!("{}_CLOSING", prefix), defaults.closing)?;

    DayHours::new(opening, latest_start, closing).ok_or_else(|| {
        anyhow!(
            "{}_* hours must satisfy opening <= last start <= closing",
            prefix
        )
    })
}

fn time_var(name: &str, default: TimeOfDay) -> Result<TimeOfDay> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("Failed to parse {}", name)),
        Err(_) => Ok(default),
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

// Use once_cell for a global config instance that's initialized once
use once_cell::sync::OnceCell;

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn init() -> Result<&'static Config> {
    CONFIG.get_or_try_init(Config::from_env)
}

#[allow(unused)]
pub fn get() -> &'static Config {
    CONFIG.get().expect("Config is not initialized")
}
