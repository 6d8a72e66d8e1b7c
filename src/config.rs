use validator::Validate;

#[derive(Deserialize, Debug, Validate)]
pub struct Config {
    database_url: String,
    api_host: Option<String>,
    api_port: Option<usize>,
    /// maximum amount of open database connections
    #[serde(default = "default_pool_size")]
    #[validate(range(min = 1, max = 100))]
    database_pool_size: u32,
    /// the deposit a guest pays when booking a court, in cents, 100 = €1
    #[serde(default = "default_deposit")]
    reservation_deposit: u32,
    /// defaults to localhost, which shouldn't cause issues if you're using udp
    opentelemetry_endpoint: Option<String>,
}

fn default_pool_size() -> u32 {
    10
}

fn default_deposit() -> u32 {
    1000
}

lazy_static! {
    static ref CONFIG: Config = match envy::from_env::<Config>() {
        Ok(config) => {
            match config.validate() {
                Ok(()) => config,
                Err(e) => panic!("invalid environment variable: {}", e),
            }
        }
        Err(error) => panic!("Missing or incorrect environment variable: {}", error),
    };
}

impl Config {
    pub fn database_url() -> &'static str {
        CONFIG.database_url.as_ref()
    }

    pub fn api_host() -> &'static str {
        match &CONFIG.api_host {
            Some(host) => host.as_ref(),
            None => "localhost",
        }
    }

    pub fn api_port() -> usize {
        CONFIG.api_port.unwrap_or(8080)
    }

    pub fn database_pool_size() -> u32 {
        CONFIG.database_pool_size
    }

    pub fn reservation_deposit() -> i64 {
        i64::from(CONFIG.reservation_deposit)
    }

    pub fn opentelemetry_endpoint() -> &'static str {
        match &CONFIG.opentelemetry_endpoint {
            Some(endpoint) => endpoint.as_ref(),
            None => "127.0.0.1:6831",
        }
    }
}
