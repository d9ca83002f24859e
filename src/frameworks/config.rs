use std::env;

// Runtime/server configuration read from the environment.

pub fn http_port() -> u16 {
    env::var("SNAKE_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}

pub fn database_url() -> Option<String> {
    env::var("DATABASE_URL").ok()
}
