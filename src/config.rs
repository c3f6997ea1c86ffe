use std::{env, net::SocketAddr};

use chrono::{FixedOffset, Offset, Utc};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Calendar in which trip days and activity days are compared.
    pub calendar_offset: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://trips.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3333".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let calendar_offset = match env::var("TRIP_CALENDAR_OFFSET") {
            Ok(raw) => parse_calendar_offset(&raw)?,
            Err(_) => utc(),
        };

        Ok(Self {
            database_url,
            listen_addr,
            calendar_offset,
        })
    }
}

pub fn parse_calendar_offset(raw: &str) -> Result<FixedOffset, AppError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
        return Ok(utc());
    }
    raw.parse::<FixedOffset>()
        .map_err(|err| AppError::Config(format!("invalid TRIP_CALENDAR_OFFSET {raw:?}: {err}")))
}

pub fn utc() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_offsets() {
        let offset = parse_calendar_offset("+02:00").unwrap();
        assert_eq!(offset.local_minus_utc(), 2 * 3600);

        let offset = parse_calendar_offset("-05:30").unwrap();
        assert_eq!(offset.local_minus_utc(), -(5 * 3600 + 30 * 60));
    }

    #[test]
    fn utc_aliases() {
        assert_eq!(parse_calendar_offset("UTC").unwrap(), utc());
        assert_eq!(parse_calendar_offset(" z ").unwrap(), utc());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_calendar_offset("tomorrow").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
