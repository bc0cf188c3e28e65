//! Datastore liveness probes.

use std::time::Duration;

use crate::config::{PostgresSettings, RedisSettings};
use crate::error::{Result, TddCheckError};

fn unavailable(service: &str, address: &str, message: impl ToString) -> TddCheckError {
    TddCheckError::ServiceUnavailable {
        service: service.to_string(),
        address: address.to_string(),
        message: message.to_string(),
    }
}

/// Interpret the decoded reply to `PING`.
pub fn check_pong(reply: &str) -> std::result::Result<(), String> {
    if reply == "PONG" {
        Ok(())
    } else {
        Err(format!("unexpected reply to PING: {}", reply))
    }
}

/// Send `PING` to a Redis server and expect `PONG`.
pub fn ping_redis(settings: &RedisSettings, timeout: Option<Duration>) -> Result<()> {
    let address = settings.address();
    tracing::debug!("Pinging Redis at {}", address);

    let client = redis::Client::open(format!("redis://{}/", address).as_str())
        .map_err(|e| unavailable("Redis", &address, e))?;
    let mut connection = match timeout {
        Some(timeout) => client.get_connection_with_timeout(timeout),
        None => client.get_connection(),
    }
    .map_err(|e| unavailable("Redis", &address, e))?;
    connection
        .set_read_timeout(timeout)
        .map_err(|e| unavailable("Redis", &address, e))?;

    let reply: String = redis::cmd("PING")
        .query(&mut connection)
        .map_err(|e| unavailable("Redis", &address, e))?;

    check_pong(&reply).map_err(|e| unavailable("Redis", &address, e))
}

/// Open and immediately close a PostgreSQL connection.
pub fn connect_postgres(settings: &PostgresSettings, timeout: Option<Duration>) -> Result<()> {
    let address = settings.address();
    tracing::debug!(
        "Connecting to PostgreSQL at {} as {} (database {})",
        address,
        settings.user,
        settings.database
    );

    let mut config = postgres::Config::new();
    config
        .host(&settings.host)
        .port(settings.port)
        .dbname(&settings.database)
        .user(&settings.user)
        .password(&settings.password);
    if let Some(timeout) = timeout {
        config.connect_timeout(timeout);
    }

    let client = config
        .connect(postgres::NoTls)
        .map_err(|e| unavailable("PostgreSQL", &address, e))?;
    client
        .close()
        .map_err(|e| unavailable("PostgreSQL", &address, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    fn redis_on(port: u16) -> RedisSettings {
        RedisSettings {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    #[test]
    fn pong_is_accepted() {
        assert!(check_pong("PONG").is_ok());
    }

    #[test]
    fn other_replies_are_rejected() {
        assert_eq!(
            check_pong("OK"),
            Err("unexpected reply to PING: OK".to_string())
        );
        assert!(check_pong("").is_err());
    }

    #[test]
    fn ping_reports_refused_connection() {
        let port = closed_port();
        let err = ping_redis(&redis_on(port), Some(Duration::from_secs(5))).unwrap_err();
        match err {
            TddCheckError::ServiceUnavailable {
                service, address, ..
            } => {
                assert_eq!(service, "Redis");
                assert_eq!(address, format!("127.0.0.1:{}", port));
            }
            other => panic!("expected ServiceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn ping_reports_server_hanging_up() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            if let Ok((socket, _)) = listener.accept() {
                drop(socket);
            }
        });

        let err = ping_redis(&redis_on(port), Some(Duration::from_secs(5))).unwrap_err();
        assert!(matches!(err, TddCheckError::ServiceUnavailable { .. }));
    }

    #[test]
    fn postgres_reports_refused_connection() {
        let port = closed_port();
        let settings = PostgresSettings {
            host: "127.0.0.1".to_string(),
            port,
            ..PostgresSettings::default()
        };
        let err = connect_postgres(&settings, Some(Duration::from_secs(5))).unwrap_err();
        match err {
            TddCheckError::ServiceUnavailable {
                service, address, ..
            } => {
                assert_eq!(service, "PostgreSQL");
                assert_eq!(address, format!("127.0.0.1:{}", port));
            }
            other => panic!("expected ServiceUnavailable, got {:?}", other),
        }
    }
}
