//! Redis and PostgreSQL connectivity check.

use super::{Check, CheckContext};
use crate::config::{PostgresSettings, RedisSettings};
use crate::error::Result;
use crate::ui::UserInterface;

/// Command that starts a throwaway Redis matching `redis`.
pub fn redis_start_command(redis: &RedisSettings) -> String {
    format!(
        "docker run --name sentry-redis-dev -p {0}:6379 -d redis:6-alpine",
        redis.port
    )
}

/// Command that starts a throwaway PostgreSQL matching `postgres`.
pub fn postgres_start_command(postgres: &PostgresSettings) -> String {
    format!(
        "docker run --name sentry-postgres-dev -e POSTGRES_DB={} -e POSTGRES_USER={} \
         -e POSTGRES_PASSWORD={} -p {}:5432 -d postgres:13",
        postgres.database, postgres.user, postgres.password, postgres.port
    )
}

/// Both datastores must accept a connection. Stops at the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseCheck;

impl Check for DatabaseCheck {
    fn name(&self) -> &'static str {
        "database_connections"
    }

    fn title(&self) -> &'static str {
        "Testing database connections..."
    }

    fn failure_label(&self) -> &'static str {
        "Database connection test"
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        let settings = ctx.settings;
        let timeout = settings.connect_timeout();

        match ctx.host.ping_redis(&settings.redis, timeout) {
            Ok(()) => ui.success("✅ Redis connection"),
            Err(e) => {
                ui.error(&format!("❌ Redis connection failed: {}", e));
                ui.info(&format!("💡 Run: {}", redis_start_command(&settings.redis)));
                return Ok(false);
            }
        }

        match ctx.host.connect_postgres(&settings.postgres, timeout) {
            Ok(()) => ui.success("✅ PostgreSQL connection"),
            Err(e) => {
                ui.error(&format!("❌ PostgreSQL connection failed: {}", e));
                ui.info(&format!(
                    "💡 Run: {}",
                    postgres_start_command(&settings.postgres)
                ));
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::host::FakeHost;
    use crate::ui::MockUI;
    use std::path::Path;

    fn run(host: &FakeHost) -> (bool, MockUI) {
        let settings = Settings::default();
        let ctx = CheckContext::new(host, &settings, Path::new("/project"));
        let mut ui = MockUI::new();
        let passed = DatabaseCheck.run(&ctx, &mut ui).unwrap();
        (passed, ui)
    }

    #[test]
    fn default_start_commands() {
        let settings = Settings::default();
        assert_eq!(
            redis_start_command(&settings.redis),
            "docker run --name sentry-redis-dev -p 6379:6379 -d redis:6-alpine"
        );
        assert_eq!(
            postgres_start_command(&settings.postgres),
            "docker run --name sentry-postgres-dev -e POSTGRES_DB=sentry -e POSTGRES_USER=sentry \
             -e POSTGRES_PASSWORD=sentry -p 5432:5432 -d postgres:13"
        );
    }

    #[test]
    fn both_services_up() {
        let host = FakeHost::healthy(&Settings::default());
        let (passed, ui) = run(&host);

        assert!(passed);
        assert_eq!(
            ui.successes(),
            vec!["✅ Redis connection", "✅ PostgreSQL connection"]
        );
    }

    #[test]
    fn redis_down_short_circuits() {
        let host = FakeHost::healthy(&Settings::default()).with_redis_down("Connection refused");
        let (passed, ui) = run(&host);

        assert!(!passed);
        assert!(ui.has_error("Redis connection failed"));
        assert!(ui.has_error("Connection refused"));
        assert!(ui.has_info(
            "💡 Run: docker run --name sentry-redis-dev -p 6379:6379 -d redis:6-alpine"
        ));
        assert_eq!(host.calls(), vec!["redis localhost:6379".to_string()]);
    }

    #[test]
    fn postgres_down_fails_with_hint() {
        let host = FakeHost::healthy(&Settings::default())
            .with_postgres_down("password authentication failed for user \"sentry\"");
        let (passed, ui) = run(&host);

        assert!(!passed);
        assert!(ui.has_success("Redis connection"));
        assert!(ui.has_error("PostgreSQL connection failed"));
        assert!(ui.has_info("sentry-postgres-dev"));
    }

    #[test]
    fn configured_ports_flow_into_hints() {
        let mut settings = Settings::default();
        settings.redis.port = 6380;
        let host = FakeHost::healthy(&settings).with_redis_down("Connection refused");
        let ctx = CheckContext::new(&host, &settings, Path::new("/project"));
        let mut ui = MockUI::new();

        assert!(!DatabaseCheck.run(&ctx, &mut ui).unwrap());
        assert!(ui.has_error("localhost:6380"));
        assert!(ui.has_info("-p 6380:6379"));
    }
}
