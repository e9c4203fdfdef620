use anyhow::Context;
use tracing::{info, warn};

use crate::state::AppState;

/// Runs once per process, after the pool is up and migrations have run and
/// before the listener binds. A bootstrap error aborts startup; the default
/// password check only logs.
pub async fn on_application_ready(state: &AppState) -> anyhow::Result<()> {
    state
        .users
        .create_default_admin_user()
        .await
        .context("ensure default admin user")?;

    match state.users.admin_has_default_password().await {
        Ok(true) => warn!(
            username = %state.config.admin.username,
            "admin account still uses the built-in default password"
        ),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "could not check admin password; continuing"),
    }

    info!("startup hooks completed");
    Ok(())
}
