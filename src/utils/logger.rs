/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use once_cell::sync::OnceCell;
use std::env;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: OnceCell<()> = OnceCell::new();

/// Sets up the global tracing subscriber
///
/// The level is read from the `LOGLEVEL` environment variable (`TRACE`,
/// `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`. Calling this
/// function more than once is harmless: only the first call installs the
/// subscriber.
pub fn setup_logger() {
    INIT.get_or_init(|| {
        let level = env::var("LOGLEVEL")
            .ok()
            .and_then(|level| level.to_uppercase().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}
