//! Console logging for the browser build. Events go through `tracing` and are
//! written to the devtools console; there is no wall clock in the formatter
//! because `std::time` is unavailable on `wasm32-unknown-unknown`.

use tracing::{level_filters::LevelFilter, subscriber::SetGlobalDefaultError};
use tracing_subscriber::{Registry, fmt, layer::SubscriberExt};
use tracing_web::MakeWebConsoleWriter;

pub fn init(level: LevelFilter) -> Result<(), SetGlobalDefaultError> {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    let subscriber = Registry::default().with(fmt_layer).with(level);
    tracing::subscriber::set_global_default(subscriber)
}
