use std::sync::Once;

use tracing_subscriber::{filter::FilterFn, layer::SubscriberExt, util::SubscriberInitExt};

fn is_area_game(meta: &tracing::Metadata<'_>) -> bool {
    meta.module_path()
        .unwrap_or_default()
        .starts_with("area_game")
}

/// Install the tracing subscriber once per process.
///
/// Leaves an already installed global subscriber in place.
pub(crate) fn setup_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(install);
}

#[cfg(target_os = "android")]
fn install() {
    use tracing_logcat::{LogcatMakeWriter, LogcatTag};
    use tracing_subscriber::fmt::format::Format;

    let tag = LogcatTag::Fixed("AreaGame-Rust".to_owned());
    let writer = match LogcatMakeWriter::new(tag) {
        Ok(writer) => writer,
        Err(error) => {
            eprintln!("failed to initialize logcat writer: {error}");
            return;
        }
    };
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().with_level(false).without_time())
        .with_writer(writer)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(FilterFn::new(is_area_game))
        .try_init();
}

#[cfg(not(target_os = "android"))]
fn install() {
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(FilterFn::new(is_area_game))
        .try_init();
}
