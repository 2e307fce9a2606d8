pub(crate) mod logging;
pub mod session;

uniffi::setup_scaffolding!();

/// Initialize logging and route panics into it.
/// Call this once at startup from Kotlin/Swift
#[uniffi::export]
pub fn init_panic_handler() {
    logging::setup_logging();

    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!("=== RUST PANIC ===\n{panic_info}\nBacktrace:\n{backtrace}");
        eprintln!("{panic_info}");
    }));
}
