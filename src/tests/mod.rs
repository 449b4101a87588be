mod blocklist_tests;
mod config_tests;
mod validate_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init()
    });
}
