use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;

//
// This allows us to run the binary with timing and debug output, like so:
// $ autoload --debug resolve 'Ns\Sub\Bar'
//    0.000101834s DEBUG src/autoload/walk_directory.rs:53: Beginning directory walk of "."
//    0.003400125s DEBUG src/autoload/walk_directory.rs:97: Finished directory walk: 42 files
//    0.003561000s DEBUG src/autoload/resolver.rs:106: Candidates for "Ns\\Sub\\Bar": ["sub/bar.php"]
//
pub fn install_logger(debug: bool) {
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(LevelFilter::DEBUG);

    let subscriber_builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_span_events(FmtSpan::ACTIVE)
        .with_line_number(true);

    if debug {
        // If debug mode is on, let's always show the backtrace,
        // which helps make debugging panic messages simpler.
        std::env::set_var("RUST_BACKTRACE", "1");

        let subscriber_builder =
            subscriber_builder.with_max_level(Level::DEBUG);
        let subscriber = subscriber_builder.finish();
        let layered_subscriber = filter.with_subscriber(subscriber);
        layered_subscriber.init();
    } else {
        let subscriber = subscriber_builder.finish();
        let layered_subscriber = filter.with_subscriber(subscriber);
        layered_subscriber.init();
    }
}
