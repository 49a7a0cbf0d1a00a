use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// логирование в stderr, уровень задается RUST_LOG, иначе info (debug с --verbose)
pub fn init(verbose: bool)
{
    let default = match verbose {
        true => "debug",
        false => "info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // подписчик может быть уже установлен, если генераторы вызываются из одного процесса
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
