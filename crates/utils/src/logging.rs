use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/**
Installs a fmt subscriber as the global default, capped at `max_level`.
Fails if a global subscriber has already been set for this process.
*/
pub fn init_tracing(max_level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::init_tracing;
    use tracing::Level;

    #[test]
    fn test_installs_subscriber_once() {
        assert!(init_tracing(Level::DEBUG).is_ok());
        assert!(tracing::enabled!(Level::DEBUG));
        assert!(!tracing::enabled!(Level::TRACE));
        assert!(init_tracing(Level::TRACE).is_err());
    }
}
