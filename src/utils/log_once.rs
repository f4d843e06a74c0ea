/// Logs at most once per call site, for conditions that would otherwise flood the output from
/// every pixel.
#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        use std::sync::Once;
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            if log::log_enabled!(target: $target, $lvl) {
                log::log!(target: $target, $lvl, $($arg)+);
            }
        });
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => (
        $crate::log_once!(target: $target, log::Level::Warn, $($arg)+)
    );
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Warn, $($arg)+));
}
