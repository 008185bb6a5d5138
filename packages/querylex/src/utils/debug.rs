/*
 Debug build only tracing, compiled out of release builds entirely
 as it sits in the hot loops of the lexer.
*/

#[macro_export]
macro_rules! i_debug {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(debug_assertions)]
        log::debug!(target: $target, $($arg)+)
    );
    ($($arg:tt)+) => (
        #[cfg(debug_assertions)]
        log::debug!($($arg)+)
    )
}
