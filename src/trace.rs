// Diagnostic output for queue maintenance operations.
//
// Compiled to nothing unless the `trace` feature is enabled.

#[cfg(feature = "trace")]
macro_rules! trace {
    ($($arg:tt)*) => {
        eprintln!("[TRACE] [linked_list_queue] {}", format!($($arg)*))
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}
