#[cfg(feature = "tracing")]
macro_rules! strace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "spindle", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! strace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "spindle", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! swarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "spindle", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! swarn {
    ($($tt:tt)*) => {};
}
