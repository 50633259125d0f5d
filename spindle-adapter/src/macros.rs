#[cfg(feature = "tracing")]
macro_rules! ptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "spindle_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "spindle_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pwarn {
    ($($tt:tt)*) => {};
}
