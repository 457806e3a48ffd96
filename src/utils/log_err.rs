/// Marks the branch it is called from as unlikely. Used on error paths that run at most a few times
/// per tick.
#[inline]
#[cold]
pub fn cold() {}

/// Logs the error of a `Result` with its location instead of propagating it.
/// Used at the boundary with JS where errors cannot be returned to the caller.
#[macro_export]
macro_rules! log_err (
    ($e:expr) => (
        match $e {
            Ok(_) => (),
            Err(e) => {
                $crate::utils::log_err::cold();
                log::error!("Error at {}:{},{} in {}: {}.", file!(), line!(), column!(), module_path!(), e);
            }
        }
    );
    ($e:expr, $description:expr) => (
        match $e {
            Ok(_) => (),
            Err(e) => {
                $crate::utils::log_err::cold();
                log::error!("{} at {}:{} in {}: {}.", $description, file!(), line!(), module_path!(), e);
            }
        }
    );
);
