use std::io::Error;
use std::os::raw::c_int;

/// Read the calling thread’s `errno`,
/// for callers checking a `-1` return under the C convention.
pub fn errno() -> c_int
{
    Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Overwrite the calling thread’s `errno`.
///
/// This is how errors travel back to C callers,
/// which expect `-1` together with `errno`.
pub fn set_errno(value: c_int)
{
    // SAFETY: errno is thread-local,
    // and __errno_location always returns a valid pointer to it.
    unsafe {
        *libc::__errno_location() = value;
    }
}
