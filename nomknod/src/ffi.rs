//! C ABI exports.
//!
//! Each function follows the C convention for reporting errors:
//! `0` on success, or `-1` with `errno` set on failure.
//! `errno` is left alone on success.

use libc::dev_t;
use libc::mode_t;
use nomknod_fsutil as fsutil;
use std::ffi::CStr;
use std::io::Result;
use std::os::raw::c_char;
use std::os::raw::c_int;

/// Convert a result into the C return convention.
fn status(result: Result<()>) -> c_int
{
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Every error here comes from a system call, so it has an errno.
            fsutil::set_errno(err.raw_os_error().unwrap_or(libc::EIO));
            -1
        },
    }
}

unsafe fn create(fd: c_int, path: *const c_char, mode: mode_t, dev: dev_t)
    -> c_int
{
    // The kernel reports EFAULT for paths it cannot read.
    if path.is_null() {
        fsutil::set_errno(libc::EFAULT);
        return -1;
    }

    // SAFETY: The caller passes a null-terminated string.
    let path = CStr::from_ptr(path);

    status(crate::mknodat_cstr(&fd, path, mode, dev))
}

/// See [`crate::mknod`].
///
/// # Safety
///
/// `path` must be null or point to a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn mknod(path: *const c_char, mode: mode_t, dev: dev_t)
    -> c_int
{
    create(libc::AT_FDCWD, path, mode, dev)
}

/// See [`crate::mknodat`].
///
/// # Safety
///
/// `path` must be null or point to a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn mknodat(
    fd: c_int,
    path: *const c_char,
    mode: mode_t,
    dev: dev_t,
) -> c_int
{
    create(fd, path, mode, dev)
}

/// See [`crate::mknod_legacy`].
#[no_mangle]
pub extern "C" fn _mknod() -> c_int
{
    crate::mknod_legacy();
    0
}

/// See [`crate::mknod_extended`].
#[no_mangle]
pub extern "C" fn _xmknod(
    version: c_int,
    path: *const c_char,
    mode: mode_t,
    dev: dev_t,
) -> c_int
{
    crate::mknod_extended(version, path, mode, dev);
    0
}
