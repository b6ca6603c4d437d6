use libc::mode_t;
use std::ffi::CStr;
use std::fs::File;
use std::io::Error;
use std::io::Result;
use std::os::raw::c_int;
use std::os::unix::io::AsRawFd;
use std::os::unix::io::FromRawFd;

/// Perform the `openat` system call.
pub fn openat_cstr(
    dir: &impl AsRawFd,
    pathname: &CStr,
    flags: c_int,
    mode: mode_t,
) -> Result<File>
{
    // SAFETY: The C string is of type CStr
    // and is therefore null-terminated.
    let fd = unsafe {
        libc::openat(
            dir.as_raw_fd(),
            pathname.as_ptr(),
            flags,
            mode,
        )
    };

    if fd == -1 {
        Err(Error::last_os_error())
    } else {
        // SAFETY: FromRawFd::from_raw_fd being unsafe is silly.
        Ok(unsafe { File::from_raw_fd(fd) })
    }
}
