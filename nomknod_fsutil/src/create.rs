use crate::openat_cstr;
use libc::mode_t;
use std::ffi::CStr;
use std::io::Result;
use std::os::unix::io::AsRawFd;

/// Permission bits of a mode, including setuid, setgid, and sticky.
/// Everything above these bits encodes the file type.
pub const PERMISSION_BITS: mode_t = 0o7777;

/// Create an empty regular file with `O_CREAT | O_EXCL`,
/// keeping only the permission bits of `mode`.
pub fn create_exclusive_at(dir: &impl AsRawFd, pathname: &CStr, mode: mode_t)
    -> Result<()>
{
    // We pass the following flags to the openat syscall:
    let open_flags
        = libc::O_RDONLY    // We never read or write the file.
        | libc::O_CREAT     // We want a new file.
        | libc::O_EXCL      // Fail if anything is there already.
        | libc::O_NOCTTY    // We don’t want a controlling terminal.
        | libc::O_CLOEXEC;  // Don’t leak into concurrently spawned processes.

    let file = openat_cstr(dir, pathname, open_flags, mode & PERMISSION_BITS)?;
    drop(file);

    Ok(())
}
