use libc::dev_t;
use libc::mode_t;
use log::debug;
use log::trace;
use nomknod_fsutil as fsutil;
use std::ffi::CStr;
use std::io::Result;
use std::os::raw::c_char;
use std::os::raw::c_int;
use std::os::unix::io::AsRawFd;
use std::path::Path;

/// Create an empty regular file where `mknod` would create a node.
/// The file type bits of `mode` and `dev` are ignored.
pub fn mknod(path: impl AsRef<Path>, mode: mode_t, dev: dev_t) -> Result<()>
{
    mknodat(&libc::AT_FDCWD, path, mode, dev)
}

/// Like [`mknod`], but a relative path is resolved
/// against the directory `dir` instead of the working directory.
/// An absolute path ignores `dir` entirely.
pub fn mknodat(
    dir: &impl AsRawFd,
    path: impl AsRef<Path>,
    mode: mode_t,
    dev: dev_t,
) -> Result<()>
{
    let path_c = fsutil::path_cstring(path)?;
    mknodat_cstr(dir, &path_c, mode, dev)
}

pub(crate) fn mknodat_cstr(
    dir: &impl AsRawFd,
    path: &CStr,
    mode: mode_t,
    dev: dev_t,
) -> Result<()>
{
    trace!("mknodat: {:?} mode {:o} dev {}: creating regular file",
           path, mode, dev);

    match fsutil::create_exclusive_at(dir, path, mode) {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!("mknodat: {:?}: {}", path, err);
            Err(err)
        },
    }
}

/// Do nothing, successfully.
///
/// Counterpart of the argumentless `_mknod` symbol.
pub fn mknod_legacy()
{
}

/// Do nothing, successfully.
///
/// Counterpart of `_xmknod`.
/// None of the arguments are looked at,
/// so `path` may be null or dangling.
pub fn mknod_extended(
    _version: c_int,
    _path: *const c_char,
    _mode: mode_t,
    _dev: dev_t,
)
{
}
