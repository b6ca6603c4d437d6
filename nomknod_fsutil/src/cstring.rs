use std::ffi::CString;
use std::io::Result;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Convert a path into the C string the system calls take.
///
/// Fails with `InvalidInput` if the path contains a null byte.
pub fn path_cstring(path: impl AsRef<Path>) -> Result<CString>
{
    let cstring = CString::new(path.as_ref().as_os_str().as_bytes())?;
    Ok(cstring)
}
