use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Result;
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory with a few entries prepared for tests.
///
/// The directory is removed when this is dropped.
pub struct TestData
{
    pub root: TempDir,
    pub root_path: PathBuf,

    /// Open handle to the root directory, for the `*at` functions.
    pub root_directory: File,

    /// Path that does not exist yet, inside the root.
    pub missing_path: PathBuf,

    /// Regular file with some contents.
    pub regular1_path: PathBuf,
    pub regular1_contents: Vec<u8>,

    /// Empty subdirectory.
    pub directory1_path: PathBuf,
}

impl TestData
{
    pub fn new() -> Result<Self>
    {
        let _ = env_logger::builder().is_test(true).try_init();

        // Create root.
        let root = tempfile::tempdir()?;
        let root_path = root.path().to_path_buf();
        let root_directory =
            OpenOptions::new()
            .custom_flags(libc::O_DIRECTORY)
            .read(true)
            .open(&root_path)?;

        // Create entries.
        let missing_path      = root_path.join("missing");
        let regular1_path     = root_path.join("regular1");
        let directory1_path   = root_path.join("directory1");
        let regular1_contents = "hello".as_bytes().to_vec();
        fs::write(&regular1_path, &regular1_contents)?;
        fs::create_dir(&directory1_path)?;

        Ok(
            Self{
                root,
                root_path,
                root_directory,
                missing_path,
                regular1_path,
                regular1_contents,
                directory1_path,
            }
        )
    }

    /// Names of the entries in the root, sorted.
    pub fn entries(&self) -> Result<Vec<String>>
    {
        let mut entries =
            fs::read_dir(self.root.path())?
            .map(|r| r.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }
}
