//! Executes a resolved create or open action.
//!
//! A creation walks `EnsuringParent -> Writing -> PostAction`, asking before
//! it overwrites a file. Parent and write failures end the operation with a
//! [`PickerError::CreationFailure`]; a declined overwrite or an existing folder
//! ends it quietly with the matching [`CreationOutcome`].

use std::path::PathBuf;

use crate::error::{CreationStage, EntryKind, PickerError};
use crate::host::{ConfirmChoice, Filesystem, HostSurface};
use crate::picker::ResolvedTarget;

/// How a terminal accept ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationOutcome {
    Created { path: PathBuf, kind: EntryKind },
    Opened { path: PathBuf },
    /// The user did not confirm overwriting an existing file.
    Declined { path: PathBuf },
    /// The folder was already there; nothing was written.
    AlreadyExists { path: PathBuf },
}

pub fn overwrite_prompt(name: &str) -> String {
    format!("File \"{name}\" already exists. Overwrite?")
}

pub fn folder_exists_warning(name: &str) -> String {
    format!("Folder \"{name}\" already exists.")
}

/// Creates the entry described by `target` and hands it to the host.
pub fn create_entry<F, H>(
    target: &ResolvedTarget,
    fs: &F,
    host: &mut H,
) -> Result<CreationOutcome, PickerError>
where
    F: Filesystem + ?Sized,
    H: HostSurface + ?Sized,
{
    let kind = target.kind();
    let path = target.absolute_path.as_path();
    let name = target.display_name();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !fs.exists(parent) {
            fs.create_dir(parent, true)
                .map_err(|err| PickerError::creation(kind, CreationStage::EnsuringParent, err))?;
        }
    }

    match kind {
        EntryKind::File => {
            if target.already_exists && host.confirm(&overwrite_prompt(&name)) != ConfirmChoice::Yes
            {
                return Ok(CreationOutcome::Declined {
                    path: path.to_path_buf(),
                });
            }
            fs.write_empty_file(path)
                .map_err(|err| PickerError::creation(kind, CreationStage::Writing, err))?;
            host.open_document(path)
                .map_err(|err| PickerError::creation(kind, CreationStage::PostAction, err))?;
            host.notify(&format!("File created: {name}"));
        }
        EntryKind::Folder => {
            if target.already_exists {
                host.warn(&folder_exists_warning(&name));
                return Ok(CreationOutcome::AlreadyExists {
                    path: path.to_path_buf(),
                });
            }
            fs.create_dir(path, true)
                .map_err(|err| PickerError::creation(kind, CreationStage::Writing, err))?;
            let _ = host.reveal(path);
            host.notify(&format!("Folder created: {name}"));
        }
    }

    Ok(CreationOutcome::Created {
        path: path.to_path_buf(),
        kind,
    })
}

/// Opens an existing file picked from the list.
pub fn open_existing<H: HostSurface + ?Sized>(
    target: &ResolvedTarget,
    host: &mut H,
) -> Result<CreationOutcome, PickerError> {
    let path = target.absolute_path.clone();
    host.open_document(&path)
        .map_err(|err| PickerError::open(path.clone(), err))?;
    Ok(CreationOutcome::Opened { path })
}
