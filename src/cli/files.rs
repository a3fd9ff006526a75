// src/cli/files.rs — `khelpers files ...`

use std::path::Path;

use super::{to_json, FilesAction};
use crate::files::{file_list, increment_file_name};

pub fn run_files(action: &FilesAction, pretty: bool) -> anyhow::Result<String> {
    match action {
        FilesAction::List { dir, types, all } => {
            let entries = file_list(Path::new(dir), types.as_deref(), !all)?;
            let names: Vec<String> = entries
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            to_json(&names, pretty)
        }
        FilesAction::Increment { name, delimiter } => Ok(increment_file_name(name, delimiter)),
    }
}
