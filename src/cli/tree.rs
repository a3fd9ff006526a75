// src/cli/tree.rs — `khelpers tree build|flatten`

use anyhow::Context;
use std::io::Read;

use super::{to_json, TreeAction};
use crate::infra::config::Config;
use crate::record::records_from_json;
use crate::tree::{flatten_tree, TreeBuilder};

pub fn run_tree(action: &TreeAction, config: &Config, pretty: bool) -> anyhow::Result<String> {
    match action {
        TreeAction::Build {
            input,
            id,
            parent,
            children,
            no_cycle_check,
        } => {
            // Flags override the configured field names.
            let mut tree = config.tree.clone();
            if let Some(id) = id {
                tree.id_field = id.clone();
            }
            if let Some(parent) = parent {
                tree.parent_field = parent.clone();
            }
            if let Some(children) = children {
                tree.children_field = children.clone();
            }
            if *no_cycle_check {
                tree.detect_cycles = false;
            }
            let raw = read_input(input.as_deref())?;
            build_json(&raw, &tree.builder(), pretty)
        }
        TreeAction::Flatten {
            input,
            children,
            level,
        } => {
            let raw = read_input(input.as_deref())?;
            flatten_json(
                &raw,
                children.as_deref().unwrap_or(&config.tree.children_field),
                level.as_deref().unwrap_or(&config.tree.level_field),
                pretty,
            )
        }
    }
}

/// Build a forest from a JSON array of records.
pub fn build_json(raw: &str, builder: &TreeBuilder, pretty: bool) -> anyhow::Result<String> {
    let records = records_from_json(raw).context("input must be a JSON array of objects")?;
    let forest = builder.build(records)?;
    to_json(&forest, pretty)
}

/// Flatten a JSON forest.
pub fn flatten_json(
    raw: &str,
    children_field: &str,
    level_field: &str,
    pretty: bool,
) -> anyhow::Result<String> {
    let forest = records_from_json(raw).context("input must be a JSON array of objects")?;
    let flat = flatten_tree(forest, children_field, level_field)?;
    to_json(&flat, pretty)
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
