//! Missing key detection rule.
//!
//! Every key referenced from C# or AXAML must exist in the en-US
//! dictionary of the localization service.

use std::collections::HashSet;

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    core::{
        CheckContext, SourceContext, SourceFile, SourceLocation, key_usage::extract_key_usages,
        locale::load_locale_keys,
    },
    issues::MissingKeyIssue,
};

/// Fails when the localization file is missing or has no keys.
pub fn check_missing_keys_issues(ctx: &CheckContext) -> Result<Vec<MissingKeyIssue>> {
    let available = load_locale_keys(&ctx.localization_file)?;
    let localization_file = ctx.display_path(&ctx.localization_file);

    Ok(ctx
        .sources()
        .files
        .par_iter()
        .flat_map_iter(|file| check_missing_keys(file, &available, &localization_file))
        .collect())
}

/// Report each key usage in `file` that is not in `available`.
pub fn check_missing_keys(
    file: &SourceFile,
    available: &HashSet<String>,
    localization_file: &str,
) -> Vec<MissingKeyIssue> {
    file.content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            extract_key_usages(file.kind, line)
                .into_iter()
                .filter(move |usage| !available.contains(&usage.key))
                .map(move |usage| MissingKeyIssue {
                    context: SourceContext::new(
                        SourceLocation::new(&file.path, idx + 1, usage.col),
                        line,
                    ),
                    key: usage.key,
                    localization_file: localization_file.to_string(),
                })
        })
        .collect()
}
