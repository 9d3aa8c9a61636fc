//! Command to list content types and their breadcrumb settings.

use crate::error::CliError;
use crate::utils::{load_site, GlobalOptions};
use clap::{Args, ValueEnum};
use crumbtrail::store::{ConfigStore, EntityStore};
use crumbtrail::SettingKey;
use serde::Serialize;

/// List content types with whether they use configured breadcrumbs and
/// whether they may be referenced in breadcrumb paths.
#[derive(Args)]
pub struct ListTypesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ListFormat,
}

/// Output formats for the list-types command.
#[derive(Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns with a header
    Table,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct TypeRow {
    id: String,
    label: String,
    allowed: bool,
    referenceable: bool,
    path_length: usize,
}

impl ListTypesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_site(global)?;
        let allowed = store.get(SettingKey::AllowedTypes);
        let bundles = store.get(SettingKey::NodeBundles);

        let rows: Vec<TypeRow> = store
            .load_content_types()
            .into_iter()
            .map(|content_type| TypeRow {
                allowed: allowed.contains(&content_type.id),
                referenceable: bundles.is_empty() || bundles.contains(&content_type.id),
                path_length: content_type.breadcrumb_path.len(),
                id: content_type.id,
                label: content_type.label,
            })
            .collect();

        match self.format {
            ListFormat::Json => {
                let output =
                    serde_json::to_string_pretty(&rows).map_err(|e| CliError::Library(e.into()))?;
                println!("{output}");
            }
            ListFormat::Table => print_table(&rows, global.quiet),
        }
        Ok(())
    }
}

fn print_table(rows: &[TypeRow], quiet: bool) {
    let id_width = rows.iter().map(|row| row.id.len()).max().unwrap_or(0).max(2);
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    if !quiet {
        println!(
            "{:<id_width$}  {:<label_width$}  ALLOWED  REFERENCEABLE  PATH",
            "ID", "LABEL"
        );
    }
    for row in rows {
        println!(
            "{:<id_width$}  {:<label_width$}  {:<7}  {:<13}  {}",
            row.id,
            row.label,
            yes_no(row.allowed),
            yes_no(row.referenceable),
            row.path_length
        );
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
