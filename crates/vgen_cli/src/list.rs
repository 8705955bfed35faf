//! `vgen list`: prints the modules the library would contain, in emission
//! order, without writing anything.

use serde::Serialize;
use vgen_library::{plan, Section};
use vgen_module::ModuleDescriptor;

use crate::pipeline::load_session;
use crate::{GlobalArgs, ListArgs, ReportFormat};

#[derive(Serialize)]
struct ListEntry<'a> {
    section: &'static str,
    #[serde(flatten)]
    module: &'a ModuleDescriptor,
}

/// Runs the `vgen list` command. The listing goes to stdout.
pub fn run(args: &ListArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let session = load_session(global)?;
    let modules = plan(&session.catalog, &session.options);
    print!("{}", format_listing(&modules, args.format)?);
    Ok(0)
}

/// Formats a plan as text (one `section name` line per module) or as a JSON
/// array of descriptors tagged with their section.
pub fn format_listing(
    modules: &[(Section, ModuleDescriptor)],
    format: ReportFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Text => Ok(modules
            .iter()
            .map(|(section, module)| format!("{:<13} {}\n", section.label(), module.name()))
            .collect()),
        ReportFormat::Json => {
            let entries: Vec<ListEntry<'_>> = modules
                .iter()
                .map(|(section, module)| ListEntry {
                    section: section.label(),
                    module,
                })
                .collect();
            let mut json = serde_json::to_string_pretty(&entries)?;
            json.push('\n');
            Ok(json)
        }
    }
}
