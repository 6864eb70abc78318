use std::path::Path;

use locforge::formats::locres::{read_locres, write_locres};
use locforge::merge::merge_translations;
use locforge::translation::load_strings_csv;

pub fn execute(strings: &Path, locres: &Path, output: &Path) -> anyhow::Result<()> {
    let table = load_strings_csv(strings)?;
    let mut resource = read_locres(locres)?;

    let report = merge_translations(&mut resource, &table);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_locres(output, &resource)?;

    println!(
        "✓ Wrote {output:?} | entries: {}, updated: {}, missing: {}",
        report.total, report.updated, report.missing
    );
    Ok(())
}
