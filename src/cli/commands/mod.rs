//! Command implementations

pub mod export;
pub mod init;
pub mod object;
pub mod validate;

use crate::core::export::ExportSummary;

/// Prints a run summary to stdout
pub(crate) fn print_summary(summary: &ExportSummary) {
    println!("Summary:");
    println!("  Collections visited:  {}", summary.collections_visited);
    println!("  Objects exported:     {}", summary.objects_exported);
    println!("  Compounds expanded:   {}", summary.compounds_expanded);
    println!("  Files written:        {}", summary.files_written);
    println!("  CSV tables written:   {}", summary.csv_files_written);
    println!("  Dublin Core rows:     {}", summary.dublin_core_rows);
    println!("  MODS rows:            {}", summary.mods_rows);
    println!(
        "  Elapsed:              {:.1} minutes",
        summary.duration.as_secs_f64() / 60.0
    );
    if !summary.is_clean() {
        println!("  Non-fatal issues:     {}", summary.issues.len());
        for issue in &summary.issues {
            println!("    {} {}", issue.pid, issue.message);
        }
    }
}
