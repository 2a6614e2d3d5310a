//! CLI output formatting.
//!
//! Output is information-first: each page leads with its positional index
//! and title, followed by `→` and the files written for it. Paths are
//! relative to the output directory.
//!
//! ```text
//! Pages
//! 001 model-renderer → index.html, index_ru.html
//! 002 Features - model-renderer → features/index.html, features/index_ru.html
//!
//! Redirects
//!     docs/index.html → /
//!     docs/index_ru.html → /index_ru.html
//!
//! Assets
//!     2 files → assets/
//!
//! Generated 2 pages, 2 redirects, 2 assets in docs
//! ```
//!
//! Audit findings, when there are any, get their own `Warnings` section
//! before the summary line.
//!
//! Each `format_*` function returns `Vec<String>` and has no side effects;
//! the `print_*` wrappers write to stdout.

use crate::export::ExportReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn join_paths(paths: &[std::path::PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_export_report(report: &ExportReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            join_paths(&page.files)
        ));
    }

    if !report.redirects.is_empty() {
        lines.push(String::new());
        lines.push("Redirects".to_string());
        for redirect in &report.redirects {
            lines.push(format!(
                "{}{} \u{2192} {}",
                indent(1),
                redirect.file.display(),
                redirect.target
            ));
        }
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!(
        "{}{} files \u{2192} assets/",
        indent(1),
        report.assets_copied
    ));

    if !report.findings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for finding in &report.findings {
            lines.push(format!("{}{}", indent(1), finding));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, {} redirects, {} assets in {}",
        report.pages.len(),
        report.redirects.len(),
        report.assets_copied,
        report.output_dir.display()
    ));
    lines
}

pub fn print_export_report(report: &ExportReport) {
    for line in format_export_report(report) {
        println!("{}", line);
    }
}

/// Steps for publishing `output_dir` from a repository's branch.
pub fn format_deploy_instructions(output_dir: &Path) -> Vec<String> {
    let folder = output_dir.display();
    vec![
        "To deploy to GitHub Pages:".to_string(),
        format!("{}1. Create a GitHub repository", indent(1)),
        format!(
            "{}2. Commit and push your code including the '{folder}' directory",
            indent(1)
        ),
        format!("{}3. Go to repository Settings \u{2192} Pages", indent(1)),
        format!(
            "{}4. Under 'Source', select 'Deploy from a branch'",
            indent(1)
        ),
        format!(
            "{}5. Select the 'main' branch and the '/{folder}' folder, then click 'Save'",
            indent(1)
        ),
        String::new(),
        "Your site will be available at https://<user>.github.io/<repository>/".to_string(),
    ]
}

pub fn print_deploy_instructions(output_dir: &Path) {
    for line in format_deploy_instructions(output_dir) {
        println!("{}", line);
    }
}
