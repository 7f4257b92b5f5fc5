//! Downloadable bash script

use std::fmt::Write;

use super::{InstallGroup, InstallPlan, JoinPolicy};

/// Render the plan as a bash script with one labelled section per group
pub(super) fn render(plan: &InstallPlan) -> String {
    let mut out = String::new();

    out.push_str("#!/usr/bin/env bash\n");
    out.push_str("#\n");
    out.push_str("# Install script generated by tuxmate\n");
    let _ = writeln!(
        out,
        "# Distro: {} ({})",
        comment_text(&plan.distro_name),
        comment_text(plan.distro_id.as_str())
    );
    let _ = writeln!(out, "# Apps: {}", plan.included_count);
    out.push_str("#\n");
    out.push_str("set -e\n");

    if !plan.prerequisites.is_empty() {
        section(&mut out, "Prerequisites", &plan.prerequisites);
    }
    if let Some(refresh) = &plan.refresh {
        section(&mut out, "Refresh package index", std::slice::from_ref(refresh));
    }
    if !plan.bootstrap.is_empty() {
        section(
            &mut out,
            &format!("AUR helper ({})", plan.helper),
            &plan.bootstrap,
        );
    }
    if !plan.repo.is_empty() {
        section(&mut out, "Repository packages", &group_lines(&plan.repo));
    }
    if !plan.aur.is_empty() {
        section(
            &mut out,
            &format!("AUR packages ({})", plan.helper),
            &group_lines(&plan.aur),
        );
    }
    if !plan.manual.is_empty() {
        let lines: Vec<String> = plan
            .manual
            .iter()
            .map(|entry| {
                format!(
                    "# {}: {}",
                    comment_text(&entry.name),
                    comment_text(&entry.instruction)
                )
            })
            .collect();
        section(&mut out, "Manual installation", &lines);
    }

    out
}

fn section(out: &mut String, label: &str, lines: &[String]) {
    let _ = writeln!(out, "\n# {}", comment_text(label));
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

/// Text placed after `#` must not be able to start a new line
fn comment_text(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

fn group_lines(group: &InstallGroup) -> Vec<String> {
    group
        .lines
        .iter()
        .map(|l| match group.join {
            JoinPolicy::Strict => l.line.clone(),
            JoinPolicy::Continue => format!(
                "{} || echo \"tuxmate: failed to install {}\" >&2",
                l.line, l.packages
            ),
        })
        .collect()
}
