//! Single-line copy command

use super::{InstallGroup, InstallPlan, JoinPolicy};

enum Segment {
    Step(String),
    /// Independent invocations chained with `;`
    Chain(Vec<String>),
}

/// Render the plan as one line
///
/// Dependent steps are chained with `&&`. A `Continue` group is chained with
/// `;` and wrapped in braces when other steps surround it, so `;` never
/// splits an `&&` chain.
pub(super) fn render(plan: &InstallPlan) -> String {
    if !plan.has_install_lines() {
        return String::new();
    }

    let mut segments: Vec<Segment> = Vec::new();
    segments.extend(plan.prerequisites.iter().cloned().map(Segment::Step));
    segments.extend(plan.refresh.iter().cloned().map(Segment::Step));
    segments.extend(plan.bootstrap.iter().cloned().map(Segment::Step));
    push_group(&mut segments, &plan.repo);
    push_group(&mut segments, &plan.aur);

    let standalone = segments.len() == 1;
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Step(step) => step,
            Segment::Chain(lines) if standalone => lines.join("; "),
            Segment::Chain(lines) => format!("{{ {}; }}", lines.join("; ")),
        })
        .collect::<Vec<_>>()
        .join(" && ")
}

fn push_group(segments: &mut Vec<Segment>, group: &InstallGroup) {
    let lines = group.lines.iter().map(|l| l.line.clone());
    match group.join {
        JoinPolicy::Continue if group.lines.len() > 1 => segments.push(Segment::Chain(lines.collect())),
        _ => segments.extend(lines.map(Segment::Step)),
    }
}
