use super::DashboardReport;
use crate::types::diary::DiaryEntry;
use crate::types::scenario::Scenario;

pub fn to_markdown(report: &DashboardReport<'_>) -> String {
    let mut output = String::new();
    output.push_str("# 30 Days Later\n\n");
    output.push_str(&format!("{}\n\nVideo: {}\n\n", report.greeting, report.video));

    if let Some(submission) = report.submission {
        output.push_str("## Submission\n\n");
        if submission.applied.is_empty() && submission.skipped.is_empty() {
            output.push_str("- nothing selected\n");
        }
        for completion in &submission.applied {
            output.push_str(&format!(
                "- completed {} {} ({})\n",
                completion.kind, completion.id, completion.impact
            ));
        }
        for completion in &submission.skipped {
            output.push_str(&format!(
                "- skipped {} {} (already done)\n",
                completion.kind, completion.id
            ));
        }
        output.push('\n');
    }

    let stats = &report.stats;
    output.push_str("## Life Dashboard\n\n");
    output.push_str(&format!(
        "- success probability: {}%\n- tasks completed: {}/{}\n- routines today: {}/{}\n- total streak days: {}\n\n",
        stats.average_positive_probability.round() as i64,
        stats.completed_todos,
        stats.total_todos,
        stats.completed_routines,
        stats.total_routines,
        stats.total_streak
    ));

    output.push_str("## Positive Scenarios\n\n");
    push_scenarios(&mut output, &report.positive);
    output.push_str("## Risk Scenarios\n\n");
    push_scenarios(&mut output, &report.negative);

    output.push_str("## Today's Tasks\n\n");
    for todo in report.todos {
        output.push_str(&format!(
            "- [{}] {}: {} ({})\n",
            if todo.completed { "x" } else { " " },
            todo.id,
            todo.text,
            todo.impact
        ));
    }
    output.push('\n');

    output.push_str("## Daily Routines\n\n");
    for routine in report.routines {
        output.push_str(&format!(
            "- [{}] {}: {} ({}, {} day streak)\n",
            if routine.completed_today { "x" } else { " " },
            routine.id,
            routine.name,
            routine.impact,
            routine.streak
        ));
    }

    output
}

fn push_scenarios(output: &mut String, scenarios: &[&Scenario]) {
    if scenarios.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for scenario in scenarios {
        output.push_str(&format!("- {:>3}% {}\n", scenario.probability, scenario.text));
    }
    output.push('\n');
}

pub fn diary_to_markdown(entries: &[DiaryEntry]) -> String {
    let mut output = String::from("# Your 30-Day Journey\n\n");
    if entries.is_empty() {
        output.push_str("- no entries yet\n");
        return output;
    }
    for entry in entries {
        output.push_str(&format!(
            "## Day {} ({}) [{}]\n\n{}\n\n",
            entry.day,
            entry.display_date(),
            entry.mood.marker(),
            entry.entry
        ));
    }
    output
}
