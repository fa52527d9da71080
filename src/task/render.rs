//! Terminal rendering for task listings

use crossterm::style::{style, Color, Stylize};

use super::model::Task;

/// One listing line. Checkbox cyan, timestamp magenta, description white.
pub fn draw_task(task: &Task, color: bool) -> String {
    if !color {
        return task.to_line();
    }
    format!(
        "{:>3}  : {} {} {}",
        task.id,
        style(task.checkbox()).with(Color::Cyan),
        style(&task.created).with(Color::Magenta),
        style(&task.description).with(Color::White),
    )
}

pub fn draw_table(tasks: &[Task], color: bool) -> String {
    tasks
        .iter()
        .map(|t| draw_task(t, color))
        .collect::<Vec<_>>()
        .join("\n")
}
