use tutordesk_models::{Chapter, Course};

use crate::store::ListState;
use crate::ui::render_list;

pub const EMPTY_TEXT: &str = "لا توجد فصول بعد";
pub const NO_COURSES_TEXT: &str = "(لا توجد دروس في هذا الفصل)";

/// Chapters as a tree: one line per chapter, its courses indented below.
pub fn render(state: &ListState<Chapter>) -> String {
    render_list(state, EMPTY_TEXT, |chapters| {
        chapters
            .iter()
            .map(render_chapter)
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

pub fn render_chapter(chapter: &Chapter) -> String {
    let mut lines = vec![match chapter.year_target {
        Some(year) => format!("#{} {} ({})", chapter.id, chapter.title, year.label()),
        None => format!("#{} {}", chapter.id, chapter.title),
    }];

    if chapter.courses.is_empty() {
        lines.push(format!("  {}", NO_COURSES_TEXT));
    }

    let last = chapter.courses.len().saturating_sub(1);
    for (i, course) in chapter.courses.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        lines.push(format!("  {} {}", branch, course_line(course)));
    }

    lines.join("\n")
}

fn course_line(course: &Course) -> String {
    let mut parts = vec![format!("#{} {}", course.id, course.title)];
    if let Some(minutes) = course.duration {
        parts.push(format!("{} د", minutes));
    }
    if course.video_url.is_some() {
        parts.push("▶ فيديو".to_string());
    }
    parts.push(attachment("ملخص", course.summary_pdf.is_some()));
    parts.push(attachment("تمارين", course.exercises_pdf.is_some()));
    parts.join("  ")
}

fn attachment(label: &str, present: bool) -> String {
    format!("[{} {}]", label, if present { "✓" } else { "✗" })
}
