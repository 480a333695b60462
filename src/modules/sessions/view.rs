use tutordesk_models::{Session, SessionStatus};

use crate::store::ListState;
use crate::ui::table::or_dash;
use crate::ui::{Table, render_list};

pub const EMPTY_TEXT: &str = "لا توجد حصص مجدولة";

pub fn render(state: &ListState<Session>) -> String {
    render_list(state, EMPTY_TEXT, render_table)
}

pub fn render_table(sessions: &[Session]) -> String {
    let mut table = Table::new(["#", "المدرس", "المادة", "الموعد", "المدة", "الحالة"]);
    for s in sessions {
        let teacher = s
            .teacher_name
            .clone()
            .or_else(|| s.teacher_id.map(|id| format!("#{}", id)));
        table.push([
            s.id.to_string(),
            or_dash(teacher),
            or_dash(s.module.as_deref()),
            or_dash(s.scheduled_at.map(|at| at.format("%Y-%m-%d %H:%M"))),
            or_dash(s.duration_minutes.map(|m| format!("{} د", m))),
            status_badge(s.status),
        ]);
    }
    table.render()
}

pub fn status_badge(status: SessionStatus) -> String {
    let marker = match status {
        SessionStatus::Pending => "●",
        SessionStatus::Completed => "✓",
        SessionStatus::Cancelled => "✗",
    };
    format!("{} {}", marker, status.label())
}
