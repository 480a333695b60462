use tutordesk_models::CheckIn;

use crate::store::ListState;
use crate::ui::table::or_dash;
use crate::ui::{Table, render_list};

pub const EMPTY_TEXT: &str = "لم يتم تسجيل أي حضور";

pub fn render(state: &ListState<CheckIn>) -> String {
    render_list(state, EMPTY_TEXT, |check_ins| {
        let mut table = Table::new(["#", "الطالب", "الحصة", "وقت الحضور"]);
        for c in check_ins {
            table.push([
                c.id.to_string(),
                c.student_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", c.student_id)),
                or_dash(c.session_id),
                or_dash(c.checked_in_at.map(|at| at.format("%Y-%m-%d %H:%M"))),
            ]);
        }
        table.render()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutordesk_models::{CheckInId, StudentId};

    #[test]
    fn test_falls_back_to_student_id() {
        let check_in = CheckIn {
            id: CheckInId::new(1),
            student_id: StudentId::new(8),
            student_name: None,
            session_id: None,
            checked_in_at: None,
        };
        let out = render(&ListState::with_items(vec![check_in]));
        assert!(out.lines().nth(2).is_some_and(|l| l.contains("#8")));
    }
}
