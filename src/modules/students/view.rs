use tutordesk_models::Student;

use crate::store::ListState;
use crate::ui::table::or_dash;
use crate::ui::{Table, render_list};

pub const EMPTY_TEXT: &str = "لا يوجد طلاب مسجلون";

pub fn render(state: &ListState<Student>) -> String {
    render_list(state, EMPTY_TEXT, |students| {
        let mut table = Table::new(["#", "الاسم", "الهاتف", "ولي الأمر", "الصف", "الشعبة", "الاشتراك"]);
        for s in students {
            table.push([
                s.id.to_string(),
                s.name.clone(),
                or_dash(s.phone.as_deref()),
                or_dash(s.parent_phone.as_deref()),
                or_dash(s.year_target.map(|y| y.label())),
                or_dash(s.branch.map(|b| b.label())),
                s.subscription_status.label().to_string(),
            ]);
        }
        table.render()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutordesk_models::{StudentId, SubscriptionStatus};

    #[test]
    fn test_branches() {
        assert_eq!(render(&ListState::with_items(vec![])), EMPTY_TEXT);

        let failed = ListState::<Student> {
            error: Some("تعذر الاتصال بالخادم".into()),
            ..ListState::default()
        };
        assert!(render(&failed).contains("تعذر الاتصال بالخادم"));

        let student = Student {
            id: StudentId::new(1),
            name: "ليلى".into(),
            phone: Some("0109".into()),
            parent_phone: None,
            year_target: None,
            branch: None,
            subscription_status: SubscriptionStatus::Active,
        };
        let out = render(&ListState::with_items(vec![student]));
        assert!(out.contains("ليلى"));
        assert!(out.contains(SubscriptionStatus::Active.label()));
    }
}
