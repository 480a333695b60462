use tutordesk_models::Teacher;

use crate::store::ListState;
use crate::ui::table::{money, or_dash};
use crate::ui::{Table, render_list};

pub const EMPTY_TEXT: &str = "لا يوجد مدرسون بعد";

pub fn render(state: &ListState<Teacher>) -> String {
    render_list(state, EMPTY_TEXT, |teachers| {
        let mut table = Table::new(["#", "الاسم", "الهاتف", "المادة", "الحصة", "الشهري", "الصفوف"]);
        for t in teachers {
            table.push([
                t.id.to_string(),
                t.name.clone(),
                or_dash(t.phone.as_deref()),
                or_dash(t.module.as_deref()),
                money(t.price_per_session),
                money(t.monthly_price),
                t.grades
                    .iter()
                    .map(|g| g.label())
                    .collect::<Vec<_>>()
                    .join("، "),
            ]);
        }
        table.render()
    })
}

pub fn render_detail(teacher: &Teacher) -> String {
    let branches = teacher
        .branches
        .iter()
        .map(|b| b.label())
        .collect::<Vec<_>>()
        .join("، ");

    Table::new(["الحقل", "القيمة"])
        .row(["#".to_string(), teacher.id.to_string()])
        .row(["الاسم".to_string(), teacher.name.clone()])
        .row(["الهاتف".to_string(), or_dash(teacher.phone.as_deref())])
        .row(["المادة".to_string(), or_dash(teacher.module.as_deref())])
        .row(["سعر الحصة".to_string(), money(teacher.price_per_session)])
        .row(["السعر الشهري".to_string(), money(teacher.monthly_price)])
        .row(["الشعب".to_string(), if branches.is_empty() { "-".to_string() } else { branches }])
        .render()
}
