use tutordesk_models::Payment;
use tutordesk_models::payments::totals_by_type;

use crate::store::ListState;
use crate::ui::table::or_dash;
use crate::ui::{Table, render_list};

pub const EMPTY_TEXT: &str = "لا توجد مدفوعات مسجلة";

pub fn render(state: &ListState<Payment>) -> String {
    render_list(state, EMPTY_TEXT, |payments| {
        let mut table = Table::new(["#", "المبلغ", "النوع", "المدرس", "الطالب", "التاريخ"]);
        for p in payments {
            table.push([
                p.id.to_string(),
                format!("{:.2}", p.amount),
                p.payment_type.label().to_string(),
                or_dash(p.teacher_id),
                or_dash(p.student_id),
                or_dash(p.paid_at.map(|at| at.format("%Y-%m-%d"))),
            ]);
        }

        let (monthly, per_session) = totals_by_type(payments);
        format!(
            "{}\n\nإجمالي الشهري: {:.2}  |  إجمالي بالحصة: {:.2}",
            table.render(),
            monthly,
            per_session
        )
    })
}
