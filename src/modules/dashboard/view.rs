use crate::modules::dashboard::DashboardSummary;
use crate::modules::sessions::view::render_table;

pub const NO_UPCOMING_TEXT: &str = "لا توجد حصص قادمة";

const BAR_WIDTH: usize = 24;

pub fn render(summary: &DashboardSummary) -> String {
    let tiles = [
        ("المدرسون", summary.teachers),
        ("الطلاب", summary.students),
        ("الفصول", summary.chapters),
        ("حصص قيد الانتظار", summary.pending_sessions),
        ("المدفوعات", summary.payments),
    ];

    let mut out = bar_chart(&tiles);
    out.push_str("\n\nالحصص القادمة\n");
    if summary.upcoming.is_empty() {
        out.push_str(NO_UPCOMING_TEXT);
    } else {
        out.push_str(&render_table(&summary.upcoming));
    }
    out
}

/// One horizontal bar per entry, scaled to the largest value.
pub fn bar_chart(entries: &[(&str, u64)]) -> String {
    let max = entries.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, value)| {
            let len = if max == 0 {
                0
            } else {
                ((*value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
            };
            let pad = label_width - label.chars().count();
            format!("{}{}  {} {}", label, " ".repeat(pad), "█".repeat(len), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
