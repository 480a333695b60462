//! Dispatches a parsed command to its screen.

use chrono::Utc;
use tutordesk_core::AppError;
use tutordesk_models::{ChapterFilters, ChapterId};

use crate::api::CourseFile;
use crate::cli::Commands;
use crate::cli::args::{
    ChapterAction, CheckInAction, CourseAction, DeleteArgs, PaymentAction, SessionAction,
    StudentAction, TeacherAction,
};
use crate::modules::chapters::{self, ChapterForm, ChapterStore, CourseForm};
use crate::modules::check_ins::{self, CheckInStore};
use crate::modules::dashboard::{self, DashboardService};
use crate::modules::payments::{self, PaymentForm, PaymentStore};
use crate::modules::sessions::{self, SessionForm, SessionStore};
use crate::modules::students::{self, StudentStore};
use crate::modules::teachers::{self, TeacherForm, TeacherStore};
use crate::state::AppState;
use crate::ui::Prompter;

pub const CANCELLED_MESSAGE: &str = "تم الإلغاء";

pub async fn run(
    command: &Commands,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    match command {
        Commands::Dashboard => {
            let summary = DashboardService::from_state(state).summary(Utc::now()).await?;
            println!("{}", dashboard::view::render(&summary));
            Ok(())
        }
        Commands::Teachers { action } => teachers_cmd(action, state, prompter).await,
        Commands::Students { action } => students_cmd(action, state, prompter).await,
        Commands::Chapters { action } => chapters_cmd(action, state, prompter).await,
        Commands::Courses { action } => courses_cmd(action, state, prompter).await,
        Commands::Sessions { action } => sessions_cmd(action, state, prompter).await,
        Commands::Payments { action } => payments_cmd(action, state, prompter).await,
        Commands::CheckIns { action } => check_ins_cmd(action, state, prompter).await,
    }
}

/// Asks before deleting unless `--yes` was passed.
fn confirm_delete(
    prompter: &mut dyn Prompter,
    args: &DeleteArgs,
    what: &str,
) -> Result<bool, AppError> {
    if args.yes {
        return Ok(true);
    }
    let confirmed = prompter.confirm(&format!("هل أنت متأكد من حذف {}؟", what), false)?;
    if !confirmed {
        println!("{}", CANCELLED_MESSAGE);
    }
    Ok(confirmed)
}

async fn teachers_cmd(
    action: &TeacherAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = TeacherStore::from_state(state);

    match action {
        TeacherAction::List(args) => {
            store.load(&args.filters()).await?;
            println!("{}", teachers::view::render(&store.snapshot()));
        }
        TeacherAction::Show { id } => {
            let teacher = store.get(*id).await?;
            println!("{}", teachers::view::render_detail(&teacher));
        }
        TeacherAction::Create(args) => {
            let teacher = TeacherForm::from(args).submit(&store, prompter).await?;
            println!("✅ تمت إضافة المدرس {} (#{})", teacher.name, teacher.id);
        }
        TeacherAction::Update { id, fields } => {
            let teacher = TeacherForm::from(fields).submit_update(&store, *id).await?;
            println!("✅ تم تحديث بيانات المدرس {}", teacher.name);
        }
        TeacherAction::Delete { id, confirm } => {
            if confirm_delete(prompter, confirm, &format!("المدرس #{}", id))? {
                store.remove(*id).await?;
                println!("✅ تم حذف المدرس #{}", id);
            }
        }
    }
    Ok(())
}

async fn students_cmd(
    action: &StudentAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = StudentStore::from_state(state);

    match action {
        StudentAction::List(args) => {
            store.load(&args.filters()).await?;
            println!("{}", students::view::render(&store.snapshot()));
        }
        StudentAction::Create(args) => {
            let student = args.form(None).submit(&store, prompter).await?;
            println!("✅ تم تسجيل الطالب {} (#{})", student.name, student.id);
        }
        StudentAction::Update {
            id,
            fields,
            subscription,
        } => {
            let student = fields.form(*subscription).submit_update(&store, *id).await?;
            println!("✅ تم تحديث بيانات الطالب {}", student.name);
        }
        StudentAction::Delete { id, confirm } => {
            if confirm_delete(prompter, confirm, &format!("الطالب #{}", id))? {
                store.remove(*id).await?;
                println!("✅ تم حذف الطالب #{}", id);
            }
        }
    }
    Ok(())
}

async fn chapters_cmd(
    action: &ChapterAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = ChapterStore::from_state(state);

    match action {
        ChapterAction::List(args) => {
            store.load(&args.filters()).await?;
            println!("{}", chapters::view::render(&store.snapshot()));
        }
        ChapterAction::Create(args) => {
            let chapter = ChapterForm::from(args).submit(&store, prompter).await?;
            println!("✅ تمت إضافة الفصل {} (#{})", chapter.title, chapter.id);
        }
        ChapterAction::Update { id, fields } => {
            let chapter = ChapterForm::from(fields).submit_update(&store, *id).await?;
            println!("✅ تم تحديث الفصل {}", chapter.title);
        }
        ChapterAction::Delete { id, confirm } => {
            if confirm_delete(prompter, confirm, &format!("الفصل #{} وكل دروسه", id))? {
                store.remove(*id).await?;
                println!("✅ تم حذف الفصل #{}", id);
            }
        }
    }
    Ok(())
}

async fn courses_cmd(
    action: &CourseAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = ChapterStore::from_state(state);
    // Child operations patch the loaded chapter, so the tree printed
    // afterwards reflects them.
    store.load(&ChapterFilters::default()).await?;

    match action {
        CourseAction::Add {
            chapter_id,
            fields,
            keep_on_failure,
        } => {
            let mut config = state.upload_config.clone();
            if *keep_on_failure {
                config.compensate_on_failure = false;
            }
            let course = CourseForm::from(fields)
                .submit(*chapter_id, &store, &config, prompter)
                .await?;
            println!("✅ تمت إضافة الدرس {} (#{})", course.title, course.id);
        }
        CourseAction::Update {
            chapter_id,
            course_id,
            fields,
        } => {
            let course = CourseForm::from(fields)
                .submit_update(&store, *chapter_id, *course_id)
                .await?;
            println!("✅ تم تحديث الدرس {}", course.title);
        }
        CourseAction::Upload {
            chapter_id,
            course_id,
            summary,
            exercises,
        } => {
            let files: Vec<CourseFile> = summary
                .iter()
                .map(CourseFile::summary)
                .chain(exercises.iter().map(CourseFile::exercises))
                .collect();
            if files.is_empty() {
                println!("لم يتم تحديد أي ملف للرفع");
                return Ok(());
            }
            for file in &files {
                file.check(&state.upload_config).await?;
            }
            for file in &files {
                store.upload_course_file(*chapter_id, *course_id, file).await?;
                println!("✅ تم رفع ملف ال{}", file.kind.label());
            }
        }
        CourseAction::Remove {
            chapter_id,
            course_id,
            confirm,
        } => {
            if !confirm_delete(prompter, confirm, &format!("الدرس #{}", course_id))? {
                return Ok(());
            }
            store.remove_child(*chapter_id, *course_id).await?;
            println!("✅ تم حذف الدرس #{}", course_id);
        }
    }

    print_chapter(&store, *action_chapter(action));
    Ok(())
}

fn action_chapter(action: &CourseAction) -> &ChapterId {
    match action {
        CourseAction::Add { chapter_id, .. }
        | CourseAction::Update { chapter_id, .. }
        | CourseAction::Upload { chapter_id, .. }
        | CourseAction::Remove { chapter_id, .. } => chapter_id,
    }
}

fn print_chapter(store: &ChapterStore, id: ChapterId) {
    if let Some(chapter) = store.find(id) {
        println!("\n{}", chapters::view::render_chapter(&chapter));
    }
}

async fn sessions_cmd(
    action: &SessionAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = SessionStore::from_state(state);

    match action {
        SessionAction::List(args) => {
            store.load(&args.filters()).await?;
            println!("{}", sessions::view::render(&store.snapshot()));
        }
        SessionAction::Create(args) => {
            let session = SessionForm::from(args).submit(&store, prompter).await?;
            let at = session
                .scheduled_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!("✅ تمت جدولة الحصة #{} {}", session.id, at);
        }
        SessionAction::Update { id, fields } => {
            let session = SessionForm::from(fields).submit_update(&store, *id).await?;
            println!("✅ تم تحديث الحصة #{}", session.id);
        }
        SessionAction::Complete { id } => {
            let session = store.complete(*id).await?;
            println!(
                "✅ الحصة #{}: {}",
                session.id,
                sessions::view::status_badge(session.status)
            );
        }
        SessionAction::Cancel { id } => {
            let session = store.cancel(*id).await?;
            println!(
                "✅ الحصة #{}: {}",
                session.id,
                sessions::view::status_badge(session.status)
            );
        }
        SessionAction::Delete { id, confirm } => {
            if confirm_delete(prompter, confirm, &format!("الحصة #{}", id))? {
                store.remove(*id).await?;
                println!("✅ تم حذف الحصة #{}", id);
            }
        }
    }
    Ok(())
}

async fn payments_cmd(
    action: &PaymentAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = PaymentStore::from_state(state);

    match action {
        PaymentAction::List(args) => {
            store.load(&args.filters()).await?;
            println!("{}", payments::view::render(&store.snapshot()));
        }
        PaymentAction::Create(args) => {
            let payment = PaymentForm::from(args).submit(&store, prompter).await?;
            println!("✅ تم تسجيل الدفعة #{} بقيمة {:.2}", payment.id, payment.amount);
        }
        PaymentAction::Update { id, fields } => {
            let payment = PaymentForm::from(fields).submit_update(&store, *id).await?;
            println!("✅ تم تحديث الدفعة #{}", payment.id);
        }
        PaymentAction::Delete { id, confirm } => {
            if confirm_delete(prompter, confirm, &format!("الدفعة #{}", id))? {
                store.remove(*id).await?;
                println!("✅ تم حذف الدفعة #{}", id);
            }
        }
    }
    Ok(())
}

async fn check_ins_cmd(
    action: &CheckInAction,
    state: &AppState,
    prompter: &mut dyn Prompter,
) -> Result<(), AppError> {
    let store = CheckInStore::from_state(state);

    match action {
        CheckInAction::List(args) => {
            store.load(&args.filters()).await?;
            println!("{}", check_ins::view::render(&store.snapshot()));
        }
        CheckInAction::Create { student, session } => {
            let check_in = CheckInAction::form(*student, *session)
                .submit(&store, prompter)
                .await?;
            println!("✅ تم تسجيل الحضور #{}", check_in.id);
        }
        CheckInAction::Delete { id, confirm } => {
            if confirm_delete(prompter, confirm, &format!("الحضور #{}", id))? {
                store.remove(*id).await?;
                println!("✅ تم حذف الحضور #{}", id);
            }
        }
    }
    Ok(())
}
