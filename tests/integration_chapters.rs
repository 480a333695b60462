mod common;

use std::sync::Arc;

use axum::http::Method;
use common::{MockBackend, chapter_json, course_json};
use serde_json::json;
use tutordesk::modules::chapters::ChapterStore;
use tutordesk::store::ViewPhase;
use tutordesk_core::ErrorKind;
use tutordesk_models::{
    ChapterFilters, ChapterId, Course, CourseId, CreateCourseDto, UpdateCourseDto,
};

async fn loaded_store(backend: &MockBackend) -> ChapterStore {
    let store = ChapterStore::from_state(&backend.app_state());
    store.load(&ChapterFilters::default()).await.unwrap();
    store
}

fn new_course(title: &str) -> CreateCourseDto {
    CreateCourseDto {
        title: title.to_string(),
        description: None,
        video_url: None,
        duration: None,
    }
}

#[tokio::test]
async fn test_add_child_appends_server_record_to_parent() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![])]);
    backend.set_next_id(99);
    let store = loaded_store(&backend).await;

    let course = store
        .add_child(ChapterId::new(1), &json!({ "title": "t" }))
        .await
        .unwrap();

    assert_eq!(course.id, CourseId::new(99));
    assert_eq!(course.title, "t");

    let chapter = store.find(ChapterId::new(1)).unwrap();
    assert_eq!(chapter.courses.len(), 1);
    assert_eq!(chapter.courses[0].id, CourseId::new(99));
    assert_eq!(chapter.courses[0].title, "t");

    let sent = backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::POST && r.path == "/courses")
        .unwrap();
    assert_eq!(sent.body, json!({ "title": "t", "chapter_id": 1 }));
}

#[tokio::test]
async fn test_add_child_keeps_minimal_server_record_as_is() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![])]);
    let store = loaded_store(&backend).await;
    backend.respond_once(Method::POST, "/courses", 201, json!({ "id": 99, "title": "t" }));

    store
        .add_child(ChapterId::new(1), &json!({ "title": "t" }))
        .await
        .unwrap();

    assert_eq!(
        store.items()[0].courses,
        vec![Course::new(CourseId::new(99), "t")]
    );
}

#[tokio::test]
async fn test_add_child_leaves_other_parents_untouched() {
    let backend = MockBackend::start().await;
    backend.seed(
        "chapters",
        vec![
            chapter_json(1, vec![course_json(10, 1, "قانون أوم")]),
            chapter_json(2, vec![]),
        ],
    );
    let store = loaded_store(&backend).await;
    let before = store.find(ChapterId::new(1)).unwrap();

    store
        .add_child(ChapterId::new(2), &new_course("المقاومات"))
        .await
        .unwrap();

    assert_eq!(store.find(ChapterId::new(1)).unwrap(), before);
    assert_eq!(store.find(ChapterId::new(2)).unwrap().courses.len(), 1);
}

#[tokio::test]
async fn test_remove_child_drops_only_that_course() {
    let backend = MockBackend::start().await;
    backend.seed(
        "chapters",
        vec![chapter_json(
            1,
            vec![course_json(10, 1, "a"), course_json(11, 1, "b")],
        )],
    );
    let store = loaded_store(&backend).await;

    store
        .remove_child(ChapterId::new(1), CourseId::new(10))
        .await
        .unwrap();

    let chapter = store.find(ChapterId::new(1)).unwrap();
    let ids: Vec<_> = chapter.courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![CourseId::new(11)]);
    assert_eq!(backend.request_count(Method::DELETE, "/courses/10"), 1);
}

#[tokio::test]
async fn test_update_child_replaces_course_in_place() {
    let backend = MockBackend::start().await;
    backend.seed(
        "chapters",
        vec![chapter_json(
            1,
            vec![course_json(10, 1, "a"), course_json(11, 1, "b")],
        )],
    );
    let store = loaded_store(&backend).await;

    let patch = UpdateCourseDto {
        title: Some("a2".into()),
        ..Default::default()
    };
    store
        .update_child(ChapterId::new(1), CourseId::new(10), &patch)
        .await
        .unwrap();

    let chapter = store.find(ChapterId::new(1)).unwrap();
    assert_eq!(chapter.courses[0].title, "a2");
    assert_eq!(chapter.courses[0].duration, Some(45));
    assert_eq!(chapter.courses[1].title, "b");
}

#[tokio::test]
async fn test_failed_add_leaves_state_unchanged_and_records_message() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![course_json(10, 1, "a")])]);
    let store = loaded_store(&backend).await;
    let before = store.items();

    backend.respond_once(
        Method::POST,
        "/courses",
        422,
        json!({ "message": "عنوان الدرس مستخدم بالفعل" }),
    );
    let err = store
        .add_child(ChapterId::new(1), &new_course("a"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Http);
    assert_eq!(err.status, Some(422));
    assert!(Arc::ptr_eq(&before, &store.items()));
    assert_eq!(store.error().as_deref(), Some("عنوان الدرس مستخدم بالفعل"));
    assert!(matches!(
        store.snapshot().phase(),
        ViewPhase::Error("عنوان الدرس مستخدم بالفعل")
    ));
}

#[tokio::test]
async fn test_failed_remove_keeps_course() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![course_json(10, 1, "a")])]);
    let store = loaded_store(&backend).await;
    let before = store.items();

    backend.respond_once(Method::DELETE, "/courses/10", 500, json!({}));
    let err = store
        .remove_child(ChapterId::new(1), CourseId::new(10))
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(500));
    assert!(Arc::ptr_eq(&before, &store.items()));
    assert_eq!(store.find(ChapterId::new(1)).unwrap().courses.len(), 1);
    assert_eq!(
        store.error().as_deref(),
        Some(tutordesk_core::errors::FALLBACK_MESSAGE)
    );
}

#[tokio::test]
async fn test_failed_update_child_keeps_state() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![course_json(10, 1, "a")])]);
    let store = loaded_store(&backend).await;
    let before = store.items();

    backend.respond_once(
        Method::PUT,
        "/courses/10",
        422,
        json!({ "errors": { "title": ["العنوان مطلوب"] } }),
    );
    let patch = UpdateCourseDto {
        title: Some(String::new()),
        ..Default::default()
    };
    let err = store
        .update_child(ChapterId::new(1), CourseId::new(10), &patch)
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(422));
    assert!(Arc::ptr_eq(&before, &store.items()));
    assert_eq!(store.find(ChapterId::new(1)).unwrap().courses[0].title, "a");
    assert_eq!(store.error().as_deref(), Some("العنوان مطلوب"));
}

#[tokio::test]
async fn test_later_success_clears_error() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![])]);
    let store = loaded_store(&backend).await;

    backend.respond_once(Method::POST, "/courses", 500, json!({ "error": "boom" }));
    assert!(store.add_child(ChapterId::new(1), &new_course("a")).await.is_err());
    assert_eq!(store.error().as_deref(), Some("boom"));

    store
        .add_child(ChapterId::new(1), &new_course("a"))
        .await
        .unwrap();
    assert_eq!(store.error(), None);
    assert!(matches!(store.snapshot().phase(), ViewPhase::Populated(_)));
}

#[tokio::test]
async fn test_add_to_parent_missing_locally_keeps_state() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![])]);
    let store = loaded_store(&backend).await;
    // Created on the server after the local list was loaded.
    backend.seed("chapters", vec![chapter_json(1, vec![]), chapter_json(5, vec![])]);
    let before = store.items();

    let course = store
        .add_child(ChapterId::new(5), &new_course("a"))
        .await
        .unwrap();

    assert_eq!(course.title, "a");
    assert!(Arc::ptr_eq(&before, &store.items()));
    assert!(store.find(ChapterId::new(5)).is_none());
}

#[tokio::test]
async fn test_concurrent_adds_are_both_kept() {
    let backend = MockBackend::start().await;
    backend.seed("chapters", vec![chapter_json(1, vec![])]);
    let store = loaded_store(&backend).await;

    let (first, second) = (new_course("a"), new_course("b"));
    let (a, b) = tokio::join!(
        store.add_child(ChapterId::new(1), &first),
        store.add_child(ChapterId::new(1), &second),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    let chapter = store.find(ChapterId::new(1)).unwrap();
    assert_eq!(chapter.courses.len(), 2);
    assert!(chapter.course(a.id).is_some());
    assert!(chapter.course(b.id).is_some());
}

#[tokio::test]
async fn test_parent_crud_through_nested_store() {
    let backend = MockBackend::start().await;
    let store = loaded_store(&backend).await;
    assert!(matches!(store.snapshot().phase(), ViewPhase::Empty));

    let chapter = store
        .create(&json!({ "title": "الكهربية", "year_target": "third_secondary" }))
        .await
        .unwrap();
    assert!(chapter.courses.is_empty());

    let renamed = store
        .update(chapter.id, &json!({ "title": "الكهربية التيارية" }))
        .await
        .unwrap();
    assert_eq!(renamed.title, "الكهربية التيارية");
    assert_eq!(store.find(chapter.id).unwrap().title, "الكهربية التيارية");

    store.remove(chapter.id).await.unwrap();
    assert!(store.items().is_empty());
    assert!(backend.records("chapters").is_empty());
}
