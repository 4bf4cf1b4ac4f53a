#[macro_use]
mod common;

use actix_web::test;
use common::*;
use serde_json::json;

#[actix_web::test]
async fn attendance_grades_come_from_static_file() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let staff = seed_user(&ctx.db, "grades_staff", "staff", "active", Some(school)).await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/attendance/grades")
        .insert_header(bearer(&token_for(staff)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);

    let grades = body["grades"].as_array().expect("grades array");
    assert_eq!(grades.len(), 12);
    assert_eq!(grades[0], json!({ "value": "1", "label": "Grade 1" }));
}

#[actix_web::test]
async fn attendance_students_requires_grade() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "grade_teacher", "teacher", "active", Some(school)).await;
    let app = test_app!(ctx);
    let token = token_for(teacher);

    for uri in [
        "/api/attendance/students",
        "/api/attendance/students?grade=",
        "/api/attendance/students?subject=math",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let (status, body) = status_and_json(test::call_service(&app, req).await).await;
        assert_eq!(status, 400, "{uri}");
        assert_eq!(body, json!({ "error": "grade is required" }));
    }
}

#[actix_web::test]
async fn attendance_students_are_accepted_scoped_and_sorted_by_roll_number() {
    let ctx = setup().await;
    let north = seed_school(&ctx.db, "North").await;
    let south = seed_school(&ctx.db, "South").await;
    let teacher = seed_user(&ctx.db, "roster_teacher", "teacher", "active", Some(north)).await;

    seed_student(&ctx.db, north, "Carol", "5", Some("03"), "accepted").await;
    seed_student(&ctx.db, north, "Alice", "5", Some("01"), "accepted").await;
    seed_student(&ctx.db, north, "Bob", "5", Some("02"), "accepted").await;
    seed_student(&ctx.db, north, "Pending", "5", Some("00"), "pending").await;
    seed_student(&ctx.db, north, "Rejected", "5", Some("04"), "rejected").await;
    seed_student(&ctx.db, north, "OtherGrade", "6", Some("01"), "accepted").await;
    seed_student(&ctx.db, south, "Elsewhere", "5", Some("01"), "accepted").await;

    let app = test_app!(ctx);
    let req = test::TestRequest::get()
        .uri("/api/attendance/students?grade=5&subject=math")
        .insert_header(bearer(&token_for(teacher)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);

    let students = body["students"].as_array().expect("students array");
    let names: Vec<&str> = students.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);

    let first = &students[0];
    assert_eq!(first["rollNumber"], "01");
    assert_eq!(first["studentId"], "ADM-Alice");
    assert_eq!(first["grade"], "5");
    assert!(first["id"].is_i64());
}

#[actix_web::test]
async fn academic_grades_are_a_sorted_deduplicated_union() {
    let ctx = setup().await;
    let north = seed_school(&ctx.db, "North").await;
    let south = seed_school(&ctx.db, "South").await;
    let staff = seed_user(&ctx.db, "union_staff", "staff", "active", Some(north)).await;

    let alice = seed_student(&ctx.db, north, "Alice", "5", Some("01"), "accepted").await;
    seed_student(&ctx.db, north, "Bob", "3", Some("02"), "accepted").await;
    seed_student(&ctx.db, north, "Pending", "9", None, "pending").await;
    let remote = seed_student(&ctx.db, south, "Remote", "8", None, "accepted").await;

    seed_performance(&ctx.db, north, alice, "5", "math", 90.0).await;
    seed_performance(&ctx.db, north, alice, "4", "math", 85.0).await;
    seed_performance(&ctx.db, south, remote, "7", "art", 70.0).await;

    let app = test_app!(ctx);
    let req = test::TestRequest::get()
        .uri("/api/academic/grades")
        .insert_header(bearer(&token_for(staff)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "grades": ["3", "4", "5"] }));
}

#[actix_web::test]
async fn performance_list_filters_by_grade_and_subject() {
    let ctx = setup().await;
    let north = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "perf_teacher", "teacher", "active", Some(north)).await;

    let alice = seed_student(&ctx.db, north, "Alice", "5", Some("01"), "accepted").await;
    let bob = seed_student(&ctx.db, north, "Bob", "5", Some("02"), "accepted").await;
    seed_performance(&ctx.db, north, bob, "5", "science", 60.0).await;
    seed_performance(&ctx.db, north, alice, "5", "math", 90.0).await;
    seed_performance(&ctx.db, north, bob, "5", "math", 75.5).await;
    seed_performance(&ctx.db, north, alice, "4", "math", 50.0).await;

    let app = test_app!(ctx);
    let token = token_for(teacher);

    let req = test::TestRequest::get()
        .uri("/api/academic/performance?grade=5")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    let rows = body["performances"].as_array().unwrap();
    let pairs: Vec<(&str, i64)> = rows
        .iter()
        .map(|r| (r["subject"].as_str().unwrap(), r["studentId"].as_i64().unwrap()))
        .collect();
    assert_eq!(pairs, [("math", alice), ("math", bob), ("science", bob)]);

    let req = test::TestRequest::get()
        .uri("/api/academic/performance?grade=5&subject=math")
        .insert_header(bearer(&token))
        .to_request();
    let (_, body) = status_and_json(test::call_service(&app, req).await).await;
    let rows = body["performances"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["score"], 75.5);
    assert_eq!(rows[1]["term"], "2025-spring");

    let req = test::TestRequest::get()
        .uri("/api/academic/performance")
        .insert_header(bearer(&token))
        .to_request();
    let (status, _) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn unpadded_roll_numbers_sort_numerically() {
    let ctx = setup().await;
    let north = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "unpadded_teacher", "teacher", "active", Some(north)).await;

    seed_student(&ctx.db, north, "Ten", "7", Some("10"), "accepted").await;
    seed_student(&ctx.db, north, "One", "7", Some("1"), "accepted").await;
    seed_student(&ctx.db, north, "Two", "7", Some("2"), "accepted").await;

    let app = test_app!(ctx);
    let req = test::TestRequest::get()
        .uri("/api/attendance/students?grade=7")
        .insert_header(bearer(&token_for(teacher)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);

    let rolls: Vec<&str> = body["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["rollNumber"].as_str().unwrap())
        .collect();
    assert_eq!(rolls, ["1", "2", "10"]);
}

#[actix_web::test]
async fn grade_labels_with_punctuation_round_trip() {
    let ctx = setup().await;
    let north = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "label_teacher", "teacher", "active", Some(north)).await;

    let slash = seed_student(&ctx.db, north, "Slash", "5/A", Some("01"), "accepted").await;
    let nursery =
        seed_student(&ctx.db, north, "Tiny", "Nursery (K.G.)", Some("01"), "accepted").await;
    seed_performance(&ctx.db, north, nursery, "Nursery (K.G.)", "drawing", 88.0).await;

    let app = test_app!(ctx);
    let token = token_for(teacher);

    let req = test::TestRequest::get()
        .uri("/api/academic/grades")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "grades": ["5/A", "Nursery (K.G.)"] }));

    let req = test::TestRequest::get()
        .uri("/api/attendance/students?grade=5%2FA")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["students"][0]["id"], slash);
    assert_eq!(body["students"][0]["grade"], "5/A");

    let req = test::TestRequest::get()
        .uri("/api/academic/performance?grade=Nursery%20(K.G.)")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    let rows = body["performances"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["studentId"], nursery);
}
