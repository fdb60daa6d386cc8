use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use crate::common::{
    app, app_with_store, create_author, create_book, created_id, get, post_form,
    UnreachableStore,
};

#[tokio::test]
async fn test_index_shows_counts() {
    let app = app();
    let author = create_author(&app).await;
    create_book(&app, &author).await;

    let response = get(&app, "/catalog").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Books: </strong>1"));
    assert!(response.body.contains("<strong>Authors: </strong>1"));
    assert!(response.body.contains("<strong>Copies: </strong>0"));
}

#[tokio::test]
async fn test_create_instance_redirects_to_new_record() {
    let app = app();
    let author = create_author(&app).await;
    let book = create_book(&app, &author).await;

    let response = post_form(
        &app,
        "/catalog/instance/create",
        &[
            ("book", book.as_str()),
            ("imprint", "First Edition"),
            ("status", "Available"),
            ("due_back", ""),
        ],
    )
    .await;
    let id = created_id(&response);
    assert_eq!(
        response.location.as_deref(),
        Some(format!("/catalog/instance/{}", id).as_str())
    );

    let detail = get(&app, &format!("/catalog/instance/{}", id)).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("First Edition"));
    assert!(detail.body.contains("The Dispossessed"));
}

#[tokio::test]
async fn test_invalid_instance_is_not_persisted() {
    let app = app();

    let response = post_form(
        &app,
        "/catalog/instance/create",
        &[("book", ""), ("imprint", ""), ("status", "Available")],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<li>Book must be specified</li>"));
    assert!(response.body.contains("<li>Imprint must be specified</li>"));

    let list = get(&app, "/catalog/instances").await;
    assert!(list.body.contains("There are no book copies in this library."));
}

#[tokio::test]
async fn test_unknown_instance_is_not_found() {
    let app = app();

    let response = get(&app, &format!("/catalog/instance/{}", ObjectId::new().to_hex())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = get(&app, "/catalog/instance/not-an-id").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_instance_redirects_to_book() {
    let app = app();
    let author = create_author(&app).await;
    let book = create_book(&app, &author).await;
    let instance = created_id(
        &post_form(
            &app,
            "/catalog/instance/create",
            &[("book", book.as_str()), ("imprint", "Harper"), ("status", "Loaned")],
        )
        .await,
    );

    let response = post_form(
        &app,
        &format!("/catalog/instance/{}/delete", instance),
        &[("instanceid", instance.as_str())],
    )
    .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location.as_deref(),
        Some(format!("/catalog/book/{}", book).as_str())
    );

    let gone = get(&app, &format!("/catalog/instance/{}", instance)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_book_delete_blocked_while_copies_exist() {
    let app = app();
    let author = create_author(&app).await;
    let book = create_book(&app, &author).await;
    post_form(
        &app,
        "/catalog/instance/create",
        &[("book", book.as_str()), ("imprint", "Harper"), ("status", "Available")],
    )
    .await;

    let response = post_form(
        &app,
        &format!("/catalog/book/{}/delete", book),
        &[("bookid", book.as_str())],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Delete the following copies"));

    let still_there = get(&app, &format!("/catalog/book/{}", book)).await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_form_for_missing_record_redirects() {
    let app = app();
    let missing = ObjectId::new().to_hex();

    let response = get(&app, &format!("/catalog/author/{}/delete", missing)).await;
    assert_eq!(response.location.as_deref(), Some("/catalog/authors"));

    let response = get(&app, &format!("/catalog/instance/{}/delete", missing)).await;
    assert_eq!(response.location.as_deref(), Some("/catalog/books"));
}

#[tokio::test]
async fn test_genre_create_update_and_duplicate() {
    let app = app();

    let created = post_form(&app, "/catalog/genre/create", &[("name", "Science Fiction")]).await;
    let id = created_id(&created);

    let duplicate = post_form(&app, "/catalog/genre/create", &[("name", "science fiction")]).await;
    assert_eq!(created_id(&duplicate), id);

    let updated = post_form(
        &app,
        &format!("/catalog/genre/{}/update", id),
        &[("name", "Sci-Fi & Fantasy")],
    )
    .await;
    assert_eq!(created_id(&updated), id);

    let detail = get(&app, &format!("/catalog/genre/{}", id)).await;
    assert!(detail.body.contains("Sci-Fi &amp; Fantasy"));
}

#[tokio::test]
async fn test_book_form_lists_authors_and_keeps_values_on_rejection() {
    let app = app();
    let author = create_author(&app).await;

    let form = get(&app, "/catalog/book/create").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("LeGuin, Ursula"));

    let rejected = post_form(
        &app,
        "/catalog/book/create",
        &[("title", "<b>Bold</b>"), ("author", author.as_str())],
    )
    .await;
    assert_eq!(rejected.status, StatusCode::OK);
    assert!(rejected.body.contains("Summary must not be empty."));
    assert!(rejected.body.contains("LeGuin, Ursula"));
    assert!(rejected.body.contains("&lt;b&gt;Bold&lt;&#x2F;b&gt;"));
    assert!(!rejected.body.contains("<b>Bold</b>"));
}

#[tokio::test]
async fn test_empty_body_fails_validation() {
    let response = post_form(&app(), "/catalog/genre/create", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Genre name must contain between 3 and 100 characters"));
}

#[tokio::test]
async fn test_non_form_body_is_bad_request() {
    let request = Request::post("/catalog/genre/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Poetry"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_form_shows_confirmation() {
    let app = app();
    let genre = created_id(&post_form(&app, "/catalog/genre/create", &[("name", "Poetry")]).await);

    let response = get(&app, &format!("/catalog/genre/{}/delete", genre)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="genreid""#));
    assert!(response.body.contains(&format!(r#"value="{}""#, genre)));
}

#[tokio::test]
async fn test_update_form_for_unknown_record_is_not_found() {
    let app = app();
    let missing = ObjectId::new().to_hex();

    for entity in ["book", "author", "genre", "instance"] {
        let response = get(&app, &format!("/catalog/{}/{}/update", entity, missing)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", entity);
    }
}

#[tokio::test]
async fn test_author_delete_blocked_while_books_exist() {
    let app = app();
    let author = create_author(&app).await;
    create_book(&app, &author).await;

    let response = post_form(
        &app,
        &format!("/catalog/author/{}/delete", author),
        &[("authorid", author.as_str())],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Delete the following books"));
    assert!(response.body.contains("The Dispossessed"));

    let still_there = get(&app, &format!("/catalog/author/{}", author)).await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_genre_delete_blocked_while_books_exist() {
    let app = app();
    let author = create_author(&app).await;
    let genre = created_id(&post_form(&app, "/catalog/genre/create", &[("name", "Utopia")]).await);
    created_id(
        &post_form(
            &app,
            "/catalog/book/create",
            &[
                ("title", "The Dispossessed"),
                ("author", author.as_str()),
                ("summary", "An ambiguous utopia."),
                ("isbn", "9780061054884"),
                ("genre", genre.as_str()),
            ],
        )
        .await,
    );

    let response = post_form(
        &app,
        &format!("/catalog/genre/{}/delete", genre),
        &[("genreid", genre.as_str())],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Delete the following books"));

    let still_there = get(&app, &format!("/catalog/genre/{}", genre)).await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_rejected_book_update_refetches_choices() {
    let app = app();
    let author = create_author(&app).await;
    let book = create_book(&app, &author).await;
    post_form(&app, "/catalog/genre/create", &[("name", "Utopia")]).await;

    let response = post_form(
        &app,
        &format!("/catalog/book/{}/update", book),
        &[("title", ""), ("author", author.as_str())],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Title must not be empty."));
    assert!(response.body.contains(&format!(
        r#"<option value="{}" selected>LeGuin, Ursula</option>"#,
        author
    )));
    assert!(response.body.contains("Utopia"));

    let unchanged = get(&app, &format!("/catalog/book/{}", book)).await;
    assert!(unchanged.body.contains("The Dispossessed"));
}

#[tokio::test]
async fn test_genre_update_to_existing_name_is_rejected() {
    let app = app();
    post_form(&app, "/catalog/genre/create", &[("name", "Fantasy")]).await;
    let poetry = created_id(&post_form(&app, "/catalog/genre/create", &[("name", "Poetry")]).await);

    let response = post_form(
        &app,
        &format!("/catalog/genre/{}/update", poetry),
        &[("name", "fantasy")],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("A genre with this name already exists"));

    let list = get(&app, "/catalog/genres").await;
    assert!(list.body.contains(">Poetry</a>"));
    assert!(!list.body.contains(">fantasy</a>"));
}

#[tokio::test]
async fn test_instance_without_status_is_under_maintenance() {
    let app = app();
    let author = create_author(&app).await;
    let book = create_book(&app, &author).await;

    let response = post_form(
        &app,
        "/catalog/instance/create",
        &[("book", book.as_str()), ("imprint", "Ace"), ("status", "")],
    )
    .await;
    let instance = created_id(&response);

    let detail = get(&app, &format!("/catalog/instance/{}", instance)).await;
    assert!(detail.body.contains(r#"<p class="text-danger">Maintenance</p>"#));
}

#[tokio::test]
async fn test_store_failure_renders_error_page() {
    let app = app_with_store(Arc::new(UnreachableStore));

    for uri in ["/catalog", "/catalog/books", "/catalog/book/create"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert!(response.body.contains("Database error"));
        assert!(!response.body.contains("connection refused"));
    }
}
