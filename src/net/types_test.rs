use super::*;
use serde_json::json;

fn comment_json(id: serde_json::Value) -> serde_json::Value {
    json!({
        "url": "http://blog.local/api/comments/1",
        "id": id,
        "body": "hi *there*",
        "body_html": "<p>hi <em>there</em></p>",
        "author": "alice",
        "timestamp": "2017 03 04",
        "author_id": 7,
        "article_id": 3
    })
}

// =============================================================
// Comment
// =============================================================

#[test]
fn comment_decodes_server_shape() {
    let comment: Comment = serde_json::from_value(comment_json(json!(1))).unwrap();
    assert_eq!(comment.id, CommentId::from("1"));
    assert_eq!(comment.author_id.as_str(), "7");
    assert_eq!(comment.article_id.as_str(), "3");
    assert_eq!(comment.author_display_name, "alice");
    assert_eq!(comment.body, "hi *there*");
    assert_eq!(comment.created_at, "2017 03 04");
}

#[test]
fn comment_accepts_string_ids() {
    let comment: Comment = serde_json::from_value(comment_json(json!("c-9"))).unwrap();
    assert_eq!(comment.id.to_string(), "c-9");
}

#[test]
fn comment_accepts_created_at_alias() {
    let comment: Comment = serde_json::from_value(json!({
        "id": 2,
        "author_id": "u1",
        "author": "bob",
        "article_id": "a1",
        "body": "x",
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(comment.created_at, "2024-01-01T00:00:00Z");
}

#[test]
fn comment_rejects_structured_id() {
    let result = serde_json::from_value::<Comment>(comment_json(json!({"nested": true})));
    assert!(result.is_err());
}

// =============================================================
// CommentPage
// =============================================================

#[test]
fn page_decodes_paged_shape() {
    let page: CommentPage = serde_json::from_value(json!({
        "comments": [comment_json(json!(1))],
        "prev": null,
        "next": "http://blog.local/api/articles/3/comments/?page=2",
        "count": 12
    }))
    .unwrap();
    assert_eq!(page.comments.len(), 1);
    assert!(page.previous_page_token.is_none());
    assert_eq!(
        page.next_page_token.as_ref().map(PageToken::as_str),
        Some("http://blog.local/api/articles/3/comments/?page=2")
    );
    assert_eq!(page.total_count, 12);
}

#[test]
fn page_missing_count_defaults_to_len() {
    let page: CommentPage = serde_json::from_value(json!({
        "comments": [comment_json(json!(1)), comment_json(json!(2))]
    }))
    .unwrap();
    assert_eq!(page.total_count, 2);
    assert!(page.next_page_token.is_none());
}

#[test]
fn page_accepts_bare_array() {
    let page: CommentPage = serde_json::from_value(json!([comment_json(json!(1))])).unwrap();
    assert_eq!(page.comments.len(), 1);
    assert_eq!(page.total_count, 1);
    assert!(page.previous_page_token.is_none());
}

#[test]
fn page_empty_decodes() {
    let page: CommentPage = serde_json::from_value(json!({"comments": [], "count": 0})).unwrap();
    assert_eq!(page, CommentPage::default());
}

// =============================================================
// NewComment
// =============================================================

#[test]
fn new_comment_serializes_create_body() {
    let draft = NewComment {
        author_id: AuthorId::from("u1"),
        article_id: ArticleId::from("3"),
        body: "second".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({"author_id": "u1", "article_id": "3", "body": "second"})
    );
}
