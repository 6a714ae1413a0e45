mod common;

use std::path::Path;
use std::sync::Arc;

use common::{FailingNotifier, app, app_with, post_form};
use folio::{Catalog, Status};

const SUBMIT: &str = "/contact/submit";

fn valid() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("subject", "Engines"),
        ("message", "Lovely site."),
    ]
}

fn with(field: &str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    valid()
        .into_iter()
        .map(|(k, v)| if k == field { (k, value) } else { (k, v) })
        .collect()
}

#[tokio::test]
async fn each_missing_field_reports_its_own_error() {
    let cases = [
        ("name", "Name is required"),
        ("email", "Email is required"),
        ("subject", "Subject is required"),
        ("message", "Message is required"),
    ];
    for (field, message) in cases {
        let (app, notifier) = app();
        let res = post_form(&app, SUBMIT, true, &with(field, "")).await;
        assert_eq!(res.status_code(), Status::Ok, "field {field}");

        let body = res.body_text();
        assert!(body.contains(message), "field {field}");
        assert_eq!(body.matches("class=\"field-error\"").count(), 1, "field {field}");
        assert!(notifier.sent().is_empty());
    }
}

#[tokio::test]
async fn whitespace_only_is_empty() {
    let (app, notifier) = app();
    let body = post_form(&app, SUBMIT, true, &with("name", "   ")).await.body_text();
    assert!(body.contains("Name is required"));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn email_without_at_is_invalid() {
    let (app, notifier) = app();
    let body = post_form(&app, SUBMIT, true, &with("email", "ada.example.com")).await.body_text();
    assert!(body.contains("Please enter a valid email"));
    assert!(!body.contains("Email is required"));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn rejected_fragment_keeps_values_without_shell() {
    let (app, _) = app();
    let body = post_form(&app, SUBMIT, true, &with("subject", "")).await.body_text();
    assert!(body.contains("value=\"Ada Lovelace\""));
    assert!(body.contains("value=\"ada@example.com\""));
    assert!(body.contains("Lovely site."));
    assert!(!body.contains("<nav"));
}

#[tokio::test]
async fn rejected_full_page_rerenders_whole_page() {
    let (app, notifier) = app();
    let res = post_form(&app, SUBMIT, false, &with("message", "")).await;
    assert_eq!(res.status_code(), Status::Ok);

    let body = res.body_text();
    assert!(body.contains("<nav"));
    assert!(body.contains("<footer"));
    assert!(body.contains("Message is required"));
    assert!(body.contains("value=\"Engines\""));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn valid_partial_submission_notifies_once_with_trimmed_values() {
    let (app, notifier) = app();
    let fields = [
        ("name", "  Ada Lovelace "),
        ("email", " ada@example.com"),
        ("subject", "Engines\n"),
        ("message", "\tLovely site.  "),
    ];
    let res = post_form(&app, SUBMIT, true, &fields).await;
    assert_eq!(res.status_code(), Status::Ok);
    assert!(res.body_text().contains("Your message has been sent"));
    assert!(!res.body_text().contains("<form"));

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name(), "Ada Lovelace");
    assert_eq!(sent[0].email(), "ada@example.com");
    assert_eq!(sent[0].subject(), "Engines");
    assert_eq!(sent[0].message(), "Lovely site.");
}

#[tokio::test]
async fn valid_full_page_submission_redirects() {
    let (app, notifier) = app();
    let res = post_form(&app, SUBMIT, false, &valid()).await;
    assert_eq!(res.status_code(), Status::SeeOther);
    assert_eq!(res.header("location"), Some("/contact?success=true"));
    assert_eq!(res.header("vary"), Some("HX-Request"));
    assert!(res.body().is_empty());
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn notify_failure_partial_keeps_values_with_general_error() {
    let app = app_with(Catalog::embedded().unwrap(), Arc::new(FailingNotifier), Path::new("static"));
    let res = post_form(&app, SUBMIT, true, &valid()).await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.header("vary"), Some("HX-Request"));

    let body = res.body_text();
    assert!(body.contains("Failed to send message. Please try again."));
    assert!(body.contains("value=\"Ada Lovelace\""));
    assert!(body.contains("Lovely site."));
    assert!(!body.contains("class=\"field-error\""));
}

#[tokio::test]
async fn notify_failure_full_page_is_500() {
    let app = app_with(Catalog::embedded().unwrap(), Arc::new(FailingNotifier), Path::new("static"));
    let res = post_form(&app, SUBMIT, false, &valid()).await;
    assert_eq!(res.status_code(), Status::InternalServerError);
    assert_eq!(res.body_text(), "Failed to send message");
}
