//! End-to-end workflow tests
//!
//! Wires the full application the way bootstrap does and walks the
//! farmer journey from first submission to certificate display, then
//! checks that every role dashboard observes the same seed register.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use seed_certification_workflow::config::{AuthConfig, Config, StorageConfig};
use seed_certification_workflow::router::Route;
use seed_certification_workflow::services::certification::{ApplicationInput, CertificateView};
use seed_certification_workflow::App;
use shared::models::SubmissionStatus;
use shared::types::Role;

fn test_app(dir: &tempfile::TempDir) -> App {
    App::with_config(Config {
        environment: "test".to_string(),
        storage: StorageConfig {
            data_dir: dir.path().to_path_buf(),
        },
        auth: AuthConfig { bcrypt_cost: 4 },
    })
    .unwrap()
}

fn maize_application(farmer_name: &str) -> ApplicationInput {
    ApplicationInput {
        farmer_name: Some(farmer_name.to_string()),
        seed_type: "Maize".to_string(),
        quantity_kg: Decimal::from(1000),
        farm_location: "Freetown, Sierra Leone".to_string(),
        planting_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        seed_source: "Local Supplier".to_string(),
        description: None,
    }
}

#[test]
fn test_first_submission_issues_cert_1_and_displays() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let submitted = app
        .certification
        .submit(maize_application("Alice Kamara"))
        .unwrap();
    assert_eq!(submitted.application.certificate_id, "CERT-1");
    assert_eq!(submitted.next, Route::Certificate("CERT-1".to_string()));

    // Following the navigation target lands on the certificate screen.
    let route = Route::resolve(&submitted.next.path());
    let Route::Certificate(id) = route else {
        panic!("expected a certificate route, got {route:?}");
    };
    match app.certification.view(&id).unwrap() {
        CertificateView::Found(application) => {
            assert_eq!(application.farmer_name, "Alice Kamara");
            assert_eq!(application.seed_type, "Maize");
        }
        CertificateView::RedirectToLogin => panic!("expected the issued certificate"),
    }
}

#[test]
fn test_role_selection_then_submission_flow() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    // Picking the farmer role routes to the certification form.
    let route = app.profile.select_role(Role::Farmer).unwrap();
    assert_eq!(route, Route::CertificationForm);

    // A profile with both name parts prefills the form.
    let mut profile = app.profile.load().unwrap();
    profile.first_name = "Alice".to_string();
    profile.last_name = "Kamara".to_string();
    app.profile.save(profile).unwrap();

    let mut input = maize_application("unused");
    input.farmer_name = None;
    let submitted = app.certification.submit(input).unwrap();
    assert_eq!(submitted.application.farmer_name, "Alice Kamara");
}

#[test]
fn test_certificates_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    test_app(&dir)
        .certification
        .submit(maize_application("Alice Kamara"))
        .unwrap();

    let reopened = test_app(&dir);
    assert!(matches!(
        reopened.certification.view("CERT-1").unwrap(),
        CertificateView::Found(_)
    ));
    // The sequence continues where the stored list left off.
    let next = reopened
        .certification
        .submit(maize_application("Bob Sesay"))
        .unwrap();
    assert_eq!(next.application.certificate_id, "CERT-2");
}

#[test]
fn test_all_dashboards_observe_the_same_register() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let submission = app.inspector.search("wheat").pop().unwrap();
    assert_eq!(submission.status, SubmissionStatus::Pending);

    // A report filed by the inspector shows up in every other view.
    app.inspector
        .file_lab_report(
            &submission.id,
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            "Germination 94%",
        )
        .unwrap();

    assert_eq!(app.farmer.get(&submission.id).unwrap().lab_reports.len(), 1);
    let monitored = app.agency.monitor_seeds("wheat").pop().unwrap();
    assert_eq!(monitored.lab_reports.len(), 1);
    assert_eq!(app.inspector.summary().statuses.total, 5);
    assert_eq!(app.agency.summary().monitored_seeds, 5);
}

#[test]
fn test_logout_clears_session_but_not_certificates() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    app.profile.select_role(Role::Farmer).unwrap();
    app.certification
        .submit(maize_application("Alice Kamara"))
        .unwrap();

    assert_eq!(app.profile.logout().unwrap(), Route::Login);
    assert!(app.profile.load().is_none());
    // Issued certificates are not part of the session.
    assert!(matches!(
        app.certification.view("CERT-1").unwrap(),
        CertificateView::Found(_)
    ));
}
