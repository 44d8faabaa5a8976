mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{valid_company, TestApp};

const GUEST_HIDDEN: [&str; 7] = [
    "krs",
    "share_capital",
    "last_valuation",
    "created_by_user_id",
    "created_by_name",
    "is_restricted",
    "notes",
];

#[tokio::test]
async fn guest_list_skips_restricted_and_redacts() -> Result<()> {
    let app = TestApp::with_demo_data().await?;

    let (status, body) = app.get("/api/companies", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);

    let items = body["items"].as_array().unwrap();
    let names: Vec<&str> = items.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Baltic Logistics", "Mazovia Software"]);
    for item in items {
        for key in GUEST_HIDDEN {
            assert!(item.get(key).is_none(), "{key} leaked to guest");
        }
        assert!(item["company_type_label"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn member_list_includes_restricted_with_full_columns() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let token = app.demo_viewer().await?;

    let (status, body) = app.get("/api/companies", Some(&token)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 3);
    let restricted = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Tatra Holdings")
        .unwrap();
    assert_eq!(restricted["is_restricted"], true);
    assert_eq!(restricted["share_capital"], 1.0);
    assert!(restricted.get("created_by_name").is_none());
    Ok(())
}

#[tokio::test]
async fn invalid_token_on_read_is_treated_as_guest() -> Result<()> {
    let app = TestApp::with_demo_data().await?;

    let (status, body) = app.get("/api/companies", Some("garbage")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 2);
    Ok(())
}

#[tokio::test]
async fn paging_respects_limit_and_totals() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let token = app.demo_viewer().await?;

    let (_, first) = app.get("/api/companies?page=1&limit=2", Some(&token)).await?;
    let (_, second) = app.get("/api/companies?page=2&limit=2", Some(&token)).await?;

    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert_eq!(first["totalPages"], 2);
    assert_eq!(second["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["items"][0]["name"], "Tatra Holdings");

    let (_, junk) = app.get("/api/companies?page=abc&limit=0", Some(&token)).await?;
    assert_eq!(junk["page"], 1);
    assert_eq!(junk["limit"], 10);

    let (_, clamped) = app.get("/api/companies?limit=1000", Some(&token)).await?;
    assert_eq!(clamped["limit"], 100);
    Ok(())
}

#[tokio::test]
async fn repeated_paging_keys_use_the_first_value() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let token = app.demo_viewer().await?;

    let (status, body) = app
        .get("/api/companies?page=2&page=1&limit=2&limit=50", Some(&token))
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["items"][0]["name"], "Tatra Holdings");
    Ok(())
}

#[tokio::test]
async fn types_path_is_not_a_company_id_for_mutations() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let analyst = app.demo_analyst().await?;
    let viewer = app.demo_viewer().await?;

    let (status, body) = app.put("/api/companies/types", Some(&analyst), valid_company()).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid company id.");

    let (status, body) = app.delete("/api/companies/types", Some(&analyst)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid company id.");

    let (status, _) = app.delete("/api/companies/types", None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.delete("/api/companies/types", Some(&viewer)).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn empty_listing_still_has_one_page() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app.get("/api/companies", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["totalItems"], 0);
    assert_eq!(body["totalPages"], 1);
    Ok(())
}

#[tokio::test]
async fn company_types_are_ordered_by_label() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app.get("/api/companies/types", None).await?;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["code"], "PSA");
    let labels: Vec<&str> = items.iter().map(|t| t["label_pl"].as_str().unwrap()).collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
    Ok(())
}

#[tokio::test]
async fn guest_cannot_fetch_restricted_company() -> Result<()> {
    let app = TestApp::with_demo_data().await?;

    let (status, body) = app.get("/api/companies/3", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Company not found.");
    Ok(())
}

#[tokio::test]
async fn detail_includes_holdings_ordered_by_shareholder() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let token = app.demo_viewer().await?;

    let (status, body) = app.get("/api/companies/1", Some(&token)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company"]["name"], "Baltic Logistics");
    assert_eq!(body["company"]["created_by_name"], "Demo Analyst");
    assert_eq!(body["company"]["is_restricted"], false);

    let holdings = body["shareholdings"].as_array().unwrap();
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[0]["shareholder_name"], "Anna");
    assert_eq!(holdings[0]["shareholder_last_name"], "Kowalska");
    assert_eq!(holdings[0]["shares_owned"], 600);
    assert_eq!(holdings[1]["shareholder_name"], "Piotr");
    Ok(())
}

#[tokio::test]
async fn guest_detail_is_redacted() -> Result<()> {
    let app = TestApp::with_demo_data().await?;

    let (status, body) = app.get("/api/companies/1", None).await?;

    assert_eq!(status, StatusCode::OK);
    for key in GUEST_HIDDEN {
        assert!(body["company"].get(key).is_none(), "{key} leaked to guest");
    }
    Ok(())
}

#[tokio::test]
async fn invalid_and_missing_ids() -> Result<()> {
    let app = TestApp::with_demo_data().await?;

    for raw in ["abc", "0", "-2", "1.5"] {
        let (status, body) = app.get(&format!("/api/companies/{raw}"), None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {raw}");
        assert_eq!(body["error"], "Invalid company id.");
    }

    let (status, body) = app.get("/api/companies/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Company not found.");
    Ok(())
}

#[tokio::test]
async fn create_then_fetch_round_trip() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, analyst_id) = app.analyst("owner@example.com").await?;

    let (status, body) = app.post("/api/companies", Some(&token), valid_company()).await?;
    assert_eq!(status, StatusCode::CREATED);

    let company = &body["company"];
    assert_eq!(company["created_by_user_id"], analyst_id);
    assert_eq!(company["company_type_code"], "SP_ZOO");
    let id = company["id"].as_i64().unwrap();

    let (status, fetched) = app.get(&format!("/api/companies/{id}"), Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);

    let fetched = &fetched["company"];
    let expected = valid_company();
    for key in ["name", "nip", "krs", "founded_at", "notes", "is_restricted"] {
        assert_eq!(fetched[key], expected[key], "{key}");
    }
    assert_eq!(fetched["share_capital"], 5000.0);
    assert_eq!(fetched["last_valuation"], 125000.5);
    assert_eq!(fetched["created_by_name"], "Test Analyst");
    Ok(())
}

#[tokio::test]
async fn create_normalizes_optional_fields() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.analyst("owner@example.com").await?;

    let (status, body) = app
        .post(
            "/api/companies",
            Some(&token),
            json!({
                "name": "Bare Minimum",
                "nip": "111",
                "krs": "",
                "founded_at": "",
                "company_type_id": "2",
                "share_capital": "10.5",
                "last_valuation": "",
                "is_restricted": "1",
                "notes": ""
            }),
        )
        .await?;

    assert_eq!(status, StatusCode::CREATED);
    let company = &body["company"];
    assert!(company["krs"].is_null());
    assert!(company["founded_at"].is_null());
    assert!(company["last_valuation"].is_null());
    assert!(company["notes"].is_null());
    assert_eq!(company["company_type_id"], 2);
    assert_eq!(company["share_capital"], 10.5);
    assert_eq!(company["is_restricted"], true);
    Ok(())
}

#[tokio::test]
async fn create_reports_validation_errors_in_order() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.analyst("owner@example.com").await?;

    let (status, body) = app
        .post(
            "/api/companies",
            Some(&token),
            json!({ "name": "", "nip": "abc", "company_type_id": 0, "share_capital": -1 }),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": [
            "Company name is required.",
            "NIP must contain digits 0–9 only.",
            "company_type_id must be a positive integer.",
            "share_capital must be a positive number."
        ] })
    );
    Ok(())
}

#[tokio::test]
async fn unknown_company_type_conflicts() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.analyst("owner@example.com").await?;
    let mut payload = valid_company();
    payload["company_type_id"] = json!(42);

    let (status, body) = app.post("/api/companies", Some(&token), payload).await?;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn mutations_require_analyst_role() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let viewer = app.demo_viewer().await?;

    let (anonymous, body) = app.post("/api/companies", None, valid_company()).await?;
    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentication required.");

    let (as_viewer, body) = app.post("/api/companies", Some(&viewer), valid_company()).await?;
    assert_eq!(as_viewer, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Insufficient permissions.");

    let (delete_as_viewer, _) = app.delete("/api/companies/1", Some(&viewer)).await?;
    assert_eq!(delete_as_viewer, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn owner_can_update_company() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let token = app.demo_analyst().await?;
    let mut payload = valid_company();
    payload["name"] = json!("Baltic Logistics Group");
    payload["krs"] = json!(null);

    let (status, body) = app.put("/api/companies/1", Some(&token), payload).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company"]["name"], "Baltic Logistics Group");
    assert!(body["company"]["krs"].is_null());
    assert_eq!(body["company"]["created_by_user_id"], 1);
    Ok(())
}

#[tokio::test]
async fn non_owner_analyst_is_forbidden() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let (other, _) = app.analyst("other@example.com").await?;

    let (put_status, put_body) = app.put("/api/companies/1", Some(&other), valid_company()).await?;
    assert_eq!(put_status, StatusCode::FORBIDDEN);
    assert_eq!(put_body["error"], "You are not allowed to modify this company.");

    let (delete_status, delete_body) = app.delete("/api/companies/1", Some(&other)).await?;
    assert_eq!(delete_status, StatusCode::FORBIDDEN);
    assert_eq!(delete_body["error"], "You are not allowed to delete this company.");

    let (_, still_there) = app.get("/api/companies/1", None).await?;
    assert_eq!(still_there["company"]["name"], "Baltic Logistics");
    Ok(())
}

#[tokio::test]
async fn update_checks_existence_then_ownership_then_body() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let owner = app.demo_analyst().await?;
    let (other, _) = app.analyst("other@example.com").await?;

    let (missing, _) = app.put("/api/companies/999", Some(&owner), json!({})).await?;
    assert_eq!(missing, StatusCode::NOT_FOUND);

    let (not_owner, _) = app.put("/api/companies/1", Some(&other), json!({})).await?;
    assert_eq!(not_owner, StatusCode::FORBIDDEN);

    let (invalid, body) = app.put("/api/companies/1", Some(&owner), json!({})).await?;
    assert_eq!(invalid, StatusCode::BAD_REQUEST);
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));

    let (bad_id, body) = app.put("/api/companies/nope", Some(&owner), json!({})).await?;
    assert_eq!(bad_id, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid company id.");
    Ok(())
}

#[tokio::test]
async fn delete_cascades_to_holdings() -> Result<()> {
    let app = TestApp::with_demo_data().await?;
    let token = app.demo_analyst().await?;

    let (status, body) = app.delete("/api/companies/1", Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (gone, _) = app.get("/api/companies/1", Some(&token)).await?;
    assert_eq!(gone, StatusCode::NOT_FOUND);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shareholdings WHERE company_id = 1")
        .fetch_one(app.db.pool())
        .await?;
    assert_eq!(remaining, 0);

    let (again, _) = app.delete("/api/companies/1", Some(&token)).await?;
    assert_eq!(again, StatusCode::NOT_FOUND);
    Ok(())
}
