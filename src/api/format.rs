//! Role-dependent response shapes.
//!
//! Guests get an allow-list of public company columns. Members get the full
//! row with `is_restricted` as a boolean.

use serde_json::{json, Value};

use crate::database::models::Company;

pub fn company_guest_view(company: &Company) -> Value {
    json!({
        "id": company.id,
        "name": company.name,
        "nip": company.nip,
        "founded_at": company.founded_at,
        "company_type_code": company.company_type_code,
        "company_type_label": company.company_type_label,
    })
}

pub fn company_member_view(company: &Company) -> Value {
    json!({
        "id": company.id,
        "name": company.name,
        "nip": company.nip,
        "krs": company.krs,
        "founded_at": company.founded_at,
        "company_type_code": company.company_type_code,
        "company_type_label": company.company_type_label,
        "share_capital": company.share_capital,
        "last_valuation": company.last_valuation,
        "created_by_user_id": company.created_by_user_id,
        "is_restricted": company.is_restricted,
        "notes": company.notes,
    })
}

pub fn company_view(company: &Company, guest: bool) -> Value {
    if guest {
        company_guest_view(company)
    } else {
        company_member_view(company)
    }
}

/// Detail view: members also see who created the row
pub fn company_detail_view(company: &Company, guest: bool) -> Value {
    let mut view = company_view(company, guest);
    if !guest {
        if let Value::Object(map) = &mut view {
            map.insert("created_by_name".to_string(), json!(company.created_by_name));
        }
    }
    view
}
