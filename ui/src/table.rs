//! Builds the user table.

use hrms_business::UserRecord;

use crate::dates::DateFormatter;
use crate::dom::{Element, Node};

pub const USER_TABLE_CLASS: &str = "user-table";

/// Header column labels.
pub const HEADERS: [&str; 6] = [
    "Email",
    "Admin",
    "Name",
    "Created",
    "Last Sign In",
    "Email Confirmed",
];

pub const NO_NAME: &str = "N/A";
pub const NEVER_SIGNED_IN: &str = "Never";

/// `<table class="user-table">` with a header row and one body row per user, in order.
pub fn user_table(users: &[UserRecord], dates: &DateFormatter) -> Node {
    let header_row = Element::new("tr").with_children(
        HEADERS
            .iter()
            .map(|label| Element::new("th").with_text(*label).into()),
    );

    let body_rows = users.iter().map(|user| user_row(user, dates).into());

    Element::new("table")
        .with_class(USER_TABLE_CLASS)
        .with_child(Element::new("thead").with_child(header_row))
        .with_child(Element::new("tbody").with_children(body_rows))
        .into()
}

/// Cell texts for one user, in column order.
pub fn user_cells(user: &UserRecord, dates: &DateFormatter) -> [String; 6] {
    [
        user.email.clone(),
        yes_no(user.is_admin).to_owned(),
        name_cell(user),
        dates.format(&user.created_at),
        last_sign_in_cell(user.last_sign_in_at.as_deref(), dates),
        yes_no(user.email_confirmed).to_owned(),
    ]
}

fn user_row(user: &UserRecord, dates: &DateFormatter) -> Element {
    Element::new("tr").with_children(
        user_cells(user, dates)
            .into_iter()
            .map(|text| Element::new("td").with_text(text).into()),
    )
}

#[inline]
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn name_cell(user: &UserRecord) -> String {
    let name = user.full_name();
    if name.is_empty() {
        NO_NAME.to_owned()
    } else {
        name
    }
}

pub fn last_sign_in_cell(last_sign_in_at: Option<&str>, dates: &DateFormatter) -> String {
    match last_sign_in_at {
        Some(ts) if !ts.is_empty() => dates.format(ts),
        _ => NEVER_SIGNED_IN.to_owned(),
    }
}
