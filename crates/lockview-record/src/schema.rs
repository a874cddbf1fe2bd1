// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Field schema — which role each known field plays, and what each role is
// replaced with. Adding a field or a role is a table edit here; the redactor
// itself only interprets `Rule`s.

use lockview_core::Placeholders;
use serde_json::{Map, Value};

/// Kinds of contact detail, each with its own dummy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Address,
    Social,
    Url,
}

/// Semantic role of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Name, title, profession, degree.
    ShortText,
    Contact(ContactKind),
    /// Summaries and descriptions.
    Narrative,
    /// Embedded image or other asset reference.
    Media,
    Date,
    /// Auxiliary detail with no useful dummy (GPA, credential id).
    Detail,
    /// Boolean state such as "currently working here".
    Flag,
    /// Company, school, issuer.
    Organization,
    Location,
    /// Flat list of short strings.
    ScalarList,
    /// Repeated sub-records sharing one field table.
    RecordList(&'static [FieldSpec]),
    /// A single nested block.
    Section(&'static [FieldSpec]),
}

/// One entry of a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub role: FieldRole,
}

impl FieldSpec {
    pub const fn new(name: &'static str, role: FieldRole) -> Self {
        Self { name, role }
    }
}

/// Which entry of the placeholder table a text rule writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextValue {
    Token,
    LockedText,
    HiddenOrganization,
    HiddenLocation,
    Contact(ContactKind),
}

impl TextValue {
    pub fn resolve(self, placeholders: &Placeholders) -> &str {
        match self {
            TextValue::Token => &placeholders.token,
            TextValue::LockedText => &placeholders.locked_text,
            TextValue::HiddenOrganization => &placeholders.hidden_organization,
            TextValue::HiddenLocation => &placeholders.hidden_location,
            TextValue::Contact(ContactKind::Email) => &placeholders.email,
            TextValue::Contact(ContactKind::Phone) => &placeholders.phone,
            TextValue::Contact(ContactKind::Address) => &placeholders.address,
            TextValue::Contact(ContactKind::Social) => &placeholders.social,
            TextValue::Contact(ContactKind::Url) => &placeholders.url,
        }
    }
}

/// Replacement rule applied to a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty text becomes the given placeholder; empty stays empty.
    Text(TextValue),
    /// Always the empty string.
    Clear,
    /// Always null.
    Null,
    /// Always `false`.
    Flag,
    /// Same length list, each entry redacted as `Text(Token)`.
    EachScalar,
    /// Same length list, each entry a record redacted against the table.
    EachRecord(&'static [FieldSpec]),
    /// Nested record redacted against the table.
    Section(&'static [FieldSpec]),
}

impl Rule {
    /// Value emitted for a field that is absent from the input.
    pub fn empty_form(self) -> Value {
        match self {
            Rule::Text(_) | Rule::Clear => Value::String(String::new()),
            Rule::Null => Value::Null,
            Rule::Flag => Value::Bool(false),
            Rule::EachScalar | Rule::EachRecord(_) => Value::Array(Vec::new()),
            Rule::Section(_) => Value::Object(Map::new()),
        }
    }
}

impl FieldRole {
    /// The replacement table.
    pub const fn rule(self) -> Rule {
        match self {
            FieldRole::ShortText => Rule::Text(TextValue::Token),
            FieldRole::Contact(kind) => Rule::Text(TextValue::Contact(kind)),
            FieldRole::Narrative => Rule::Text(TextValue::LockedText),
            FieldRole::Media => Rule::Null,
            FieldRole::Date | FieldRole::Detail => Rule::Clear,
            FieldRole::Flag => Rule::Flag,
            FieldRole::Organization => Rule::Text(TextValue::HiddenOrganization),
            FieldRole::Location => Rule::Text(TextValue::HiddenLocation),
            FieldRole::ScalarList => Rule::EachScalar,
            FieldRole::RecordList(fields) => Rule::EachRecord(fields),
            FieldRole::Section(fields) => Rule::Section(fields),
        }
    }
}

/// Find the spec for `name` in a table.
pub fn lookup(fields: &[FieldSpec], name: &str) -> Option<FieldSpec> {
    fields.iter().find(|spec| spec.name == name).copied()
}

// -- Resume schema ------------------------------------------------------------

const PERSONAL_INFO: &[FieldSpec] = &[
    FieldSpec::new("full_name", FieldRole::ShortText),
    FieldSpec::new("profession", FieldRole::ShortText),
    FieldSpec::new("email", FieldRole::Contact(ContactKind::Email)),
    FieldSpec::new("phone", FieldRole::Contact(ContactKind::Phone)),
    FieldSpec::new("location", FieldRole::Contact(ContactKind::Address)),
    FieldSpec::new("linkedin", FieldRole::Contact(ContactKind::Social)),
    FieldSpec::new("github", FieldRole::Contact(ContactKind::Social)),
    FieldSpec::new("website", FieldRole::Contact(ContactKind::Url)),
    FieldSpec::new("image", FieldRole::Media),
];

const EXPERIENCE: &[FieldSpec] = &[
    FieldSpec::new("position", FieldRole::ShortText),
    FieldSpec::new("company", FieldRole::Organization),
    FieldSpec::new("location", FieldRole::Location),
    FieldSpec::new("start_date", FieldRole::Date),
    FieldSpec::new("end_date", FieldRole::Date),
    FieldSpec::new("is_current", FieldRole::Flag),
    FieldSpec::new("description", FieldRole::Narrative),
];

const EDUCATION: &[FieldSpec] = &[
    FieldSpec::new("degree", FieldRole::ShortText),
    FieldSpec::new("field", FieldRole::ShortText),
    FieldSpec::new("institution", FieldRole::Organization),
    FieldSpec::new("location", FieldRole::Location),
    FieldSpec::new("graduation_date", FieldRole::Date),
    FieldSpec::new("gpa", FieldRole::Detail),
];

const PROJECT: &[FieldSpec] = &[
    FieldSpec::new("name", FieldRole::ShortText),
    FieldSpec::new("type", FieldRole::ShortText),
    FieldSpec::new("description", FieldRole::Narrative),
    FieldSpec::new("link", FieldRole::Contact(ContactKind::Url)),
    FieldSpec::new("tech_stack", FieldRole::ScalarList),
];

const CERTIFICATION: &[FieldSpec] = &[
    FieldSpec::new("name", FieldRole::ShortText),
    FieldSpec::new("issuer", FieldRole::Organization),
    FieldSpec::new("issue_date", FieldRole::Date),
    FieldSpec::new("expiry_date", FieldRole::Date),
    FieldSpec::new("credential_id", FieldRole::Detail),
    FieldSpec::new("url", FieldRole::Contact(ContactKind::Url)),
];

const ACHIEVEMENT: &[FieldSpec] = &[
    FieldSpec::new("title", FieldRole::ShortText),
    FieldSpec::new("description", FieldRole::Narrative),
    FieldSpec::new("date", FieldRole::Date),
];

const VOLUNTEER: &[FieldSpec] = &[
    FieldSpec::new("role", FieldRole::ShortText),
    FieldSpec::new("organization", FieldRole::Organization),
    FieldSpec::new("location", FieldRole::Location),
    FieldSpec::new("start_date", FieldRole::Date),
    FieldSpec::new("end_date", FieldRole::Date),
    FieldSpec::new("is_current", FieldRole::Flag),
    FieldSpec::new("description", FieldRole::Narrative),
];

const LANGUAGE: &[FieldSpec] = &[
    FieldSpec::new("language", FieldRole::ShortText),
    FieldSpec::new("proficiency", FieldRole::ShortText),
];

/// Top-level layout of a resume record.
pub static RESUME_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("title", FieldRole::ShortText),
    FieldSpec::new("personal_info", FieldRole::Section(PERSONAL_INFO)),
    FieldSpec::new("professional_summary", FieldRole::Narrative),
    FieldSpec::new("experience", FieldRole::RecordList(EXPERIENCE)),
    FieldSpec::new("education", FieldRole::RecordList(EDUCATION)),
    FieldSpec::new("project", FieldRole::RecordList(PROJECT)),
    FieldSpec::new("certifications", FieldRole::RecordList(CERTIFICATION)),
    FieldSpec::new("achievements", FieldRole::RecordList(ACHIEVEMENT)),
    FieldSpec::new("volunteer", FieldRole::RecordList(VOLUNTEER)),
    FieldSpec::new("skills", FieldRole::ScalarList),
    FieldSpec::new("soft_skills", FieldRole::ScalarList),
    FieldSpec::new("interests", FieldRole::ScalarList),
    FieldSpec::new("languages", FieldRole::RecordList(LANGUAGE)),
];

// -- Tests --------------------------------------------------------------------
