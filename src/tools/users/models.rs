use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::tools::{error::ToolError, Arguments};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
    pub flat_house: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditCard {
    pub num: String,
    pub cvv: String,
    pub exp_date: String,
}

/// A new user as accepted by `POST /v1/users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub about_me: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
}

/// Partial update, absent fields are left untouched by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
}

/// Search filters, every one optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UserSearch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

pub const USER_CREATE_REQUIRED: [&str; 4] = ["name", "surname", "email", "about_me"];

impl UserCreate {
    /// Validate tool arguments, naming every missing required field at once
    pub fn from_arguments(args: &Arguments) -> Result<Self, ToolError> {
        let missing: Vec<&str> = USER_CREATE_REQUIRED
            .iter()
            .copied()
            .filter(|field| args.get(*field).map_or(true, Value::is_null))
            .collect();

        if !missing.is_empty() {
            return Err(ToolError::InvalidParameters(format!(
                "Invalid user data - missing required fields: {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(Value::Object(args.clone())).map_err(|e| {
            ToolError::InvalidParameters(format!("Invalid user data - {}", e))
        })
    }
}

impl UserUpdate {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

impl UserSearch {
    pub fn from_arguments(args: &Arguments) -> Result<Self, ToolError> {
        serde_json::from_value(Value::Object(args.clone())).map_err(|e| {
            ToolError::InvalidParameters(format!("Invalid search parameters - {}", e))
        })
    }

    /// Query string pairs for the filters that are set
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("surname", &self.surname),
            ("email", &self.email),
            ("gender", &self.gender),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

fn string_property(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

pub fn address_schema() -> Value {
    json!({
        "type": "object",
        "description": "Postal address",
        "properties": {
            "country": string_property("Country"),
            "city": string_property("City"),
            "street": string_property("Street"),
            "flat_house": string_property("Flat or house number")
        },
        "required": ["country", "city", "street", "flat_house"]
    })
}

pub fn credit_card_schema() -> Value {
    json!({
        "type": "object",
        "description": "Payment card",
        "properties": {
            "num": string_property("Card number"),
            "cvv": string_property("Card verification value"),
            "exp_date": string_property("Expiration date, MM/YY")
        },
        "required": ["num", "cvv", "exp_date"]
    })
}

/// Properties shared by the create and update schemas
pub fn user_properties() -> Value {
    json!({
        "name": string_property("First name"),
        "surname": string_property("Last name"),
        "email": string_property("Email address"),
        "about_me": string_property("Short biography of the user"),
        "phone": string_property("Phone number"),
        "date_of_birth": string_property("Date of birth, YYYY-MM-DD"),
        "address": address_schema(),
        "gender": string_property("Gender"),
        "company": string_property("Company the user works for"),
        "salary": {"type": "number", "description": "Yearly salary"},
        "credit_card": credit_card_schema()
    })
}

pub fn user_create_schema() -> Value {
    json!({
        "type": "object",
        "properties": user_properties(),
        "required": USER_CREATE_REQUIRED
    })
}
