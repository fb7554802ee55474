use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Approval state stored in `admin` for users cleared by an administrator.
pub const APPROVED: &str = "approved";

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub name: Option<String>,
    /// argon2 PHC string once saved; never serialized
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub grade: Option<String>,
    /// Role flag and approval state share this column
    pub admin: Option<String>,
    pub student_id_image_url: Option<String>,
    pub rejection_reason: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub rates: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_serialized() {
        let user = User {
            id: Some("u1".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["id"], "u1");
    }

    #[test]
    fn test_password_is_accepted_on_input() {
        let user: User = serde_json::from_str(r#"{"name":"kim","password":"pw"}"#).unwrap();
        assert_eq!(user.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_rates_are_json_numbers() {
        let user = User {
            id: Some("u1".to_string()),
            rates: Some(Decimal::new(45, 1)),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["rates"], serde_json::json!(4.5));

        let parsed: User = serde_json::from_str(r#"{"rates":3.5}"#).unwrap();
        assert_eq!(parsed.rates, Some(Decimal::new(35, 1)));
        let missing: User = serde_json::from_str(r#"{"name":"kim"}"#).unwrap();
        assert_eq!(missing.rates, None);
    }
}
