use serde::{Deserialize, Serialize};

use crate::Extra;

/// 用户角色
///
/// 后端的 `role` 字段只区分 `admin` 与普通用户，未识别的值一律视为顾客。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 未登录
    #[default]
    Guest,
    /// 管理员
    Admin,
    /// 普通顾客
    #[serde(other)]
    Customer,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `/auth/login` 与 `/auth/register` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_parses_backend_strings() {
        let admin: Role = serde_json::from_value(json!("admin")).unwrap();
        let user: Role = serde_json::from_value(json!("user")).unwrap();
        let other: Role = serde_json::from_value(json!("staff")).unwrap();

        assert_eq!(admin, Role::Admin);
        assert_eq!(user, Role::Customer);
        assert_eq!(other, Role::Customer);
        assert!(admin.is_admin());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_auth_response_with_nested_user() {
        let body = json!({
            "message": "Login successful",
            "token": "abc.def.ghi",
            "user": { "_id": "u1", "name": "Ada", "email": "ada@example.com", "role": "admin" }
        });

        let resp: AuthResponse = serde_json::from_value(body).unwrap();
        let user = resp.user.unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc.def.ghi"));
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Some(Role::Admin));
        assert_eq!(resp.extra.get("message"), Some(&json!("Login successful")));
    }

    #[test]
    fn test_auth_response_without_token() {
        let resp: AuthResponse = serde_json::from_value(json!({ "message": "created" })).unwrap();
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_profile_role_strings() {
        let decode = |role: &str| -> Option<Role> {
            let profile: UserProfile =
                serde_json::from_value(json!({ "_id": "u1", "role": role })).unwrap();
            profile.role
        };

        assert_eq!(decode("user"), Some(Role::Customer));
        assert_eq!(decode("staff"), Some(Role::Customer));
        assert_eq!(decode("admin"), Some(Role::Admin));
    }
}
