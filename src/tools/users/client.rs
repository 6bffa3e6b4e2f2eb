use anyhow::{anyhow, Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use super::models::{UserCreate, UserSearch, UserUpdate};
use crate::configs::UserServiceConfig;

/// Blocking client of the user-data service
pub struct UserClient {
    client: Client,
    host: String,
}

impl UserClient {
    pub fn new(config: &UserServiceConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            host: config.host.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    fn send(&self, request: RequestBuilder, what: &str) -> Result<Value> {
        debug!("User service request: {}", what);
        let response = request.send().with_context(|| what.to_string())?;

        let status = response.status();
        let body = response.text().with_context(|| what.to_string())?;
        if !status.is_success() {
            return Err(anyhow!("HTTP {}: {}", status.as_u16(), body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).with_context(|| format!("{}: response is not JSON", what))
    }

    pub fn get_user(&self, id: i64) -> Result<String> {
        let path = format!("/v1/users/{}", id);
        let user = self.send(self.client.get(self.url(&path)), &format!("GET {}", path))?;
        Ok(format_user(&user))
    }

    pub fn search_users(&self, search: &UserSearch) -> Result<String> {
        let request = self
            .client
            .get(self.url("/v1/users/search"))
            .query(&search.query_pairs());
        let found = self.send(request, "GET /v1/users/search")?;

        let users: &[Value] = match &found {
            Value::Array(users) => users.as_slice(),
            Value::Null => &[],
            other => return Err(anyhow!("Unexpected search response: {}", other)),
        };
        if users.is_empty() {
            return Ok("No users found".to_string());
        }

        let formatted: Vec<String> = users.iter().map(format_user).collect();
        Ok(format!("## Search result:\n{}", formatted.join("\n")))
    }

    pub fn add_user(&self, user: &UserCreate) -> Result<String> {
        let request = self.client.post(self.url("/v1/users")).json(user);
        let created = self.send(request, "POST /v1/users")?;
        Ok(format!("User successfully added:\n{}", format_user(&created)))
    }

    pub fn update_user(&self, id: i64, update: &UserUpdate) -> Result<String> {
        let path = format!("/v1/users/{}", id);
        let request = self.client.put(self.url(&path)).json(update);
        let updated = self.send(request, &format!("PUT {}", path))?;
        Ok(format!(
            "User successfully updated:\n{}",
            format_user(&updated)
        ))
    }

    pub fn delete_user(&self, id: i64) -> Result<String> {
        let path = format!("/v1/users/{}", id);
        self.send(self.client.delete(self.url(&path)), &format!("DELETE {}", path))?;
        Ok("User successfully deleted".to_string())
    }
}

/// Render a user as a fenced block of `key: value` lines, nested objects
/// flattened with dotted keys.
pub fn format_user(user: &Value) -> String {
    let mut lines = Vec::new();
    flatten("", user, &mut lines);
    format!("```\n{}\n```", lines.join("\n"))
}

fn flatten(prefix: &str, value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, field, lines);
            }
        }
        Value::Null => {}
        Value::String(text) => lines.push(format!("{}: {}", prefix, text)),
        other if prefix.is_empty() => lines.push(other.to_string()),
        other => lines.push(format!("{}: {}", prefix, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> UserClient {
        UserClient::new(&UserServiceConfig::new(server.url())).unwrap()
    }

    #[test]
    fn test_format_user_flattens_nested() {
        let formatted = format_user(&json!({
            "id": 1,
            "name": "Ada",
            "phone": null,
            "address": {"city": "London", "country": "UK"}
        }));
        assert_eq!(
            formatted,
            "```\naddress.city: London\naddress.country: UK\nid: 1\nname: Ada\n```"
        );
    }

    #[test]
    fn test_get_user() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/users/42")
            .with_status(200)
            .with_body(json!({"id": 42, "name": "Ada"}).to_string())
            .create();

        let output = client_for(&server).get_user(42).unwrap();
        mock.assert();
        assert_eq!(output, "```\nid: 42\nname: Ada\n```");
    }

    #[test]
    fn test_get_user_not_found() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/v1/users/7")
            .with_status(404)
            .with_body("User not found")
            .create();

        let err = client_for(&server).get_user(7).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404: User not found");
    }

    #[test]
    fn test_search_users_sends_only_set_filters() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/users/search")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "name".into(),
                "Ann".into(),
            )]))
            .with_status(200)
            .with_body(json!([{"id": 1, "name": "Ann"}, {"id": 2, "name": "Ann"}]).to_string())
            .create();

        let search = UserSearch {
            name: Some("Ann".to_string()),
            ..Default::default()
        };
        let output = client_for(&server).search_users(&search).unwrap();

        mock.assert();
        assert!(output.starts_with("## Search result:\n```\nid: 1"));
        assert_eq!(output.matches("```").count(), 4);
    }

    #[test]
    fn test_search_users_empty() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/v1/users/search")
            .with_status(200)
            .with_body("[]")
            .create();

        let output = client_for(&server)
            .search_users(&UserSearch::default())
            .unwrap();
        assert_eq!(output, "No users found");
    }

    #[test]
    fn test_delete_user() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("DELETE", "/v1/users/3")
            .with_status(204)
            .create();

        let output = client_for(&server).delete_user(3).unwrap();
        mock.assert();
        assert_eq!(output, "User successfully deleted");
    }
}
