//! Stateless request builder and response parser for the todo API.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Client for the todo API, holding nothing but the server's base URL.
///
/// Pair each `build_*` call with the matching `parse_*` call around a
/// transport of your choosing.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = encode(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = encode(input)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(id), body))
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        expect_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        expect_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        expect_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        expect_status(&response, 200)?;
        decode(&response.body)
    }

    /// The server answers delete with 204 even for ids that never existed,
    /// so only a genuinely unexpected status is an error here.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, 204)
    }
}

fn encode<T: serde::Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialize(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialize(e.to_string()))
}

fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::UnexpectedStatus {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_targets_the_collection() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/todos");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_todo_targets_the_item() {
        let req = client().build_get_todo(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_sends_json() {
        let input = CreateTodo {
            title: Some("Buy milk".to_string()),
            completed: false,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn build_create_todo_omits_an_absent_title() {
        let input = CreateTodo {
            title: None,
            completed: true,
        };
        let req = client().build_create_todo(&input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("title").is_none());
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_update_todo_sends_only_present_fields() {
        let input = UpdateTodo {
            title: Some("Updated".to_string()),
            completed: None,
        };
        let req = client().build_update_todo(3, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/api/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert!(body.get("completed").is_none());
    }

    #[test]
    fn build_delete_todo_targets_the_item() {
        let req = client().build_delete_todo(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/api/todos/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(
                200,
                r#"[{"id":1,"title":"Test","completed":false}]"#,
            ))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title.as_deref(), Some("Test"));
    }

    #[test]
    fn parse_get_todo_without_title() {
        let todo = client()
            .parse_get_todo(response(200, r#"{"id":2,"completed":true}"#))
            .unwrap();
        assert_eq!(todo.id, 2);
        assert!(todo.title.is_none());
        assert!(todo.completed);
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client()
            .parse_get_todo(response(404, r#"{"message":"Not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_success() {
        let todo = client()
            .parse_create_todo(response(201, r#"{"id":1,"title":"New","completed":false}"#))
            .unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title.as_deref(), Some("New"));
    }

    #[test]
    fn parse_create_todo_unexpected_status() {
        let err = client()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let todo = client()
            .parse_update_todo(response(
                200,
                r#"{"id":1,"title":"Updated","completed":true}"#,
            ))
            .unwrap();
        assert_eq!(todo.title.as_deref(), Some("Updated"));
        assert!(todo.completed);
    }

    #[test]
    fn parse_update_todo_not_found() {
        let err = client()
            .parse_update_todo(response(404, r#"{"message":"Not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_unexpected_status() {
        let err = client().parse_delete_todo(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos();
        assert_eq!(req.url, "http://localhost:3000/api/todos");
    }
}
