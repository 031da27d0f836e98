/// Single-shot query execution
///
/// One synchronous pass: parse the query text against the schema, resolve the
/// requested fields, and hand back the response. Any execution error (parse
/// failure, unknown field) is fatal to the caller; a lookup miss is not an
/// error and resolves to null.

use crate::error::{FilmqlError, Result};

use async_graphql::dynamic::Schema;
use async_graphql::{Request, Response};

/// Execute a query against the schema
///
/// # Returns
///
/// The populated response, or `FilmqlError::Execution` carrying every message
/// from the response's error list.
pub async fn run(schema: &Schema, query: &str) -> Result<Response> {
    tracing::debug!("Executing query: {}", query);

    let response = schema.execute(Request::new(query)).await;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FilmqlError::Execution(messages));
    }

    Ok(response)
}
