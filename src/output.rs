/// Result serialization
///
/// Encodes an execution response as one JSON line. Field order follows the
/// query text, so encoding the same response is deterministic. Encoding
/// failures surface as errors instead of being dropped.

use crate::error::Result;

use async_graphql::Response;
use std::io::Write;

/// Encode the response as a JSON string
pub fn encode_response(response: &Response) -> Result<String> {
    Ok(serde_json::to_string(response)?)
}

/// Write the encoded response as a single line
pub fn write_response<W: Write>(response: &Response, out: &mut W) -> Result<()> {
    let encoded = encode_response(response)?;
    writeln!(out, "{}", encoded)?;
    Ok(())
}
