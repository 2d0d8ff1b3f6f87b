//! JSON-lines transport for [`ToolHost`].
//!
//! Request: `{"id": <any>, "tool": "<name>", "arguments": {...}}`
//! Response: `{"id": <same>, "text": "...", "is_error": false}`

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{ToolHost, ToolResponse};

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Value,
    tool: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Serialize)]
struct Reply<'a> {
    id: &'a Value,
    #[serde(flatten)]
    response: &'a ToolResponse,
}

/// Answer requests from `reader` until EOF
///
/// Blank lines are ignored. A line that is not a valid request gets an error
/// reply with a `null` id and the loop carries on.
///
/// # Errors
///
/// Returns an error only if reading input or writing a reply fails.
pub fn serve<R, W>(host: &mut ToolHost, reader: R, mut writer: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let (id, response) = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                let response = host.call(&request.tool, request.arguments);
                (request.id, response)
            }
            Err(e) => {
                debug!("Rejected request line: {}", e);
                (Value::Null, ToolResponse::error(format!("Invalid request: {}", e)))
            }
        };

        let reply = serde_json::to_string(&Reply { id: &id, response: &response })?;
        writeln!(writer, "{}", reply).context("Failed to write response")?;
        writer.flush().context("Failed to flush response")?;
        handled += 1;
    }

    info!("Input closed after {} requests", handled);
    Ok(())
}
