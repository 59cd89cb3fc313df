//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the same analysis the HTTP API serves to AI assistants over stdio.
//! Tools delegate to `writescan_core`; no analysis logic lives here.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use writescan_core::{analysis, render};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_info_format")]
    pub format: String,
}

fn default_info_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Output format: "json" (default) or "text" for a rendered report.
    #[serde(default = "default_report_format")]
    pub format: String,
}

fn default_report_format() -> String {
    "json".to_string()
}

/// MCP server exposing writing analysis to AI assistants.
#[derive(Clone)]
pub struct WritescanServer {
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for WritescanServer {
    fn default() -> Self {
        Self::new(Some(writescan_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl WritescanServer {
    /// Create a server that rejects text larger than `max_input_bytes`.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            let info = serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            });
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run the full writing analysis.
    #[tool(
        description = "Analyze text: word, sentence, and paragraph counts, Flesch Reading Ease, quality score, tone, grammar and structure notes, topics, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", format = %params.format, "executing MCP tool");

        let report = analysis::analyze_text_with_limit(&params.text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let text = if params.format == "text" {
            render::render_text_report(&report, &render::RenderOptions::default())
        } else {
            serde_json::to_string_pretty(&report)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        };

        tracing::info!(
            tool = "analyze_text",
            words = report.basic_stats.word_count,
            quality = report.ai_analysis.quality_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for WritescanServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call analyze_text with a block of prose to get writing metrics.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = WritescanServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = WritescanServer::default();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains("analyze_text"));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = WritescanServer::default();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");

        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn analyze_text_tool_returns_report() {
        let server = WritescanServer::default();
        let params = Parameters(AnalyzeTextParams {
            text: "The cat sat. The dog ran fast and happy.".to_string(),
            format: default_report_format(),
        });

        let result = server
            .analyze_text(params)
            .expect("analyze_text should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["basic_stats"]["word_count"], 9);
        assert!(json["ai_analysis"]["quality_score"].as_u64().is_some());
    }

    #[test]
    fn analyze_text_tool_renders_text_report() {
        let server = WritescanServer::default();
        let params = Parameters(AnalyzeTextParams {
            text: "The cat sat.".to_string(),
            format: "text".to_string(),
        });

        let result = server.analyze_text(params).unwrap();
        let text = extract_text(&result).unwrap();
        assert!(text.starts_with("Writing Analysis Report"));
    }

    #[test]
    fn analyze_text_tool_rejects_blank_text() {
        let server = WritescanServer::default();
        let params = Parameters(AnalyzeTextParams {
            text: "   ".to_string(),
            format: default_report_format(),
        });

        let err = server.analyze_text(params).unwrap_err();
        assert!(err.message.contains("No text provided"));
    }

    #[test]
    fn analyze_text_tool_enforces_limit() {
        let server = WritescanServer::new(Some(4));
        let params = Parameters(AnalyzeTextParams {
            text: "hello world".to_string(),
            format: default_report_format(),
        });

        let err = server.analyze_text(params).unwrap_err();
        assert!(err.message.contains("input too large"));
    }
}
