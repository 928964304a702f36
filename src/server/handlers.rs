//! MCP tool handlers for the polls server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! A hidden or missing question surfaces as `RESOURCE_NOT_FOUND`.

use crate::domain::{ChoiceId, QuestionId};
use crate::error::PollError;
use crate::services::PollService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The polls MCP server.
#[derive(Clone)]
pub struct PollsMcpServer {
    poll_service: Arc<dyn PollService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for PollsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "polls-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a polls application - list published questions, view a question, vote on its choices and see the results.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct QuestionIdParams {
    question_id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct VoteParams {
    question_id: u64,
    choice_id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateQuestionParams {
    question_text: String,
    /// Days from now until publication; negative values publish in the past
    #[serde(default)]
    days: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddChoiceParams {
    question_id: u64,
    choice_text: String,
}

/// Map a service error onto the closest MCP error code.
pub fn to_mcp_error(e: PollError) -> McpError {
    let code = match &e {
        PollError::NotFound(_) => ErrorCode::RESOURCE_NOT_FOUND,
        PollError::InvalidRequest(_) | PollError::Validation(_) => ErrorCode::INVALID_PARAMS,
        _ => ErrorCode::INTERNAL_ERROR,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn parse_question_id(raw: u64) -> Result<QuestionId, McpError> {
    QuestionId::new(raw).map_err(|e| to_mcp_error(e.into()))
}

fn json_content(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl PollsMcpServer {
    /// Create a new polls MCP server.
    pub fn new(poll_service: Arc<dyn PollService>) -> Self {
        Self {
            poll_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List published questions.
    #[tool(
        description = "List every published question, earliest publication first. Questions scheduled for the future are not listed."
    )]
    async fn polls_index(&self) -> Result<CallToolResult, McpError> {
        let page = self.poll_service.index().await.map_err(to_mcp_error)?;

        json_content(serde_json::json!({
            "latest_question_list": page.latest_question_list,
            "body": page.render(),
        }))
    }

    /// Show one published question with its choices.
    #[tool(description = "Show a published question and its choices by question ID")]
    async fn polls_detail(
        &self,
        params: Parameters<QuestionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let question_id = parse_question_id(params.0.question_id)?;

        let page = self
            .poll_service
            .detail(question_id)
            .await
            .map_err(to_mcp_error)?;

        json_content(serde_json::json!({
            "question": page.question,
            "choices": page.choices,
            "body": page.render(),
        }))
    }

    /// Show the vote tallies of a published question.
    #[tool(description = "Show the vote counts for each choice of a published question")]
    async fn polls_results(
        &self,
        params: Parameters<QuestionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let question_id = parse_question_id(params.0.question_id)?;

        let page = self
            .poll_service
            .results(question_id)
            .await
            .map_err(to_mcp_error)?;

        json_content(serde_json::json!({
            "question": page.question,
            "choices": page.choices,
            "total_votes": page.total_votes,
            "body": page.render(),
        }))
    }

    /// Vote for one choice of a published question.
    #[tool(description = "Cast one vote for a choice of a published question and return the updated results")]
    async fn polls_vote(&self, params: Parameters<VoteParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let question_id = parse_question_id(params.question_id)?;
        let choice_id = ChoiceId::new(params.choice_id).map_err(|e| to_mcp_error(e.into()))?;

        let page = self
            .poll_service
            .vote(question_id, choice_id)
            .await
            .map_err(to_mcp_error)?;

        json_content(serde_json::json!({
            "question": page.question,
            "choices": page.choices,
            "total_votes": page.total_votes,
            "body": page.render(),
        }))
    }

    /// Create a question published a number of days from now.
    #[tool(
        description = "Create a question published `days` days from now (negative for the past, positive to schedule it)"
    )]
    async fn create_question(
        &self,
        params: Parameters<CreateQuestionParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: create_question called");
        tracing::debug!(
            "Parameters: text_len={}, days={}",
            params.question_text.len(),
            params.days
        );

        let question = self
            .poll_service
            .create_question(params.question_text, params.days)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                to_mcp_error(e)
            })?;

        json_content(serde_json::to_value(&question).map_err(internal_error)?)
    }

    /// Add a choice to an existing question.
    #[tool(description = "Add a choice to an existing question, published or scheduled")]
    async fn add_choice(
        &self,
        params: Parameters<AddChoiceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let question_id = parse_question_id(params.question_id)?;

        let choice = self
            .poll_service
            .add_choice(question_id, params.choice_text)
            .await
            .map_err(to_mcp_error)?;

        json_content(serde_json::to_value(&choice).map_err(internal_error)?)
    }
}
