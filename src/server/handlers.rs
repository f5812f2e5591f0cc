//! MCP tool handlers for the contact book server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::ContactKind;
use crate::error::ServiceError;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::services::{
    BusinessContactParams, ContactService, ContactServiceImpl, ContactSummary,
    PersonalContactParams,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// Text returned by `search_contact` when no contact matches.
pub const NOT_FOUND_TEXT: &str = "Contact not found.";

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactBookMcpServer {
    contact_service: Arc<dyn ContactService>,
    server_name: String,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory contact book with separate personal and business lists - add, list, inspect, remove and search contacts by name.".into()),
        }
    }
}

// Helper structs for tool parameters.
// Missing text fields default to "" so they are reported as blank input.
#[derive(Debug, Deserialize, JsonSchema)]
struct AddPersonalContactToolParams {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    relation: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddBusinessContactToolParams {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    job_title: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactPositionParams {
    /// Which list the index refers to: "personal" or "business"
    kind: ContactKind,
    /// Zero-based position in that list
    index: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactParams {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListContactsParams {
    /// Restrict the listing to one list; both lists when omitted
    #[serde(default)]
    kind: Option<ContactKind>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Caller mistakes (blank fields, bad positions) are reported as invalid params
fn service_error(e: ServiceError) -> McpError {
    tracing::debug!("Tool call rejected: {}", e);
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn contact_json(index: usize, contact: &Contact) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "contact": contact,
        "details": contact.render(),
    })
}

fn search_text(found: Option<&Contact>) -> String {
    found
        .map(Contact::render)
        .unwrap_or_else(|| NOT_FOUND_TEXT.to_string())
}

fn summaries_json(summaries: &[ContactSummary]) -> serde_json::Value {
    summaries
        .iter()
        .map(|s| serde_json::json!({ "index": s.index, "name": s.name }))
        .collect()
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl ContactBookMcpServer {
    /// Create a new contact book MCP server over `repository`.
    pub fn new(repository: Box<dyn ContactRepository>, server_name: impl Into<String>) -> Self {
        let contact_service =
            Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;

        Self {
            contact_service,
            server_name: server_name.into(),
            tool_router: Self::tool_router(),
        }
    }

    /// Add a contact to the personal list.
    #[tool(
        description = "Add a personal contact. All fields (name, phone_number, email, relation) are required and must not be blank."
    )]
    async fn add_personal_contact(
        &self,
        params: Parameters<AddPersonalContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: add_personal_contact called");

        let (index, contact) = self
            .contact_service
            .add_personal_contact(PersonalContactParams {
                name: params.name,
                phone_number: params.phone_number,
                email: params.email,
                relation: params.relation,
            })
            .await
            .map_err(service_error)?;

        json_result(&contact_json(index, &contact))
    }

    /// Add a contact to the business list.
    #[tool(
        description = "Add a business contact. All fields (name, phone_number, email, company_name, job_title) are required and must not be blank."
    )]
    async fn add_business_contact(
        &self,
        params: Parameters<AddBusinessContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: add_business_contact called");

        let (index, contact) = self
            .contact_service
            .add_business_contact(BusinessContactParams {
                name: params.name,
                phone_number: params.phone_number,
                email: params.email,
                company_name: params.company_name,
                job_title: params.job_title,
            })
            .await
            .map_err(service_error)?;

        json_result(&contact_json(index, &contact))
    }

    /// Remove a contact by list and position.
    #[tool(
        description = "Remove the contact at a zero-based index of the personal or business list. Later entries shift down by one."
    )]
    async fn remove_contact(
        &self,
        params: Parameters<ContactPositionParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: remove_contact called");
        tracing::debug!("Parameters: kind={}, index={}", params.kind, params.index);

        let removed = self
            .contact_service
            .remove_contact(params.kind, params.index)
            .await
            .map_err(service_error)?;

        json_result(&serde_json::json!({ "removed": removed }))
    }

    /// Search both lists for a contact by name.
    #[tool(
        description = "Find a contact by exact name, ignoring case. Personal contacts are searched before business contacts and the first match is returned."
    )]
    async fn search_contact(
        &self,
        params: Parameters<SearchContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!("MCP Handler: search_contact called with name={}", params.name);

        let found = self
            .contact_service
            .search_by_name(&params.name)
            .await
            .map_err(service_error)?;

        Ok(CallToolResult::success(vec![Content::text(search_text(
            found.as_ref(),
        ))]))
    }

    /// List the names in one or both contact lists.
    #[tool(
        description = "List contacts with their zero-based positions, in insertion order. Pass kind to restrict to the personal or business list."
    )]
    async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let mut listing = serde_json::Map::new();
        for kind in ContactKind::ALL {
            if params.kind.map_or(true, |wanted| wanted == kind) {
                let summaries = self.contact_service.list_contacts(kind).await;
                listing.insert(kind.to_string(), summaries_json(&summaries));
            }
        }

        json_result(&serde_json::Value::Object(listing))
    }

    /// Show every field of one contact.
    #[tool(description = "Show the full details of the contact at a zero-based index of the personal or business list")]
    async fn get_contact_details(
        &self,
        params: Parameters<ContactPositionParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contact = self
            .contact_service
            .get_contact_details(params.kind, params.index)
            .await
            .map_err(service_error)?;

        Ok(CallToolResult::success(vec![Content::text(contact.render())]))
    }
}
