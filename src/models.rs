//! Typed projections of Content Management API payloads
//!
//! Each model names the fields most callers need and keeps everything else in
//! a flattened `extra` map, so custom entry fields and attributes added by
//! the API later survive deserialization.
//!
//! # Key Types
//!
//! * [`Entry`], [`ContentType`], [`Asset`] - content and its schema
//! * [`Branch`], [`Locale`], [`Environment`] - stack structure
//! * [`EntryResponse`], [`EntriesResponse`], ... - response envelopes
//!
//! # Example
//!
//! ```
//! use contentstack_management::{model_from_str, EntryResponse};
//!
//! let body = r#"{"entry": {"uid": "blt1", "title": "Hello", "locale": "en-us", "body": "<p>x</p>"}}"#;
//! let response: EntryResponse = model_from_str(body).unwrap();
//! assert_eq!(response.entry.title.as_deref(), Some("Hello"));
//! assert_eq!(response.entry.extra["body"], "<p>x</p>");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Fields not covered by a model's named projection
pub type Extra = Map<String, Value>;

/// An entry of a content type
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    /// Entry UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Title field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Locale code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Entry version (mapped from `_version`)
    #[serde(rename = "_version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
    /// Creator UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Last updater UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    /// Custom fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A content type schema
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentType {
    /// Content type UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions
    #[serde(default)]
    pub schema: Vec<Value>,
    /// Schema version (mapped from `_version`)
    #[serde(rename = "_version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Creation time
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// An uploaded file or asset folder
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Asset {
    /// Asset UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Public URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Parent folder UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_uid: Option<String>,
    /// Whether this is a folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dir: Option<bool>,
    /// Asset version (mapped from `_version`)
    #[serde(rename = "_version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A stack branch or branch alias
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Branch {
    /// Branch UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Branch it was created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Aliases pointing at this branch
    #[serde(default)]
    pub alias: Vec<Value>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A stack locale
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Locale {
    /// Locale UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Locale code, e.g. `en-us`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fallback locale code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<String>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A publishing environment
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Environment {
    /// Environment UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Environment name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base URLs per locale
    #[serde(default)]
    pub urls: Vec<Value>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A webhook definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Webhook {
    /// Webhook UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Target URLs and credentials
    #[serde(default)]
    pub destinations: Vec<Value>,
    /// Triggering events
    #[serde(default)]
    pub channels: Vec<String>,
    /// Whether the webhook is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A workflow
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Workflow {
    /// Workflow UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the workflow is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Content types the workflow applies to
    #[serde(default)]
    pub content_types: Vec<String>,
    /// Stage definitions
    #[serde(default)]
    pub workflow_stages: Vec<Value>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A release
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Release {
    /// Release UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the release is locked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Items in the release
    #[serde(default)]
    pub items: Vec<Value>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A stack role
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Role {
    /// Role UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Permission rules
    #[serde(default)]
    pub rules: Vec<Value>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A delivery or management token
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Token {
    /// Token UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Scope definitions
    #[serde(default)]
    pub scope: Vec<Value>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A custom field, widget or dashboard extension
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Extension {
    /// Extension UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Extension type (`field`, `widget`, `dashboard`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// An entry label
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Label {
    /// Label UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parent label UIDs
    #[serde(default)]
    pub parent: Vec<String>,
    /// Content types the label applies to
    #[serde(default)]
    pub content_types: Vec<String>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A taxonomy
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Taxonomy {
    /// Taxonomy UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A taxonomy term
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Term {
    /// Term UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning taxonomy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_uid: Option<String>,
    /// Parent term, `None` for root terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_uid: Option<String>,
    /// Depth in the hierarchy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// Stack details
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StackInfo {
    /// Stack API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning organization UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_uid: Option<String>,
    /// Master locale code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_locale: Option<String>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// A user account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserInfo {
    /// User UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// An organization
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrganizationInfo {
    /// Organization UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Plan identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Whether the current user owns it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
    /// Other attributes
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response carrying only a notice (deletes, publishes, shares)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NoticeResponse {
    /// Confirmation message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Other attributes (e.g. `job_id` for bulk operations)
    #[serde(flatten)]
    pub extra: Extra,
}

/// Single entry response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntryResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The entry
    pub entry: Entry,
}

/// Entry list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntriesResponse {
    /// Entries
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Total count when `include_count=true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Single content type response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentTypeResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The content type
    pub content_type: ContentType,
}

/// Content type list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentTypesResponse {
    /// Content types
    #[serde(default)]
    pub content_types: Vec<ContentType>,
    /// Total count when `include_count=true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Single global field response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GlobalFieldResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The global field
    pub global_field: ContentType,
}

/// Global field list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GlobalFieldsResponse {
    /// Global fields
    #[serde(default)]
    pub global_fields: Vec<ContentType>,
}

/// Single asset response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AssetResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The asset
    pub asset: Asset,
}

/// Asset list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AssetsResponse {
    /// Assets (and folders when `include_folders=true`)
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Total count when `include_count=true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Single branch response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BranchResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The branch
    pub branch: Branch,
}

/// Branch list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BranchesResponse {
    /// Branches
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// Single branch alias response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BranchAliasResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The alias
    pub branch_alias: Branch,
}

/// Single locale response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocaleResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The locale
    pub locale: Locale,
}

/// Locale list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocalesResponse {
    /// Locales
    #[serde(default)]
    pub locales: Vec<Locale>,
}

/// Single environment response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EnvironmentResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The environment
    pub environment: Environment,
}

/// Environment list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EnvironmentsResponse {
    /// Environments
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Single webhook response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WebhookResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The webhook
    pub webhook: Webhook,
}

/// Webhook list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WebhooksResponse {
    /// Webhooks
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
}

/// Single workflow response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkflowResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The workflow
    pub workflow: Workflow,
}

/// Workflow list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkflowsResponse {
    /// Workflows
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

/// Single release response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReleaseResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The release
    pub release: Release,
}

/// Release list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReleasesResponse {
    /// Releases
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Single role response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RoleResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The role
    pub role: Role,
}

/// Role list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RolesResponse {
    /// Roles
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Single token response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The token
    pub token: Token,
}

/// Token list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TokensResponse {
    /// Tokens
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Single extension response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExtensionResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The extension
    pub extension: Extension,
}

/// Extension list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExtensionsResponse {
    /// Extensions
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// Single label response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LabelResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The label
    pub label: Label,
}

/// Label list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LabelsResponse {
    /// Labels
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Single taxonomy response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TaxonomyResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The taxonomy
    pub taxonomy: Taxonomy,
}

/// Taxonomy list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TaxonomiesResponse {
    /// Taxonomies
    #[serde(default)]
    pub taxonomies: Vec<Taxonomy>,
}

/// Single term response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TermResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The term
    pub term: Term,
}

/// Term list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TermsResponse {
    /// Terms
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// Stack details response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StackResponse {
    /// Confirmation message on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The stack
    pub stack: StackInfo,
}

/// User details response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserResponse {
    /// The user
    pub user: UserInfo,
}

/// Single organization response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrganizationResponse {
    /// The organization
    pub organization: OrganizationInfo,
}

/// Organization list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrganizationsResponse {
    /// Organizations
    #[serde(default)]
    pub organizations: Vec<OrganizationInfo>,
}
