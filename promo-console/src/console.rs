// promo-console/src/console.rs

//! Console controller
//!
//! Each button press runs in three steps:
//!
//! 1. [`ConsoleState::prepare`] clears the status, validates the id and
//!    captures the form or builds the query. Nothing leaves the process if
//!    this returns `None`.
//! 2. [`dispatch`] sends the request. It only borrows the API, so several
//!    prepared requests may be in flight at once.
//! 3. [`ConsoleState::complete`] writes the outcome back. Completions are
//!    applied in whatever order the caller awaits them; the last one wins.
//!
//! [`Console::perform`] runs all three for the usual one-at-a-time case.

use promo_client::{ClientError, ClientResult, HttpClient, NetworkHttpClient, PromotionApi};
use shared::ApiRevision;
use shared::models::{Promotion, PromotionDraft};
use tracing::{debug, warn};

use crate::config::ConsoleConfig;
use crate::form::{FormState, SearchForm};
use crate::query::{QueryBuilder, search_criteria};
use crate::render::{ResultRenderer, ResultsTable};
use crate::validator::{INVALID_ID_MESSAGE, parse_id};

pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Promotion has been Deleted!";
pub const SERVER_ERROR_MESSAGE: &str = "Server error!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Retrieve,
    Update,
    Delete,
    Activate,
    Deactivate,
    Search,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Retrieve => "retrieve",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Activate => "activate",
            Action::Deactivate => "deactivate",
            Action::Search => "search",
        }
    }

    /// Whether the action addresses one record through the id field
    pub fn needs_id(&self) -> bool {
        !matches!(self, Action::Create | Action::Search)
    }

    /// Status shown when a failure carries no server message
    fn fallback_message(&self) -> &'static str {
        match self {
            Action::Create => "Unable to create promotion",
            Action::Retrieve => "Unable to retrieve promotion",
            Action::Update => "Unable to update promotion",
            Action::Delete => SERVER_ERROR_MESSAGE,
            Action::Activate => "Unable to activate promotion",
            Action::Deactivate => "Unable to deactivate promotion",
            Action::Search => "Unable to search promotions",
        }
    }
}

/// A validated request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedRequest {
    Create(PromotionDraft),
    Retrieve(i64),
    Update(i64, PromotionDraft),
    Delete(i64),
    Activate(i64),
    Deactivate(i64),
    /// Query string without the leading `?`
    Search(String),
}

impl PreparedRequest {
    pub fn action(&self) -> Action {
        match self {
            PreparedRequest::Create(_) => Action::Create,
            PreparedRequest::Retrieve(_) => Action::Retrieve,
            PreparedRequest::Update(..) => Action::Update,
            PreparedRequest::Delete(_) => Action::Delete,
            PreparedRequest::Activate(_) => Action::Activate,
            PreparedRequest::Deactivate(_) => Action::Deactivate,
            PreparedRequest::Search(_) => Action::Search,
        }
    }
}

/// Successful payload of a dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Record(Promotion),
    Records(Vec<Promotion>),
    Deleted,
}

/// Send one prepared request
pub async fn dispatch<C: HttpClient>(
    api: &PromotionApi<C>,
    request: &PreparedRequest,
) -> ClientResult<Response> {
    debug!(action = request.action().as_str(), "Dispatching");
    match request {
        PreparedRequest::Create(draft) => api.create(draft).await.map(Response::Record),
        PreparedRequest::Retrieve(id) => api.retrieve(*id).await.map(Response::Record),
        PreparedRequest::Update(id, draft) => api.update(*id, draft).await.map(Response::Record),
        PreparedRequest::Delete(id) => api.delete(*id).await.map(|_| Response::Deleted),
        PreparedRequest::Activate(id) => api.activate(*id).await.map(Response::Record),
        PreparedRequest::Deactivate(id) => api.deactivate(*id).await.map(Response::Record),
        PreparedRequest::Search(query) => api.search(query).await.map(Response::Records),
    }
}

/// Everything the operator sees
#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub form: FormState,
    pub search: SearchForm,
    status: Option<String>,
    results: Option<ResultsTable>,
    revision: ApiRevision,
    query: QueryBuilder,
    renderer: ResultRenderer,
}

impl ConsoleState {
    pub fn new(config: &ConsoleConfig) -> Self {
        let revision = config.client.revision;
        Self {
            form: FormState::default(),
            search: SearchForm::default(),
            status: None,
            results: None,
            revision,
            query: QueryBuilder::new(revision).with_encoding(config.encode_query),
            renderer: ResultRenderer::new(revision, config.promote_first_result),
        }
    }

    /// Flash message of the most recent operation
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn results(&self) -> Option<&ResultsTable> {
        self.results.as_ref()
    }

    /// Clear the status, then validate and capture.
    ///
    /// `None` means the action was stopped locally; the status says why.
    pub fn prepare(&mut self, action: Action) -> Option<PreparedRequest> {
        self.status = None;

        let id = if action.needs_id() {
            match parse_id(&self.form.id) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(action = action.as_str(), error = %e, "Rejected promotion id");
                    self.status = Some(INVALID_ID_MESSAGE.to_string());
                    return None;
                }
            }
        } else {
            None
        };

        let request = match (action, id) {
            (Action::Create, _) => PreparedRequest::Create(self.form.capture()),
            (Action::Search, _) => {
                let criteria = search_criteria(self.revision, &self.form, &self.search);
                PreparedRequest::Search(self.query.build(&criteria))
            }
            (Action::Retrieve, Some(id)) => PreparedRequest::Retrieve(id),
            (Action::Update, Some(id)) => PreparedRequest::Update(id, self.form.capture()),
            (Action::Delete, Some(id)) => PreparedRequest::Delete(id),
            (Action::Activate, Some(id)) => PreparedRequest::Activate(id),
            (Action::Deactivate, Some(id)) => PreparedRequest::Deactivate(id),
            (_, None) => return None,
        };
        Some(request)
    }

    /// Write an outcome back into the form, results and status
    pub fn complete(&mut self, request: &PreparedRequest, outcome: ClientResult<Response>) {
        let action = request.action();
        match outcome {
            Ok(Response::Record(record)) => {
                self.form.apply(&record);
                self.status = Some(SUCCESS_MESSAGE.to_string());
            }
            Ok(Response::Records(records)) => {
                self.results = Some(self.renderer.render(&records, &mut self.form));
                self.status = Some(SUCCESS_MESSAGE.to_string());
            }
            Ok(Response::Deleted) => {
                self.form.clear();
                self.status = Some(DELETED_MESSAGE.to_string());
            }
            Err(e) => {
                if action == Action::Retrieve {
                    self.form.clear();
                    self.results = None;
                }
                self.status = Some(failure_message(action, &e));
            }
        }
    }

    /// Whole-form clear: fields, id, status and results
    pub fn clear(&mut self) {
        self.form.clear_all();
        self.search.clear();
        self.status = None;
        self.results = None;
    }
}

fn failure_message(action: Action, error: &ClientError) -> String {
    if action == Action::Delete {
        return SERVER_ERROR_MESSAGE.to_string();
    }
    match error {
        ClientError::Unsupported(_) => error.to_string(),
        _ => error
            .server_message()
            .unwrap_or(action.fallback_message())
            .to_string(),
    }
}

/// Console bound to one API client
pub struct Console<C> {
    api: PromotionApi<C>,
    state: ConsoleState,
}

impl Console<NetworkHttpClient> {
    pub fn from_config(config: &ConsoleConfig) -> ClientResult<Self> {
        Ok(Self::new(PromotionApi::from_config(&config.client)?, config))
    }
}

impl<C: HttpClient> Console<C> {
    /// The API's revision takes precedence over `config.client.revision`
    pub fn new(api: PromotionApi<C>, config: &ConsoleConfig) -> Self {
        let mut config = config.clone();
        config.client.revision = api.revision();
        Self {
            state: ConsoleState::new(&config),
            api,
        }
    }

    pub fn api(&self) -> &PromotionApi<C> {
        &self.api
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ConsoleState {
        &mut self.state
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.state.form
    }

    pub fn search_mut(&mut self) -> &mut SearchForm {
        &mut self.state.search
    }

    /// Prepare, dispatch and complete one action; returns the new status
    pub async fn perform(&mut self, action: Action) -> Option<&str> {
        if let Some(request) = self.state.prepare(action) {
            let outcome = dispatch(&self.api, &request).await;
            self.state.complete(&request, outcome);
        }
        self.state.status()
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }
}
