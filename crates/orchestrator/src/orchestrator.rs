//! Main orchestrator that runs chat turns.

use std::sync::Arc;

use agent_tools::{Calculator, SerpApiSearch};
use brain_core::{
    hash_prompt, ChatModel, ChatSession, ModelReply, SearchProvider, SessionInput, SessionModel,
    ToolInvocation,
};
use gemini_brain::GeminiSessionModel;
use openrouter_brain::OpenRouterBrain;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::actions::{TurnAction, DEFAULT_STUDY_TOPIC};
use crate::config::{AgentVariant, OrchestratorConfig};
use crate::context::Context;
use crate::error::{OrchestratorError, TurnFailure};
use crate::formatting::{
    calculation_reply, error_entry, study_plan_prompt, unknown_tool_result, web_answer_prompt,
    TOOL_ROUNDS_EXHAUSTED,
};
use crate::router::route;
use crate::transcript::{Message, Sender, Transcript};

/// The model client behind the orchestrator.
enum Backend {
    /// Prompt assembled locally on every turn.
    Stateless {
        model: Arc<dyn ChatModel>,
        search: Arc<dyn SearchProvider>,
    },
    /// History kept in a session; the model may request tools.
    ToolCalling { model: Arc<dyn SessionModel> },
}

/// A turn that produced a reply.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Reply text shown to the user.
    pub reply: String,
    /// Full transcript after the reply was appended.
    pub history: Vec<Message>,
}

/// Runs chat turns against one shared transcript.
///
/// The orchestrator:
/// - Classifies each message (calculator, study plan, web search, auto search, plain)
/// - Runs the calculator or search locally when the message asks for it
/// - Assembles the prompt and calls the model, or drives the session's tool loop
/// - Appends both sides of every turn to the transcript, including failures
///
/// Turns and resets are serialized through one lock, so a reset waits for
/// an in-flight turn and never interleaves with its appends. The transcript
/// has its own lock, so history reads do not wait on model calls.
pub struct Orchestrator {
    backend: Backend,
    calculator: Calculator,
    config: OrchestratorConfig,
    transcript: RwLock<Transcript>,
    /// Turn gate. Also holds the live session of the tool-calling backend.
    turn_gate: Mutex<Option<Box<dyn ChatSession>>>,
}

impl Orchestrator {
    /// Create a stateless orchestrator with local classification and search.
    pub fn new(
        model: Arc<dyn ChatModel>,
        search: Arc<dyn SearchProvider>,
        config: OrchestratorConfig,
    ) -> Self {
        info!(
            "Orchestrator using {} with search via {} (configured: {})",
            model.name(),
            search.name(),
            search.is_configured()
        );
        info!(
            "System prompt fingerprint: {}",
            hash_prompt(&config.system_prompt)
        );

        Self::with_backend(Backend::Stateless { model, search }, config)
    }

    /// Create a tool-calling orchestrator. Sessions are opened lazily.
    pub fn with_sessions(model: Arc<dyn SessionModel>, config: OrchestratorConfig) -> Self {
        info!(
            "Orchestrator using {} with up to {} tool round(s) per turn",
            model.name(),
            config.max_tool_rounds
        );

        Self::with_backend(Backend::ToolCalling { model }, config)
    }

    fn with_backend(backend: Backend, config: OrchestratorConfig) -> Self {
        Self {
            backend,
            calculator: Calculator::new(),
            config,
            transcript: RwLock::new(Transcript::new()),
            turn_gate: Mutex::new(None),
        }
    }

    /// Create an orchestrator from environment variables.
    ///
    /// `AGENT_VARIANT` picks the model client; see [`OrchestratorConfig::from_env`],
    /// `OpenRouterConfig::from_env`, `GeminiConfig::from_env` and
    /// `SearchConfig::from_env` for the rest. Missing model keys do not fail
    /// here; they surface on the first turn.
    pub fn from_env() -> Result<Self, OrchestratorError> {
        let config = OrchestratorConfig::from_env();

        match config.variant {
            AgentVariant::OpenRouter => {
                let model = OpenRouterBrain::from_env()?;
                let search = SerpApiSearch::from_env()?;
                Ok(Self::new(Arc::new(model), Arc::new(search), config))
            }
            AgentVariant::Gemini => {
                let model = GeminiSessionModel::from_env()?;
                Ok(Self::with_sessions(Arc::new(model), config))
            }
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Whether the tool-calling backend is in use.
    pub fn uses_tools(&self) -> bool {
        matches!(self.backend, Backend::ToolCalling { .. })
    }

    /// Snapshot of the transcript, oldest first.
    pub async fn history(&self) -> Vec<Message> {
        self.transcript.read().await.messages().to_vec()
    }

    /// Clear the transcript and drop the model session.
    ///
    /// Waits for an in-flight turn to finish first.
    pub async fn reset(&self) {
        let mut session = self.turn_gate.lock().await;
        *session = None;
        self.transcript.write().await.clear();
        info!("Session reset. Chat history cleared.");
    }

    /// Run one chat turn.
    ///
    /// On success the reply and the updated transcript are returned. On
    /// failure the user message stays in the transcript, an agent entry
    /// with the error marker is appended, and the session (if any) is
    /// dropped. An empty message is rejected without touching the
    /// transcript.
    pub async fn handle_turn(&self, text: &str) -> Result<TurnOutcome, TurnFailure> {
        if text.is_empty() {
            return Err(TurnFailure {
                error: OrchestratorError::EmptyMessage,
                history: self.history().await,
            });
        }

        let mut session = self.turn_gate.lock().await;
        self.record(Sender::User, text).await;

        let result = match &self.backend {
            Backend::Stateless { model, search } => {
                self.run_stateless(model.as_ref(), search.as_ref(), text)
                    .await
            }
            Backend::ToolCalling { model } => {
                let result = self.run_with_tools(model.as_ref(), &mut session, text).await;
                if result.is_err() {
                    warn!("Dropping model session after error");
                    *session = None;
                }
                result
            }
        };

        match result {
            Ok(reply) => {
                self.record(Sender::Agent, &reply).await;
                Ok(TurnOutcome {
                    reply,
                    history: self.history().await,
                })
            }
            Err(error) => {
                error!("Turn failed: {}", error);
                self.record(Sender::Agent, error_entry(&error.user_message()))
                    .await;
                Err(TurnFailure {
                    error,
                    history: self.history().await,
                })
            }
        }
    }

    /// Run one chat turn on a detached task.
    ///
    /// Same result as [`Orchestrator::handle_turn`], but dropping the
    /// returned future does not cancel the turn: the model call still
    /// completes and both sides of the exchange are recorded. Use this
    /// from request handlers whose futures die with the connection.
    pub async fn spawn_turn(self: Arc<Self>, text: String) -> Result<TurnOutcome, TurnFailure> {
        let orchestrator = Arc::clone(&self);
        let task = tokio::spawn(async move { orchestrator.handle_turn(&text).await });

        match task.await {
            Ok(result) => result,
            Err(join_error) => {
                error!("Turn task ended abnormally: {}", join_error);
                Err(TurnFailure {
                    error: OrchestratorError::Interrupted,
                    history: self.history().await,
                })
            }
        }
    }

    async fn record(&self, sender: Sender, text: impl Into<String>) {
        self.transcript.write().await.append(sender, text);
    }

    /// Classify, optionally search, then call the stateless model.
    async fn run_stateless(
        &self,
        model: &dyn ChatModel,
        search: &dyn SearchProvider,
        text: &str,
    ) -> Result<String, OrchestratorError> {
        let action = route(text);
        info!("Turn classified as {}", action.label());

        if action.needs_search() && !search.is_configured() {
            warn!("Web search requested but {} is not configured", search.name());
        }

        let mut context = Context::new();
        let question = match action {
            TurnAction::Calculate { expr } => {
                let result = self.calculator.evaluate(&expr);
                return Ok(calculation_reply(&expr, &result));
            }
            TurnAction::StudyPlan { topic } => study_plan_prompt(&topic),
            TurnAction::WebSearch { query } => {
                context.set_search_results(search.search(&query).await);
                web_answer_prompt(&query)
            }
            TurnAction::AutoSearch => {
                context.set_search_results(search.search(text).await);
                text.to_string()
            }
            TurnAction::Plain => text.to_string(),
        };

        let messages = {
            let transcript = self.transcript.read().await;
            context.build_messages(
                &self.config.system_prompt,
                transcript.window(self.config.history_window),
                &question,
            )
        };

        debug!(
            "Calling {} with {} prompt message(s), search attached: {}",
            model.name(),
            messages.len(),
            context.has_search_results()
        );

        Ok(model.complete(messages).await?)
    }

    /// Send the message to the session and resolve tool calls until the
    /// model answers with text, the calculator short-circuits, or the round
    /// cap is reached.
    async fn run_with_tools(
        &self,
        model: &dyn SessionModel,
        slot: &mut Option<Box<dyn ChatSession>>,
        text: &str,
    ) -> Result<String, OrchestratorError> {
        let session = match slot.take() {
            Some(session) => session,
            None => model.open_session()?,
        };
        let session = slot.insert(session);

        let mut input = SessionInput::Text(text.to_string());
        let mut rounds = 0;

        loop {
            let call = match session.send(input).await? {
                ModelReply::Text(reply) => return Ok(reply),
                ModelReply::ToolCall(call) => call,
            };

            if let ToolInvocation::Calculate { expr } = &call {
                let result = self.calculator.evaluate(expr);
                info!("Calculator tool: {} = {}", expr, result);
                session.record_tool_result(&call, &result);
                return Ok(calculation_reply(expr, &result));
            }

            if rounds == self.config.max_tool_rounds {
                warn!(
                    "Tool round cap ({}) reached, last call: {}",
                    self.config.max_tool_rounds,
                    call.name()
                );
                session.record_tool_result(&call, TOOL_ROUNDS_EXHAUSTED);
                return Ok(TOOL_ROUNDS_EXHAUSTED.to_string());
            }
            rounds += 1;

            let result = self.resolve_tool(&call);
            input = SessionInput::ToolResult { call, result };
        }
    }

    /// Run a tool locally and return the text fed back to the model.
    fn resolve_tool(&self, call: &ToolInvocation) -> String {
        match call {
            ToolInvocation::Calculate { expr } => self.calculator.evaluate(expr),
            ToolInvocation::StudyPlan { topic } => {
                let topic = match topic.trim() {
                    "" => DEFAULT_STUDY_TOPIC,
                    topic => topic,
                };
                info!("Study plan tool: {}", topic);
                study_plan_prompt(topic)
            }
            ToolInvocation::Unknown { name } => {
                warn!("Model requested unknown tool: {}", name);
                unknown_tool_result(name)
            }
        }
    }
}
