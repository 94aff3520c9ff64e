//! Conversation orchestration for the Sunshine widget.
//!
//! [`ConversationOrchestrator`] ties the domain pieces together: it owns
//! the transcript and widget mode, runs one round trip per user turn
//! against the remote assistant, and applies intent routing, quick-action
//! generation, and the route-confirmation state machine to each reply.

pub mod api_client;
pub mod timers;

pub use api_client::{AssistantApiConfig, HttpAssistantClient};
pub use timers::ScheduledTask;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use sunshine_core::assistant::{AssistantClient, AssistantRequest};
use sunshine_core::auth::AuthProvider;
use sunshine_core::copy;
use sunshine_core::engagement::{ConversionTrigger, EngagementRepository};
use sunshine_core::error::Result;
use sunshine_core::greeting::GreetingRotator;
use sunshine_core::intent::{self, PendingRoute, ReplyEnrichment};
use sunshine_core::language::{self, Language};
use sunshine_core::navigation::Navigator;
use sunshine_core::quick_action::{QuickAction, QuickActionKind};
use sunshine_core::session::{
    ChatMessage, IdentityRepository, MessageLink, SessionIdentity, WidgetMode, extract_name,
};
use tokio::sync::{Mutex, RwLock};

/// Result of handling one user turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The assistant message appended for this turn.
    Reply(ChatMessage),
    /// A previous turn is still in flight; nothing was appended.
    Busy,
    /// The reply resolved after the widget context changed and was dropped.
    Discarded,
}

struct Appendix {
    keywords: &'static [&'static str],
    text_en: &'static str,
    text_es: &'static str,
}

/// Keyword-triggered appendices added to successful replies.
const FOLLOW_UP_APPENDICES: &[Appendix] = &[
    Appendix {
        keywords: &["price", "pricing", "cost", "precio", "costo", "cuánto", "cuanto"],
        text_en: " You can compare plans any time on our pricing page.",
        text_es: " Puedes comparar los planes cuando quieras en nuestra página de precios.",
    },
    Appendix {
        keywords: &["portfolio", "photos", "portafolio", "fotos"],
        text_en: " Artists with portfolio photos get noticed much faster.",
        text_es: " Los artistas con fotos en su portafolio destacan mucho más rápido.",
    },
];

fn follow_up_appendix(
    user_text: &str,
    reply_text: &str,
    language: Language,
) -> Option<&'static str> {
    let user_lower = user_text.to_lowercase();
    let reply_lower = reply_text.to_lowercase();

    FOLLOW_UP_APPENDICES
        .iter()
        .find(|appendix| {
            appendix
                .keywords
                .iter()
                .any(|k| user_lower.contains(k) || reply_lower.contains(k))
        })
        .map(|appendix| match language {
            Language::English => appendix.text_en,
            Language::Spanish => appendix.text_es,
        })
}

/// Top-level controller for one widget instance.
///
/// The orchestrator owns the transcript, the route-confirmation mode, the
/// minimized toggle and the UI timers. Collaborators (identity store,
/// engagement store, assistant, navigator, auth) are injected so tests can
/// fake them.
pub struct ConversationOrchestrator {
    /// The visible message list. Cleared on close, never persisted.
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    /// Route-confirmation state.
    mode: Arc<RwLock<WidgetMode>>,
    /// Orthogonal minimized/restored toggle.
    minimized: AtomicBool,
    /// Session-scoped identity store.
    identity_repository: Arc<dyn IdentityRepository>,
    /// Durable engagement store (conversion popup flag).
    engagement_repository: Arc<dyn EngagementRepository>,
    /// Remote text-generation collaborator.
    assistant: Arc<dyn AssistantClient>,
    /// Same-tab navigation primitive.
    navigator: Arc<dyn Navigator>,
    /// Read-only authentication state.
    auth: Arc<dyn AuthProvider>,
    /// Greeting picker, one pick per widget-open event.
    rotator: Mutex<GreetingRotator>,
    /// Conversion trigger heuristic.
    trigger: ConversionTrigger,
    /// Monotonic message id source.
    next_message_id: AtomicU64,
    /// True while a turn is being processed; input stays disabled.
    in_flight: AtomicBool,
    /// Bumped on close/reset so stale replies are discarded.
    generation: AtomicU64,
    /// Timers owned by this instance, cancelled on teardown.
    timers: Mutex<Vec<ScheduledTask>>,
}

impl ConversationOrchestrator {
    /// Creates an orchestrator with the default conversion trigger timing.
    pub fn new(
        identity_repository: Arc<dyn IdentityRepository>,
        engagement_repository: Arc<dyn EngagementRepository>,
        assistant: Arc<dyn AssistantClient>,
        navigator: Arc<dyn Navigator>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            transcript: Arc::new(RwLock::new(Vec::new())),
            mode: Arc::new(RwLock::new(WidgetMode::Idle)),
            minimized: AtomicBool::new(false),
            identity_repository,
            engagement_repository,
            assistant,
            navigator,
            auth,
            rotator: Mutex::new(GreetingRotator::new()),
            trigger: ConversionTrigger::new(),
            next_message_id: AtomicU64::new(1),
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            timers: Mutex::new(Vec::new()),
        }
    }

    /// Overrides the conversion trigger timing (used by tests).
    pub fn with_trigger(mut self, trigger: ConversionTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Opens the widget: restores from minimized and greets an empty
    /// transcript. The greeting rotates across open events and never
    /// repeats back-to-back.
    pub async fn open(&self) {
        self.minimized.store(false, Ordering::SeqCst);

        if !self.transcript.read().await.is_empty() {
            return;
        }

        let language = self.current_language().await;
        let greeting = {
            let mut rotator = self.rotator.lock().await;
            let mut rng = StdRng::from_entropy();
            rotator.next(language, &mut rng)
        };

        let message = ChatMessage::assistant(self.next_id(), greeting.text);
        self.transcript.write().await.push(message);
    }

    /// Closes the widget: discards the transcript and any pending route,
    /// cancels owned timers, and invalidates in-flight replies. Identity
    /// survives; it belongs to the session, not the window.
    pub async fn close(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.transcript.write().await.clear();
        *self.mode.write().await = WidgetMode::Idle;
        self.timers.lock().await.clear();
        tracing::debug!("widget closed, transcript discarded");
    }

    /// Minimizes the widget, preserving whichever logical mode is active.
    pub fn minimize(&self) {
        self.minimized.store(true, Ordering::SeqCst);
    }

    /// Restores the widget from its minimized state.
    pub fn restore(&self) {
        self.minimized.store(false, Ordering::SeqCst);
    }

    /// Whether the widget is currently minimized.
    pub fn is_minimized(&self) -> bool {
        self.minimized.load(Ordering::SeqCst)
    }

    /// Whether a turn is currently in flight (input should be disabled).
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// The "start over" action: clears identity and transcript both.
    pub async fn reset(&self) {
        if let Err(err) = self.identity_repository.clear().await {
            tracing::warn!("failed to clear session identity: {}", err);
        }
        self.close().await;
    }

    /// A snapshot of the current transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// The current widget mode.
    pub async fn mode(&self) -> WidgetMode {
        self.mode.read().await.clone()
    }

    /// Handles one user turn: one optimistic append, at most one remote
    /// call, exactly one assistant message appended on completion.
    pub async fn send_message(&self, text: &str) -> Result<TurnOutcome> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Ok(TurnOutcome::Busy);
        }

        let outcome = self.run_turn(text).await;
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn run_turn(&self, text: &str) -> Result<TurnOutcome> {
        let user_message = ChatMessage::user(self.next_id(), text);
        self.transcript.write().await.push(user_message);

        let mut identity = match self.identity_repository.get().await {
            Some(identity) => identity,
            None => SessionIdentity::new(),
        };
        identity.language = language::classify(text);
        identity.touch();

        // Self-introduction short-circuits the remote call entirely. The
        // name is write-once: later introductions go to the assistant.
        if identity.display_name.is_none() {
            if let Some(name) = extract_name(text) {
                identity.display_name = Some(name.clone());
                self.persist_identity(&identity).await;

                let reply = ChatMessage::assistant(
                    self.next_id(),
                    copy::greeting_by_name(identity.language, &name),
                );
                self.transcript.write().await.push(reply.clone());
                tracing::info!("visitor introduced themselves, remote call bypassed");
                return Ok(TurnOutcome::Reply(reply));
            }
        }
        self.persist_identity(&identity).await;

        let generation = self.generation.load(Ordering::SeqCst);
        let is_authenticated = self.auth.is_authenticated();
        let request = AssistantRequest {
            message: text.to_string(),
            user_id: identity.visitor_id.clone(),
            user_name: identity.display_name.clone(),
            language: identity.language,
            is_authenticated,
        };

        let result = self.assistant.generate(request).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("assistant reply resolved for a stale widget context, discarding");
            return Ok(TurnOutcome::Discarded);
        }

        let message = match result {
            Ok(reply) => {
                self.enrich_reply(text, reply.response, identity.language, is_authenticated)
                    .await
            }
            Err(err) => {
                tracing::warn!("assistant call failed: {}", err);
                ChatMessage::assistant(self.next_id(), copy::apology(identity.language))
            }
        };

        self.transcript.write().await.push(message.clone());
        Ok(TurnOutcome::Reply(message))
    }

    async fn enrich_reply(
        &self,
        user_text: &str,
        reply_text: String,
        language: Language,
        is_authenticated: bool,
    ) -> ChatMessage {
        let enrichment = intent::evaluate(user_text, &reply_text, language, is_authenticated);

        let mut body = reply_text;
        if let Some(appendix) = follow_up_appendix(user_text, &body, language) {
            body.push_str(appendix);
        }

        let mut message = ChatMessage::assistant(self.next_id(), body);
        match enrichment {
            ReplyEnrichment::Route(route) => {
                message.links = Some(vec![MessageLink {
                    label: route.title.clone(),
                    path: route.destination.clone(),
                }]);
                message.pending_route = Some(route.clone());
                self.set_pending_route(route).await;
            }
            ReplyEnrichment::QuickActions(actions) => {
                if !actions.is_empty() {
                    message.quick_actions = Some(actions);
                }
            }
        }

        message
    }

    /// Installs a pending route, replacing any existing one.
    async fn set_pending_route(&self, route: PendingRoute) {
        let mut mode = self.mode.write().await;
        if let WidgetMode::AwaitingConfirmation { route: previous } = &*mode {
            tracing::debug!(
                superseded = %previous.destination,
                "new intent replaces pending route"
            );
        }
        *mode = WidgetMode::AwaitingConfirmation {
            route: route.clone(),
        };
        drop(mode);

        // The superseded proposal's dialog payload is dead; drop it from
        // the transcript so only the newest message binds the dialog.
        self.clear_all_route_payloads().await;
        tracing::info!(destination = %route.destination, "route awaiting confirmation");
    }

    async fn clear_all_route_payloads(&self) {
        let mut transcript = self.transcript.write().await;
        for message in transcript.iter_mut() {
            message.pending_route = None;
        }
    }

    async fn clear_route_payload(&self) {
        let mut transcript = self.transcript.write().await;
        if let Some(message) = transcript
            .iter_mut()
            .rev()
            .find(|m| m.pending_route.is_some())
        {
            message.pending_route = None;
        }
    }

    /// Confirms the pending route: exactly one navigation call, one
    /// "taking you there" message, and a return to idle.
    pub async fn confirm_pending_route(&self) -> Result<Option<ChatMessage>> {
        let route = {
            let mut mode = self.mode.write().await;
            match std::mem::take(&mut *mode) {
                WidgetMode::Idle => return Ok(None),
                WidgetMode::AwaitingConfirmation { route } => route,
            }
        };

        self.clear_route_payload().await;
        self.navigator.navigate(&route.destination);

        let language = self.current_language().await;
        let message = ChatMessage::assistant(
            self.next_id(),
            copy::taking_you_there(language, &route.title),
        );
        self.transcript.write().await.push(message.clone());

        tracing::info!(destination = %route.destination, "navigation confirmed");
        Ok(Some(message))
    }

    /// Cancels the pending route: back to idle, zero navigation calls.
    pub async fn cancel_pending_route(&self) {
        let had_route = {
            let mut mode = self.mode.write().await;
            let pending = !mode.is_idle();
            *mode = WidgetMode::Idle;
            pending
        };

        if had_route {
            self.clear_route_payload().await;
            tracing::debug!("pending route cancelled");
        }
    }

    /// Executes a quick action: direct navigation, or a canned follow-up
    /// phrase re-submitted as a user turn.
    pub async fn activate_quick_action(
        &self,
        action: &QuickAction,
    ) -> Result<Option<TurnOutcome>> {
        match &action.action {
            QuickActionKind::Navigate { path } => {
                tracing::info!(path = %path, "quick action navigation");
                self.navigator.navigate(path);
                Ok(None)
            }
            QuickActionKind::FollowUp { prompt } => self.send_message(prompt).await.map(Some),
        }
    }

    /// Schedules the attention-getting affordance for the current page.
    ///
    /// First-time visitors on high-intent pages get the randomized
    /// conversion delay; firing it sets the durable one-shot flag. The
    /// timer is owned by this instance and a no-op after teardown.
    pub async fn schedule_attention<F>(&self, current_path: &str, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let state = self.engagement_repository.get().await;
        let has_identity = self.identity_repository.get().await.is_some();
        let plan = {
            let mut rng = StdRng::from_entropy();
            self.trigger.plan(current_path, &state, has_identity, &mut rng)
        };
        tracing::debug!(?plan, path = %current_path, "attention affordance scheduled");

        let repository = plan
            .is_conversion()
            .then(|| self.engagement_repository.clone());

        let task = ScheduledTask::spawn(plan.delay(), async move {
            if let Some(repository) = repository {
                if let Err(err) = repository.mark_popup_shown().await {
                    tracing::warn!("failed to persist conversion popup flag: {}", err);
                }
            }
            on_fire();
        });

        self.timers.lock().await.push(task);
    }

    async fn current_language(&self) -> Language {
        self.identity_repository
            .get()
            .await
            .map(|identity| identity.language)
            .unwrap_or_default()
    }

    async fn persist_identity(&self, identity: &SessionIdentity) {
        if let Err(err) = self.identity_repository.save(identity).await {
            // Storage loss degrades to an in-memory session, never an error.
            tracing::warn!("failed to persist session identity: {}", err);
        }
    }

    fn next_id(&self) -> u64 {
        self.next_message_id.fetch_add(1, Ordering::SeqCst)
    }
}
