use crate::animation::{self, TrainSequence};
use crate::command::{Effect, Navigation, Route};
use crate::config::{Identity, TerminalConfig, Timing};
use crate::content;
use crate::interpreter::{Context, interpret};
use crate::portfolio::{ContentStore, PortfolioRecord};
use crate::session::{Classification, Role, Session, SessionState, TranscriptEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// A change to the transcript, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    Appended(TranscriptEntry),
    /// An animated entry changed its text in place.
    Replaced(TranscriptEntry),
    Cleared,
    AnimationFinished,
}

/// The terminal view: owns one session and applies interpreter replies to it.
///
/// Dropping the terminal cancels a running train.
pub struct Terminal {
    session: Arc<Mutex<Session>>,
    store: Arc<dyn ContentStore>,
    record: Option<Arc<PortfolioRecord>>,
    identity: Identity,
    timing: Timing,
    events: UnboundedSender<TranscriptEvent>,
    cancel: CancellationToken,
    rng: StdRng,
    animation: Option<JoinHandle<()>>,
}

impl Terminal {
    /// Open a fresh session. Transcript changes arrive on the returned receiver.
    pub fn mount(
        store: Arc<dyn ContentStore>,
        config: &TerminalConfig,
    ) -> (Self, UnboundedReceiver<TranscriptEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let record = store.get();
        if record.is_none() {
            debug!("portfolio record not available yet");
        }
        let terminal = Self {
            session: Arc::new(Mutex::new(Session::new())),
            store,
            record,
            identity: config.identity.clone(),
            timing: config.timing.clone(),
            events,
            cancel: CancellationToken::new(),
            rng: StdRng::from_entropy(),
            animation: None,
        };
        (terminal, rx)
    }

    /// Fix the random source, for reproducible `uptime` and `neofetch`.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Append the welcome banner.
    pub async fn greet(&self) {
        let banner = content::fill(content::WELCOME, &self.identity);
        let entry = self.session.lock().await.append(
            Role::Output,
            Classification::Success,
            banner,
            false,
        );
        self.emit(TranscriptEvent::Appended(entry));
    }

    /// Run one input line against the session.
    ///
    /// Returns where to go next when the command leaves the terminal. The
    /// caller waits [`Navigation::after`] before switching views.
    pub async fn submit(&mut self, line: &str) -> Option<Navigation> {
        self.refresh_record();

        let mut session = self.session.lock().await;
        let reply = {
            let ctx = Context::new(&self.identity, &self.timing)
                .with_record(self.record.as_deref())
                .with_state(session.state)
                .with_transcript(session.history());
            interpret(line, &ctx, &mut self.rng)
        };
        if let Some(fault) = &reply.fault {
            debug!(%fault, "command failed");
        }

        if reply.effect == Effect::ClearTranscript {
            session.clear();
            self.emit(TranscriptEvent::Cleared);
        }
        if let Some(echo) = reply.echo {
            let entry = session.append(Role::CommandEcho, Classification::Neutral, echo, true);
            self.emit(TranscriptEvent::Appended(entry));
        }
        session.state = reply.state;

        let mut first_output = None;
        for output in reply.outputs {
            let entry = session.append(
                Role::Output,
                output.classification,
                output.text,
                output.verbatim,
            );
            first_output.get_or_insert(entry.id);
            self.emit(TranscriptEvent::Appended(entry));
        }
        drop(session);

        match reply.effect {
            Effect::StartTrain => {
                if let Some(frame) = first_output {
                    let sequence = TrainSequence::new(&self.timing);
                    info!(total_ms = sequence.total().as_millis() as u64, "train leaving");
                    let task = animation::run_train(
                        sequence,
                        Arc::clone(&self.session),
                        frame,
                        self.events.clone(),
                        self.cancel.child_token(),
                    );
                    self.animation = Some(tokio::spawn(task));
                }
                None
            }
            Effect::Navigate(navigation) => {
                info!(route = ?navigation.route, "leaving terminal");
                Some(navigation)
            }
            Effect::None | Effect::ClearTranscript => None,
        }
    }

    /// Wait for a running train to reach its finale.
    pub async fn finish_animation(&mut self) {
        if let Some(task) = self.animation.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "train animation task failed");
            }
        }
    }

    pub async fn is_animating(&self) -> bool {
        self.session.lock().await.state.train_in_flight
    }

    pub async fn state(&self) -> SessionState {
        self.session.lock().await.state
    }

    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.session.lock().await.history().to_vec()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Prompt for the next line, reflecting the current directory.
    pub async fn prompt(&self) -> String {
        let state = self.state().await;
        Context::new(&self.identity, &self.timing)
            .with_state(state)
            .prompt()
    }

    /// Retry the store until the record shows up; it never changes afterwards.
    fn refresh_record(&mut self) {
        if self.record.is_none() {
            self.record = self.store.get();
            if self.record.is_some() {
                info!("portfolio record loaded");
            }
        }
    }

    fn emit(&self, event: TranscriptEvent) {
        // The receiver goes away when the view is torn down.
        let _ = self.events.send(event);
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Wait out a navigation delay and return the destination.
pub async fn follow(navigation: Navigation) -> Route {
    tokio::time::sleep(navigation.after).await;
    navigation.route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn mounted() -> (Terminal, UnboundedReceiver<TranscriptEvent>) {
        let store = Arc::new(MemoryStore::new(PortfolioRecord::sample()));
        let (terminal, rx) = Terminal::mount(store, &TerminalConfig::default());
        (terminal.with_rng(StdRng::seed_from_u64(1)), rx)
    }

    fn texts(entries: &[TranscriptEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.rendered.as_str()).collect()
    }

    /// Returns `None` for the first `misses` reads.
    struct SlowStore {
        misses: usize,
        reads: AtomicUsize,
    }

    impl ContentStore for SlowStore {
        fn get(&self) -> Option<Arc<PortfolioRecord>> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            (n >= self.misses).then(|| Arc::new(PortfolioRecord::sample()))
        }
    }

    #[tokio::test]
    async fn test_submit_appends_echo_and_output() {
        let (mut terminal, mut rx) = mounted();
        assert!(terminal.submit("pwd").await.is_none());

        let transcript = terminal.transcript().await;
        assert_eq!(
            texts(&transcript),
            vec![
                "akshay@portfolio:/home/akshay$ pwd",
                "📍 Current location: /home/akshay"
            ]
        );
        assert_eq!(transcript[0].role, Role::CommandEcho);

        assert!(matches!(rx.try_recv(), Ok(TranscriptEvent::Appended(_))));
        assert!(matches!(rx.try_recv(), Ok(TranscriptEvent::Appended(_))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_greet_appends_welcome() {
        let (terminal, _rx) = mounted();
        terminal.greet().await;
        let transcript = terminal.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].classification, Classification::Success);
        assert!(transcript[0].rendered.contains("Akshay"));
    }

    #[tokio::test]
    async fn test_clear_empties_transcript() {
        let (mut terminal, mut rx) = mounted();
        for line in ["ls", "whoami", "nope", "cd projects"] {
            terminal.submit(line).await;
        }
        terminal.submit("clear").await;

        assert!(terminal.transcript().await.is_empty());
        assert_eq!(
            terminal.state().await.directory,
            crate::session::Directory::Projects
        );
        let mut saw_cleared = false;
        while let Ok(event) = rx.try_recv() {
            if event == TranscriptEvent::Cleared {
                saw_cleared = true;
            }
        }
        assert!(saw_cleared);
    }

    #[tokio::test]
    async fn test_prompt_follows_directory() {
        let (mut terminal, _rx) = mounted();
        assert_eq!(terminal.prompt().await, "akshay@portfolio:/home/akshay$ ");
        terminal.submit("cd projects").await;
        assert_eq!(
            terminal.prompt().await,
            "projects@portfolio:/home/akshay/projects$ "
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_train_rejects_second_start() {
        let (mut terminal, _rx) = mounted();
        terminal.submit("sl").await;
        assert!(terminal.is_animating().await);

        terminal.submit("sl").await;
        let transcript = terminal.transcript().await;
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[3].classification, Classification::Error);
        assert!(transcript[3].rendered.contains("already running"));

        terminal.finish_animation().await;
        assert!(!terminal.is_animating().await);

        terminal.submit("sl").await;
        assert!(terminal.is_animating().await);
        let transcript = terminal.transcript().await;
        assert_eq!(
            transcript.last().map(|e| e.rendered.as_str()),
            Some(content::TRAIN_FRAMES[0])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_train_replaces_its_own_frame_while_commands_run() {
        let (mut terminal, _rx) = mounted();
        terminal.submit("sl").await;
        terminal.submit("pwd").await;
        terminal.finish_animation().await;

        let transcript = terminal.transcript().await;
        assert_eq!(
            texts(&transcript),
            vec![
                "akshay@portfolio:/home/akshay$ sl",
                content::TRAIN_FRAMES[1],
                "akshay@portfolio:/home/akshay$ pwd",
                "📍 Current location: /home/akshay",
                content::TRAIN_FINALE,
            ]
        );
        assert_eq!(transcript[4].classification, Classification::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_during_train_keeps_finale() {
        let (mut terminal, mut rx) = mounted();
        terminal.submit("sl").await;
        terminal.submit("clear").await;
        terminal.finish_animation().await;

        assert_eq!(
            texts(&terminal.transcript().await),
            vec![content::TRAIN_FINALE]
        );
        let mut replaced = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, TranscriptEvent::Replaced(_)) {
                replaced += 1;
            }
        }
        assert_eq!(replaced, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_navigates_after_delay() {
        let (mut terminal, _rx) = mounted();
        let navigation = terminal.submit("exit").await.unwrap();
        assert_eq!(navigation.route, Route::Landing);
        assert_eq!(navigation.after, Duration::from_millis(1000));

        let goodbye = terminal.transcript().await;
        assert_eq!(goodbye.len(), 2);
        assert_eq!(goodbye[1].classification, Classification::Success);

        let start = tokio::time::Instant::now();
        assert_eq!(follow(navigation).await, Route::Landing);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_record_is_fetched_once_available() {
        let store = Arc::new(SlowStore {
            misses: 2,
            reads: AtomicUsize::new(0),
        });
        let (mut terminal, _rx) = Terminal::mount(store.clone(), &TerminalConfig::default());

        terminal.submit("about").await;
        let before = terminal.transcript().await;
        assert_eq!(before[1].rendered, content::LOADING);

        terminal.submit("about").await;
        let after = terminal.transcript().await;
        assert_ne!(after[3].rendered, content::LOADING);

        terminal.submit("skills").await;
        assert_eq!(store.reads.load(Ordering::SeqCst), 3);
    }
}
