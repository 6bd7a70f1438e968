use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, warn};

use nyt_client::ArticleRepository;
use nyt_core::{Article, PathType, Period, Result};

use crate::messages::user_message;

/// How long a filter pair must sit still before it is fetched. Rapid
/// changes inside the window collapse into one fetch of the final pair.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Everything the list screen renders. `is_loading` and `error_message`
/// are independent fields on purpose: a stale article list stays visible
/// while a new fetch is in flight or has failed.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub path_type: PathType,
    pub period: Period,
    pub articles: Vec<Article>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

enum Command {
    SetPathType(PathType),
    SetPeriod(Period),
    Refresh,
}

struct FetchOutcome {
    generation: u64,
    result: Result<Vec<Article>>,
}

/// The fetch orchestrator. One spawned worker task owns all mutable state;
/// this handle only sends commands and reads published snapshots, so every
/// state mutation happens on a single execution context.
///
/// The worker stops once every handle is dropped.
pub struct ArticleFeed {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<FeedSnapshot>,
}

impl ArticleFeed {
    pub fn spawn(repository: Arc<dyn ArticleRepository>) -> Self {
        Self::spawn_with(repository, PathType::default(), Period::default())
    }

    pub fn spawn_with(
        repository: Arc<dyn ArticleRepository>,
        path_type: PathType,
        period: Period,
    ) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(FeedSnapshot {
            path_type,
            period,
            ..Default::default()
        });

        let worker = FeedWorker {
            repository,
            state: state_tx,
            commands: commands_rx,
            outcomes_tx,
            outcomes_rx,
            generation: 0,
        };
        tokio::spawn(worker.run());

        Self {
            commands: commands_tx,
            state: state_rx,
        }
    }

    /// Select a ranking. The change is published immediately; the refetch is
    /// debounced.
    pub fn set_path_type(&self, path_type: PathType) {
        let _ = self.commands.send(Command::SetPathType(path_type));
    }

    /// Select a lookback window. Same debounce as [`set_path_type`].
    ///
    /// [`set_path_type`]: ArticleFeed::set_path_type
    pub fn set_period(&self, period: Period) {
        let _ = self.commands.send(Command::SetPeriod(period));
    }

    /// Pull-to-refresh: fetch the current pair immediately, bypassing the
    /// debounce window.
    pub fn refresh(&self) {
        let _ = self.commands.send(Command::Refresh);
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.state.borrow().clone()
    }
}

struct FeedWorker {
    repository: Arc<dyn ArticleRepository>,
    state: watch::Sender<FeedSnapshot>,
    commands: mpsc::UnboundedReceiver<Command>,
    outcomes_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    generation: u64,
}

impl FeedWorker {
    async fn run(mut self) {
        // The startup pair goes through the same window as any later
        // change; there is no separate on-appear fetch.
        let mut deadline = Some(Instant::now() + DEBOUNCE_WINDOW);

        loop {
            let debounce = async move {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::SetPathType(path_type)) => {
                        self.state.send_modify(|s| s.path_type = path_type);
                        deadline = Some(Instant::now() + DEBOUNCE_WINDOW);
                    }
                    Some(Command::SetPeriod(period)) => {
                        self.state.send_modify(|s| s.period = period);
                        deadline = Some(Instant::now() + DEBOUNCE_WINDOW);
                    }
                    // Refresh does not disarm a pending debounce; the two
                    // triggers are independent, and the generation guard
                    // keeps an overlap harmless.
                    Some(Command::Refresh) => self.dispatch_fetch(),
                    None => break,
                },
                _ = debounce => {
                    deadline = None;
                    self.dispatch_fetch();
                }
                Some(outcome) = self.outcomes_rx.recv() => self.apply(outcome),
            }
        }
    }

    fn dispatch_fetch(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let (path_type, period) = {
            let snapshot = self.state.borrow();
            (snapshot.path_type, snapshot.period)
        };

        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error_message = None;
        });
        debug!("📰 Fetching most-{} articles over {} day(s)", path_type, period);

        let repository = self.repository.clone();
        let outcomes = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let result = repository.fetch_articles(path_type, period).await;
            let _ = outcomes.send(FetchOutcome { generation, result });
        });
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        if outcome.generation < self.generation {
            // A newer fetch was dispatched while this one was in flight;
            // its state updates already superseded ours.
            debug!("Discarding fetch result from generation {}", outcome.generation);
            return;
        }

        self.state.send_modify(|s| {
            match outcome.result {
                Ok(articles) => {
                    debug!("✨ Loaded {} articles", articles.len());
                    s.articles = articles;
                }
                Err(error) => {
                    warn!("Fetching articles failed: {}", error);
                    s.error_message = Some(user_message(&error));
                }
            }
            s.is_loading = false;
        });
    }
}
